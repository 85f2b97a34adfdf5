//! Report workflow
//!
//! Abuse reports against ads: submission with an open-report uniqueness
//! guarantee per (ad, reporter), and admin moderation constrained to
//! forward-only status transitions.

mod model;
mod service;

pub use model::{ModerateReportRequest, ReportCreated, SubmitReportRequest};
pub use service::ReportService;
