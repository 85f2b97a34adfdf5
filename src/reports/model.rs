//! Report request and response DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::ReportStatus;

/// Request DTO for submitting a report
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitReportRequest {
    /// Free text; clients offer a fixed suggestion list but the server only
    /// requires it to be non-empty.
    #[validate(length(min = 1, message = "reason is required"))]
    pub reason: String,
    pub description: Option<String>,
}

/// Request DTO for the admin moderate action
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerateReportRequest {
    pub status: Option<ReportStatus>,
    pub admin_notes: Option<String>,
}

/// Response DTO for report creation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCreated {
    pub report_id: Uuid,
}
