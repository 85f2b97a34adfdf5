//! Middleware for the Campus Market API
//!
//! Request tracing, security headers and the authenticated-principal
//! extractors.

pub mod auth;
mod security;
mod tracing;

pub use auth::{AdminUser, AuthenticatedUser};
pub use security::security_headers;
pub use tracing::request_tracing;
