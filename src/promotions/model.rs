//! Promotion request DTOs

use serde::Deserialize;

/// Request DTO for activating a promotion
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivatePromotionRequest {
    pub label: Option<String>,
    /// RFC 3339 timestamp; stored normalized to UTC when present.
    pub expires_at: Option<String>,
}
