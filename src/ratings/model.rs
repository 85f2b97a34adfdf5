//! Rating request and view DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Rating;

/// Request DTO for submitting (or replacing) a rating
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRatingRequest {
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(length(max = 200, message = "comment must be at most 200 characters"))]
    pub comment: Option<String>,
}

/// Ratings listing for one ad, aggregates included
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingsView {
    pub ratings: Vec<Rating>,
    pub average_rating: f64,
    pub rating_count: u32,
}

/// One entry of the caller's own-ratings view
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyRating {
    pub ad_id: Uuid,
    pub ad_title: String,
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
