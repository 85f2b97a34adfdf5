//! Promotion-related API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::middleware::AuthenticatedUser;
use crate::models::Ad;
use crate::promotions::ActivatePromotionRequest;
use crate::state::AppState;

/// Activate a promotion on an ad (owner or admin)
pub async fn activate_promotion(
    State(app_state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path(ad_id): Path<Uuid>,
    Json(request): Json<ActivatePromotionRequest>,
) -> ApiResult<Json<Ad>> {
    let ad = app_state
        .promotion_service
        .activate(ad_id, principal, request)
        .await?;
    Ok(Json(ad))
}

/// Deactivate a promotion on an ad (owner or admin)
pub async fn deactivate_promotion(
    State(app_state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path(ad_id): Path<Uuid>,
) -> ApiResult<Json<Ad>> {
    let ad = app_state
        .promotion_service
        .deactivate(ad_id, principal)
        .await?;
    Ok(Json(ad))
}
