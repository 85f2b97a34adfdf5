//! Rating-related API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::middleware::AuthenticatedUser;
use crate::models::Ack;
use crate::ratings::{MyRating, RatingsView, SubmitRatingRequest};
use crate::state::AppState;

/// Submit or replace the caller's rating on an ad
pub async fn submit_rating(
    State(app_state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path(ad_id): Path<Uuid>,
    Json(request): Json<SubmitRatingRequest>,
) -> ApiResult<Json<Ack>> {
    app_state
        .rating_service
        .submit_rating(ad_id, principal.id, request)
        .await?;
    Ok(Json(Ack::new("Rating submitted successfully")))
}

/// List an ad's ratings with aggregates
pub async fn list_ratings(
    State(app_state): State<AppState>,
    Path(ad_id): Path<Uuid>,
) -> ApiResult<Json<RatingsView>> {
    let view = app_state.rating_service.list_ratings(ad_id).await?;
    Ok(Json(view))
}

/// Remove the caller's own rating
pub async fn remove_rating(
    State(app_state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path(ad_id): Path<Uuid>,
) -> ApiResult<Json<Ack>> {
    app_state
        .rating_service
        .remove_rating(ad_id, principal.id)
        .await?;
    Ok(Json(Ack::new("Rating removed successfully")))
}

/// List every rating the caller has left
pub async fn my_ratings(
    State(app_state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
) -> ApiResult<Json<Vec<MyRating>>> {
    let ratings = app_state.rating_service.my_ratings(principal.id).await?;
    Ok(Json(ratings))
}
