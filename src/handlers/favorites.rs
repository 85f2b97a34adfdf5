//! Favorite-related API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::middleware::AuthenticatedUser;
use crate::models::Ack;
use crate::state::AppState;

/// The caller's favorite set (authoritative for client reconciliation)
pub async fn list_favorites(
    State(app_state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
) -> ApiResult<Json<Vec<Uuid>>> {
    let favorites = app_state.favorite_service.list_favorites(principal.id).await?;
    Ok(Json(favorites))
}

/// Add an ad to the caller's favorites
pub async fn add_favorite(
    State(app_state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path(ad_id): Path<Uuid>,
) -> ApiResult<Json<Ack>> {
    app_state
        .favorite_service
        .add_favorite(principal.id, ad_id)
        .await?;
    Ok(Json(Ack::new("Ad added to favorites")))
}

/// Remove an ad from the caller's favorites
pub async fn remove_favorite(
    State(app_state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path(ad_id): Path<Uuid>,
) -> ApiResult<Json<Ack>> {
    app_state
        .favorite_service
        .remove_favorite(principal.id, ad_id)
        .await?;
    Ok(Json(Ack::new("Ad removed from favorites")))
}
