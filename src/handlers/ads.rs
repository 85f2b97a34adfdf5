//! Ad-related API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::ads::{CreateAdRequest, ListAdsQuery, UpdateAdRequest};
use crate::error::ApiResult;
use crate::middleware::AuthenticatedUser;
use crate::models::{Ack, Ad};
use crate::state::AppState;

/// Publish a new ad
pub async fn create_ad(
    State(app_state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Json(request): Json<CreateAdRequest>,
) -> ApiResult<(StatusCode, Json<Ad>)> {
    let ad = app_state.ad_service.create_ad(principal.id, request).await?;
    Ok((StatusCode::CREATED, Json(ad)))
}

/// List ads with optional substring search
pub async fn list_ads(
    State(app_state): State<AppState>,
    Query(query): Query<ListAdsQuery>,
) -> ApiResult<Json<Vec<Ad>>> {
    let ads = app_state.ad_service.list_ads(query).await?;
    Ok(Json(ads))
}

/// Get a single ad by ID
pub async fn get_ad(
    State(app_state): State<AppState>,
    Path(ad_id): Path<Uuid>,
) -> ApiResult<Json<Ad>> {
    let ad = app_state.ad_service.get_ad(ad_id).await?;
    Ok(Json(ad))
}

/// List the caller's own ads
pub async fn my_ads(
    State(app_state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
) -> ApiResult<Json<Vec<Ad>>> {
    let ads = app_state.ad_service.my_ads(principal.id).await?;
    Ok(Json(ads))
}

/// Partially update an ad (owner or admin)
pub async fn update_ad(
    State(app_state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path(ad_id): Path<Uuid>,
    Json(request): Json<UpdateAdRequest>,
) -> ApiResult<Json<Ad>> {
    let ad = app_state
        .ad_service
        .update_ad(ad_id, principal, request)
        .await?;
    Ok(Json(ad))
}

/// Delete an ad (owner or admin)
pub async fn delete_ad(
    State(app_state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path(ad_id): Path<Uuid>,
) -> ApiResult<Json<Ack>> {
    app_state.ad_service.delete_ad(ad_id, principal).await?;
    Ok(Json(Ack::new("Ad deleted successfully")))
}
