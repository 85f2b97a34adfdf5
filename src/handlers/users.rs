//! User management API handlers (admin only)

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::middleware::AdminUser;
use crate::models::{Ack, User};
use crate::state::AppState;
use crate::users::UpdateUserRequest;

/// List all users
pub async fn list_users(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> ApiResult<Json<Vec<User>>> {
    let users = app_state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Partially update a user
pub async fn update_user(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(user_id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<User>> {
    let user = app_state.user_service.update_user(user_id, request).await?;
    Ok(Json(user))
}

/// Delete a user
pub async fn delete_user(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Ack>> {
    app_state.user_service.delete_user(user_id).await?;
    Ok(Json(Ack::new("User deleted successfully")))
}
