//! User management route definitions

use axum::{
    routing::{get, patch},
    Router,
};

use crate::handlers::users::{delete_user, list_users, update_user};
use crate::state::AppState;

pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/users", get(list_users))
        .route(
            "/api/admin/users/:user_id",
            patch(update_user).delete(delete_user),
        )
}
