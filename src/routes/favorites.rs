//! Favorite route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::favorites::{add_favorite, list_favorites, remove_favorite};
use crate::state::AppState;

pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/api/user/favorites", get(list_favorites))
        .route(
            "/api/user/favorites/:ad_id",
            post(add_favorite).delete(remove_favorite),
        )
}
