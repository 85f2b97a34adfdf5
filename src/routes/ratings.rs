//! Rating route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::ratings::{list_ratings, my_ratings, remove_rating, submit_rating};
use crate::state::AppState;

pub fn ratings_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/ads/:ad_id/ratings",
            post(submit_rating).get(list_ratings).delete(remove_rating),
        )
        .route("/api/user/ratings", get(my_ratings))
}
