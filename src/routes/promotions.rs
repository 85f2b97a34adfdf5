//! Promotion route definitions

use axum::{routing::post, Router};

use crate::handlers::promotions::{activate_promotion, deactivate_promotion};
use crate::state::AppState;

pub fn promotions_routes() -> Router<AppState> {
    Router::new().route(
        "/api/ads/:ad_id/promotion",
        post(activate_promotion).delete(deactivate_promotion),
    )
}
