//! Ad route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::ads::{create_ad, delete_ad, get_ad, list_ads, my_ads, update_ad};
use crate::state::AppState;

pub fn ads_routes() -> Router<AppState> {
    Router::new()
        .route("/api/ads", post(create_ad).get(list_ads))
        .route(
            "/api/ads/:ad_id",
            get(get_ad).put(update_ad).delete(delete_ad),
        )
        .route("/api/my-ads", get(my_ads))
}
