//! Route definitions for the Campus Market API

mod ads;
mod favorites;
mod promotions;
mod ratings;
mod reports;
mod users;

use axum::{routing::get, Router};

use crate::handlers::health::health_check;
use crate::state::AppState;

pub use ads::ads_routes;
pub use favorites::favorites_routes;
pub use promotions::promotions_routes;
pub use ratings::ratings_routes;
pub use reports::reports_routes;
pub use users::users_routes;

/// The full API surface, without outer middleware layers.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .merge(ads_routes())
        .merge(ratings_routes())
        .merge(reports_routes())
        .merge(favorites_routes())
        .merge(promotions_routes())
        .merge(users_routes())
}
