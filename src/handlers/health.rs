//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
    pub version: String,
}

/// Liveness plus a single-document store probe
pub async fn health_check(State(app_state): State<AppState>) -> Json<HealthResponse> {
    let store_status = match app_state.store.get_ad(Uuid::nil()).await {
        Ok(_) => "ok".to_string(),
        Err(e) => format!("error: {}", e),
    };

    let status = if store_status == "ok" {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        store: store_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
