//! Report route definitions

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::reports::{list_reports, moderate_report, reports_for_ad, submit_report};
use crate::state::AppState;

pub fn reports_routes() -> Router<AppState> {
    Router::new()
        .route("/api/ads/:ad_id/report", post(submit_report))
        .route("/api/ads/:ad_id/reports", get(reports_for_ad))
        .route("/api/admin/reports", get(list_reports))
        .route("/api/admin/reports/:report_id", patch(moderate_report))
}
