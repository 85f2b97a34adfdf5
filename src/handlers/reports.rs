//! Report-related API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::middleware::{AdminUser, AuthenticatedUser};
use crate::models::Report;
use crate::reports::{ModerateReportRequest, ReportCreated, SubmitReportRequest};
use crate::state::AppState;

/// File a report against an ad
pub async fn submit_report(
    State(app_state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path(ad_id): Path<Uuid>,
    Json(request): Json<SubmitReportRequest>,
) -> ApiResult<(StatusCode, Json<ReportCreated>)> {
    let report = app_state
        .report_service
        .submit_report(ad_id, principal.id, request)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ReportCreated {
            report_id: report.id,
        }),
    ))
}

/// Global report listing (admin only)
pub async fn list_reports(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> ApiResult<Json<Vec<Report>>> {
    let reports = app_state.report_service.list_reports().await?;
    Ok(Json(reports))
}

/// Reports filed against one ad (admin only)
pub async fn reports_for_ad(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(ad_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Report>>> {
    let reports = app_state.report_service.list_for_ad(ad_id).await?;
    Ok(Json(reports))
}

/// Moderate a report: forward-only status changes plus notes (admin only)
pub async fn moderate_report(
    State(app_state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(report_id): Path<Uuid>,
    Json(request): Json<ModerateReportRequest>,
) -> ApiResult<Json<Report>> {
    let report = app_state.report_service.moderate(report_id, request).await?;
    Ok(Json(report))
}
