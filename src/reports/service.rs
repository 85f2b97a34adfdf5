//! Report service layer
//!
//! Submission snapshots the reporter and ad details into the report document;
//! those fields are frozen at creation time and never re-synced. The
//! duplicate-open check is enforced by the store's `insert_open_report`, not
//! by the read that precedes it, so concurrent submissions by the same
//! reporter cannot both land.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::models::{Report, ReportStatus};
use crate::reports::{ModerateReportRequest, SubmitReportRequest};
use crate::store::{AggregateStore, OpenReportInsert};

/// Service managing the report lifecycle
pub struct ReportService {
    store: Arc<dyn AggregateStore>,
}

impl ReportService {
    pub fn new(store: Arc<dyn AggregateStore>) -> Self {
        Self { store }
    }

    /// File a report against an ad. At most one open report per
    /// (ad, reporter) may exist at any time.
    pub async fn submit_report(
        &self,
        ad_id: Uuid,
        reporter_id: Uuid,
        request: SubmitReportRequest,
    ) -> ApiResult<Report> {
        request.validate()?;

        let ad = self
            .store
            .get_ad(ad_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Ad not found".to_string()))?;

        let reporter = self
            .store
            .get_user(reporter_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let now = Utc::now();
        let report = Report {
            id: Uuid::new_v4(),
            ad_id,
            ad_title: ad.title,
            reporter_id,
            reporter_name: reporter.name,
            reporter_email: reporter.email,
            reason: request.reason,
            description: request.description,
            status: ReportStatus::Pending,
            created_at: now,
            updated_at: now,
            admin_notes: None,
        };
        let created = report.clone();

        match self.store.insert_open_report(report).await? {
            OpenReportInsert::Created => {
                tracing::info!(ad_id = %ad_id, reporter_id = %reporter_id, "Report submitted");
                Ok(created)
            }
            OpenReportInsert::DuplicateOpen => Err(ApiError::Conflict(
                "You already have an open report for this ad".to_string(),
            )),
        }
    }

    /// Admin moderation: optionally advance the status (forward-only) and
    /// attach notes. `resolved` is terminal.
    pub async fn moderate(
        &self,
        report_id: Uuid,
        request: ModerateReportRequest,
    ) -> ApiResult<Report> {
        let report = self
            .store
            .get_report(report_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Report not found".to_string()))?;

        if let Some(next) = request.status {
            if !report.status.can_transition_to(next) {
                return Err(ApiError::Validation(format!(
                    "Illegal report status transition: {:?} -> {:?}",
                    report.status, next
                )));
            }
        }

        let updated = self
            .store
            .update_report(
                report_id,
                Box::new(move |report| {
                    if let Some(next) = request.status {
                        report.status = next;
                    }
                    if let Some(notes) = request.admin_notes {
                        report.admin_notes = Some(notes);
                    }
                    report.updated_at = Utc::now();
                }),
            )
            .await?
            .ok_or_else(|| ApiError::NotFound("Report not found".to_string()))?;

        tracing::info!(report_id = %report_id, status = ?updated.status, "Report moderated");
        Ok(updated)
    }

    /// Global report listing, newest first.
    pub async fn list_reports(&self) -> ApiResult<Vec<Report>> {
        let mut reports = self.store.list_reports().await?;
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reports)
    }

    /// Reports filed against one ad, newest first. A missing ad is a valid
    /// (if degraded) report target, so this never checks ad existence.
    pub async fn list_for_ad(&self, ad_id: Uuid) -> ApiResult<Vec<Report>> {
        let mut reports = self.store.reports_for_ad(ad_id).await?;
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ad, AdStatus, User, UserRole, UserStatus};
    use crate::store::MemoryStore;
    use std::collections::HashSet;

    async fn seed(store: &MemoryStore) -> (Uuid, Uuid) {
        let reporter = User {
            id: Uuid::new_v4(),
            name: "Reporter".to_string(),
            email: "reporter@campus.edu".to_string(),
            course: "Design".to_string(),
            contact: "555-0002".to_string(),
            role: UserRole::User,
            status: UserStatus::Active,
            favorites: HashSet::new(),
            created_at: Utc::now(),
        };
        let ad = Ad {
            id: Uuid::new_v4(),
            title: "Homemade lunch".to_string(),
            category: "Food".to_string(),
            description: "Daily menu".to_string(),
            price: "R$ 12,00".to_string(),
            location: "Cafeteria".to_string(),
            available_until: Utc::now() + chrono::Duration::days(5),
            author_id: Uuid::new_v4(),
            created_at: Utc::now(),
            status: AdStatus::Active,
            ratings: vec![],
            average_rating: 0.0,
            rating_count: 0,
            promotion_active: false,
            promotion_label: None,
            promotion_expires_at: None,
            original_price: None,
        };
        let ids = (ad.id, reporter.id);
        store.insert_ad(ad).await.unwrap();
        store.insert_user(reporter).await.unwrap();
        ids
    }

    fn spam() -> SubmitReportRequest {
        SubmitReportRequest {
            reason: "Spam".to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_submit_report_snapshots_details() {
        let store = Arc::new(MemoryStore::new());
        let service = ReportService::new(store.clone());
        let (ad_id, reporter_id) = seed(&store).await;

        let report = service.submit_report(ad_id, reporter_id, spam()).await.unwrap();
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.ad_title, "Homemade lunch");
        assert_eq!(report.reporter_name, "Reporter");
        assert_eq!(report.reporter_email, "reporter@campus.edu");
    }

    #[tokio::test]
    async fn test_duplicate_open_report_conflicts_until_resolved() {
        let store = Arc::new(MemoryStore::new());
        let service = ReportService::new(store.clone());
        let (ad_id, reporter_id) = seed(&store).await;

        let first = service.submit_report(ad_id, reporter_id, spam()).await.unwrap();

        let err = service
            .submit_report(ad_id, reporter_id, spam())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));

        // Once resolved, the same reporter may file again
        service
            .moderate(
                first.id,
                ModerateReportRequest {
                    status: Some(ReportStatus::Resolved),
                    admin_notes: None,
                },
            )
            .await
            .unwrap();

        assert!(service.submit_report(ad_id, reporter_id, spam()).await.is_ok());
    }

    #[tokio::test]
    async fn test_empty_reason_rejected() {
        let store = Arc::new(MemoryStore::new());
        let service = ReportService::new(store.clone());
        let (ad_id, reporter_id) = seed(&store).await;

        let err = service
            .submit_report(
                ad_id,
                reporter_id,
                SubmitReportRequest {
                    reason: String::new(),
                    description: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_forward_transitions_only() {
        let store = Arc::new(MemoryStore::new());
        let service = ReportService::new(store.clone());
        let (ad_id, reporter_id) = seed(&store).await;
        let report = service.submit_report(ad_id, reporter_id, spam()).await.unwrap();

        // pending -> in_review -> resolved
        let report = service
            .moderate(
                report.id,
                ModerateReportRequest {
                    status: Some(ReportStatus::InReview),
                    admin_notes: Some("looking into it".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(report.status, ReportStatus::InReview);
        assert_eq!(report.admin_notes.as_deref(), Some("looking into it"));

        let report = service
            .moderate(
                report.id,
                ModerateReportRequest {
                    status: Some(ReportStatus::Resolved),
                    admin_notes: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(report.status, ReportStatus::Resolved);

        // resolved is terminal
        let err = service
            .moderate(
                report.id,
                ModerateReportRequest {
                    status: Some(ReportStatus::Pending),
                    admin_notes: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_pending_straight_to_resolved() {
        let store = Arc::new(MemoryStore::new());
        let service = ReportService::new(store.clone());
        let (ad_id, reporter_id) = seed(&store).await;
        let report = service.submit_report(ad_id, reporter_id, spam()).await.unwrap();

        let report = service
            .moderate(
                report.id,
                ModerateReportRequest {
                    status: Some(ReportStatus::Resolved),
                    admin_notes: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(report.status, ReportStatus::Resolved);
    }

    #[tokio::test]
    async fn test_notes_only_update_keeps_status() {
        let store = Arc::new(MemoryStore::new());
        let service = ReportService::new(store.clone());
        let (ad_id, reporter_id) = seed(&store).await;
        let report = service.submit_report(ad_id, reporter_id, spam()).await.unwrap();

        let updated = service
            .moderate(
                report.id,
                ModerateReportRequest {
                    status: None,
                    admin_notes: Some("noted".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, ReportStatus::Pending);
        assert_eq!(updated.admin_notes.as_deref(), Some("noted"));
        assert!(updated.updated_at >= report.updated_at);
    }

    #[tokio::test]
    async fn test_reports_survive_ad_deletion() {
        let store = Arc::new(MemoryStore::new());
        let service = ReportService::new(store.clone());
        let (ad_id, reporter_id) = seed(&store).await;
        service.submit_report(ad_id, reporter_id, spam()).await.unwrap();

        store.delete_ad(ad_id).await.unwrap();

        // Orphaned reports remain listable and moderatable
        let reports = service.list_for_ad(ad_id).await.unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].ad_title, "Homemade lunch");
    }
}
