//! In-memory store implementation
//!
//! Per-collection `RwLock<HashMap>` maps. Each trait call takes at most one
//! lock, for the duration of that call only, which is exactly the
//! single-document/no-transactions contract described in the trait docs.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Ad, Report, User};

use super::{
    AdMutation, AggregateStore, OpenReportInsert, ReportMutation, StoreResult, UserMutation,
};

/// Shared in-memory document store
#[derive(Clone, Default)]
pub struct MemoryStore {
    ads: Arc<RwLock<HashMap<Uuid, Ad>>>,
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    reports: Arc<RwLock<HashMap<Uuid, Report>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AggregateStore for MemoryStore {
    async fn insert_ad(&self, ad: Ad) -> StoreResult<()> {
        self.ads.write().await.insert(ad.id, ad);
        Ok(())
    }

    async fn get_ad(&self, id: Uuid) -> StoreResult<Option<Ad>> {
        Ok(self.ads.read().await.get(&id).cloned())
    }

    async fn list_ads(&self) -> StoreResult<Vec<Ad>> {
        Ok(self.ads.read().await.values().cloned().collect())
    }

    async fn update_ad(&self, id: Uuid, mutation: AdMutation) -> StoreResult<Option<Ad>> {
        let mut ads = self.ads.write().await;
        Ok(ads.get_mut(&id).map(|ad| {
            mutation(ad);
            ad.clone()
        }))
    }

    async fn delete_ad(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.ads.write().await.remove(&id).is_some())
    }

    async fn insert_user(&self, user: User) -> StoreResult<()> {
        self.users.write().await.insert(user.id, user);
        Ok(())
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn update_user(&self, id: Uuid, mutation: UserMutation) -> StoreResult<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.get_mut(&id).map(|user| {
            mutation(user);
            user.clone()
        }))
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.users.write().await.remove(&id).is_some())
    }

    async fn insert_open_report(&self, report: Report) -> StoreResult<OpenReportInsert> {
        let mut reports = self.reports.write().await;

        let duplicate = reports.values().any(|existing| {
            existing.ad_id == report.ad_id
                && existing.reporter_id == report.reporter_id
                && existing.status.is_open()
        });
        if duplicate {
            return Ok(OpenReportInsert::DuplicateOpen);
        }

        reports.insert(report.id, report);
        Ok(OpenReportInsert::Created)
    }

    async fn get_report(&self, id: Uuid) -> StoreResult<Option<Report>> {
        Ok(self.reports.read().await.get(&id).cloned())
    }

    async fn list_reports(&self) -> StoreResult<Vec<Report>> {
        Ok(self.reports.read().await.values().cloned().collect())
    }

    async fn reports_for_ad(&self, ad_id: Uuid) -> StoreResult<Vec<Report>> {
        Ok(self
            .reports
            .read()
            .await
            .values()
            .filter(|r| r.ad_id == ad_id)
            .cloned()
            .collect())
    }

    async fn update_report(
        &self,
        id: Uuid,
        mutation: ReportMutation,
    ) -> StoreResult<Option<Report>> {
        let mut reports = self.reports.write().await;
        Ok(reports.get_mut(&id).map(|report| {
            mutation(report);
            report.clone()
        }))
    }
}
