//! Shared document storage for ads, users and reports.
//!
//! The store exposes independent reads and writes against individual
//! documents; there are no multi-document transactions. What it does
//! guarantee is single-document atomicity: each `update_*` call applies its
//! mutation closure under the collection's write lock, so a multi-step edit
//! of one document (remove a matching rating, append the replacement,
//! recompute aggregates) cannot interleave with another writer of the same
//! document. `insert_open_report` plays the role of a unique constraint on
//! (ad, reporter, open): the duplicate check and the insert happen under one
//! lock instead of as a separate pre-check.

mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Ad, Report, User};

pub use memory::MemoryStore;

/// Storage errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// In-place mutation of a single ad document.
pub type AdMutation = Box<dyn FnOnce(&mut Ad) + Send>;
/// In-place mutation of a single user document.
pub type UserMutation = Box<dyn FnOnce(&mut User) + Send>;
/// In-place mutation of a single report document.
pub type ReportMutation = Box<dyn FnOnce(&mut Report) + Send>;

/// Outcome of an open-report insert attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum OpenReportInsert {
    Created,
    /// An open report (pending or in_review) by the same reporter for the
    /// same ad already exists.
    DuplicateOpen,
}

/// Data persistence contract over the three shared collections.
#[async_trait]
pub trait AggregateStore: Send + Sync {
    // Ad operations
    async fn insert_ad(&self, ad: Ad) -> StoreResult<()>;
    async fn get_ad(&self, id: Uuid) -> StoreResult<Option<Ad>>;
    async fn list_ads(&self) -> StoreResult<Vec<Ad>>;
    /// Apply `mutation` to the ad atomically. Returns the updated document,
    /// or `None` when the ad does not exist.
    async fn update_ad(&self, id: Uuid, mutation: AdMutation) -> StoreResult<Option<Ad>>;
    /// Returns whether a document was deleted. Reports referencing the ad
    /// are intentionally left in place.
    async fn delete_ad(&self, id: Uuid) -> StoreResult<bool>;

    // User operations
    async fn insert_user(&self, user: User) -> StoreResult<()>;
    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>>;
    async fn list_users(&self) -> StoreResult<Vec<User>>;
    async fn update_user(&self, id: Uuid, mutation: UserMutation) -> StoreResult<Option<User>>;
    async fn delete_user(&self, id: Uuid) -> StoreResult<bool>;

    // Report operations
    /// Insert a new report unless the reporter already has an open one for
    /// the same ad. Check and insert run under one lock.
    async fn insert_open_report(&self, report: Report) -> StoreResult<OpenReportInsert>;
    async fn get_report(&self, id: Uuid) -> StoreResult<Option<Report>>;
    async fn list_reports(&self) -> StoreResult<Vec<Report>>;
    async fn reports_for_ad(&self, ad_id: Uuid) -> StoreResult<Vec<Report>>;
    async fn update_report(
        &self,
        id: Uuid,
        mutation: ReportMutation,
    ) -> StoreResult<Option<Report>>;
}
