//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::ads::AdService;
use crate::config::Config;
use crate::favorites::FavoriteService;
use crate::promotions::PromotionService;
use crate::ratings::RatingService;
use crate::reports::ReportService;
use crate::store::AggregateStore;
use crate::users::UserService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AggregateStore>,
    pub ad_service: Arc<AdService>,
    pub rating_service: Arc<RatingService>,
    pub report_service: Arc<ReportService>,
    pub promotion_service: Arc<PromotionService>,
    pub favorite_service: Arc<FavoriteService>,
    pub user_service: Arc<UserService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire every service around one shared store.
    pub fn new(store: Arc<dyn AggregateStore>, config: Arc<Config>) -> Self {
        Self {
            ad_service: Arc::new(AdService::new(store.clone())),
            rating_service: Arc::new(RatingService::new(store.clone())),
            report_service: Arc::new(ReportService::new(store.clone())),
            promotion_service: Arc::new(PromotionService::new(store.clone())),
            favorite_service: Arc::new(FavoriteService::new(store.clone())),
            user_service: Arc::new(UserService::new(store.clone())),
            store,
            config,
        }
    }
}

impl FromRef<AppState> for Arc<Config> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
