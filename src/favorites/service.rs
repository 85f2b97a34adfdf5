//! Favorite service layer (server side)

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::store::AggregateStore;

/// Service managing per-user favorite sets
pub struct FavoriteService {
    store: Arc<dyn AggregateStore>,
}

impl FavoriteService {
    pub fn new(store: Arc<dyn AggregateStore>) -> Self {
        Self { store }
    }

    /// Add an ad to the user's favorites. Adding a member that is already
    /// present is a no-op.
    pub async fn add_favorite(&self, user_id: Uuid, ad_id: Uuid) -> ApiResult<()> {
        self.store
            .get_ad(ad_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Ad not found".to_string()))?;

        self.store
            .update_user(
                user_id,
                Box::new(move |user| {
                    user.favorites.insert(ad_id);
                }),
            )
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(())
    }

    /// Remove an ad from the user's favorites; a no-op when absent.
    pub async fn remove_favorite(&self, user_id: Uuid, ad_id: Uuid) -> ApiResult<()> {
        self.store
            .update_user(
                user_id,
                Box::new(move |user| {
                    user.favorites.remove(&ad_id);
                }),
            )
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(())
    }

    /// The user's favorite set. Server state is authoritative; clients
    /// overwrite their local cache with this on every successful load.
    pub async fn list_favorites(&self, user_id: Uuid) -> ApiResult<Vec<Uuid>> {
        let user = self
            .store
            .get_user(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let mut favorites: Vec<Uuid> = user.favorites.into_iter().collect();
        favorites.sort();
        Ok(favorites)
    }
}
