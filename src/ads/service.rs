//! Ad service layer

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::ads::{CreateAdRequest, ListAdsQuery, UpdateAdRequest};
use crate::auth::{can_mutate_ad, Principal};
use crate::error::{ApiError, ApiResult};
use crate::models::{Ad, AdStatus};
use crate::store::AggregateStore;

/// Service managing ad listings
pub struct AdService {
    store: Arc<dyn AggregateStore>,
}

impl AdService {
    pub fn new(store: Arc<dyn AggregateStore>) -> Self {
        Self { store }
    }

    /// Publish a new ad owned by the caller.
    pub async fn create_ad(&self, author_id: Uuid, request: CreateAdRequest) -> ApiResult<Ad> {
        request.validate()?;

        let ad = Ad {
            id: Uuid::new_v4(),
            title: request.title,
            category: request.category,
            description: request.description,
            price: request.price,
            location: request.location,
            available_until: request.available_until,
            author_id,
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

        self.store.insert_ad(ad.clone()).await?;
        tracing::info!(ad_id = %ad.id, author_id = %author_id, "Ad published");
        Ok(ad)
    }

    pub async fn get_ad(&self, ad_id: Uuid) -> ApiResult<Ad> {
        self.store
            .get_ad(ad_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Ad not found".to_string()))
    }

    /// List ads, newest first, optionally filtered by a case-insensitive
    /// substring match on title or description. No ranking.
    pub async fn list_ads(&self, query: ListAdsQuery) -> ApiResult<Vec<Ad>> {
        let mut ads = self.store.list_ads().await?;

        if let Some(search) = query.search.as_deref() {
            let needle = search.to_lowercase();
            if !needle.is_empty() {
                ads.retain(|ad| {
                    ad.title.to_lowercase().contains(&needle)
                        || ad.description.to_lowercase().contains(&needle)
                });
            }
        }

        ads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(ads)
    }

    /// The caller's own ads, newest first.
    pub async fn my_ads(&self, author_id: Uuid) -> ApiResult<Vec<Ad>> {
        let mut ads = self.store.list_ads().await?;
        ads.retain(|ad| ad.author_id == author_id);
        ads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(ads)
    }

    /// Partial update, owner or admin only.
    pub async fn update_ad(
        &self,
        ad_id: Uuid,
        requester: Principal,
        request: UpdateAdRequest,
    ) -> ApiResult<Ad> {
        if request.is_empty() {
            return Err(ApiError::Validation(
                "No fields provided for update".to_string(),
            ));
        }

        let ad = self.get_ad(ad_id).await?;
        if !can_mutate_ad(&requester, &ad) {
            return Err(ApiError::Forbidden(
                "You do not have permission to edit this ad".to_string(),
            ));
        }

        let updated = self
            .store
            .update_ad(
                ad_id,
                Box::new(move |ad| {
                    if let Some(title) = request.title {
                        ad.title = title;
                    }
                    if let Some(description) = request.description {
                        ad.description = description;
                    }
                    if let Some(price) = request.price {
                        ad.price = price;
                    }
                    if let Some(location) = request.location {
                        ad.location = location;
                    }
                    if let Some(available_until) = request.available_until {
                        ad.available_until = available_until;
                    }
                }),
            )
            .await?
            .ok_or_else(|| ApiError::NotFound("Ad not found".to_string()))?;

        Ok(updated)
    }

    /// Delete an ad, owner or admin only. Reports referencing the ad are
    /// left in place.
    pub async fn delete_ad(&self, ad_id: Uuid, requester: Principal) -> ApiResult<()> {
        let ad = self.get_ad(ad_id).await?;
        if !can_mutate_ad(&requester, &ad) {
            return Err(ApiError::Forbidden(
                "You do not have permission to delete this ad".to_string(),
            ));
        }

        self.store.delete_ad(ad_id).await?;
        tracing::info!(ad_id = %ad_id, "Ad deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;
    use crate::store::MemoryStore;
    use chrono::Duration;

    fn create_request(title: &str, description: &str) -> CreateAdRequest {
        CreateAdRequest {
            title: title.to_string(),
            category: "Books".to_string(),
            description: description.to_string(),
            price: "R$ 20,00".to_string(),
            location: "Main hall".to_string(),
            available_until: Utc::now() + Duration::days(14),
        }
    }

    #[tokio::test]
    async fn test_create_requires_all_fields() {
        let service = AdService::new(Arc::new(MemoryStore::new()));

        let err = service
            .create_ad(Uuid::new_v4(), create_request("", "description"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let service = AdService::new(Arc::new(MemoryStore::new()));
        let author = Uuid::new_v4();

        service
            .create_ad(author, create_request("Calculus Textbook", "2nd edition"))
            .await
            .unwrap();
        service
            .create_ad(author, create_request("Desk chair", "ergonomic, calculus-free"))
            .await
            .unwrap();
        service
            .create_ad(author, create_request("Umbrella", "black"))
            .await
            .unwrap();

        let hits = service
            .list_ads(ListAdsQuery {
                search: Some("CALCULUS".to_string()),
            })
            .await
            .unwrap();
        // Matches in title or description, nothing else
        assert_eq!(hits.len(), 2);

        let all = service.list_ads(ListAdsQuery::default()).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_update_guard_and_empty_body() {
        let service = AdService::new(Arc::new(MemoryStore::new()));
        let author = Uuid::new_v4();
        let ad = service
            .create_ad(author, create_request("Bike", "city bike"))
            .await
            .unwrap();

        let stranger = Principal::new(Uuid::new_v4(), UserRole::User);
        let err = service
            .update_ad(
                ad.id,
                stranger,
                UpdateAdRequest {
                    title: Some("Stolen bike".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));

        let owner = Principal::new(author, UserRole::User);
        let err = service
            .update_ad(ad.id, owner, UpdateAdRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let updated = service
            .update_ad(
                ad.id,
                owner,
                UpdateAdRequest {
                    price: Some("R$ 15,00".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.price, "R$ 15,00");
        assert_eq!(updated.title, "Bike");
    }

    #[tokio::test]
    async fn test_delete_by_admin_and_owner_only() {
        let store = Arc::new(MemoryStore::new());
        let service = AdService::new(store.clone());
        let author = Uuid::new_v4();
        let ad = service
            .create_ad(author, create_request("Poster", "band poster"))
            .await
            .unwrap();

        let stranger = Principal::new(Uuid::new_v4(), UserRole::User);
        assert!(matches!(
            service.delete_ad(ad.id, stranger).await.unwrap_err(),
            ApiError::Forbidden(_)
        ));

        let admin = Principal::new(Uuid::new_v4(), UserRole::Admin);
        service.delete_ad(ad.id, admin).await.unwrap();
        assert!(store.get_ad(ad.id).await.unwrap().is_none());
    }
}
