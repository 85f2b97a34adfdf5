//! Promotion service layer
//!
//! `original_price` is captured from the ad's current price only while it is
//! unset, inside the same atomic store mutation that raises the flag, so
//! repeated activations can never overwrite the snapshot. Deactivation clears
//! the display fields and nothing else; restoring the price is the caller's
//! decision.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::{can_mutate_ad, Principal};
use crate::error::{ApiError, ApiResult};
use crate::models::Ad;
use crate::promotions::ActivatePromotionRequest;
use crate::store::AggregateStore;

/// Label applied when the caller supplies none (or a blank one).
pub const DEFAULT_PROMOTION_LABEL: &str = "On sale";

/// Service managing the promotional state of ads
pub struct PromotionService {
    store: Arc<dyn AggregateStore>,
}

impl PromotionService {
    pub fn new(store: Arc<dyn AggregateStore>) -> Self {
        Self { store }
    }

    /// Activate (or refresh) the promotion on an ad. Owner or admin only.
    pub async fn activate(
        &self,
        ad_id: Uuid,
        requester: Principal,
        request: ActivatePromotionRequest,
    ) -> ApiResult<Ad> {
        let ad = self
            .store
            .get_ad(ad_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Ad not found".to_string()))?;

        if !can_mutate_ad(&requester, &ad) {
            return Err(ApiError::Forbidden(
                "You cannot promote this ad".to_string(),
            ));
        }

        let expires_at = request
            .expires_at
            .as_deref()
            .map(parse_expiry)
            .transpose()?;

        let label = match request.label {
            Some(label) if !label.trim().is_empty() => label.trim().to_string(),
            _ => DEFAULT_PROMOTION_LABEL.to_string(),
        };

        let updated = self
            .store
            .update_ad(
                ad_id,
                Box::new(move |ad| {
                    ad.promotion_active = true;
                    ad.promotion_label = Some(label);
                    if let Some(expires_at) = expires_at {
                        ad.promotion_expires_at = Some(expires_at);
                    }
                    // Snapshot the price once per promotion lifetime.
                    if ad.original_price.is_none() {
                        ad.original_price = Some(ad.price.clone());
                    }
                }),
            )
            .await?
            .ok_or_else(|| ApiError::NotFound("Ad not found".to_string()))?;

        tracing::info!(ad_id = %ad_id, "Promotion activated");
        Ok(updated)
    }

    /// Deactivate the promotion. Leaves `price` and `original_price` alone.
    pub async fn deactivate(&self, ad_id: Uuid, requester: Principal) -> ApiResult<Ad> {
        let ad = self
            .store
            .get_ad(ad_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Ad not found".to_string()))?;

        if !can_mutate_ad(&requester, &ad) {
            return Err(ApiError::Forbidden(
                "You cannot remove the promotion from this ad".to_string(),
            ));
        }

        let updated = self
            .store
            .update_ad(
                ad_id,
                Box::new(|ad| {
                    ad.promotion_active = false;
                    ad.promotion_label = None;
                    ad.promotion_expires_at = None;
                }),
            )
            .await?
            .ok_or_else(|| ApiError::NotFound("Ad not found".to_string()))?;

        tracing::info!(ad_id = %ad_id, "Promotion deactivated");
        Ok(updated)
    }
}

fn parse_expiry(raw: &str) -> ApiResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ApiError::Validation("Invalid promotion expiry date".to_string()))
}
