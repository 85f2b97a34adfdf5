//! Rating service layer
//!
//! The upsert is expressed as a single atomic store mutation (remove the
//! rater's previous entry, append the replacement, recompute aggregates), so
//! two concurrent submissions by the same rater cannot observe each other's
//! half-applied state. Submissions by different raters stay independent.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::models::{Ad, Rating};
use crate::ratings::{MyRating, RatingsView, SubmitRatingRequest};
use crate::store::AggregateStore;

/// Recompute the derived aggregates from the current rating list.
///
/// Invariant after every mutation: `rating_count == ratings.len()` and
/// `average_rating` is the one-decimal rounded mean, 0 when empty.
fn recompute_aggregates(ad: &mut Ad) {
    let count = ad.ratings.len();
    ad.rating_count = count as u32;
    ad.average_rating = if count == 0 {
        0.0
    } else {
        let sum: i32 = ad.ratings.iter().map(|r| r.rating).sum();
        let mean = sum as f64 / count as f64;
        (mean * 10.0).round() / 10.0
    };
}

/// Service managing ratings and their aggregates
pub struct RatingService {
    store: Arc<dyn AggregateStore>,
}

impl RatingService {
    pub fn new(store: Arc<dyn AggregateStore>) -> Self {
        Self { store }
    }

    /// Upsert the caller's rating on an ad and recompute aggregates.
    pub async fn submit_rating(
        &self,
        ad_id: Uuid,
        rater_id: Uuid,
        request: SubmitRatingRequest,
    ) -> ApiResult<Ad> {
        request.validate()?;

        let ad = self
            .store
            .get_ad(ad_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Ad not found".to_string()))?;

        if ad.author_id == rater_id {
            return Err(ApiError::Validation(
                "You cannot rate your own ad".to_string(),
            ));
        }

        let entry = Rating {
            user_id: rater_id,
            rating: request.rating,
            comment: request.comment,
            created_at: Utc::now(),
        };

        let updated = self
            .store
            .update_ad(
                ad_id,
                Box::new(move |ad| {
                    ad.ratings.retain(|r| r.user_id != rater_id);
                    ad.ratings.push(entry);
                    recompute_aggregates(ad);
                }),
            )
            .await?
            .ok_or_else(|| ApiError::NotFound("Ad not found".to_string()))?;

        tracing::info!(ad_id = %ad_id, rater_id = %rater_id, "Rating submitted");
        Ok(updated)
    }

    /// Remove the caller's own rating; a no-op when none exists.
    pub async fn remove_rating(&self, ad_id: Uuid, rater_id: Uuid) -> ApiResult<Ad> {
        let updated = self
            .store
            .update_ad(
                ad_id,
                Box::new(move |ad| {
                    ad.ratings.retain(|r| r.user_id != rater_id);
                    recompute_aggregates(ad);
                }),
            )
            .await?
            .ok_or_else(|| ApiError::NotFound("Ad not found".to_string()))?;

        Ok(updated)
    }

    /// Ratings plus aggregates for one ad. Never an error for an ad with no
    /// ratings: count 0, average 0.
    pub async fn list_ratings(&self, ad_id: Uuid) -> ApiResult<RatingsView> {
        let ad = self
            .store
            .get_ad(ad_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Ad not found".to_string()))?;

        Ok(RatingsView {
            ratings: ad.ratings,
            average_rating: ad.average_rating,
            rating_count: ad.rating_count,
        })
    }

    /// Every rating the caller has left, joined lazily against live ads.
    /// Entries whose ad has since been deleted drop out of the view.
    pub async fn my_ratings(&self, user_id: Uuid) -> ApiResult<Vec<MyRating>> {
        let ads = self.store.list_ads().await?;

        let mut entries: Vec<MyRating> = ads
            .into_iter()
            .filter_map(|ad| {
                ad.rating_by(user_id).map(|rating| MyRating {
                    ad_id: ad.id,
                    ad_title: ad.title.clone(),
                    rating: rating.rating,
                    comment: rating.comment.clone(),
                    created_at: rating.created_at,
                })
            })
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(entries)
    }
}
