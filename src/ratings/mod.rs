//! Rating engine
//!
//! Upserts per-rater ratings on an ad and keeps the derived
//! average/count aggregates consistent with the rating list.

mod model;
mod service;

pub use model::{MyRating, RatingsView, SubmitRatingRequest};
pub use service::RatingService;
