//! Promotion manager
//!
//! Toggles the promotional display state on an ad with idempotent
//! price-snapshot semantics.

mod model;
mod service;

pub use model::ActivatePromotionRequest;
pub use service::{PromotionService, DEFAULT_PROMOTION_LABEL};
