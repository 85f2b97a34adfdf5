//! Ad listings
//!
//! CRUD and search over the ads collection. Mutations go through the
//! ownership-or-admin guard; deletion intentionally leaves any reports
//! referencing the ad in place.

mod model;
mod service;

pub use model::{CreateAdRequest, ListAdsQuery, UpdateAdRequest};
pub use service::AdService;
