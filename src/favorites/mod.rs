//! Favorites
//!
//! Server side: per-user membership set persisted on the user record.
//! Client side (`sync`): optimistic local mirror with compensation on server
//! failure and authoritative reload.

mod service;
pub mod sync;

pub use service::FavoriteService;
pub use sync::{CacheStore, FavoriteSync, FavoriteTransport, InMemoryCache, ToggleOutcome};
