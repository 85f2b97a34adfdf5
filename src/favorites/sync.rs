//! Client-side favorite synchronization
//!
//! Mirrors the server's favorite set in a local cache keyed by the signed-in
//! user (or a guest key). Each toggle runs a small state machine:
//! the optimistic in-memory flip is `Applied`, and the toggle ends in either
//! `Confirmed` (server accepted, or no server involved) or `RolledBack`
//! (compensating inverse applied after a server failure). The cache is only
//! written once a terminal state is reached, so a crash mid-toggle can never
//! leave a half-applied set on disk. On every successful load the server set
//! overwrites the cache unconditionally; the cache is a responsiveness and
//! offline buffer, never authoritative on conflict.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Cache key used when no user is signed in.
const GUEST_KEY: &str = "favorites_guest";

/// Transport errors surfaced by the server calls
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("server rejected the request: {0}")]
    Rejected(String),

    #[error("network failure: {0}")]
    Network(String),
}

/// Server calls needed to keep the favorite set in sync
#[async_trait]
pub trait FavoriteTransport: Send + Sync {
    async fn add(&self, ad_id: Uuid) -> Result<(), TransportError>;
    async fn remove(&self, ad_id: Uuid) -> Result<(), TransportError>;
    async fn fetch(&self) -> Result<Vec<Uuid>, TransportError>;
}

/// Local persistence contract for the favorite mirror
pub trait CacheStore: Send + Sync {
    fn load(&self, key: &str) -> Option<Vec<Uuid>>;
    fn save(&self, key: &str, favorites: &[Uuid]);
}

#[async_trait]
impl<T: FavoriteTransport + ?Sized> FavoriteTransport for std::sync::Arc<T> {
    async fn add(&self, ad_id: Uuid) -> Result<(), TransportError> {
        (**self).add(ad_id).await
    }

    async fn remove(&self, ad_id: Uuid) -> Result<(), TransportError> {
        (**self).remove(ad_id).await
    }

    async fn fetch(&self) -> Result<Vec<Uuid>, TransportError> {
        (**self).fetch().await
    }
}

impl<C: CacheStore + ?Sized> CacheStore for std::sync::Arc<C> {
    fn load(&self, key: &str) -> Option<Vec<Uuid>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, favorites: &[Uuid]) {
        (**self).save(key, favorites)
    }
}

/// Terminal state of one toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The optimistic flip stands; `favorite` is the resulting membership.
    Confirmed { favorite: bool },
    /// The server call failed and the flip was compensated; `favorite` is
    /// the restored pre-toggle membership.
    RolledBack { favorite: bool },
}

/// Client-side favorite set with optimistic mutation and reconciliation
pub struct FavoriteSync<T, C> {
    identity: Option<Uuid>,
    favorites: HashSet<Uuid>,
    transport: T,
    cache: C,
}

impl<T: FavoriteTransport, C: CacheStore> FavoriteSync<T, C> {
    pub fn new(identity: Option<Uuid>, transport: T, cache: C) -> Self {
        Self {
            identity,
            favorites: HashSet::new(),
            transport,
            cache,
        }
    }

    fn cache_key(&self) -> String {
        match self.identity {
            Some(user_id) => format!("favorites_{}", user_id),
            None => GUEST_KEY.to_string(),
        }
    }

    fn persist(&self) {
        let mut favorites: Vec<Uuid> = self.favorites.iter().copied().collect();
        favorites.sort();
        self.cache.save(&self.cache_key(), &favorites);
    }

    pub fn is_favorite(&self, ad_id: Uuid) -> bool {
        self.favorites.contains(&ad_id)
    }

    pub fn favorites(&self) -> &HashSet<Uuid> {
        &self.favorites
    }

    /// Flip membership for `ad_id`, reconciling with the server.
    pub async fn toggle(&mut self, ad_id: Uuid) -> ToggleOutcome {
        let was_favorite = self.favorites.contains(&ad_id);

        // Applied: flip in memory first for UI responsiveness.
        if was_favorite {
            self.favorites.remove(&ad_id);
        } else {
            self.favorites.insert(ad_id);
        }

        if self.identity.is_none() {
            // Guests have no server set; the flip is terminal immediately.
            self.persist();
            return ToggleOutcome::Confirmed {
                favorite: !was_favorite,
            };
        }

        let result = if was_favorite {
            self.transport.remove(ad_id).await
        } else {
            self.transport.add(ad_id).await
        };

        match result {
            Ok(()) => {
                self.persist();
                ToggleOutcome::Confirmed {
                    favorite: !was_favorite,
                }
            }
            Err(err) => {
                // Compensating inverse: restore pre-toggle membership.
                if was_favorite {
                    self.favorites.insert(ad_id);
                } else {
                    self.favorites.remove(&ad_id);
                }
                self.persist();
                tracing::warn!(ad_id = %ad_id, error = %err, "Favorite toggle rolled back");
                ToggleOutcome::RolledBack {
                    favorite: was_favorite,
                }
            }
        }
    }

    /// Load the favorite set. Server state overwrites the local cache on
    /// success; on transport failure the cached set is used as an offline
    /// fallback and the error is logged, not propagated.
    pub async fn load(&mut self) {
        if self.identity.is_none() {
            self.favorites = self
                .cache
                .load(&self.cache_key())
                .unwrap_or_default()
                .into_iter()
                .collect();
            return;
        }

        match self.transport.fetch().await {
            Ok(server_favorites) => {
                self.favorites = server_favorites.into_iter().collect();
                self.persist();
            }
            Err(err) => {
                tracing::warn!(error = %err, "Falling back to cached favorites");
                self.favorites = self
                    .cache
                    .load(&self.cache_key())
                    .unwrap_or_default()
                    .into_iter()
                    .collect();
            }
        }
    }

    /// Drop all local favorite state (e.g. on sign-out).
    pub fn clear(&mut self) {
        self.favorites.clear();
        self.persist();
    }
}

/// In-memory `CacheStore`, the default for tests and ephemeral clients.
#[derive(Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, Vec<Uuid>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for InMemoryCache {
    fn load(&self, key: &str) -> Option<Vec<Uuid>> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn save(&self, key: &str, favorites: &[Uuid]) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), favorites.to_vec());
    }
}
