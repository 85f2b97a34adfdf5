//! Client-side favorite sync: optimistic toggles, compensation, reconciliation

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use campus_market_server::favorites::sync::TransportError;
use campus_market_server::favorites::{
    CacheStore, FavoriteSync, FavoriteTransport, InMemoryCache, ToggleOutcome,
};

/// Test transport with a scripted failure queue; calls beyond the script
/// succeed against an in-memory server set.
#[derive(Default)]
struct ScriptedTransport {
    server: Mutex<HashSet<Uuid>>,
    failures: Mutex<VecDeque<bool>>,
    calls: Mutex<u32>,
}

impl ScriptedTransport {
    fn fail_next(&self, should_fail: bool) {
        self.failures.lock().unwrap().push_back(should_fail);
    }

    fn next_fails(&self) -> bool {
        self.failures.lock().unwrap().pop_front().unwrap_or(false)
    }

    fn server_set(&self) -> HashSet<Uuid> {
        self.server.lock().unwrap().clone()
    }

    fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl FavoriteTransport for ScriptedTransport {
    async fn add(&self, ad_id: Uuid) -> Result<(), TransportError> {
        *self.calls.lock().unwrap() += 1;
        if self.next_fails() {
            return Err(TransportError::Network("connection reset".to_string()));
        }
        self.server.lock().unwrap().insert(ad_id);
        Ok(())
    }

    async fn remove(&self, ad_id: Uuid) -> Result<(), TransportError> {
        *self.calls.lock().unwrap() += 1;
        if self.next_fails() {
            return Err(TransportError::Network("connection reset".to_string()));
        }
        self.server.lock().unwrap().remove(&ad_id);
        Ok(())
    }

    async fn fetch(&self) -> Result<Vec<Uuid>, TransportError> {
        *self.calls.lock().unwrap() += 1;
        if self.next_fails() {
            return Err(TransportError::Network("connection reset".to_string()));
        }
        Ok(self.server.lock().unwrap().iter().copied().collect())
    }
}

fn signed_in_sync(
    user_id: Uuid,
) -> (
    FavoriteSync<Arc<ScriptedTransport>, Arc<InMemoryCache>>,
    Arc<ScriptedTransport>,
    Arc<InMemoryCache>,
) {
    let transport = Arc::new(ScriptedTransport::default());
    let cache = Arc::new(InMemoryCache::new());
    let sync = FavoriteSync::new(Some(user_id), transport.clone(), cache.clone());
    (sync, transport, cache)
}

#[tokio::test]
async fn toggle_confirms_and_reaches_server() {
    let user_id = Uuid::new_v4();
    let ad_id = Uuid::new_v4();
    let (mut sync, transport, cache) = signed_in_sync(user_id);

    let outcome = sync.toggle(ad_id).await;
    assert_eq!(outcome, ToggleOutcome::Confirmed { favorite: true });
    assert!(sync.is_favorite(ad_id));
    assert!(transport.server_set().contains(&ad_id));
    assert_eq!(
        cache.load(&format!("favorites_{}", user_id)),
        Some(vec![ad_id])
    );
}

#[tokio::test]
async fn failed_second_toggle_restores_pre_toggle_membership() {
    let user_id = Uuid::new_v4();
    let ad_id = Uuid::new_v4();
    let (mut sync, transport, cache) = signed_in_sync(user_id);

    // First toggle succeeds: ad is now a favorite
    assert_eq!(
        sync.toggle(ad_id).await,
        ToggleOutcome::Confirmed { favorite: true }
    );

    // Second toggle in immediate succession fails server-side
    transport.fail_next(true);
    let outcome = sync.toggle(ad_id).await;
    assert_eq!(outcome, ToggleOutcome::RolledBack { favorite: true });

    // Membership is back to its pre-toggle value, locally and in the cache
    assert!(sync.is_favorite(ad_id));
    assert!(transport.server_set().contains(&ad_id));
    assert_eq!(
        cache.load(&format!("favorites_{}", user_id)),
        Some(vec![ad_id])
    );
}

#[tokio::test]
async fn failed_add_compensates_to_absent() {
    let user_id = Uuid::new_v4();
    let ad_id = Uuid::new_v4();
    let (mut sync, transport, cache) = signed_in_sync(user_id);

    transport.fail_next(true);
    let outcome = sync.toggle(ad_id).await;
    assert_eq!(outcome, ToggleOutcome::RolledBack { favorite: false });
    assert!(!sync.is_favorite(ad_id));
    assert!(transport.server_set().is_empty());
    assert_eq!(cache.load(&format!("favorites_{}", user_id)), Some(vec![]));
}

#[tokio::test]
async fn guest_toggles_are_local_and_terminal() {
    let ad_id = Uuid::new_v4();
    let transport = Arc::new(ScriptedTransport::default());
    let cache = Arc::new(InMemoryCache::new());
    let mut sync = FavoriteSync::new(None, transport.clone(), cache.clone());

    assert_eq!(
        sync.toggle(ad_id).await,
        ToggleOutcome::Confirmed { favorite: true }
    );
    assert_eq!(
        sync.toggle(ad_id).await,
        ToggleOutcome::Confirmed { favorite: false }
    );

    // No server involvement for guests
    assert_eq!(transport.call_count(), 0);
    assert_eq!(cache.load("favorites_guest"), Some(vec![]));
}

#[tokio::test]
async fn successful_load_overwrites_local_cache_unconditionally() {
    let user_id = Uuid::new_v4();
    let local_only = Uuid::new_v4();
    let server_side = Uuid::new_v4();
    let (mut sync, transport, cache) = signed_in_sync(user_id);

    // Local cache holds stale state; server disagrees
    cache.save(&format!("favorites_{}", user_id), &[local_only]);
    transport.server.lock().unwrap().insert(server_side);

    sync.load().await;

    assert!(sync.is_favorite(server_side));
    assert!(!sync.is_favorite(local_only));
    assert_eq!(
        cache.load(&format!("favorites_{}", user_id)),
        Some(vec![server_side])
    );
}

#[tokio::test]
async fn failed_load_falls_back_to_cached_set() {
    let user_id = Uuid::new_v4();
    let cached = Uuid::new_v4();
    let (mut sync, transport, cache) = signed_in_sync(user_id);

    cache.save(&format!("favorites_{}", user_id), &[cached]);
    transport.fail_next(true);

    sync.load().await;

    // Offline buffer: the cached set stays usable, no error surfaces
    assert!(sync.is_favorite(cached));
}
