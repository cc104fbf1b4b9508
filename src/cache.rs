//! Short-lived response cache for relayed webcam queries.
//!
//! # Purpose
//! Maps a request fingerprint to a previously computed response body so that
//! repeated queries inside the expiry window skip the upstream call.
//!
//! # Notes
//! Expiry is logical and lazy: `get` refuses to return a stale entry but
//! leaves it physically resident until the next `put` overwrites it or the
//! process exits. There is no delete operation and no capacity bound.
use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Default expiry window: five minutes.
pub const DEFAULT_TTL: Duration = Duration::from_millis(300_000);

#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Value,
    stored_at: Instant,
}

/// Fingerprint-keyed response cache with a single fixed TTL.
///
/// # What it does
/// Stores opaque JSON payloads under a string fingerprint and surfaces them
/// only while younger than the configured TTL.
///
/// # Invariants
/// - An expired entry is indistinguishable from an absent one via `get`.
/// - `put` always replaces the whole entry and resets its timestamp.
#[derive(Debug)]
pub struct ResponseCache {
    // RwLock allows concurrent readers; get never needs write access
    // because expiry does not evict.
    inner: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Deterministic fingerprint over every parameter that varies the
    /// upstream query. The radius is part of the key: two queries for the
    /// same point with different radii must not share an entry.
    pub fn fingerprint(lat: f64, lon: f64, radius_km: f64) -> String {
        format!("{lat},{lon},{radius_km}")
    }

    /// Return the cached payload for `key` if present and not expired.
    pub async fn get(&self, key: &str) -> Option<Value> {
        let guard = self.inner.read().await;
        let entry = guard.get(key)?;
        if entry.stored_at.elapsed() >= self.ttl {
            // Logically gone; the physical entry stays until overwritten.
            return None;
        }
        Some(entry.payload.clone())
    }

    /// Insert or overwrite the entry for `key` with a fresh timestamp.
    pub async fn put(&self, key: &str, payload: Value) {
        let entry = CacheEntry {
            payload,
            stored_at: Instant::now(),
        };
        self.inner.write().await.insert(key.to_string(), entry);
    }

    /// Number of physically resident entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
