//! Dual-backed settings store.
//!
//! Every key lives in two places: a synchronous local cache (fast path,
//! always available) and an optional asynchronous authority reachable only
//! through a bridge (source of truth when it answers). Reads reconcile the
//! two in the authority's favor; writes land in the cache first and propagate
//! best-effort, with no rollback. Divergence after a failed propagation is
//! resolved by the next authority read.

mod bridge;
mod cache;
mod error;


pub use bridge::AuthorityBridge;
pub use cache::{FileCache, LocalCache, MemoryCache};
pub use error::{PersistenceError, SourceError};

use std::sync::Arc;

use crate::clog;

/// Get/set access to named settings values across both backends.
pub struct KeyStore<C: LocalCache> {
    cache: C,
    bridge: Option<Arc<dyn AuthorityBridge>>,
}

impl<C: LocalCache> KeyStore<C> {
    /// Store with no authority configured; all operations are local-only.
    pub fn new(cache: C) -> Self {
        Self {
            cache,
            bridge: None,
        }
    }

    pub fn with_bridge(cache: C, bridge: Arc<dyn AuthorityBridge>) -> Self {
        Self {
            cache,
            bridge: Some(bridge),
        }
    }

    /// Configure the authority bridge after construction; the host bridge
    /// usually becomes available some time after startup.
    pub fn set_bridge(&mut self, bridge: Arc<dyn AuthorityBridge>) {
        self.bridge = Some(bridge);
    }

    /// Write `value` under `name`.
    ///
    /// The local cache is written first. A cache failure is logged and does
    /// not abort authority propagation; an authority failure is logged and
    /// the local write is never rolled back. Returns an error only when every
    /// attempted path failed, so callers always keep the best surviving copy.
    pub async fn set_key(
        &mut self,
        name: &str,
        value: &str,
        propagate_to_authority: bool,
    ) -> Result<(), PersistenceError> {
        let cache_result =
            self.cache
                .set(name, value)
                .map_err(|source| PersistenceError::CacheWrite {
                    name: name.to_string(),
                    source,
                });
        if let Err(err) = &cache_result {
            tracing::warn!("local cache write failed: {err}");
            clog!("setKey cache write failed", name, err.to_string());
        }

        let bridge = match (&self.bridge, propagate_to_authority) {
            (Some(bridge), true) => Arc::clone(bridge),
            _ => return cache_result,
        };

        match bridge.set_value(name, value).await {
            Ok(()) => Ok(()),
            Err(source) => {
                let err = PersistenceError::AuthorityWrite {
                    name: name.to_string(),
                    source,
                };
                tracing::warn!("authority write failed: {err}");
                clog!("setKey authority write failed", name, err.to_string());
                // The local copy (if it landed) stays; the next authority
                // read reconciles the stores.
                cache_result
            }
        }
    }

    /// Read the value stored under `name`.
    ///
    /// The local cache supplies the fallback. With a bridge configured and
    /// `read_from_authority` set, the authority's answer wins: a value
    /// overwrites the cache, an explicit absence is reported as `None`, and a
    /// transport error degrades to the cached fallback.
    pub async fn get_key(&mut self, name: &str, read_from_authority: bool) -> Option<String> {
        let fallback = match self.cache.get(name) {
            Ok(value) => value,
            Err(source) => {
                let err = PersistenceError::CacheRead {
                    name: name.to_string(),
                    source,
                };
                tracing::warn!("local cache read failed: {err}");
                clog!("getKey cache read failed", name, err.to_string());
                None
            }
        };

        let bridge = match (&self.bridge, read_from_authority) {
            (Some(bridge), true) => Arc::clone(bridge),
            _ => return fallback,
        };

        match bridge.get_value(name).await {
            Ok(Some(value)) => {
                if let Err(source) = self.cache.set(name, &value) {
                    let err = PersistenceError::CacheWrite {
                        name: name.to_string(),
                        source,
                    };
                    tracing::warn!("cache reconciliation failed: {err}");
                    clog!("getKey cache reconciliation failed", name, err.to_string());
                }
                Some(value)
            }
            // The authority knows the key is unset. The stale cache entry, if
            // any, stays: there is no delete operation at this layer.
            Ok(None) => None,
            Err(source) => {
                let err = PersistenceError::AuthorityRead {
                    name: name.to_string(),
                    source,
                };
                tracing::warn!("authority read failed: {err}");
                clog!("getKey authority read failed", name, err.to_string());
                fallback
            }
        }
    }
}
