//! Application state shared across handlers.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use palanca_core::Store;

use crate::catalog;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the store. The store sits behind a read-write lock so a
/// mutation runs to completion before any render observes the state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: RwLock<Store>,
}

impl AppState {
    /// Create application state with the seeded demo catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: RwLock::new(Store::new(catalog::seed_products())),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Lock the store for reading.
    ///
    /// Handlers do all their store work synchronously; the guard must not be
    /// held across an await point.
    #[must_use]
    pub fn store(&self) -> RwLockReadGuard<'_, Store> {
        // Mutations are total, so a lock poisoned by a panicking reader still
        // holds consistent data.
        self.inner
            .store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the store for writing. Same holding rule as [`Self::store`].
    #[must_use]
    pub fn store_mut(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner
            .store
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};
    use std::path::PathBuf;

    fn test_config() -> StorefrontConfig {
        StorefrontConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            static_dir: PathBuf::from("static"),
        }
    }

    #[test]
    fn test_new_state_seeds_catalog() {
        let state = AppState::new(test_config());
        assert_eq!(state.store().products_list().len(), 4);
        assert_eq!(state.store().cart_count(), 0);
    }

    #[test]
    fn test_clones_share_the_store() {
        let state = AppState::new(test_config());
        let clone = state.clone();

        let product = state.store().products_list().first().unwrap().clone();
        state.store_mut().add_to_cart(&product);

        assert_eq!(clone.store().cart_count(), 1);
    }
}
