//! Server context - shared state for request handlers
//!
//! AppContext owns the catalog and the favorites store. It is cloned into
//! every handler through axum state; clones share the same underlying data.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::Catalog;
use crate::store::FavoritesStore;

/// Shared context for all request handlers
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Read-only tool catalog
    pub catalog: Arc<Catalog>,
    /// Favorites; writers hold the lock across check-then-insert
    pub favorites: Arc<RwLock<FavoritesStore>>,
}

impl AppContext {
    /// Create a context with the seeded catalog and an empty store
    pub fn new() -> Self {
        Self::with_catalog(Catalog::seeded())
    }

    /// Create a context around a specific catalog
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            favorites: Arc::new(RwLock::new(FavoritesStore::new())),
        }
    }

    /// Number of tools in the catalog
    pub fn tools_count(&self) -> usize {
        self.catalog.len()
    }

    /// Current number of favorites
    pub async fn favorites_count(&self) -> usize {
        self.favorites.read().await.len()
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_context() {
        let ctx = AppContext::new();
        assert_eq!(ctx.tools_count(), 5);
        assert_eq!(ctx.favorites_count().await, 0);
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let ctx = AppContext::new();
        let clone = ctx.clone();
        clone
            .favorites
            .write()
            .await
            .add(&clone.catalog, 1)
            .unwrap();
        assert_eq!(ctx.favorites_count().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_adds_of_same_tool_insert_once() {
        let ctx = AppContext::new();
        let mut handles = Vec::new();
        for _ in 0..16 {
            let ctx = ctx.clone();
            handles.push(tokio::spawn(async move {
                let mut store = ctx.favorites.write().await;
                store.add(&ctx.catalog, 3).is_ok()
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(ctx.favorites_count().await, 1);
    }
}
