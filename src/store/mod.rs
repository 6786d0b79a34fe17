//! In-memory storage for toolshelf.
//!
//! Nothing is persisted: the favorites list starts empty on every start and
//! is gone when the process exits.
//!
//! # Example
//!
//! ```
//! use toolshelf::catalog::Catalog;
//! use toolshelf::store::FavoritesStore;
//!
//! let catalog = Catalog::seeded();
//! let mut store = FavoritesStore::new();
//!
//! let favorite = store.add(&catalog, 1).unwrap();
//! assert_eq!(store.len(), 1);
//!
//! store.remove(&favorite.id).unwrap();
//! assert!(store.is_empty());
//! ```

mod favorites;

pub use favorites::FavoritesStore;
