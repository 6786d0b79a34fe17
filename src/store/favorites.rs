//! FavoritesStore implementation.
//!
//! An ordered, in-memory list of favorites. Insertion order is kept, and at
//! most one favorite may exist per tool id. The store itself is not
//! synchronized; callers share it behind a lock (see `AppContext`).

use crate::catalog::Catalog;
use crate::domain::{Favorite, FavoriteWithTool};
use crate::error::{ApiError, Result};

/// Mutable, ordered collection of favorites
#[derive(Debug, Default)]
pub struct FavoritesStore {
    favorites: Vec<Favorite>,
}

impl FavoritesStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a favorite for `tool_id`.
    ///
    /// Checks run in a fixed order: the tool must exist in `catalog` (NotFound),
    /// then it must not already be a favorite (Conflict). Only then is a new
    /// favorite appended.
    pub fn add(&mut self, catalog: &Catalog, tool_id: i64) -> Result<Favorite> {
        if !catalog.contains(tool_id) {
            return Err(ApiError::NotFound("Tool not found".to_string()));
        }

        if self.find_by_tool(tool_id).is_some() {
            return Err(ApiError::Conflict("Tool is already in favorites".to_string()));
        }

        let favorite = Favorite::new(tool_id);
        self.favorites.push(favorite.clone());

        tracing::info!(favorite_id = %favorite.id, tool_id, "Favorite added");
        Ok(favorite)
    }

    /// Remove a favorite by its id, preserving the order of the rest
    pub fn remove(&mut self, id: &str) -> Result<Favorite> {
        let index = self
            .favorites
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| ApiError::NotFound("Favorite not found".to_string()))?;

        let removed = self.favorites.remove(index);

        tracing::info!(favorite_id = %removed.id, tool_id = removed.tool_id, "Favorite removed");
        Ok(removed)
    }

    /// Get a favorite by its id
    pub fn get(&self, id: &str) -> Option<&Favorite> {
        self.favorites.iter().find(|f| f.id == id)
    }

    /// Find the favorite referencing `tool_id`, if any
    pub fn find_by_tool(&self, tool_id: i64) -> Option<&Favorite> {
        self.favorites.iter().find(|f| f.tool_id == tool_id)
    }

    /// All favorites in insertion order
    pub fn list(&self) -> &[Favorite] {
        &self.favorites
    }

    /// Join every favorite with its catalog tool.
    ///
    /// A favorite whose tool can't be found is kept with `tool: None`.
    pub fn with_tools(&self, catalog: &Catalog) -> Vec<FavoriteWithTool> {
        self.favorites
            .iter()
            .map(|favorite| FavoriteWithTool {
                favorite: favorite.clone(),
                tool: catalog.get(favorite.tool_id).cloned(),
            })
            .collect()
    }

    /// Number of favorites
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    /// Check if there are no favorites
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }
}
