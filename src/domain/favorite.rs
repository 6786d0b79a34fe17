//! Favorite record and its catalog join
//!
//! A Favorite points at a Tool by id. The reference is checked once, when the
//! favorite is created, and never again.

use serde::{Deserialize, Serialize};

use crate::domain::Tool;
use crate::id::{generate_favorite_id, now_iso8601};

/// A user's saved reference to a catalog tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// Opaque unique identifier (UUID v4)
    pub id: String,
    /// Non-owning reference to `Tool::id`
    pub tool_id: i64,
    /// Creation time, ISO-8601 UTC
    pub added_at: String,
}

impl Favorite {
    /// Create a favorite for `tool_id` with a fresh id and the current time
    pub fn new(tool_id: i64) -> Self {
        Self {
            id: generate_favorite_id(),
            tool_id,
            added_at: now_iso8601(),
        }
    }
}

/// A favorite joined with its tool, as returned by the favorites listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteWithTool {
    #[serde(flatten)]
    pub favorite: Favorite,
    /// `None` serializes as `null` when the tool can't be resolved
    pub tool: Option<Tool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_favorite() {
        let fav = Favorite::new(3);
        assert_eq!(fav.tool_id, 3);
        assert!(!fav.id.is_empty());
        assert!(fav.added_at.ends_with('Z'));
    }

    #[test]
    fn test_new_favorites_have_distinct_ids() {
        let a = Favorite::new(1);
        let b = Favorite::new(1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_favorite_uses_camel_case() {
        let value = serde_json::to_value(Favorite::new(2)).unwrap();
        assert_eq!(value["toolId"], 2);
        assert!(value["addedAt"].is_string());
        assert!(value.get("tool_id").is_none());
    }

    #[test]
    fn test_favorite_with_tool_flattens() {
        let favorite = Favorite::new(1);
        let joined = FavoriteWithTool {
            favorite: favorite.clone(),
            tool: Some(Tool::new(1, "ChatGPT", "Writing", "https://chat.openai.com", "x")),
        };
        let value = serde_json::to_value(&joined).unwrap();
        assert_eq!(value["id"], favorite.id.as_str());
        assert_eq!(value["toolId"], 1);
        assert_eq!(value["tool"]["name"], "ChatGPT");
    }

    #[test]
    fn test_favorite_with_missing_tool_is_null() {
        let joined = FavoriteWithTool {
            favorite: Favorite::new(99),
            tool: None,
        };
        let value = serde_json::to_value(&joined).unwrap();
        assert!(value["tool"].is_null());
        assert!(value.as_object().unwrap().contains_key("tool"));
    }
}
