//! Tool record
//!
//! A Tool is one AI product in the catalog. Tools are seeded at startup and
//! never change afterwards.

use serde::{Deserialize, Serialize};

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique within the catalog
    pub id: i64,
    pub name: String,
    pub category: String,
    pub url: String,
    /// Short one-line description
    pub excerpt: String,
    pub tags: Vec<String>,
}

impl Tool {
    /// Create a new tool with no tags
    pub fn new(
        id: i64,
        name: impl Into<String>,
        category: impl Into<String>,
        url: impl Into<String>,
        excerpt: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            url: url.into(),
            excerpt: excerpt.into(),
            tags: Vec::new(),
        }
    }

    /// Builder: set tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Case-insensitive exact match on category
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tool {
        Tool::new(1, "ChatGPT", "Writing", "https://chat.openai.com", "assistant")
            .with_tags(["AI Assistant", "Research"])
    }

    #[test]
    fn test_tool_builder() {
        let tool = sample();
        assert_eq!(tool.id, 1);
        assert_eq!(tool.name, "ChatGPT");
        assert_eq!(tool.tags, vec!["AI Assistant", "Research"]);
    }

    #[test]
    fn test_in_category_ignores_case() {
        let tool = sample();
        assert!(tool.in_category("writing"));
        assert!(tool.in_category("WRITING"));
        assert!(tool.in_category("Writing"));
    }

    #[test]
    fn test_in_category_requires_exact_match() {
        let tool = sample();
        assert!(!tool.in_category("writ"));
        assert!(!tool.in_category("writing "));
        assert!(!tool.in_category("design"));
    }

    #[test]
    fn test_tool_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["category"], "Writing");
        assert_eq!(value["excerpt"], "assistant");
        assert!(value["tags"].is_array());
    }
}
