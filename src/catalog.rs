//! Tool catalog
//!
//! Holds the read-only, ordered list of AI tools served by `/api/tools`.
//! Order is seed order and is preserved by every query.

use std::collections::HashSet;

use crate::domain::Tool;
use crate::error::{ApiError, Result};

/// Ordered, immutable catalog of tools
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Vec<Tool>,
}

impl Catalog {
    /// Build a catalog from tools, rejecting duplicate ids
    pub fn new(tools: Vec<Tool>) -> Result<Self> {
        let mut seen = HashSet::new();
        for tool in &tools {
            if !seen.insert(tool.id) {
                return Err(ApiError::Internal(format!(
                    "Duplicate tool id in catalog: {}",
                    tool.id
                )));
            }
        }
        Ok(Self { tools })
    }

    /// The catalog the service starts with
    pub fn seeded() -> Self {
        Self { tools: seed_tools() }
    }

    /// List tools, optionally filtered by category (case-insensitive exact match)
    ///
    /// An empty category is treated the same as no category.
    pub fn list(&self, category: Option<&str>) -> Vec<&Tool> {
        match category.filter(|c| !c.is_empty()) {
            Some(category) => self.tools.iter().filter(|t| t.in_category(category)).collect(),
            None => self.tools.iter().collect(),
        }
    }

    /// Get a tool by id
    pub fn get(&self, id: i64) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// Check if a tool exists
    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    /// Get all tools in seed order
    pub fn all(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter()
    }

    /// Get number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn seed_tools() -> Vec<Tool> {
    vec![
        Tool::new(
            1,
            "ChatGPT",
            "Writing",
            "https://chat.openai.com",
            "Your AI Assistant for content creation",
        )
        .with_tags(["AI Assistant", "Research", "Blog"]),
        Tool::new(
            2,
            "Midjourney",
            "Design",
            "https://midjourney.com",
            "AI image generation tool",
        )
        .with_tags(["Art", "Design", "Creative"]),
        Tool::new(
            3,
            "Grammarly",
            "Writing",
            "https://grammarly.com",
            "AI-powered writing assistant",
        )
        .with_tags(["Grammar", "Writing", "Editing"]),
        Tool::new(
            4,
            "DALL-E",
            "Design",
            "https://openai.com/dall-e-2",
            "AI system that creates realistic images from text descriptions",
        )
        .with_tags(["Art", "AI", "Image Generation"]),
        Tool::new(
            5,
            "Jasper",
            "Writing",
            "https://jasper.ai",
            "AI content generator for marketing teams",
        )
        .with_tags(["Marketing", "Content", "Copywriting"]),
    ]
}
