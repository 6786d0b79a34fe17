//! Domain types for toolshelf
//!
//! - Tool: an immutable catalog entry
//! - Favorite: a user's reference to a Tool, with a creation timestamp
//! - FavoriteWithTool: a Favorite joined with its Tool for listing

pub mod favorite;
pub mod tool;

pub use favorite::{Favorite, FavoriteWithTool};
pub use tool::Tool;
