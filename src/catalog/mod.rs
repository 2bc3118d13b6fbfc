//! Category domain: flat row parsing, tree assembly, and breadcrumb
//! navigation.

/// Error type shared by the category loaders.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub mod nav;
pub mod rows;
pub mod tree;

pub use nav::{CategoryNav, Selection};
pub use rows::{CategoryRow, NONE_SENTINEL};
pub use tree::{CategoryNode, build_tree};
