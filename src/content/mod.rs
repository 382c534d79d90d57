//! Content module - splits, parses and renders the artist document

mod frontmatter;
pub mod inline;
pub mod loader;
mod markdown;
pub mod tree;

pub use frontmatter::ParsedDocument;
pub use markdown::{ListItem, MarkdownRenderer, RenderedBlock, RenderedBody};
pub use tree::{ConfigNode, Mapping, TreeParser};
