//! Post model and document rendering for PostForge
//!
//! This module holds the metadata model for a blog post and the pure
//! rendering pipeline that turns it into the exported document:
//!
//! - `metadata.rs` - Post metadata fields and tag parsing
//! - `front_matter.rs` - Front-matter block and full document rendering
//! - `body.rs` - Markdown body serialization and image source rewriting

mod body;
mod front_matter;
mod metadata;

pub use body::{markdown_to_html_body, render_body, rewrite_image_sources};
pub use front_matter::{render_document, render_front_matter, DOCUMENT_FILE_NAME};
pub use metadata::{parse_tags, PostMetadata};
