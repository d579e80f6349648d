//! Export pipeline for PostForge
//!
//! Turns a validated draft into a downloadable bundle:
//!
//! - `validate.rs` - Readiness preconditions with aggregated reporting
//! - `slug.rs` - Download name derivation from the title
//! - `archive.rs` - Zip assembly of document + image payloads
//! - `task.rs` - Background worker with explicit outcome reporting
//! - `clipboard.rs` - Copy the generated document without exporting

mod archive;
mod clipboard;
mod slug;
mod task;
mod validate;

pub use archive::{build_bundle, BundleContents, BundleFile};
pub use clipboard::copy_document_to_clipboard;
pub use slug::{archive_file_name, download_slug};
pub use task::{ExportOutcome, ExportRequest, ExportTask};
pub use validate::{aggregate_message, validate_for_export, MIN_EXCERPT_LEN};

use crate::error::{Error, Result};
use crate::post;
use crate::state::PostDraft;
use chrono::{DateTime, Utc};

// ─────────────────────────────────────────────────────────────────────────────
// Bundle Snapshot
// ─────────────────────────────────────────────────────────────────────────────

/// Render the draft into a self-contained bundle snapshot.
///
/// Callers are expected to have passed [`validate_for_export`] first; a
/// missing featured image here is a programming error surfaced as a plain
/// application error rather than a partial bundle.
pub fn prepare_bundle(draft: &PostDraft, timestamp: DateTime<Utc>) -> Result<BundleContents> {
    let featured = draft.featured.as_ref().ok_or_else(|| {
        Error::Application("Cannot assemble a bundle without a featured image".to_string())
    })?;

    let body_html = post::render_body(&draft.body, &draft.inline_images);
    let document = post::render_document(
        &draft.meta,
        Some(&featured.file_name),
        &body_html,
        timestamp,
    );

    Ok(BundleContents {
        document,
        featured: BundleFile {
            name: featured.file_name.clone(),
            bytes: featured.bytes.clone(),
        },
        images: draft
            .inline_images
            .iter()
            .map(|image| BundleFile {
                name: image.file_name.clone(),
                bytes: image.bytes.clone(),
            })
            .collect(),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
