//! UI components for PostForge
//!
//! Panels and dialogs composed by the main application:
//!
//! - `toolbar.rs` - Formatting and export actions along the top
//! - `form.rs` - Post metadata form (title, excerpt, author, tags, featured image)
//! - `preview.rs` - Generated-document preview pane
//! - `dialogs.rs` - Error and confirmation modals

mod dialogs;
mod form;
mod preview;
mod toolbar;

pub use dialogs::{confirm_close_modal, error_modal};
pub use form::{show_metadata_form, FormAction};
pub use preview::show_document_preview;
pub use toolbar::{show_toolbar, ToolbarAction};
