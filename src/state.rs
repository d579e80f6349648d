//! Application state management for PostForge
//!
//! This module defines the central `AppState` struct: the draft being
//! composed, the loaded settings, and transient UI state. The draft is a
//! plain data object handed by reference to the pure rendering and
//! validation functions, so the export pipeline is testable without any UI
//! harness.

use crate::config::{load_config, save_config_silent, Settings};
use crate::error::Result;
use crate::images::{load_featured_image, preview_uri, FeaturedImage, InlineImage};
use crate::post::{parse_tags, PostMetadata};
use log::{debug, info, warn};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Post Draft
// ─────────────────────────────────────────────────────────────────────────────

/// The post being composed.
///
/// Lives for the session only; nothing here is persisted. Field-level UI
/// events mutate it incrementally, and the export pipeline reads it through
/// pure functions.
#[derive(Debug, Default)]
pub struct PostDraft {
    /// Metadata fields (title, excerpt, author, parsed tags)
    pub meta: PostMetadata,
    /// Raw tag field text; re-parsed into `meta.tags` on every change
    pub tags_input: String,
    /// Markdown body owned by the editor widget
    pub body: String,
    /// The validated featured image, if one has been accepted
    pub featured: Option<FeaturedImage>,
    /// Inline images in upload order
    pub inline_images: Vec<InlineImage>,
    /// Bumped whenever the featured image changes, for thumbnail reload
    pub featured_generation: u64,
    /// Next preview URI sequence number
    next_image_seq: u64,
}

impl PostDraft {
    /// Create a draft with the author pre-filled from settings.
    pub fn with_author(author: &str) -> Self {
        Self {
            meta: PostMetadata::with_author(author),
            ..Self::default()
        }
    }

    /// Update the tag field, re-parsing the tag list.
    pub fn set_tags_input(&mut self, input: &str) {
        self.tags_input = input.to_string();
        self.meta.tags = parse_tags(input);
    }

    /// Accept an inline image upload and return its preview URI.
    ///
    /// This never fails: the editor widget has no retry path, so once the
    /// bytes are in hand the image is recorded and a usable reference is
    /// handed back unconditionally.
    pub fn add_inline_image(&mut self, file_name: &str, bytes: Vec<u8>) -> String {
        let uri = preview_uri(self.next_image_seq);
        self.next_image_seq += 1;

        debug!("Inline image added: {} -> {}", file_name, uri);
        self.inline_images.push(InlineImage {
            file_name: file_name.to_string(),
            bytes,
            preview_uri: uri.clone(),
        });
        uri
    }

    /// Validate and set the featured image.
    ///
    /// On any failure (undecodable bytes, wrong dimensions) the previously
    /// stored featured image, or the absence of one, is left unchanged.
    pub fn set_featured_image(&mut self, file_name: &str, bytes: Vec<u8>) -> Result<()> {
        let featured = load_featured_image(file_name, bytes)?;
        self.featured = Some(featured);
        self.featured_generation += 1;
        Ok(())
    }

    /// Remove the featured image.
    pub fn clear_featured_image(&mut self) {
        if self.featured.take().is_some() {
            self.featured_generation += 1;
            debug!("Featured image removed");
        }
    }

    /// Whether the author has typed or uploaded anything yet.
    ///
    /// Used to decide if closing the window needs a confirmation; the
    /// pre-filled author alone doesn't count as work worth guarding.
    pub fn has_content(&self) -> bool {
        !self.meta.title.is_empty()
            || !self.meta.excerpt.is_empty()
            || !self.tags_input.is_empty()
            || !self.body.trim().is_empty()
            || self.featured.is_some()
            || !self.inline_images.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UI State
// ─────────────────────────────────────────────────────────────────────────────

/// Transient UI flags and messages.
#[derive(Debug, Default)]
pub struct UiState {
    /// Whether the error modal is visible
    pub show_error_modal: bool,
    /// Error modal title
    pub error_title: String,
    /// Error modal body; may span multiple lines
    pub error_message: String,
    /// Whether the exit confirmation dialog is visible
    pub show_exit_confirm: bool,
    /// Temporary toast message (shown in the status bar)
    pub toast_message: Option<String>,
    /// When the toast expires, in seconds since app start
    pub toast_expires_at: Option<f64>,
    /// Where the last successful export landed, for the reveal affordance
    pub last_export_path: Option<PathBuf>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Application State
// ─────────────────────────────────────────────────────────────────────────────

/// Central application state struct.
#[derive(Debug)]
pub struct AppState {
    /// The draft being composed
    pub draft: PostDraft,
    /// User settings (loaded from config)
    pub settings: Settings,
    /// Transient UI state
    pub ui: UiState,
    /// Whether settings have been modified and need saving
    settings_dirty: bool,
}

impl AppState {
    /// Create a new AppState with settings loaded from config.
    pub fn new() -> Self {
        let settings = load_config();
        info!("AppState initialized with settings");
        Self::with_settings(settings)
    }

    /// Create AppState with custom settings (useful for testing).
    pub fn with_settings(settings: Settings) -> Self {
        let draft = PostDraft::with_author(&settings.default_author);
        Self {
            draft,
            settings,
            ui: UiState::default(),
            settings_dirty: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Settings Management
    // ─────────────────────────────────────────────────────────────────────────

    /// Mark settings as dirty (needing to be saved).
    pub fn mark_settings_dirty(&mut self) {
        self.settings_dirty = true;
    }

    /// Save settings to the config file if modified.
    ///
    /// Returns `true` if settings were saved.
    pub fn save_settings_if_dirty(&mut self) -> bool {
        if self.settings_dirty {
            if save_config_silent(&self.settings) {
                self.settings_dirty = false;
                info!("Settings saved");
                return true;
            }
            warn!("Failed to save settings");
        }
        false
    }

    /// Remember export context for the next session: the author name and the
    /// directory the bundle landed in.
    pub fn remember_export(&mut self, path: &std::path::Path) {
        self.settings.default_author = self.draft.meta.author.clone();
        if let Some(dir) = path.parent() {
            self.settings.last_export_dir = Some(dir.to_path_buf());
        }
        self.settings_dirty = true;
    }

    /// Prepare state for application shutdown.
    pub fn shutdown(&mut self) {
        self.settings_dirty = true;
        self.save_settings_if_dirty();
        info!("AppState shutdown complete");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // UI State Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Show an error in a modal dialog.
    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.ui.error_title = title.into();
        self.ui.error_message = message.into();
        self.ui.show_error_modal = true;
    }

    /// Dismiss the error modal.
    pub fn dismiss_error(&mut self) {
        self.ui.show_error_modal = false;
        self.ui.error_title.clear();
        self.ui.error_message.clear();
    }

    /// Show a temporary toast message.
    ///
    /// `current_time` is seconds since app start; `duration` is how long the
    /// toast stays visible.
    pub fn show_toast(&mut self, message: impl Into<String>, current_time: f64, duration: f64) {
        self.ui.toast_message = Some(message.into());
        self.ui.toast_expires_at = Some(current_time + duration);
    }

    /// Clear expired toasts. Call each frame with the current time.
    pub fn update_toast(&mut self, current_time: f64) {
        if let Some(expires_at) = self.ui.toast_expires_at {
            if current_time >= expires_at {
                self.ui.toast_message = None;
                self.ui.toast_expires_at = None;
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
