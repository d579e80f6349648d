//! User settings and preferences for PostForge
//!
//! This module defines the `Settings` struct that holds all user-configurable
//! options, with serde support for JSON persistence. Post content is never
//! persisted; settings only carry preferences and window state.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Available color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Toggle between light and dark.
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Get a display label for the theme.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window Size Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Window dimensions and position, restored on the next launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
    /// Horizontal position (None on first launch)
    pub x: Option<f32>,
    /// Vertical position (None on first launch)
    pub y: Option<f32>,
    pub maximized: bool,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            x: None,
            y: None,
            maximized: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// All user-configurable settings.
///
/// Unknown fields in the config file are ignored, and missing fields fall
/// back to defaults, so settings survive both upgrades and downgrades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Color theme
    pub theme: Theme,
    /// Window geometry from the previous session
    pub window_size: WindowSize,
    /// Pre-filled author name for new drafts
    pub default_author: String,
    /// Directory of the last exported bundle
    pub last_export_dir: Option<PathBuf>,
    /// Whether the generated-document preview pane is visible
    pub show_document_preview: bool,
    /// Editor font size in points
    pub editor_font_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            window_size: WindowSize::default(),
            default_author: String::new(),
            last_export_dir: None,
            show_document_preview: true,
            editor_font_size: 14.0,
        }
    }
}

impl Settings {
    /// Minimum editor font size.
    pub const MIN_FONT_SIZE: f32 = 8.0;
    /// Maximum editor font size.
    pub const MAX_FONT_SIZE: f32 = 32.0;
    /// Minimum restored window width.
    pub const MIN_WINDOW_WIDTH: f32 = 600.0;
    /// Minimum restored window height.
    pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

    /// Clamp out-of-range values to something usable.
    ///
    /// A hand-edited or corrupted config file must never produce an
    /// unreadable font or an unreachable window.
    pub fn sanitize(&mut self) {
        self.editor_font_size = self
            .editor_font_size
            .clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);
        self.window_size.width = self.window_size.width.max(Self::MIN_WINDOW_WIDTH);
        self.window_size.height = self.window_size.height.max(Self::MIN_WINDOW_HEIGHT);
    }

    /// Parse settings from JSON and sanitize the result.
    pub fn from_json_sanitized(json: &str) -> serde_json::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.editor_font_size, 14.0);
        assert!(settings.show_document_preview);
        assert!(settings.default_author.is_empty());
        assert!(settings.last_export_dir.is_none());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Dark.label(), "Dark");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let settings = Settings::from_json_sanitized(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.editor_font_size, 14.0);
        assert!(settings.show_document_preview);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let settings =
            Settings::from_json_sanitized(r#"{"theme": "dark", "future_feature": true}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn test_sanitize_clamps_font_size() {
        let settings = Settings::from_json_sanitized(r#"{"editor_font_size": 2.0}"#).unwrap();
        assert_eq!(settings.editor_font_size, Settings::MIN_FONT_SIZE);

        let settings = Settings::from_json_sanitized(r#"{"editor_font_size": 90.0}"#).unwrap();
        assert_eq!(settings.editor_font_size, Settings::MAX_FONT_SIZE);
    }

    #[test]
    fn test_sanitize_enforces_minimum_window() {
        let settings = Settings::from_json_sanitized(
            r#"{"window_size": {"width": 50.0, "height": 20.0, "x": null, "y": null, "maximized": false}}"#,
        )
        .unwrap();
        assert_eq!(settings.window_size.width, Settings::MIN_WINDOW_WIDTH);
        assert_eq!(settings.window_size.height, Settings::MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn test_roundtrip() {
        let mut original = Settings::default();
        original.theme = Theme::Dark;
        original.default_author = "Jane Doe".to_string();
        original.last_export_dir = Some(PathBuf::from("/exports"));
        original.show_document_preview = false;

        let json = serde_json::to_string_pretty(&original).unwrap();
        let loaded = Settings::from_json_sanitized(&json).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_wrong_types_rejected() {
        assert!(Settings::from_json_sanitized(r#"{"editor_font_size": "big"}"#).is_err());
    }
}
