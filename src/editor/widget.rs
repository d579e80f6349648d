//! Body editor widget
//!
//! Thin wrapper around egui's multiline `TextEdit` that knows how to read
//! the current selection and hand it to the formatting engine, restoring a
//! sensible cursor afterwards.

use crate::editor::formatting::{apply_format, insert_image, FormatCommand, FormatResult};
use eframe::egui;
use egui::text::CCursor;
use egui::text_selection::CCursorRange;

/// The markdown body editing surface.
#[derive(Debug, Clone)]
pub struct BodyEditor {
    id: egui::Id,
}

impl Default for BodyEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyEditor {
    pub fn new() -> Self {
        Self {
            id: egui::Id::new("post-body-editor"),
        }
    }

    /// Show the editor and return its response.
    pub fn show(&self, ui: &mut egui::Ui, body: &mut String, font_size: f32) -> egui::Response {
        ui.add_sized(
            [ui.available_width(), ui.available_height().max(240.0)],
            egui::TextEdit::multiline(body)
                .id(self.id)
                .font(egui::FontId::monospace(font_size))
                .hint_text("Write your post in markdown. Insert images with the 🖼 button."),
        )
    }

    /// Current selection as a sorted character range, if the editor has one.
    pub fn selection(&self, ctx: &egui::Context) -> Option<(usize, usize)> {
        let state = egui::TextEdit::load_state(ctx, self.id)?;
        let range = state.cursor.char_range()?;
        let (a, b) = (range.primary.index, range.secondary.index);
        Some((a.min(b), a.max(b)))
    }

    /// Apply a formatting command at the current selection.
    pub fn apply_format(&self, ctx: &egui::Context, body: &mut String, command: FormatCommand) {
        let result = apply_format(body, self.selection(ctx), command);
        *body = result.text.clone();
        self.restore_cursor(ctx, &result);
    }

    /// Insert an image reference at the cursor.
    pub fn insert_image_reference(
        &self,
        ctx: &egui::Context,
        body: &mut String,
        alt: &str,
        uri: &str,
    ) {
        let cursor = self.selection(ctx).map(|(start, _)| start);
        let result = insert_image(body, cursor, alt, uri);
        *body = result.text.clone();
        self.restore_cursor(ctx, &result);
    }

    fn restore_cursor(&self, ctx: &egui::Context, result: &FormatResult) {
        let mut state = egui::TextEdit::load_state(ctx, self.id).unwrap_or_default();
        let range = match result.selection {
            Some((start, end)) => CCursorRange::two(CCursor::new(start), CCursor::new(end)),
            None => CCursorRange::one(CCursor::new(result.cursor)),
        };
        state.cursor.set_char_range(Some(range));
        state.store(ctx, self.id);
        ctx.memory_mut(|mem| mem.request_focus(self.id));
    }
}
