//! Generated-document preview pane
//!
//! Shows the exact text that would land in `index.md` if the author exported
//! right now, regenerated live as the draft changes. Read-only; the form and
//! editor are the only ways to change the post.

use eframe::egui::{self, RichText, ScrollArea, TextEdit, Ui};

/// Show the document preview inside its side panel.
pub fn show_document_preview(ui: &mut Ui, document: &str) {
    ui.label(RichText::new("Generated document").strong());
    ui.label(
        RichText::new("Regenerated live; the date is stamped at export time.")
            .small()
            .weak(),
    );
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // An immutable str buffer renders as selectable, uneditable text
            let mut readonly = document;
            ui.add(
                TextEdit::multiline(&mut readonly)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );
        });
}
