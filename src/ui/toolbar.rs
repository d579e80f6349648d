//! Toolbar for formatting and export actions
//!
//! A single row of icon buttons: markdown formatting on the left, the
//! export-side actions on the right. The toolbar only reports what was
//! clicked; the application routes the action.

use crate::editor::FormatCommand;
use eframe::egui::{self, Button, RichText, Ui};

/// Formatting commands surfaced as toolbar buttons, in display order.
const FORMAT_BUTTONS: &[FormatCommand] = &[
    FormatCommand::Bold,
    FormatCommand::Italic,
    FormatCommand::InlineCode,
    FormatCommand::Heading(2),
    FormatCommand::Heading(3),
    FormatCommand::BulletList,
    FormatCommand::Blockquote,
    FormatCommand::Link,
];

/// Actions that can be triggered from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarAction {
    /// Apply a markdown formatting command to the body
    Format(FormatCommand),
    /// Pick an image file and insert it inline
    InsertImage,
    /// Toggle the generated-document preview pane
    TogglePreview,
    /// Toggle light/dark theme
    ToggleTheme,
    /// Copy the generated document to the clipboard
    CopyDocument,
    /// Validate and export the bundle
    Export,
}

/// Show the toolbar row; returns the clicked action, if any.
pub fn show_toolbar(ui: &mut Ui, preview_visible: bool, exporting: bool) -> Option<ToolbarAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        for &command in FORMAT_BUTTONS {
            if ui
                .button(command.icon())
                .on_hover_text(command.tooltip())
                .clicked()
            {
                action = Some(ToolbarAction::Format(command));
            }
        }

        ui.separator();

        if ui
            .button("🖼")
            .on_hover_text("Insert image into the post body")
            .clicked()
        {
            action = Some(ToolbarAction::InsertImage);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let export_label = if exporting {
                "Exporting…"
            } else {
                "Export Bundle"
            };
            if ui
                .add_enabled(!exporting, Button::new(RichText::new(export_label).strong()))
                .on_hover_text("Download the post as a static-site-ready archive (Ctrl+E)")
                .clicked()
            {
                action = Some(ToolbarAction::Export);
            }

            if ui
                .button("📋")
                .on_hover_text("Copy the generated document (Ctrl+Shift+C)")
                .clicked()
            {
                action = Some(ToolbarAction::CopyDocument);
            }

            let preview_icon = if preview_visible { "▶" } else { "◀" };
            if ui
                .button(preview_icon)
                .on_hover_text("Toggle document preview (Ctrl+Shift+P)")
                .clicked()
            {
                action = Some(ToolbarAction::TogglePreview);
            }

            if ui.button("🌓").on_hover_text("Toggle theme").clicked() {
                action = Some(ToolbarAction::ToggleTheme);
            }
        });
    });

    action
}
