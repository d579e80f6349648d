//! Modal dialogs
//!
//! The error modal doubles as the export-validation alert: every violated
//! precondition arrives as its own line in the message. The close
//! confirmation guards a draft that only lives in memory.

use eframe::egui::{self, Align2, Color32, Context, Key, RichText};

/// Show a blocking error dialog. Returns `true` when dismissed.
pub fn error_modal(ctx: &Context, title: &str, message: &str) -> bool {
    let mut dismissed = false;

    egui::Window::new(RichText::new(title).strong())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(420.0);
            for line in message.lines() {
                ui.label(line);
            }
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    // Escape and Enter both dismiss; there is only one way out of an alert
    if ctx.input(|i| i.key_pressed(Key::Escape) || i.key_pressed(Key::Enter)) {
        dismissed = true;
    }

    dismissed
}

/// Show the close confirmation. Returns `Some(true)` to close anyway,
/// `Some(false)` to keep editing, `None` while undecided.
pub fn confirm_close_modal(ctx: &Context) -> Option<bool> {
    let mut decision = None;

    egui::Window::new(RichText::new("Discard draft?").strong())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(380.0);
            ui.label("Your draft only lives in this window. Changes will be lost if you exit.");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("Discard and exit").color(Color32::from_rgb(200, 80, 60)))
                    .clicked()
                {
                    decision = Some(true);
                }
                if ui.button("Keep editing").clicked() {
                    decision = Some(false);
                }
            });
        });

    if ctx.input(|i| i.key_pressed(Key::Escape)) {
        decision = Some(false);
    }

    decision
}
