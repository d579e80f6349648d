//! Main application module for PostForge
//!
//! Implements the eframe App trait: panel layout, keyboard shortcuts, the
//! image upload flows, and the export pipeline from the validate step through
//! the background archive task.

use crate::config::Theme;
use crate::editor::{image_alt_from_file_name, BodyEditor, FormatCommand, TextStats};
use crate::export::{
    aggregate_message, archive_file_name, copy_document_to_clipboard, prepare_bundle,
    validate_for_export, ExportOutcome, ExportRequest, ExportTask,
};
use crate::files::{self, dialogs};
use crate::post::{render_body, render_document};
use crate::state::AppState;
use crate::ui::{
    confirm_close_modal, error_modal, show_document_preview, show_metadata_form, show_toolbar,
    FormAction, ToolbarAction,
};
use chrono::Utc;
use eframe::egui;
use log::{info, warn};
use std::time::Duration;

/// How long status toasts stay visible, in seconds.
const TOAST_DURATION: f64 = 4.0;

/// The main application struct that holds all state and implements eframe::App.
pub struct PostForgeApp {
    /// Central application state
    state: AppState,
    /// The markdown body editor widget
    editor: BodyEditor,
    /// Running export, if any
    export_task: Option<ExportTask>,
    /// Cached featured thumbnail, keyed by the draft's featured generation
    featured_texture: Option<(u64, egui::TextureHandle)>,
    /// Set once the user confirmed discarding the draft
    allow_close: bool,
    /// Application start time, for toast expiry
    start_time: std::time::Instant,
}

impl PostForgeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::new();
        apply_theme(&cc.egui_ctx, state.settings.theme);
        Self {
            state,
            editor: BodyEditor::new(),
            export_task: None,
            featured_texture: None,
            allow_close: false,
            start_time: std::time::Instant::now(),
        }
    }

    fn now(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Document Rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Render the document as it would be exported right now.
    fn current_document(&self) -> String {
        let draft = &self.state.draft;
        let body_html = render_body(&draft.body, &draft.inline_images);
        render_document(
            &draft.meta,
            draft.featured.as_ref().map(|f| f.file_name.as_str()),
            &body_html,
            Utc::now(),
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Image Flows
    // ─────────────────────────────────────────────────────────────────────────

    fn pick_featured_image(&mut self) {
        let Some(path) = dialogs::pick_image_dialog("Choose Featured Image") else {
            return;
        };
        let result = files::read_upload(&path)
            .and_then(|(name, bytes)| self.state.draft.set_featured_image(&name, bytes));
        if let Err(err) = result {
            warn!("Featured image rejected: {}", err);
            self.state.show_error("Featured image rejected", err.to_string());
        }
    }

    fn insert_inline_image(&mut self, ctx: &egui::Context) {
        let Some(path) = dialogs::pick_image_dialog("Insert Image") else {
            return;
        };
        match files::read_upload(&path) {
            Ok((name, bytes)) => {
                // Recording the upload always succeeds; the editor gets a
                // usable preview reference back unconditionally
                let uri = self.state.draft.add_inline_image(&name, bytes);
                let alt = image_alt_from_file_name(&name);
                let mut body = std::mem::take(&mut self.state.draft.body);
                self.editor.insert_image_reference(ctx, &mut body, &alt, &uri);
                self.state.draft.body = body;
            }
            Err(err) => {
                self.state.show_error("Image upload failed", err.to_string());
            }
        }
    }

    /// Lazily (re)build the featured thumbnail texture.
    fn featured_thumbnail(&mut self, ctx: &egui::Context) -> Option<egui::TextureHandle> {
        let featured = match &self.state.draft.featured {
            Some(featured) => featured,
            None => {
                self.featured_texture = None;
                return None;
            }
        };

        let generation = self.state.draft.featured_generation;
        let cached = self
            .featured_texture
            .as_ref()
            .filter(|(gen, _)| *gen == generation);
        if cached.is_none() {
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [featured.width as usize, featured.height as usize],
                &featured.rgba,
            );
            let handle = ctx.load_texture("featured-thumbnail", image, Default::default());
            self.featured_texture = Some((generation, handle));
        }
        self.featured_texture.as_ref().map(|(_, h)| h.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Export Flow
    // ─────────────────────────────────────────────────────────────────────────

    fn trigger_export(&mut self) {
        if self.export_task.is_some() {
            let now = self.now();
            self.state
                .show_toast("An export is already in progress", now, TOAST_DURATION);
            return;
        }

        // Every violated precondition is reported together; nothing partial
        // is ever produced
        let problems = validate_for_export(&self.state.draft);
        if !problems.is_empty() {
            self.state
                .show_error("Cannot export yet", aggregate_message(&problems));
            return;
        }

        let default_name = archive_file_name(&self.state.draft.meta.title);
        let Some(destination) = dialogs::save_archive_dialog(
            self.state.settings.last_export_dir.as_ref(),
            &default_name,
        ) else {
            return;
        };

        match prepare_bundle(&self.state.draft, Utc::now()) {
            Ok(contents) => {
                info!(
                    "Starting export of {} entries to {}",
                    contents.entry_count(),
                    destination.display()
                );
                self.state.remember_export(&destination);
                self.export_task = Some(ExportTask::spawn(ExportRequest {
                    destination,
                    contents,
                }));
            }
            Err(err) => {
                self.state.show_error("Export failed", err.to_string());
            }
        }
    }

    fn poll_export_task(&mut self, ctx: &egui::Context) {
        let Some(task) = &mut self.export_task else {
            return;
        };

        if let Some(outcome) = task.poll() {
            self.export_task = None;
            let now = self.now();
            match outcome {
                ExportOutcome::Completed { path, entries, .. } => {
                    let name = path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("bundle");
                    self.state.show_toast(
                        format!("Exported {} files to {}", entries, name),
                        now,
                        TOAST_DURATION,
                    );
                    self.state.ui.last_export_path = Some(path);
                }
                ExportOutcome::Cancelled => {
                    self.state
                        .show_toast("Export cancelled", now, TOAST_DURATION);
                }
                ExportOutcome::Failed(message) => {
                    self.state.show_error("Export failed", message);
                }
            }
        } else {
            // Keep polling while the worker runs
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn copy_document(&mut self) {
        let document = self.current_document();
        let now = self.now();
        match copy_document_to_clipboard(&document) {
            Ok(()) => self
                .state
                .show_toast("Document copied to clipboard", now, TOAST_DURATION),
            Err(err) => self.state.show_error("Copy failed", err.to_string()),
        }
    }

    fn reveal_last_export(&self) {
        if let Some(path) = &self.state.ui.last_export_path {
            let target = path.parent().unwrap_or(path);
            if let Err(err) = open::that(target) {
                warn!("Failed to reveal {}: {}", target.display(), err);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions and Shortcuts
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_toolbar_action(&mut self, ctx: &egui::Context, action: ToolbarAction) {
        match action {
            ToolbarAction::Format(command) => {
                let mut body = std::mem::take(&mut self.state.draft.body);
                self.editor.apply_format(ctx, &mut body, command);
                self.state.draft.body = body;
            }
            ToolbarAction::InsertImage => self.insert_inline_image(ctx),
            ToolbarAction::TogglePreview => {
                self.state.settings.show_document_preview =
                    !self.state.settings.show_document_preview;
                self.state.mark_settings_dirty();
            }
            ToolbarAction::ToggleTheme => {
                let theme = self.state.settings.theme.toggle();
                self.state.settings.theme = theme;
                apply_theme(ctx, theme);
                let now = self.now();
                self.state
                    .show_toast(format!("{} theme", theme.label()), now, TOAST_DURATION);
                self.state.mark_settings_dirty();
            }
            ToolbarAction::CopyDocument => self.copy_document(),
            ToolbarAction::Export => self.trigger_export(),
        }
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let mut action = None;
        ctx.input_mut(|input| {
            use egui::{Key, Modifiers};
            if input.consume_key(Modifiers::COMMAND, Key::E) {
                action = Some(ToolbarAction::Export);
            } else if input.consume_key(Modifiers::COMMAND | Modifiers::SHIFT, Key::C) {
                action = Some(ToolbarAction::CopyDocument);
            } else if input.consume_key(Modifiers::COMMAND | Modifiers::SHIFT, Key::P) {
                action = Some(ToolbarAction::TogglePreview);
            } else if input.consume_key(Modifiers::COMMAND, Key::B) {
                action = Some(ToolbarAction::Format(FormatCommand::Bold));
            } else if input.consume_key(Modifiers::COMMAND, Key::I) {
                action = Some(ToolbarAction::Format(FormatCommand::Italic));
            } else if input.consume_key(Modifiers::COMMAND, Key::K) {
                action = Some(ToolbarAction::Format(FormatCommand::Link));
            }
        });
        if let Some(action) = action {
            self.handle_toolbar_action(ctx, action);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Window Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    fn track_window_geometry(&mut self, ctx: &egui::Context) {
        let (inner_rect, outer_rect, maximized) = ctx.input(|i| {
            (
                i.viewport().inner_rect,
                i.viewport().outer_rect,
                i.viewport().maximized.unwrap_or(false),
            )
        });

        let window = &mut self.state.settings.window_size;
        let mut changed = false;

        if window.maximized != maximized {
            window.maximized = maximized;
            changed = true;
        }
        if !maximized {
            if let Some(rect) = inner_rect {
                if (rect.width() - window.width).abs() > 1.0
                    || (rect.height() - window.height).abs() > 1.0
                {
                    window.width = rect.width();
                    window.height = rect.height();
                    changed = true;
                }
            }
            if let Some(rect) = outer_rect {
                if window.x != Some(rect.min.x) || window.y != Some(rect.min.y) {
                    window.x = Some(rect.min.x);
                    window.y = Some(rect.min.y);
                    changed = true;
                }
            }
        }

        if changed {
            self.state.mark_settings_dirty();
        }
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.viewport().close_requested())
            && !self.allow_close
            && self.state.draft.has_content()
        {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.state.ui.show_exit_confirm = true;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────

    fn show_modals(&mut self, ctx: &egui::Context) {
        if self.state.ui.show_error_modal {
            let title = self.state.ui.error_title.clone();
            let message = self.state.ui.error_message.clone();
            if error_modal(ctx, &title, &message) {
                self.state.dismiss_error();
            }
        }

        if self.state.ui.show_exit_confirm {
            match confirm_close_modal(ctx) {
                Some(true) => {
                    self.state.ui.show_exit_confirm = false;
                    self.allow_close = true;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                Some(false) => self.state.ui.show_exit_confirm = false,
                None => {}
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Panels
    // ─────────────────────────────────────────────────────────────────────────

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let stats = TextStats::from_text(&self.state.draft.body);
                ui.label(stats.summary());
                ui.separator();
                ui.label(format!(
                    "{} inline image(s)",
                    self.state.draft.inline_images.len()
                ));

                if let Some(toast) = &self.state.ui.toast_message {
                    ui.separator();
                    ui.label(egui::RichText::new(toast).strong());
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.export_task.is_some() {
                        ui.spinner();
                        ui.label("Exporting…");
                        if ui.small_button("Cancel").clicked() {
                            if let Some(task) = &self.export_task {
                                task.cancel();
                            }
                        }
                    } else if self.state.ui.last_export_path.is_some()
                        && ui.small_button("Reveal bundle").clicked()
                    {
                        self.reveal_last_export();
                    }
                });
            });
        });
    }
}

impl eframe::App for PostForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = self.now();
        self.state.update_toast(now);
        self.poll_export_task(ctx);
        self.track_window_geometry(ctx);
        self.handle_close_request(ctx);
        self.handle_keyboard_shortcuts(ctx);

        let exporting = self.export_task.is_some();
        let preview_visible = self.state.settings.show_document_preview;

        let mut toolbar_action = None;
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            toolbar_action = show_toolbar(ui, preview_visible, exporting);
        });
        if let Some(action) = toolbar_action {
            self.handle_toolbar_action(ctx, action);
        }

        self.show_status_bar(ctx);

        if self.state.settings.show_document_preview {
            let document = self.current_document();
            egui::SidePanel::right("document_preview")
                .resizable(true)
                .default_width(460.0)
                .show(ctx, |ui| {
                    show_document_preview(ui, &document);
                });
        }

        let featured_texture = self.featured_thumbnail(ctx);
        let font_size = self.state.settings.editor_font_size;
        let mut form_action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    form_action =
                        show_metadata_form(ui, &mut self.state.draft, featured_texture.as_ref());
                    ui.add_space(8.0);
                    ui.separator();

                    let mut body = std::mem::take(&mut self.state.draft.body);
                    self.editor.show(ui, &mut body, font_size);
                    self.state.draft.body = body;
                });
        });
        match form_action {
            Some(FormAction::PickFeaturedImage) => self.pick_featured_image(),
            Some(FormAction::RemoveFeaturedImage) => self.state.draft.clear_featured_image(),
            None => {}
        }

        self.show_modals(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.shutdown();
    }
}

/// Apply the chosen theme to the egui context.
fn apply_theme(ctx: &egui::Context, theme: Theme) {
    ctx.set_visuals(match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    });
}
