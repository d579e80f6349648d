//! Post metadata form
//!
//! Title, excerpt, author, and tags map straight onto the draft; the tag
//! field is re-parsed on every keystroke. The featured image row shows the
//! accepted thumbnail and the dimension requirement.

use crate::export::MIN_EXCERPT_LEN;
use crate::images::{REQUIRED_FEATURED_HEIGHT, REQUIRED_FEATURED_WIDTH};
use crate::state::PostDraft;
use eframe::egui::{self, Color32, RichText, TextEdit, Ui};

/// Displayed thumbnail width; the featured aspect ratio is fixed at 2:1.
const THUMBNAIL_WIDTH: f32 = 320.0;

/// Actions the form can request from the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Open the featured image picker
    PickFeaturedImage,
    /// Remove the current featured image
    RemoveFeaturedImage,
}

/// Show the metadata form; returns a requested action, if any.
pub fn show_metadata_form(
    ui: &mut Ui,
    draft: &mut PostDraft,
    featured_texture: Option<&egui::TextureHandle>,
) -> Option<FormAction> {
    let mut action = None;

    ui.add(
        TextEdit::singleline(&mut draft.meta.title)
            .hint_text("Title")
            .desired_width(f32::INFINITY),
    );

    ui.add(
        TextEdit::multiline(&mut draft.meta.excerpt)
            .hint_text(format!(
                "Short description of your blog post. It must be a complete sentence \
                 and at least {} characters",
                MIN_EXCERPT_LEN
            ))
            .desired_rows(2)
            .desired_width(f32::INFINITY),
    );
    excerpt_counter(ui, &draft.meta.excerpt);

    ui.add(
        TextEdit::singleline(&mut draft.meta.author)
            .hint_text("Your name (eg. John Smith)")
            .desired_width(f32::INFINITY),
    );

    // The tag field edits a copy so the parsed list can be refreshed on change
    let mut tags_input = draft.tags_input.clone();
    let tags_response = ui.add(
        TextEdit::singleline(&mut tags_input)
            .hint_text("Enter tags for the blog post separated by commas")
            .desired_width(f32::INFINITY),
    );
    if tags_response.changed() {
        draft.set_tags_input(&tags_input);
    }
    if !draft.meta.tags.is_empty() {
        ui.horizontal_wrapped(|ui| {
            for tag in &draft.meta.tags {
                ui.label(RichText::new(format!("#{}", tag)).weak());
            }
        });
    }

    ui.add_space(8.0);
    featured_image_section(ui, draft, featured_texture, &mut action);

    action
}

/// Live character counter under the excerpt, tinted while below the minimum.
fn excerpt_counter(ui: &mut Ui, excerpt: &str) {
    let count = excerpt.chars().count();
    if count == 0 {
        return;
    }
    let text = format!("{}/{} characters", count, MIN_EXCERPT_LEN);
    if count < MIN_EXCERPT_LEN {
        ui.label(RichText::new(text).small().color(Color32::from_rgb(200, 80, 60)));
    } else {
        ui.label(RichText::new(text).small().weak());
    }
}

fn featured_image_section(
    ui: &mut Ui,
    draft: &PostDraft,
    texture: Option<&egui::TextureHandle>,
    action: &mut Option<FormAction>,
) {
    match (&draft.featured, texture) {
        (Some(featured), Some(texture)) => {
            let size = egui::vec2(THUMBNAIL_WIDTH, THUMBNAIL_WIDTH / 2.0);
            ui.add(egui::Image::new((texture.id(), size)));
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{} ({}×{})",
                        featured.file_name, featured.width, featured.height
                    ))
                    .small(),
                );
                if ui.small_button("Replace…").clicked() {
                    *action = Some(FormAction::PickFeaturedImage);
                }
                if ui.small_button("Remove").clicked() {
                    *action = Some(FormAction::RemoveFeaturedImage);
                }
            });
        }
        _ => {
            ui.label(
                RichText::new(format!(
                    "Upload an image that is {}px by {}px to use as the blog post's \
                     featured image.",
                    REQUIRED_FEATURED_WIDTH, REQUIRED_FEATURED_HEIGHT
                ))
                .small()
                .weak(),
            );
            if ui.button("Choose featured image…").clicked() {
                *action = Some(FormAction::PickFeaturedImage);
            }
        }
    }
}
