//! Body serialization and image source rewriting
//!
//! The editor owns the body as markdown; the exported document carries it as
//! HTML. After serialization, every transient preview URI the editor inserted
//! for an inline image is rewritten to the image's real filename, so the
//! document references files that actually exist next to it in the bundle.

use crate::images::InlineImage;
use comrak::{markdown_to_html, Options};

// ─────────────────────────────────────────────────────────────────────────────
// Markdown Serialization
// ─────────────────────────────────────────────────────────────────────────────

/// Serialize the markdown body to HTML.
pub fn markdown_to_html_body(markdown: &str) -> String {
    let mut options = Options::default();

    // Enable common extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;

    // Allow raw HTML the author pasted in
    options.render.unsafe_ = true;

    markdown_to_html(markdown, &options)
}

// ─────────────────────────────────────────────────────────────────────────────
// Image Source Rewriting
// ─────────────────────────────────────────────────────────────────────────────

/// Replace every occurrence of each inline image's preview URI with its
/// stored filename.
///
/// Preview URIs are only meaningful inside the running app; the exported
/// document must reference the bundle filenames instead. Replacement is
/// total: an image referenced more than once is rewritten everywhere.
pub fn rewrite_image_sources(html: &str, images: &[InlineImage]) -> String {
    let mut rewritten = html.to_string();
    for image in images {
        rewritten = rewritten.replace(&image.preview_uri, &image.file_name);
    }
    rewritten
}

/// Serialize the body and rewrite preview URIs in one step.
pub fn render_body(markdown: &str, images: &[InlineImage]) -> String {
    rewrite_image_sources(&markdown_to_html_body(markdown), images)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn inline(file_name: &str, uri: &str) -> InlineImage {
        InlineImage {
            file_name: file_name.to_string(),
            bytes: vec![0u8; 4],
            preview_uri: uri.to_string(),
        }
    }

    #[test]
    fn test_markdown_to_html_body() {
        let html = markdown_to_html_body("# Hello\n\nWorld");
        assert!(html.contains("<h1"));
        assert!(html.contains("Hello"));
        assert!(html.contains("<p>World</p>"));
    }

    #[test]
    fn test_markdown_image_becomes_img_tag() {
        let html = markdown_to_html_body("![a cat](bytes://inline-image-0)");
        assert!(html.contains("<img"));
        assert!(html.contains("src=\"bytes://inline-image-0\""));
        assert!(html.contains("alt=\"a cat\""));
    }

    #[test]
    fn test_rewrite_replaces_every_occurrence() {
        let images = vec![inline("cat.png", "bytes://inline-image-0")];
        let html = "<img src=\"bytes://inline-image-0\"> and again \
                    <img src=\"bytes://inline-image-0\">";

        let rewritten = rewrite_image_sources(html, &images);

        assert!(!rewritten.contains("bytes://inline-image-0"));
        assert_eq!(rewritten.matches("cat.png").count(), 2);
    }

    #[test]
    fn test_rewrite_handles_multiple_images() {
        let images = vec![
            inline("cat.png", "bytes://inline-image-0"),
            inline("dog.jpg", "bytes://inline-image-1"),
        ];
        let html = "<img src=\"bytes://inline-image-1\"><img src=\"bytes://inline-image-0\">";

        let rewritten = rewrite_image_sources(html, &images);

        assert!(rewritten.contains("src=\"cat.png\""));
        assert!(rewritten.contains("src=\"dog.jpg\""));
        assert!(!rewritten.contains("bytes://"));
    }

    #[test]
    fn test_rewrite_no_images_is_identity() {
        let html = "<p>nothing to do</p>";
        assert_eq!(rewrite_image_sources(html, &[]), html);
    }

    #[test]
    fn test_render_body_end_to_end() {
        let images = vec![inline("walk.png", "bytes://inline-image-3")];
        let body = render_body("Look:\n\n![john walking](bytes://inline-image-3)", &images);

        assert!(body.contains("src=\"walk.png\""));
        assert!(body.contains("alt=\"john walking\""));
        assert!(!body.contains("bytes://"));
    }

    #[test]
    fn test_unreferenced_image_leaves_body_untouched() {
        // Uploading an image without referencing it must not corrupt the body
        let images = vec![inline("unused.png", "bytes://inline-image-9")];
        let body = render_body("Just text.", &images);
        assert!(body.contains("Just text."));
        assert!(!body.contains("unused.png"));
    }
}
