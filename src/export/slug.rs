//! Download name derivation
//!
//! The exported archive is offered under a URL-safe name derived from the
//! post title, so the author can drop the extracted folder straight into a
//! site's content directory.

// ─────────────────────────────────────────────────────────────────────────────
// Slug Derivation
// ─────────────────────────────────────────────────────────────────────────────

/// Derive the download slug from a post title.
///
/// Lower-cases the title, turns spaces into hyphens, and strips every
/// remaining character outside `[0-9a-z-]`.
pub fn download_slug(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|ch| if ch == ' ' { '-' } else { ch })
        .filter(|ch| matches!(ch, '0'..='9' | 'a'..='z' | '-'))
        .collect()
}

/// Suggested filename for the exported archive.
///
/// Falls back to a generic name when the title slugs down to nothing
/// (an all-punctuation title, say).
pub fn archive_file_name(title: &str) -> String {
    let slug = download_slug(title);
    if slug.is_empty() {
        "post.zip".to_string()
    } else {
        format!("{}.zip", slug)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_lowercases_and_hyphenates() {
        assert_eq!(download_slug("My Great Post!"), "my-great-post");
    }

    #[test]
    fn test_slug_strips_punctuation() {
        assert_eq!(download_slug("Rust & egui: a tour"), "rust--egui-a-tour");
        assert_eq!(download_slug("100% (Done)"), "100-done");
    }

    #[test]
    fn test_slug_plain_title() {
        assert_eq!(download_slug("hello"), "hello");
        assert_eq!(download_slug("Hello World"), "hello-world");
    }

    #[test]
    fn test_slug_non_ascii_stripped() {
        assert_eq!(download_slug("Café Täles"), "caf-tles");
    }

    #[test]
    fn test_slug_empty_result() {
        assert_eq!(download_slug("!!!"), "");
        assert_eq!(download_slug(""), "");
    }

    #[test]
    fn test_archive_file_name() {
        assert_eq!(archive_file_name("My Great Post!"), "my-great-post.zip");
        assert_eq!(archive_file_name("???"), "post.zip");
    }
}
