//! Post metadata model
//!
//! The metadata fields the author fills in before exporting: title, excerpt,
//! author name, and tags. The export timestamp is never stored here; it is
//! derived at export time so drafts stay timeless until they ship.

// ─────────────────────────────────────────────────────────────────────────────
// PostMetadata
// ─────────────────────────────────────────────────────────────────────────────

/// Metadata for the post being composed.
///
/// All fields are stored raw, exactly as typed. Quoting and escaping for the
/// exported front matter happens in the front-matter encoder, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostMetadata {
    /// Post title, also the source of the download slug
    pub title: String,
    /// Short description; advisory minimum of 60 characters at export time
    pub excerpt: String,
    /// Author display name
    pub author: String,
    /// Parsed tags, in the order the author typed them
    pub tags: Vec<String>,
}

impl PostMetadata {
    /// Create metadata with a pre-filled author (from settings).
    pub fn with_author(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            ..Self::default()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tag Parsing
// ─────────────────────────────────────────────────────────────────────────────

/// Parse a comma-separated tag input into an ordered tag list.
///
/// Segments are trimmed and blank segments are dropped; the relative order of
/// the remaining tags is preserved. Called on every change to the tag field.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_basic() {
        assert_eq!(parse_tags("rust,egui"), vec!["rust", "egui"]);
    }

    #[test]
    fn test_parse_tags_trims_and_drops_blanks() {
        // The canonical case: blanks and padding disappear, order survives
        assert_eq!(parse_tags("a, ,b,,c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_tags_empty_input() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags("   ").is_empty());
        assert!(parse_tags(",,,").is_empty());
    }

    #[test]
    fn test_parse_tags_preserves_order() {
        assert_eq!(
            parse_tags("zebra, apple, mango"),
            vec!["zebra", "apple", "mango"]
        );
    }

    #[test]
    fn test_parse_tags_keeps_inner_whitespace() {
        // Multi-word tags are legal; only the edges are trimmed
        assert_eq!(
            parse_tags("static site, rust "),
            vec!["static site", "rust"]
        );
    }

    #[test]
    fn test_parse_tags_never_yields_empty_strings() {
        for input in ["", ",", " , ", "a,,b", ", a ,", "x, ,y, ,z"] {
            assert!(
                parse_tags(input).iter().all(|t| !t.is_empty()),
                "input {:?} produced an empty tag",
                input
            );
        }
    }

    #[test]
    fn test_with_author() {
        let meta = PostMetadata::with_author("Jane Doe");
        assert_eq!(meta.author, "Jane Doe");
        assert!(meta.title.is_empty());
        assert!(meta.tags.is_empty());
    }
}
