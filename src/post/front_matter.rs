//! Front-matter rendering
//!
//! Renders post metadata into the `---`-delimited front-matter block that
//! static-site generators consume, and assembles the complete exported
//! document (front matter + HTML body).
//!
//! String values are encoded as YAML double-quoted scalars rather than pasted
//! into a template, so titles containing quotes, backslashes, or newlines
//! survive the round trip into the generator.

use crate::post::PostMetadata;
use chrono::{DateTime, SecondsFormat, Utc};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Filename of the rendered document inside the exported bundle.
pub const DOCUMENT_FILE_NAME: &str = "index.md";

/// Layout tag emitted for every post; the target site knows exactly one.
const LAYOUT: &str = "post";

/// Indentation for tag list entries.
const TAG_INDENT: &str = "    ";

// ─────────────────────────────────────────────────────────────────────────────
// YAML Scalar Encoding
// ─────────────────────────────────────────────────────────────────────────────

/// Encode a string as a YAML double-quoted scalar.
///
/// Escapes backslashes, double quotes, and the control characters that can
/// realistically reach us from a text field (newline, carriage return, tab).
fn yaml_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Render the front-matter block for a post.
///
/// The field order is fixed: title, excerpt, author, date, draft, layout,
/// featuredImage, tags. `featured_file_name` becomes an empty string when no
/// featured image is set. The timestamp is supplied by the caller so the
/// output is deterministic for a fixed clock.
pub fn render_front_matter(
    meta: &PostMetadata,
    featured_file_name: Option<&str>,
    timestamp: DateTime<Utc>,
) -> String {
    let mut block = String::new();
    block.push_str("---\n");
    block.push_str(&format!("title: {}\n", yaml_quote(&meta.title)));
    block.push_str(&format!("excerpt: {}\n", yaml_quote(&meta.excerpt)));
    block.push_str(&format!("author: {}\n", yaml_quote(&meta.author)));
    block.push_str(&format!(
        "date: {}\n",
        yaml_quote(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
    ));
    block.push_str("draft: false\n");
    block.push_str(&format!("layout: {}\n", yaml_quote(LAYOUT)));
    block.push_str(&format!(
        "featuredImage: {}\n",
        yaml_quote(featured_file_name.unwrap_or(""))
    ));
    block.push_str("tags:\n");
    for tag in &meta.tags {
        block.push_str(TAG_INDENT);
        block.push_str("- ");
        block.push_str(tag);
        block.push('\n');
    }
    block.push_str("---");
    block
}

/// Render the complete export document: front matter, a blank line, then the
/// already-serialized HTML body.
pub fn render_document(
    meta: &PostMetadata,
    featured_file_name: Option<&str>,
    body_html: &str,
    timestamp: DateTime<Utc>,
) -> String {
    format!(
        "{}\n\n{}",
        render_front_matter(meta, featured_file_name, timestamp),
        body_html
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    fn sample_meta() -> PostMetadata {
        PostMetadata {
            title: "Hello World".to_string(),
            excerpt: "A sufficiently long excerpt sentence.".to_string(),
            author: "Jane Doe".to_string(),
            tags: vec!["x".to_string(), "y".to_string()],
        }
    }

    #[test]
    fn test_yaml_quote_plain() {
        assert_eq!(yaml_quote("Hello"), "\"Hello\"");
        assert_eq!(yaml_quote(""), "\"\"");
    }

    #[test]
    fn test_yaml_quote_escapes() {
        assert_eq!(yaml_quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(yaml_quote("a\\b"), "\"a\\\\b\"");
        assert_eq!(yaml_quote("line\nbreak"), "\"line\\nbreak\"");
        assert_eq!(yaml_quote("tab\there"), "\"tab\\there\"");
    }

    #[test]
    fn test_front_matter_fixed_fields() {
        let fm = render_front_matter(&sample_meta(), Some("hero.png"), fixed_clock());

        assert!(fm.starts_with("---\n"));
        assert!(fm.ends_with("---"));
        assert!(fm.contains("title: \"Hello World\"\n"));
        assert!(fm.contains("excerpt: \"A sufficiently long excerpt sentence.\"\n"));
        assert!(fm.contains("author: \"Jane Doe\"\n"));
        assert!(fm.contains("date: \"2024-01-15T10:30:00.000Z\"\n"));
        assert!(fm.contains("draft: false\n"));
        assert!(fm.contains("layout: \"post\"\n"));
        assert!(fm.contains("featuredImage: \"hero.png\"\n"));
    }

    #[test]
    fn test_front_matter_tag_block_order() {
        let fm = render_front_matter(&sample_meta(), None, fixed_clock());
        let x_pos = fm.find("    - x").expect("tag x missing");
        let y_pos = fm.find("    - y").expect("tag y missing");
        assert!(x_pos < y_pos, "tags out of order");
    }

    #[test]
    fn test_front_matter_no_featured_image_is_empty_string() {
        let fm = render_front_matter(&sample_meta(), None, fixed_clock());
        assert!(fm.contains("featuredImage: \"\"\n"));
    }

    #[test]
    fn test_front_matter_no_tags() {
        let meta = PostMetadata {
            tags: Vec::new(),
            ..sample_meta()
        };
        let fm = render_front_matter(&meta, None, fixed_clock());
        assert!(fm.contains("tags:\n---"));
        assert!(!fm.contains("- "));
    }

    #[test]
    fn test_front_matter_deterministic_for_fixed_clock() {
        let a = render_front_matter(&sample_meta(), Some("hero.png"), fixed_clock());
        let b = render_front_matter(&sample_meta(), Some("hero.png"), fixed_clock());
        assert_eq!(a, b);
    }

    #[test]
    fn test_front_matter_parses_as_yaml() {
        // The encoder claims YAML-grammar output; hold it to that even for
        // hostile field values.
        let meta = PostMetadata {
            title: "He said \"hi\" \\ bye".to_string(),
            excerpt: "Multi\nline".to_string(),
            author: "Ann O'Nym".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
        };
        let fm = render_front_matter(&meta, Some("img.png"), fixed_clock());
        let inner = fm
            .strip_prefix("---\n")
            .and_then(|rest| rest.strip_suffix("---"))
            .expect("delimiters missing");

        let parsed: serde_yaml::Value = serde_yaml::from_str(inner).expect("invalid YAML");
        assert_eq!(
            parsed["title"].as_str(),
            Some("He said \"hi\" \\ bye"),
            "title did not round-trip"
        );
        assert_eq!(parsed["excerpt"].as_str(), Some("Multi\nline"));
        assert_eq!(parsed["featuredImage"].as_str(), Some("img.png"));
        assert_eq!(parsed["draft"].as_bool(), Some(false));
        let tags: Vec<&str> = parsed["tags"]
            .as_sequence()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(tags, vec!["a", "b"]);
    }

    #[test]
    fn test_render_document_layout() {
        let doc = render_document(
            &sample_meta(),
            Some("hero.png"),
            "<p>Body</p>",
            fixed_clock(),
        );
        assert!(doc.contains("---\n\n<p>Body</p>"));
        assert!(doc.starts_with("---\n"));
    }
}
