//! Markdown formatting operations
//!
//! Pure text transforms behind the toolbar buttons. All positions are
//! character indices (the editor widget's cursor unit), converted to byte
//! offsets internally for slicing.

// ─────────────────────────────────────────────────────────────────────────────
// Format Command Enum
// ─────────────────────────────────────────────────────────────────────────────

/// Formatting commands that can be applied to the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCommand {
    /// Bold text (**text**)
    Bold,
    /// Italic text (*text*)
    Italic,
    /// Inline code (`code`)
    InlineCode,
    /// Heading level 1-6, toggled per line
    Heading(u8),
    /// Bullet list, toggled per line
    BulletList,
    /// Blockquote, toggled per line
    Blockquote,
    /// Link ([text](url))
    Link,
}

impl FormatCommand {
    /// Toolbar icon for this command.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Bold => "𝐁",
            Self::Italic => "𝐼",
            Self::InlineCode => "</>",
            Self::Heading(2) => "H2",
            Self::Heading(3) => "H3",
            Self::Heading(_) => "H",
            Self::BulletList => "\u{2022}", // bullet •
            Self::Blockquote => "\u{275D}", // heavy quotation mark ❝
            Self::Link => "🔗",
        }
    }

    /// Tooltip text for this command.
    pub fn tooltip(&self) -> String {
        match self {
            Self::Bold => "Bold (Ctrl+B)".to_string(),
            Self::Italic => "Italic (Ctrl+I)".to_string(),
            Self::InlineCode => "Inline Code".to_string(),
            Self::Heading(n) => format!("Heading {}", n),
            Self::BulletList => "Bullet List".to_string(),
            Self::Blockquote => "Blockquote".to_string(),
            Self::Link => "Insert Link (Ctrl+K)".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Format Result
// ─────────────────────────────────────────────────────────────────────────────

/// Result of applying a formatting command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatResult {
    /// The new text after formatting
    pub text: String,
    /// New cursor position (character index)
    pub cursor: usize,
    /// New selection range in characters, if one should be active
    pub selection: Option<(usize, usize)>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Index Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Convert a character index to a byte offset, clamping past-the-end values.
fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

fn char_count(text: &str) -> usize {
    text.chars().count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Applying Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Apply a formatting command at the given character selection.
///
/// `selection` is `(start, end)` in characters; `None` or an empty range
/// means "at the cursor", where `start` doubles as the cursor position.
pub fn apply_format(
    text: &str,
    selection: Option<(usize, usize)>,
    command: FormatCommand,
) -> FormatResult {
    let total = char_count(text);
    let (start, end) = match selection {
        Some((a, b)) => (a.min(b).min(total), a.max(b).min(total)),
        None => (total, total),
    };

    match command {
        FormatCommand::Bold => wrap_inline(text, start, end, "**", "bold text"),
        FormatCommand::Italic => wrap_inline(text, start, end, "*", "italic text"),
        FormatCommand::InlineCode => wrap_inline(text, start, end, "`", "code"),
        FormatCommand::Link => insert_link(text, start, end),
        FormatCommand::Heading(level) => {
            toggle_line_prefix(text, start, end, &heading_prefix(level))
        }
        FormatCommand::BulletList => toggle_line_prefix(text, start, end, "- "),
        FormatCommand::Blockquote => toggle_line_prefix(text, start, end, "> "),
    }
}

/// Wrap the selection in an inline marker, or insert a wrapped placeholder.
fn wrap_inline(text: &str, start: usize, end: usize, marker: &str, placeholder: &str) -> FormatResult {
    let marker_chars = char_count(marker);
    let (start_b, end_b) = (byte_index(text, start), byte_index(text, end));

    if start < end {
        let wrapped = format!(
            "{}{}{}{}{}",
            &text[..start_b],
            marker,
            &text[start_b..end_b],
            marker,
            &text[end_b..]
        );
        FormatResult {
            text: wrapped,
            cursor: end + 2 * marker_chars,
            selection: Some((start + marker_chars, end + marker_chars)),
        }
    } else {
        let placeholder_chars = char_count(placeholder);
        let inserted = format!(
            "{}{}{}{}{}",
            &text[..start_b],
            marker,
            placeholder,
            marker,
            &text[start_b..]
        );
        FormatResult {
            text: inserted,
            cursor: start + marker_chars + placeholder_chars,
            selection: Some((start + marker_chars, start + marker_chars + placeholder_chars)),
        }
    }
}

/// Turn the selection into link text, or insert a link skeleton.
fn insert_link(text: &str, start: usize, end: usize) -> FormatResult {
    let (start_b, end_b) = (byte_index(text, start), byte_index(text, end));

    if start < end {
        // [selection](url) with "url" selected for immediate replacement
        let linked = format!(
            "{}[{}]({}){}",
            &text[..start_b],
            &text[start_b..end_b],
            "url",
            &text[end_b..]
        );
        let url_start = end + 3; // "[" + selection + "]("
        FormatResult {
            text: linked,
            cursor: url_start + 3,
            selection: Some((url_start, url_start + 3)),
        }
    } else {
        let inserted = format!("{}[link text](url){}", &text[..start_b], &text[start_b..]);
        FormatResult {
            text: inserted,
            cursor: start + 10,
            selection: Some((start + 1, start + 10)),
        }
    }
}

fn heading_prefix(level: u8) -> String {
    let level = level.clamp(1, 6) as usize;
    format!("{} ", "#".repeat(level))
}

/// Toggle a prefix on every line the selection touches.
fn toggle_line_prefix(text: &str, start: usize, end: usize, prefix: &str) -> FormatResult {
    // Character offsets of every line start
    let mut line_starts = vec![0usize];
    for (i, ch) in text.chars().enumerate() {
        if ch == '\n' {
            line_starts.push(i + 1);
        }
    }

    let line_of = |pos: usize| -> usize {
        match line_starts.binary_search(&pos) {
            Ok(i) => i,
            Err(i) => i - 1,
        }
    };
    let (first_line, last_line) = (line_of(start), line_of(end));

    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if i >= first_line && i <= last_line {
            if let Some(stripped) = line.strip_prefix(prefix) {
                out.push(stripped.to_string());
            } else if prefix.starts_with('#') {
                // Switching heading levels replaces the old marker
                let stripped = line.trim_start_matches('#');
                let stripped = stripped.strip_prefix(' ').unwrap_or(stripped);
                out.push(format!("{}{}", prefix, stripped));
            } else {
                out.push(format!("{}{}", prefix, line));
            }
        } else {
            out.push((*line).to_string());
        }
    }

    let new_text = out.join("\n");
    // Land the cursor at the end of the last touched line
    let cursor = out
        .iter()
        .take(last_line + 1)
        .map(|l| char_count(l) + 1)
        .sum::<usize>()
        .saturating_sub(1);

    FormatResult {
        text: new_text,
        cursor,
        selection: None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Image Insertion
// ─────────────────────────────────────────────────────────────────────────────

/// Insert an image reference at the cursor (or at the end of the body).
pub fn insert_image(text: &str, cursor: Option<usize>, alt: &str, uri: &str) -> FormatResult {
    let total = char_count(text);
    let at = cursor.unwrap_or(total).min(total);
    let at_b = byte_index(text, at);

    let reference = format!("![{}]({})", alt, uri);
    let inserted = format!("{}{}{}", &text[..at_b], reference, &text[at_b..]);
    FormatResult {
        text: inserted,
        cursor: at + char_count(&reference),
        selection: None,
    }
}

/// Derive alt text from an image filename: drop the extension, then read
/// hyphens and underscores as word separators.
pub fn image_alt_from_file_name(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _ext)| stem)
        .unwrap_or(file_name);
    stem.replace(['-', '_'], " ").trim().to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Inline Wrapping Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_bold_wraps_selection() {
        let result = apply_format("Hello world", Some((0, 5)), FormatCommand::Bold);
        assert_eq!(result.text, "**Hello** world");
        assert_eq!(result.selection, Some((2, 7)));
        assert_eq!(result.cursor, 9);
    }

    #[test]
    fn test_italic_wraps_selection() {
        let result = apply_format("Hello world", Some((6, 11)), FormatCommand::Italic);
        assert_eq!(result.text, "Hello *world*");
    }

    #[test]
    fn test_bold_without_selection_inserts_placeholder() {
        let result = apply_format("", None, FormatCommand::Bold);
        assert_eq!(result.text, "**bold text**");
        assert_eq!(result.selection, Some((2, 11)));
    }

    #[test]
    fn test_inline_code_mid_text() {
        let result = apply_format("run it now", Some((4, 6)), FormatCommand::InlineCode);
        assert_eq!(result.text, "run `it` now");
    }

    #[test]
    fn test_wrap_with_multibyte_chars_before_selection() {
        // "Héllo wörld": selecting "wörld" (chars 6..11)
        let result = apply_format("Héllo wörld", Some((6, 11)), FormatCommand::Bold);
        assert_eq!(result.text, "Héllo **wörld**");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Link Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_link_from_selection() {
        let result = apply_format("see the docs here", Some((8, 12)), FormatCommand::Link);
        assert_eq!(result.text, "see the [docs](url) here");
        // "url" is selected for immediate replacement
        assert_eq!(result.selection, Some((15, 18)));
    }

    #[test]
    fn test_link_without_selection() {
        let result = apply_format("", None, FormatCommand::Link);
        assert_eq!(result.text, "[link text](url)");
        assert_eq!(result.selection, Some((1, 10)));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Line Prefix Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_heading_added_to_cursor_line() {
        let result = apply_format("Title line", Some((3, 3)), FormatCommand::Heading(2));
        assert_eq!(result.text, "## Title line");
    }

    #[test]
    fn test_heading_toggles_off() {
        let result = apply_format("## Title line", Some((5, 5)), FormatCommand::Heading(2));
        assert_eq!(result.text, "Title line");
    }

    #[test]
    fn test_heading_level_switch_replaces_marker() {
        let result = apply_format("## Title", Some((4, 4)), FormatCommand::Heading(3));
        assert_eq!(result.text, "### Title");
    }

    #[test]
    fn test_bullet_list_over_multiple_lines() {
        let result = apply_format("one\ntwo\nthree", Some((0, 9)), FormatCommand::BulletList);
        assert_eq!(result.text, "- one\n- two\n- three");
    }

    #[test]
    fn test_bullet_toggle_off() {
        let result = apply_format("- one\n- two", Some((0, 11)), FormatCommand::BulletList);
        assert_eq!(result.text, "one\ntwo");
    }

    #[test]
    fn test_blockquote_only_touches_selected_lines() {
        let result = apply_format("a\nb\nc", Some((2, 2)), FormatCommand::Blockquote);
        assert_eq!(result.text, "a\n> b\nc");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Image Insertion Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_insert_image_at_cursor() {
        let result = insert_image("before  after", Some(7), "a cat", "bytes://inline-image-0");
        assert_eq!(result.text, "before ![a cat](bytes://inline-image-0) after");
        assert_eq!(result.cursor, 7 + "![a cat](bytes://inline-image-0)".chars().count());
    }

    #[test]
    fn test_insert_image_without_cursor_appends() {
        let result = insert_image("text", None, "x", "u");
        assert_eq!(result.text, "text![x](u)");
    }

    #[test]
    fn test_image_alt_from_file_name() {
        assert_eq!(
            image_alt_from_file_name("john-going-for-a-walk.png"),
            "john going for a walk"
        );
        assert_eq!(image_alt_from_file_name("snake_case.jpeg"), "snake case");
        assert_eq!(image_alt_from_file_name("noext"), "noext");
    }
}
