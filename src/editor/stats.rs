//! Text statistics for the status bar
//!
//! Word and character counts for the body, calculated in a single pass.

// ─────────────────────────────────────────────────────────────────────────────
// TextStats
// ─────────────────────────────────────────────────────────────────────────────

/// Text statistics for a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Number of words (sequences of non-whitespace characters)
    pub words: usize,
    /// Number of characters including whitespace
    pub characters: usize,
    /// Number of lines (an empty document has one)
    pub lines: usize,
}

impl TextStats {
    /// Calculate statistics from the given text in one pass.
    pub fn from_text(text: &str) -> Self {
        let mut stats = Self {
            words: 0,
            characters: 0,
            lines: 1,
        };

        let mut in_word = false;
        for ch in text.chars() {
            stats.characters += 1;
            if ch == '\n' {
                stats.lines += 1;
            }
            if ch.is_whitespace() {
                in_word = false;
            } else if !in_word {
                in_word = true;
                stats.words += 1;
            }
        }

        stats
    }

    /// One-line summary for the status bar.
    pub fn summary(&self) -> String {
        format!("{} words · {} characters", self.words, self.characters)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let stats = TextStats::from_text("");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.characters, 0);
        assert_eq!(stats.lines, 1);
    }

    #[test]
    fn test_word_counting() {
        let stats = TextStats::from_text("Hello, World!");
        assert_eq!(stats.words, 2);
        assert_eq!(stats.characters, 13);
    }

    #[test]
    fn test_multiple_spaces_between_words() {
        let stats = TextStats::from_text("one   two\t\tthree");
        assert_eq!(stats.words, 3);
    }

    #[test]
    fn test_line_counting() {
        let stats = TextStats::from_text("a\nb\nc");
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.words, 3);
    }

    #[test]
    fn test_unicode_characters_counted_once() {
        let stats = TextStats::from_text("héllo wörld 🎉");
        assert_eq!(stats.words, 3);
        assert_eq!(stats.characters, 13);
    }

    #[test]
    fn test_summary_format() {
        let stats = TextStats::from_text("two words");
        assert_eq!(stats.summary(), "2 words · 9 characters");
    }
}
