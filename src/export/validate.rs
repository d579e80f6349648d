//! Export readiness validation
//!
//! Before the bundle is assembled, every precondition is checked and every
//! violation is collected, so the author sees the complete list in one
//! message instead of fixing problems one alert at a time. Any violation
//! aborts the export entirely; no partial bundle is ever produced.

use crate::state::PostDraft;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum excerpt length in characters.
pub const MIN_EXCERPT_LEN: usize = 60;

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

/// Check every export precondition, returning all violations.
///
/// An empty result means the draft is ready to export. The excerpt length
/// rule only fires once an excerpt exists; an empty excerpt reports only the
/// missing-field violation.
pub fn validate_for_export(draft: &PostDraft) -> Vec<String> {
    let mut problems = Vec::new();

    if draft.meta.title.is_empty() {
        problems.push("A title is required".to_string());
    }
    if draft.meta.excerpt.is_empty() {
        problems.push("A description is required".to_string());
    }
    if draft.meta.author.is_empty() {
        problems.push("An author is required".to_string());
    }
    if draft.featured.is_none() {
        problems.push("A featured image is required".to_string());
    }
    if draft.body.trim().is_empty() {
        problems.push("A blog post is required".to_string());
    }
    if !draft.meta.excerpt.is_empty() && draft.meta.excerpt.chars().count() < MIN_EXCERPT_LEN {
        problems.push(format!(
            "Your excerpt must be at least {} characters",
            MIN_EXCERPT_LEN
        ));
    }

    problems
}

/// Join violations into the single aggregated message shown to the author.
pub fn aggregate_message(problems: &[String]) -> String {
    problems
        .iter()
        .map(|p| format!("- {}", p))
        .collect::<Vec<_>>()
        .join("\n")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
