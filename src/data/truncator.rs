// ============================================================
// Layer 4 — Budget Truncator
// ============================================================
// Caps how much of each story reaches the corpus:
//   - body:    the first `story_length` whitespace tokens
//   - summary: the first `summary_lines` highlight lines
//
// Either budget may be None, meaning "keep everything".
//
// `inclusive` reproduces corpora that were cut with an
// off-by-one and therefore kept story_length + 1 tokens.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Token and line budgets for one corpus build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetTruncator {
    pub story_length:  Option<usize>,
    pub summary_lines: Option<usize>,
    pub inclusive:     bool,
}

impl Default for BudgetTruncator {
    fn default() -> Self {
        Self {
            story_length:  Some(100),
            summary_lines: Some(1),
            inclusive:     false,
        }
    }
}

impl BudgetTruncator {
    /// No limits at all
    pub fn unlimited() -> Self {
        Self { story_length: None, summary_lines: None, inclusive: false }
    }

    /// Effective body token cap after applying the inclusive variant
    pub fn body_token_limit(&self) -> Option<usize> {
        self.story_length
            .map(|n| if self.inclusive { n.saturating_add(1) } else { n })
    }

    /// Keep the first `body_token_limit()` tokens and join them with single spaces.
    pub fn truncate_body<S: Borrow<str>>(&self, tokens: &[S]) -> String {
        let keep = self.body_token_limit().unwrap_or(tokens.len()).min(tokens.len());
        tokens[..keep].join(" ")
    }

    /// The leading highlight lines that fit the summary budget.
    pub fn summary_slice<'a, S>(&self, highlights: &'a [S]) -> &'a [S] {
        let keep = self.summary_lines.unwrap_or(highlights.len()).min(highlights.len());
        &highlights[..keep]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("w{i}")).collect()
    }

    #[test]
    fn test_body_never_exceeds_story_length() {
        let t = BudgetTruncator { story_length: Some(5), ..Default::default() };
        for n in [0, 1, 4, 5, 6, 50] {
            let out = t.truncate_body(&words(n));
            assert_eq!(out.split_whitespace().count(), n.min(5));
        }
    }

    #[test]
    fn test_inclusive_keeps_one_extra_token() {
        let t = BudgetTruncator { story_length: Some(3), inclusive: true, ..Default::default() };
        assert_eq!(t.truncate_body(&words(10)), "w0 w1 w2 w3");
    }

    #[test]
    fn test_short_input_kept_whole() {
        let t = BudgetTruncator::default();
        assert_eq!(t.truncate_body(&["only", "two"]), "only two");
    }

    #[test]
    fn test_summary_slice_defaults_to_one_line() {
        let t      = BudgetTruncator::default();
        let lines  = ["first", "second", "third"];
        assert_eq!(t.summary_slice(&lines), &["first"]);
    }

    #[test]
    fn test_unlimited_keeps_everything() {
        let t = BudgetTruncator::unlimited();
        assert_eq!(t.truncate_body(&words(300)).split_whitespace().count(), 300);
        assert_eq!(t.summary_slice(&["a", "b"]).len(), 2);
    }
}
