// ============================================================
// Layer 4 — Document Parser
// ============================================================
// Classifies the lines of one story into body and highlights.
//
// Raw story layout:
//
//   First paragraph of the article.
//   Second paragraph of the article.
//   @highlight
//   First highlight sentence.
//   @highlight
//   Second highlight sentence.
//
// The scan is a two-state machine:
//
//   Body ──(@highlight)──▶ Highlights
//
// There is no edge back to Body. In Highlights, only the line
// directly after each sentinel is kept; anything else is dropped.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use crate::domain::document::{ParsedDocument, SENTINEL};
use crate::domain::error::CorpusError;

/// Where the scan currently is inside a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Still reading article paragraphs
    Body,
    /// A sentinel has been seen; body lines are no longer accepted
    Highlights,
}

/// Splits raw story lines into a ParsedDocument.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentParser;

impl DocumentParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one story.
    ///
    /// # Errors
    /// `CorpusError::MalformedDocument` when a sentinel is the last line.
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Result<ParsedDocument, CorpusError> {
        let mut parsed = ParsedDocument::default();
        let mut state  = ScanState::Body;

        for (i, line) in lines.iter().enumerate() {
            let line = line.as_ref();

            if line == SENTINEL {
                state = ScanState::Highlights;
                // The highlight text is the next line, whatever it holds.
                let text = lines
                    .get(i + 1)
                    .ok_or(CorpusError::MalformedDocument { line: i })?;
                parsed.highlights.push(text.as_ref().to_string());
                continue;
            }

            match state {
                ScanState::Body       => parsed.body.push(line.to_string()),
                ScanState::Highlights => {}
            }
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(lines: &[&str]) -> Result<ParsedDocument, CorpusError> {
        DocumentParser::new().parse(lines)
    }

    #[test]
    fn test_no_sentinel_is_all_body() {
        let lines  = ["one", "two", "three"];
        let parsed = parse(&lines).unwrap();
        assert_eq!(parsed.body, vec!["one", "two", "three"]);
        assert!(parsed.highlights.is_empty());
    }

    #[test]
    fn test_single_sentinel_splits_at_k() {
        let lines  = ["a", "b", "@highlight", "gist", "trailing noise"];
        let parsed = parse(&lines).unwrap();
        assert_eq!(parsed.body,       vec!["a", "b"]);
        assert_eq!(parsed.highlights, vec!["gist"]);
    }

    #[test]
    fn test_multiple_sentinels_one_highlight_each() {
        let lines = [
            "body",
            "@highlight", "first",
            "dropped continuation",
            "@highlight", "second",
        ];
        let parsed = parse(&lines).unwrap();
        assert_eq!(parsed.body,       vec!["body"]);
        assert_eq!(parsed.highlights, vec!["first", "second"]);
    }

    #[test]
    fn test_no_return_to_body_after_highlights() {
        let lines  = ["@highlight", "h", "looks like body", "also body?"];
        let parsed = parse(&lines).unwrap();
        assert!(parsed.body.is_empty());
        assert_eq!(parsed.highlights, vec!["h"]);
    }

    #[test]
    fn test_sentinel_as_last_line_is_malformed() {
        let lines = ["body", "@highlight", "ok", "@highlight"];
        assert_eq!(parse(&lines), Err(CorpusError::MalformedDocument { line: 3 }));
    }

    #[test]
    fn test_back_to_back_sentinels() {
        // The second sentinel is captured as text and still opens its own block.
        let lines  = ["body", "@highlight", "@highlight", "real"];
        let parsed = parse(&lines).unwrap();
        assert_eq!(parsed.highlights, vec!["@highlight", "real"]);
    }

    #[test]
    fn test_alice_example() {
        let lines  = ["Alice went to the store.", "@highlight", "Alice visits store."];
        let parsed = parse(&lines).unwrap();
        assert_eq!(parsed.body,       vec!["Alice went to the store."]);
        assert_eq!(parsed.highlights, vec!["Alice visits store."]);
    }

    #[test]
    fn test_empty_document() {
        let lines: [&str; 0] = [];
        assert_eq!(parse(&lines).unwrap(), ParsedDocument::default());
    }
}
