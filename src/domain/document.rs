// ============================================================
// Layer 3 — Story Document Types
// ============================================================
// A RawDocument is exactly what the loader read from one story
// file: its identifier plus the non-blank lines in file order.
//
// A ParsedDocument is the result of classifying those lines into
// the article body and the editor highlights.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// The literal line that opens every highlight block.
pub const SENTINEL: &str = "@highlight";

/// One story file as read from disk.
/// Blank lines are already removed and line endings stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    /// The filename, kept for log messages
    pub id: String,

    /// Non-blank lines in file order
    pub lines: Vec<String>,
}

impl RawDocument {
    /// Create a new RawDocument from an identifier and its lines.
    ///
    /// Example:
    ///   let doc = RawDocument::new("a.story", vec!["Body.", "@highlight", "Gist."]);
    pub fn new<S: Into<String>>(id: impl Into<String>, lines: Vec<S>) -> Self {
        Self {
            id:    id.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// A story split into body lines and highlight lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Lines preceding the first sentinel, in original order
    pub body: Vec<String>,

    /// One line per sentinel, in sentinel order
    pub highlights: Vec<String>,
}
