// ============================================================
// Layer 3 — CorpusEntry and SplitLabel
// ============================================================
// A CorpusEntry is one training pair:
//   text    → the cleaned (possibly cropped) story body
//   summary → the cleaned highlight sentence(s)
//
// Example:
//   text:    "Alice went to the store."
//   summary: "Alice visits store."
//
// Reference: Rust Book §5 (Structs), §6 (Enums)

use std::fmt;

use serde::{Deserialize, Serialize};

/// A (text, summary) pair ready to be written to a corpus file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// Source text fed to the summarisation model
    pub text: String,

    /// Target summary the model should produce
    pub summary: String,
}

impl CorpusEntry {
    /// Create a new CorpusEntry
    pub fn new(text: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            text:    text.into(),
            summary: summary.into(),
        }
    }

    /// Build an entry only when both fields carry text.
    /// Returns None for the "empty result" case, which is not an error.
    pub fn non_empty(text: String, summary: String) -> Option<Self> {
        if text.is_empty() || summary.is_empty() {
            None
        } else {
            Some(Self { text, summary })
        }
    }

    /// Whitespace-delimited token count of the text field
    pub fn text_tokens(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Whitespace-delimited token count of the summary field
    pub fn summary_tokens(&self) -> usize {
        self.summary.split_whitespace().count()
    }
}

/// The three corpus partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitLabel {
    Train,
    Test,
    Valid,
}

impl SplitLabel {
    /// All labels in the order files are written
    pub const ALL: [SplitLabel; 3] = [SplitLabel::Train, SplitLabel::Test, SplitLabel::Valid];

    /// Suffix used in the output filename, e.g. `cnn_stories_cropped_train.txt`
    pub fn suffix(self) -> &'static str {
        match self {
            SplitLabel::Train => "train",
            SplitLabel::Test  => "test",
            SplitLabel::Valid => "valid",
        }
    }
}

impl fmt::Display for SplitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
