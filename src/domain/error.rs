// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// Typed failures produced by the pure corpus logic. The outer
// layers wrap these in anyhow::Error with file context.

use thiserror::Error;

/// Errors raised while parsing stories, splitting or re-reading a corpus.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CorpusError {
    /// A sentinel was the last line, so its highlight text is missing.
    /// `line` is the zero-based index of the offending sentinel.
    #[error("malformed document: '@highlight' at line {line} has no following highlight line")]
    MalformedDocument { line: usize },

    #[error("train fraction must lie strictly between 0 and 1, got {0}")]
    InvalidFraction(f64),

    /// A corpus line that cannot be split back into (text, summary).
    /// `line` is one-based, as an editor would show it.
    #[error("malformed corpus record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
