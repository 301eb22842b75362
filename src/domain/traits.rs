// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The corpus builder talks to the outside world through two
// traits so that tests can feed documents from memory and
// capture output without touching the filesystem:
//
//   DocumentSource → lists story ids and reads one story
//   CorpusSink     → receives the entries of one split
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::corpus_entry::{CorpusEntry, SplitLabel};
use crate::domain::document::RawDocument;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Anything that can enumerate and read raw story documents.
///
/// Implementations:
///   - StoryLoader → a directory of `.story` files
///   - (tests) in-memory vectors
pub trait DocumentSource {
    /// List the identifiers of all documents. No ordering is implied.
    fn list_ids(&self) -> Result<Vec<String>>;

    /// Read one document. Blank lines must already be removed.
    fn read(&self, id: &str) -> Result<RawDocument>;
}

// ─── CorpusSink ───────────────────────────────────────────────────────────────
/// Anything that can persist the entries of one corpus split.
///
/// Implementations:
///   - CorpusWriter → one text file per split
pub trait CorpusSink {
    /// Write all entries of `label`, in order, replacing previous output.
    fn write_split(&mut self, label: SplitLabel, entries: &[CorpusEntry]) -> Result<()>;
}
