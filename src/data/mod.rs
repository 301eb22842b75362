// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a directory of story files and an ordered,
// split corpus:
//
//   story files
//       │
//       ▼
//   StoryLoader       → lists ids, reads one story at a time
//       │
//       ▼
//   DocumentParser    → body lines vs. highlight lines
//       │
//       ▼
//   TextNormalizer    → strips PTB placeholders, filters chars
//       │
//       ▼
//   BudgetTruncator   → crops body tokens and highlight lines
//       │
//       ▼
//   CorpusSplitter    → train / test / valid by position
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads story files from a directory
pub mod loader;

/// Body / highlight state machine
pub mod parser;

/// Placeholder stripping and character filtering
pub mod preprocessor;

/// Token and line budgets
pub mod truncator;

/// Per-document composition and the document loop
pub mod pipeline;

/// Order-based train/test/valid partitioning
pub mod splitter;
