// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing the corpus:
// what a raw story is, what a parsed story is, what a corpus
// entry is, and which collaborators feed and drain the pipeline.
//
// Rules for this layer:
//   - NO file I/O
//   - NO clap or serde_json plumbing
//   - Only data types, traits and the domain error enum
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Raw and parsed story documents
pub mod document;

// A (text, summary) training pair and the split labels
pub mod corpus_entry;

// Errors raised by the parsing/splitting/reading logic
pub mod error;

// Collaborator abstractions (document source, corpus sink)
pub mod traits;
