// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
//   writer.rs  → corpus file format (tsv / escaped), reading back
//   shuffle.rs → seeded ChaCha8 shuffling of the story listing
//   report.rs  → build counters and the JSON manifest

/// Corpus file writer and reader
pub mod writer;

/// Reproducible shuffling
pub mod shuffle;

/// Build report and manifest persistence
pub mod report;
