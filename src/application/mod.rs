// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data and infra layers for each command.
//
// Rules for this layer:
//   - No parsing or text cleaning here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination and configuration

// Cropped train/test/valid corpus build
pub mod build_use_case;

// Uncropped stories + test stories export
pub mod export_use_case;

// Summary statistics over a written corpus
pub mod stats_use_case;
