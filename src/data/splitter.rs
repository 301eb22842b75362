// ============================================================
// Layer 4 — Corpus Splitter
// ============================================================
// Partitions an already-ordered corpus by position:
//
//   first floor(r * N) items → first subset
//   remaining items          → second subset
//
// Applying that twice gives the three corpus files:
//
//   corpus ──(r)──▶ train | rest
//   rest   ──(r)──▶ test  | valid
//
// With r = 0.8 that is roughly 80% / 16% / 4%.
//
// The splitter never shuffles. Membership is decided entirely by
// the order the caller hands in, so a seeded shuffle upstream
// makes the whole split reproducible.
//
// Reference: Rust Book §8 (Vectors)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::CorpusError;

/// Two-way (train/test) or three-way (train/test/valid) output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitMode {
    TwoWay,
    #[default]
    ThreeWay,
}

impl FromStr for SplitMode {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two-way"   => Ok(SplitMode::TwoWay),
            "three-way" => Ok(SplitMode::ThreeWay),
            other       => Err(CorpusError::InvalidConfig(format!(
                "unknown split mode '{other}' (expected two-way or three-way)"
            ))),
        }
    }
}

/// The partitioned corpus. `valid` is empty in two-way mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<T> {
    pub train: Vec<T>,
    pub test:  Vec<T>,
    pub valid: Vec<T>,
}

impl<T> Split<T> {
    /// Total number of items across all subsets
    pub fn len(&self) -> usize {
        self.train.len() + self.test.len() + self.valid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Check that `fraction` lies strictly between 0 and 1.
pub fn validate_fraction(fraction: f64) -> Result<f64, CorpusError> {
    if fraction > 0.0 && fraction < 1.0 {
        Ok(fraction)
    } else {
        Err(CorpusError::InvalidFraction(fraction))
    }
}

/// Split `items` at floor(fraction * N), preserving order.
///
/// # Returns
/// A tuple (first, second) with `first.len() == floor(fraction * N)`
///
/// # Example
/// ```ignore
/// let (train, rest) = split_at_fraction((0..10).collect(), 0.8)?;
/// // train = [0..8], rest = [8, 9]
/// ```
pub fn split_at_fraction<T>(
    mut items: Vec<T>,
    fraction:  f64,
) -> Result<(Vec<T>, Vec<T>), CorpusError> {
    let fraction = validate_fraction(fraction)?;

    let total    = items.len();
    let split_at = ((total as f64) * fraction).floor() as usize;
    let split_at = split_at.min(total);

    // After this: items = [0..split_at], rest = [split_at..total]
    let rest = items.split_off(split_at);

    tracing::debug!(
        "Split {} items at {}: {} / {}",
        total,
        fraction,
        items.len(),
        rest.len(),
    );

    Ok((items, rest))
}

/// Partition a corpus into train/test(/valid) according to `mode`.
pub fn split_corpus<T>(
    items:    Vec<T>,
    fraction: f64,
    mode:     SplitMode,
) -> Result<Split<T>, CorpusError> {
    let (train, rest) = split_at_fraction(items, fraction)?;

    let (test, valid) = match mode {
        SplitMode::TwoWay   => (rest, Vec::new()),
        SplitMode::ThreeWay => split_at_fraction(rest, fraction)?,
    };

    Ok(Split { train, test, valid })
}
