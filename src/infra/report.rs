// ============================================================
// Layer 6 — Build Report and Manifest
// ============================================================
// Counts what happened to every story during a build and saves
// a JSON manifest next to the corpus files:
//
//   {output_dir}/{prefix}_manifest.json
//
// Example manifest:
//   {
//     "seed": 1234,
//     "config": { "story_length": 100, ... },
//     "report": { "considered": 5000, "accepted": 4210, ... }
//   }
//
// Most raw story collections reject a sizeable share of files,
// so the considered/accepted numbers are always shown.

use anyhow::{Context, Result};
use std::{fmt, fs, path::{Path, PathBuf}};
use serde::{Deserialize, Serialize};

use crate::application::build_use_case::BuildConfig;
use crate::data::pipeline::ScanCounts;

/// Per-build counters: the scan over stories plus the split sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    #[serde(flatten)]
    pub scan:  ScanCounts,
    pub train: usize,
    pub test:  usize,
    pub valid: usize,
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; train {}, test {}, valid {}",
            self.scan, self.train, self.test, self.valid,
        )
    }
}

/// Everything needed to reproduce a build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub seed:   u64,
    pub config: BuildConfig,
    pub report: BuildReport,
}

impl Manifest {
    /// Path of the manifest for a given output directory and prefix
    pub fn path_for(dir: &Path, prefix: &str) -> PathBuf {
        dir.join(format!("{prefix}_manifest.json"))
    }

    /// Save as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write manifest '{}'", path.display()))?;
        tracing::debug!("Saved manifest to '{}'", path.display());
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read manifest '{}'", path.display()))?;
        let manifest = serde_json::from_str(&json)
            .with_context(|| format!("Invalid manifest '{}'", path.display()))?;
        Ok(manifest)
    }
}
