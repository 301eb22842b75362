// ============================================================
// Layer 2 — ExportUseCase
// ============================================================
// Writes the uncropped corpus: full bodies and every highlight,
// no character filter and no re-tokenising. Lines are cleaned of
// -LRB-/-RRB- only (the CNN lead-ins stay), quotes use the mixed
// style, and the cleaned lines are joined with single spaces, so
// the files match the historical cnn_stories.txt byte for byte.
//
//   shuffled listing
//     ├── first `limit` stories   → {output_dir}/cnn_stories.txt
//     └── last `holdout` stories  → {output_dir}/cnn_test_stories.txt
//
// `limit` counts stories considered, not stories accepted. When
// the directory holds fewer than limit + holdout files the two
// selections overlap.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    loader::StoryLoader,
    pipeline::{CorpusPipeline, MalformedPolicy, ScanCounts},
    preprocessor::{QuoteStyle, TextNormalizer},
    truncator::BudgetTruncator,
};
use crate::domain::traits::DocumentSource;
use crate::infra::{
    shuffle::Shuffler,
    writer::{write_corpus_file, OutputFormat},
};

pub const STORIES_FILE:      &str = "cnn_stories.txt";
pub const TEST_STORIES_FILE: &str = "cnn_test_stories.txt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub stories_dir: String,
    pub output_dir:  String,
    pub limit:       usize,
    pub holdout:     usize,
    pub quote_style: QuoteStyle,
    pub seed:        Option<u64>,
    pub format:      OutputFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            stories_dir: "cnn".to_string(),
            output_dir:  ".".to_string(),
            limit:       30_000,
            holdout:     10,
            quote_style: QuoteStyle::Mixed,
            seed:        None,
            format:      OutputFormat::Tsv,
        }
    }
}

/// Counts for the two exported files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub seed:    u64,
    pub stories: ScanCounts,
    pub holdout: ScanCounts,
}

pub struct ExportUseCase {
    config: ExportConfig,
}

impl ExportUseCase {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<ExportReport> {
        let source  = StoryLoader::new(&self.config.stories_dir);
        let mut rng = Shuffler::new(self.config.seed);
        self.run(&source, &mut rng)
    }

    pub fn run<D: DocumentSource + ?Sized>(&self, source: &D, rng: &mut Shuffler) -> Result<ExportReport> {
        let cfg = &self.config;

        let mut ids = source.list_ids()?;
        ids.sort_unstable();
        rng.shuffle(&mut ids);
        tracing::info!("Number of stories: {} (seed {})", ids.len(), rng.seed());

        let pipeline = CorpusPipeline::new(
            TextNormalizer::new(cfg.quote_style).keeping_lead_ins(),
            BudgetTruncator::unlimited(),
        );

        let head = &ids[..cfg.limit.min(ids.len())];
        let tail = &ids[ids.len().saturating_sub(cfg.holdout)..];

        let output_dir = PathBuf::from(&cfg.output_dir);
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("Cannot create output directory '{}'", output_dir.display()))?;

        let (entries, stories) = pipeline.collect(source, head, MalformedPolicy::Skip, None)?;
        write_corpus_file(&output_dir.join(STORIES_FILE), &entries, cfg.format)?;
        tracing::info!("Stories file: {}", stories);

        let (entries, holdout) = pipeline.collect(source, tail, MalformedPolicy::Skip, None)?;
        write_corpus_file(&output_dir.join(TEST_STORIES_FILE), &entries, cfg.format)?;
        tracing::info!("Test stories file: {}", holdout);

        Ok(ExportReport { seed: rng.seed(), stories, holdout })
    }
}
