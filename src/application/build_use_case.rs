// ============================================================
// Layer 2 — BuildUseCase
// ============================================================
// Builds the cropped train/test/valid corpora in order:
//
//   Step 1: List story files            (Layer 4 - data)
//   Step 2: Shuffle the listing         (Layer 6 - infra)
//   Step 3: Parse, clean, crop stories  (Layer 4 - data)
//   Step 4: Split by position           (Layer 4 - data)
//   Step 5: Write one file per split    (Layer 6 - infra)
//   Step 6: Save the manifest           (Layer 6 - infra)
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::{
    loader::StoryLoader,
    pipeline::{CorpusPipeline, MalformedPolicy},
    preprocessor::{Charset, QuoteStyle, TextNormalizer},
    splitter::{split_corpus, validate_fraction, SplitMode},
    truncator::BudgetTruncator,
};
use crate::domain::corpus_entry::SplitLabel;
use crate::domain::error::CorpusError;
use crate::domain::traits::{CorpusSink, DocumentSource};
use crate::infra::{
    report::{BuildReport, Manifest},
    shuffle::Shuffler,
    writer::{CorpusWriter, OutputFormat},
};

// ─── Build Configuration ─────────────────────────────────────────────────────
// Every knob of a corpus build. Serialisable so it can be stored
// in the manifest next to the corpus files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub stories_dir:          String,
    pub output_dir:           String,
    pub output_prefix:        String,
    pub max_documents:        usize,
    pub story_length:         usize,
    pub inclusive_budget:     bool,
    pub num_summary_lines:    usize,
    pub ascii_filter_enabled: bool,
    pub charset:              Charset,
    pub quote_style:          QuoteStyle,
    pub train_fraction:       f64,
    pub split_mode:           SplitMode,
    pub seed:                 Option<u64>,
    pub on_malformed:         MalformedPolicy,
    pub format:               OutputFormat,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            stories_dir:          "cnn".to_string(),
            output_dir:           ".".to_string(),
            output_prefix:        "cnn_stories_cropped".to_string(),
            max_documents:        100_000,
            story_length:         100,
            inclusive_budget:     false,
            num_summary_lines:    1,
            ascii_filter_enabled: true,
            charset:              Charset::Legacy,
            quote_style:          QuoteStyle::Tight,
            train_fraction:       0.8,
            split_mode:           SplitMode::ThreeWay,
            seed:                 None,
            on_malformed:         MalformedPolicy::Skip,
            format:               OutputFormat::Tsv,
        }
    }
}

impl BuildConfig {
    /// Reject settings that cannot produce a meaningful corpus.
    pub fn validate(&self) -> Result<(), CorpusError> {
        validate_fraction(self.train_fraction)?;
        if self.max_documents == 0 {
            return Err(CorpusError::InvalidConfig("max_documents must be at least 1".into()));
        }
        if self.story_length == 0 {
            return Err(CorpusError::InvalidConfig("story_length must be at least 1".into()));
        }
        if self.num_summary_lines == 0 {
            return Err(CorpusError::InvalidConfig("num_summary_lines must be at least 1".into()));
        }
        if self.output_prefix.is_empty() {
            return Err(CorpusError::InvalidConfig("output_prefix must not be empty".into()));
        }
        Ok(())
    }

    /// The per-document pipeline described by this config
    pub fn pipeline(&self) -> CorpusPipeline {
        let mut normalizer = TextNormalizer::new(self.quote_style);
        if self.ascii_filter_enabled {
            normalizer = normalizer.with_char_filter(self.charset);
        }

        let truncator = BudgetTruncator {
            story_length:  Some(self.story_length),
            summary_lines: Some(self.num_summary_lines),
            inclusive:     self.inclusive_budget,
        };

        CorpusPipeline::new(normalizer, truncator)
    }
}

// ─── BuildUseCase ─────────────────────────────────────────────────────────────
pub struct BuildUseCase {
    config: BuildConfig,
}

impl BuildUseCase {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Run the build against the configured directories and save the manifest.
    pub fn execute(&self) -> Result<BuildReport> {
        let cfg = &self.config;
        cfg.validate()?;

        let source     = StoryLoader::new(&cfg.stories_dir);
        let mut writer = CorpusWriter::new(&cfg.output_dir, &cfg.output_prefix, cfg.format)?;
        let mut rng    = Shuffler::new(cfg.seed);

        let report = self.run(&source, &mut writer, &mut rng)?;

        let manifest = Manifest {
            seed:   rng.seed(),
            config: cfg.clone(),
            report,
        };
        manifest.save(&Manifest::path_for(Path::new(&cfg.output_dir), &cfg.output_prefix))?;

        Ok(report)
    }

    /// The build itself, over any source and sink.
    pub fn run<D, K>(&self, source: &D, sink: &mut K, rng: &mut Shuffler) -> Result<BuildReport>
    where
        D: DocumentSource + ?Sized,
        K: CorpusSink + ?Sized,
    {
        let cfg = &self.config;
        cfg.validate()?;

        // ── Step 1–2: List and shuffle ───────────────────────────────────────
        let mut ids = source.list_ids()?;
        // Directory order is filesystem dependent, so fix it before shuffling
        ids.sort_unstable();
        rng.shuffle(&mut ids);
        tracing::info!("Number of stories: {} (seed {})", ids.len(), rng.seed());

        // ── Step 3: Parse / clean / crop ─────────────────────────────────────
        let (corpus, scan) = cfg.pipeline().collect(
            source,
            &ids,
            cfg.on_malformed,
            Some(cfg.max_documents),
        )?;
        tracing::info!("{}", scan);

        // ── Step 4: Split ────────────────────────────────────────────────────
        let split = split_corpus(corpus, cfg.train_fraction, cfg.split_mode)?;

        let report = BuildReport {
            scan,
            train: split.train.len(),
            test:  split.test.len(),
            valid: split.valid.len(),
        };

        // ── Step 5: Write ────────────────────────────────────────────────────
        sink.write_split(SplitLabel::Train, &split.train)?;
        sink.write_split(SplitLabel::Test,  &split.test)?;
        if cfg.split_mode == SplitMode::ThreeWay {
            sink.write_split(SplitLabel::Valid, &split.valid)?;
        }

        Ok(report)
    }
}
