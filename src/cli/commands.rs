// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands:
//   build  → cropped train/test/valid corpora
//   export → uncropped stories file plus a small test file
//   stats  → token statistics of a written corpus file
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::build_use_case::BuildConfig;
use crate::application::export_use_case::ExportConfig;
use crate::data::{
    pipeline::MalformedPolicy,
    preprocessor::{Charset, QuoteStyle},
    splitter::SplitMode,
};
use crate::infra::writer::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build cropped train/test/valid corpora from a directory of stories
    Build(BuildArgs),

    /// Export full stories and a handful of held-out test stories
    Export(ExportArgs),

    /// Print token statistics for a corpus file
    Stats(StatsArgs),
}

/// All arguments for the `build` command.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Directory containing the raw .story files
    #[arg(long, default_value = "cnn")]
    pub stories_dir: String,

    /// Directory the corpus files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: String,

    /// Output files are named {prefix}_train.txt, {prefix}_test.txt, ...
    #[arg(long, default_value = "cnn_stories_cropped")]
    pub output_prefix: String,

    /// Stop once this many stories have been accepted
    #[arg(long, default_value_t = 100_000)]
    pub max_documents: usize,

    /// Body tokens kept per story
    #[arg(long, default_value_t = 100)]
    pub story_length: usize,

    /// Keep story_length + 1 body tokens, matching older corpora
    #[arg(long)]
    pub inclusive_budget: bool,

    /// Highlight lines joined into each summary
    #[arg(long, default_value_t = 1)]
    pub num_summary_lines: usize,

    /// Keep tokens with characters outside the charset
    #[arg(long)]
    pub no_ascii_filter: bool,

    /// Character filter threshold: legacy (< 138) or ascii (< 128)
    #[arg(long, default_value = "legacy")]
    pub charset: Charset,

    /// Replacement for `` and '': tight ("), spaced (" ) or mixed ('' → ", `` → " )
    #[arg(long, default_value = "tight")]
    pub quote_style: QuoteStyle,

    /// Fraction kept by each train/rest cut
    #[arg(long, default_value_t = 0.8)]
    pub train_fraction: f64,

    /// two-way (train/test) or three-way (train/test/valid)
    #[arg(long, default_value = "three-way")]
    pub split_mode: SplitMode,

    /// Shuffle seed; a random one is drawn and logged when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// skip or abort on a story ending in @highlight
    #[arg(long, default_value = "skip")]
    pub on_malformed: MalformedPolicy,

    /// tsv (historical) or escaped (tabs/newlines escaped)
    #[arg(long, default_value = "tsv")]
    pub format: OutputFormat,
}

/// Convert CLI BuildArgs into the application-layer BuildConfig.
impl From<BuildArgs> for BuildConfig {
    fn from(a: BuildArgs) -> Self {
        BuildConfig {
            stories_dir:          a.stories_dir,
            output_dir:           a.output_dir,
            output_prefix:        a.output_prefix,
            max_documents:        a.max_documents,
            story_length:         a.story_length,
            inclusive_budget:     a.inclusive_budget,
            num_summary_lines:    a.num_summary_lines,
            ascii_filter_enabled: !a.no_ascii_filter,
            charset:              a.charset,
            quote_style:          a.quote_style,
            train_fraction:       a.train_fraction,
            split_mode:           a.split_mode,
            seed:                 a.seed,
            on_malformed:         a.on_malformed,
            format:               a.format,
        }
    }
}

/// All arguments for the `export` command
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(long, default_value = "cnn")]
    pub stories_dir: String,

    #[arg(long, default_value = ".")]
    pub output_dir: String,

    /// Stories considered for cnn_stories.txt
    #[arg(long, default_value_t = 30_000)]
    pub limit: usize,

    /// Stories taken from the end of the shuffled listing for cnn_test_stories.txt
    #[arg(long, default_value_t = 10)]
    pub holdout: usize,

    /// Replacement for `` and ''; mixed matches the historical stories files
    #[arg(long, default_value = "mixed")]
    pub quote_style: QuoteStyle,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "tsv")]
    pub format: OutputFormat,
}

impl From<ExportArgs> for ExportConfig {
    fn from(a: ExportArgs) -> Self {
        ExportConfig {
            stories_dir: a.stories_dir,
            output_dir:  a.output_dir,
            limit:       a.limit,
            holdout:     a.holdout,
            quote_style: a.quote_style,
            seed:        a.seed,
            format:      a.format,
        }
    }
}

/// Arguments for the `stats` command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Corpus file to inspect
    pub file: String,

    #[arg(long, default_value = "tsv")]
    pub format: OutputFormat,
}
