// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to the use cases in
// Layer 2. Results are printed here and nowhere else.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{BuildArgs, Commands, ExportArgs, StatsArgs};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(
    name = "story-corpus",
    version,
    about = "Turn @highlight-annotated news stories into tab-separated summarization corpora."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Build(args)  => run_build(args),
            Commands::Export(args) => run_export(args),
            Commands::Stats(args)  => run_stats(args),
        }
    }
}

fn run_build(args: BuildArgs) -> Result<()> {
    use crate::application::build_use_case::BuildUseCase;

    tracing::info!("Building corpus from stories in: {}", args.stories_dir);

    let report = BuildUseCase::new(args.into()).execute()?;
    println!("Build complete: {report}");
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<()> {
    use crate::application::export_use_case::ExportUseCase;

    let report = ExportUseCase::new(args.into()).execute()?;
    println!("Export complete (seed {})", report.seed);
    println!("  stories:      {}", report.stories);
    println!("  test stories: {}", report.holdout);
    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<()> {
    use crate::application::stats_use_case::StatsUseCase;

    let stats = StatsUseCase::execute(Path::new(&args.file), args.format)?;
    println!("{}: {stats}", args.file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::build_use_case::BuildConfig;
    use crate::data::{preprocessor::Charset, splitter::SplitMode};
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_defaults_match_config_defaults() {
        let cli = Cli::try_parse_from(["story-corpus", "build"]).unwrap();
        let Commands::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(BuildConfig::from(args), BuildConfig::default());
    }

    #[test]
    fn test_build_flags() {
        let cli = Cli::try_parse_from([
            "story-corpus", "build",
            "--no-ascii-filter",
            "--charset", "ascii",
            "--split-mode", "two-way",
            "--seed", "5",
        ])
        .unwrap();
        let Commands::Build(args) = cli.command else {
            panic!("expected build");
        };
        let cfg = BuildConfig::from(args);
        assert!(!cfg.ascii_filter_enabled);
        assert_eq!(cfg.charset,    Charset::Ascii);
        assert_eq!(cfg.split_mode, SplitMode::TwoWay);
        assert_eq!(cfg.seed,       Some(5));
    }

    #[test]
    fn test_export_defaults_match_config_defaults() {
        use crate::application::export_use_case::ExportConfig;

        let cli = Cli::try_parse_from(["story-corpus", "export"]).unwrap();
        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(ExportConfig::from(args), ExportConfig::default());
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        assert!(Cli::try_parse_from(["story-corpus", "build", "--on-malformed", "ignore"]).is_err());
    }
}
