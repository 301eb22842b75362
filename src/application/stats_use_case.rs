// ============================================================
// Layer 2 — StatsUseCase
// ============================================================
// Reads a finished corpus file and summarises it, e.g. to check
// that the body budget was respected:
//
//   entries 80000, text tokens mean 98.7 / max 100,
//   summary tokens mean 12.4 / max 31

use anyhow::Result;
use std::{fmt, path::Path};

use crate::domain::corpus_entry::CorpusEntry;
use crate::infra::writer::{read_corpus, OutputFormat};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CorpusStats {
    pub entries:             usize,
    pub mean_text_tokens:    f64,
    pub max_text_tokens:     usize,
    pub mean_summary_tokens: f64,
    pub max_summary_tokens:  usize,
}

impl CorpusStats {
    pub fn from_entries(entries: &[CorpusEntry]) -> Self {
        if entries.is_empty() {
            return Self::default();
        }

        let mut stats = Self { entries: entries.len(), ..Self::default() };
        let mut text_total    = 0usize;
        let mut summary_total = 0usize;

        for e in entries {
            let t = e.text_tokens();
            let s = e.summary_tokens();
            text_total    += t;
            summary_total += s;
            stats.max_text_tokens    = stats.max_text_tokens.max(t);
            stats.max_summary_tokens = stats.max_summary_tokens.max(s);
        }

        stats.mean_text_tokens    = text_total    as f64 / entries.len() as f64;
        stats.mean_summary_tokens = summary_total as f64 / entries.len() as f64;
        stats
    }
}

impl fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entries {}, text tokens mean {:.1} / max {}, summary tokens mean {:.1} / max {}",
            self.entries,
            self.mean_text_tokens,
            self.max_text_tokens,
            self.mean_summary_tokens,
            self.max_summary_tokens,
        )
    }
}

pub struct StatsUseCase;

impl StatsUseCase {
    pub fn execute(path: &Path, format: OutputFormat) -> Result<CorpusStats> {
        let entries = read_corpus(path, format)?;
        Ok(CorpusStats::from_entries(&entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::writer::write_corpus_file;
    use tempfile::tempdir;

    #[test]
    fn test_stats_over_written_file() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("c.txt");
        write_corpus_file(
            &path,
            &[CorpusEntry::new("a b c d", "x"), CorpusEntry::new("a b", "x y z")],
            OutputFormat::Tsv,
        )
        .unwrap();

        let stats = StatsUseCase::execute(&path, OutputFormat::Tsv).unwrap();
        assert_eq!(stats.entries,            2);
        assert_eq!(stats.max_text_tokens,    4);
        assert_eq!(stats.max_summary_tokens, 3);
        assert!((stats.mean_text_tokens    - 3.0).abs() < 1e-9);
        assert!((stats.mean_summary_tokens - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_corpus_stats() {
        assert_eq!(CorpusStats::from_entries(&[]), CorpusStats::default());
    }
}
