// ============================================================
// Layer 4 — Corpus Pipeline
// ============================================================
// Turns one RawDocument into zero or one CorpusEntry:
//
//   RawDocument
//       │
//       ▼
//   DocumentParser     → body lines / highlight lines
//       │
//       ▼
//   TextNormalizer     → clean each line, char-filter tokens
//       │
//       ▼
//   BudgetTruncator    → crop body tokens, keep N highlights
//       │
//       ▼
//   CorpusEntry (only if text and summary are both non-empty)
//
// `collect` drives a whole ordered list of story ids through the
// pipeline, reading one story at a time and dropping it as soon
// as its entry is built.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::data::{
    parser::DocumentParser,
    preprocessor::TextNormalizer,
    truncator::BudgetTruncator,
};
use crate::domain::corpus_entry::CorpusEntry;
use crate::domain::document::{ParsedDocument, RawDocument};
use crate::domain::error::CorpusError;
use crate::domain::traits::DocumentSource;

/// Log a progress line every this many considered stories.
const PROGRESS_EVERY: usize = 1000;

/// What happened to one document.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Accepted(CorpusEntry),
    /// Parsed fine but the body or summary ended up empty
    Empty,
    Malformed(CorpusError),
}

/// What to do with a story whose last line is a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Log a warning and continue with the next story
    #[default]
    Skip,
    /// Stop the whole run
    Abort,
}

impl FromStr for MalformedPolicy {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skip"  => Ok(MalformedPolicy::Skip),
            "abort" => Ok(MalformedPolicy::Abort),
            other   => Err(CorpusError::InvalidConfig(format!(
                "unknown malformed-document policy '{other}' (expected skip or abort)"
            ))),
        }
    }
}

/// How many stories were looked at and what became of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanCounts {
    pub considered: usize,
    pub accepted:   usize,
    /// Parsed, but body or summary was empty
    pub empty:      usize,
    pub malformed:  usize,
}

impl ScanCounts {
    /// Fraction of considered stories that became corpus entries
    pub fn acceptance_rate(&self) -> f64 {
        if self.considered == 0 {
            0.0
        } else {
            self.accepted as f64 / self.considered as f64
        }
    }
}

impl fmt::Display for ScanCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "considered {} stories, accepted {} ({:.1}%), empty {}, malformed {}",
            self.considered,
            self.accepted,
            self.acceptance_rate() * 100.0,
            self.empty,
            self.malformed,
        )
    }
}

/// Per-document processing, stateless across documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorpusPipeline {
    parser:     DocumentParser,
    normalizer: TextNormalizer,
    truncator:  BudgetTruncator,
}

impl CorpusPipeline {
    pub fn new(normalizer: TextNormalizer, truncator: BudgetTruncator) -> Self {
        Self {
            parser: DocumentParser::new(),
            normalizer,
            truncator,
        }
    }

    /// Run one document through parse → normalize → truncate.
    pub fn process(&self, doc: &RawDocument) -> Outcome {
        match self.parser.parse(&doc.lines) {
            Ok(parsed) => match self.entry_for(&parsed) {
                Some(entry) => Outcome::Accepted(entry),
                None        => Outcome::Empty,
            },
            Err(e) => Outcome::Malformed(e),
        }
    }

    /// Build the entry for an already parsed document.
    ///
    /// With no body budget and no char filter the cleaned lines are joined
    /// as they are, keeping any inner whitespace the cleaning left behind.
    /// Otherwise both fields are re-tokenised on whitespace.
    pub fn entry_for(&self, parsed: &ParsedDocument) -> Option<CorpusEntry> {
        let verbatim   = self.truncator.story_length.is_none() && !self.normalizer.filters_chars();
        let body       = self.clean_join(&parsed.body);
        let highlights = self.truncator.summary_slice(&parsed.highlights);
        let summary    = self.clean_join(highlights);

        if verbatim {
            return CorpusEntry::non_empty(body, summary);
        }

        let text    = self.truncator.truncate_body(&self.normalizer.filtered_tokens(&body));
        let summary = self.normalizer.filtered_tokens(&summary).join(" ");

        CorpusEntry::non_empty(text, summary)
    }

    /// Process the stories named by `ids`, in that order, until `max_accepted`
    /// entries have been collected (None = no cap).
    ///
    /// Read failures are returned immediately. Malformed stories follow `policy`.
    pub fn collect<D: DocumentSource + ?Sized>(
        &self,
        source:       &D,
        ids:          &[String],
        policy:       MalformedPolicy,
        max_accepted: Option<usize>,
    ) -> Result<(Vec<CorpusEntry>, ScanCounts)> {
        let mut entries = Vec::new();
        let mut counts  = ScanCounts::default();

        for id in ids {
            if max_accepted.is_some_and(|cap| entries.len() >= cap) {
                tracing::info!("Reached {} accepted stories, stopping", entries.len());
                break;
            }

            let doc = source.read(id)?;
            counts.considered += 1;

            match self.process(&doc) {
                Outcome::Accepted(entry) => {
                    counts.accepted += 1;
                    entries.push(entry);
                }
                Outcome::Empty => counts.empty += 1,
                Outcome::Malformed(e) => {
                    counts.malformed += 1;
                    match policy {
                        MalformedPolicy::Skip => {
                            tracing::warn!("Skipping '{}': {}", id, e);
                        }
                        MalformedPolicy::Abort => {
                            return Err(anyhow::Error::new(e).context(format!("Story '{id}'")));
                        }
                    }
                }
            }

            if counts.considered % PROGRESS_EVERY == 0 {
                tracing::info!(
                    "Processed {}/{} stories, {} accepted",
                    counts.considered,
                    ids.len(),
                    counts.accepted,
                );
            }
        }

        Ok((entries, counts))
    }

    fn clean_join(&self, lines: &[String]) -> String {
        let cleaned: Vec<String> = lines
            .iter()
            .map(|line| self.normalizer.normalize(line))
            .collect();
        cleaned.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::preprocessor::{Charset, QuoteStyle};
    use std::collections::HashMap;

    /// In-memory story collection
    struct MemorySource {
        docs: HashMap<String, Vec<&'static str>>,
    }

    impl MemorySource {
        fn new(docs: &[(&str, Vec<&'static str>)]) -> Self {
            Self {
                docs: docs.iter().map(|(id, lines)| (id.to_string(), lines.clone())).collect(),
            }
        }
    }

    impl DocumentSource for MemorySource {
        fn list_ids(&self) -> Result<Vec<String>> {
            Ok(self.docs.keys().cloned().collect())
        }

        fn read(&self, id: &str) -> Result<RawDocument> {
            let lines = self
                .docs
                .get(id)
                .ok_or_else(|| anyhow::anyhow!("no story '{id}'"))?;
            Ok(RawDocument::new(id, lines.clone()))
        }
    }

    fn mixed_source() -> MemorySource {
        MemorySource::new(&[
            ("good1", vec!["Body one.", "@highlight", "One."]),
            ("empty", vec!["@highlight", "No body."]),
            ("bad",   vec!["Body.", "@highlight"]),
            ("good2", vec!["Body two.", "@highlight", "Two."]),
        ])
    }

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn default_pipeline() -> CorpusPipeline {
        CorpusPipeline::new(
            TextNormalizer::new(QuoteStyle::Tight).with_char_filter(Charset::Legacy),
            BudgetTruncator::default(),
        )
    }

    fn doc(lines: &[&str]) -> RawDocument {
        RawDocument::new("t.story", lines.to_vec())
    }

    #[test]
    fn test_alice_example_is_accepted() {
        let out = default_pipeline().process(&doc(&[
            "Alice went to the store.",
            "@highlight",
            "Alice visits store.",
        ]));
        assert_eq!(
            out,
            Outcome::Accepted(CorpusEntry::new("Alice went to the store.", "Alice visits store."))
        );
    }

    #[test]
    fn test_highlight_only_document_is_dropped() {
        let out = default_pipeline().process(&doc(&["@highlight", "Only a highlight."]));
        assert_eq!(out, Outcome::Empty);
    }

    #[test]
    fn test_body_without_highlight_is_dropped() {
        assert_eq!(default_pipeline().process(&doc(&["Just a body."])), Outcome::Empty);
    }

    #[test]
    fn test_malformed_document_produces_no_entry() {
        let out = default_pipeline().process(&doc(&["Body.", "@highlight"]));
        assert_eq!(out, Outcome::Malformed(CorpusError::MalformedDocument { line: 1 }));
    }

    #[test]
    fn test_normalizes_crops_and_filters() {
        let pipeline = CorpusPipeline::new(
            TextNormalizer::new(QuoteStyle::Tight).with_char_filter(Charset::Legacy),
            BudgetTruncator { story_length: Some(4), ..Default::default() },
        );
        let out = pipeline.process(&doc(&[
            "-LRB- CNN -RRB- -- ``Hello'' said the café owner today.",
            "Second paragraph.",
            "@highlight",
            "Owner greets -LRB- everyone -RRB-",
            "@highlight",
            "Second highlight is beyond the budget",
        ]));
        assert_eq!(
            out,
            Outcome::Accepted(CorpusEntry::new("\"Hello\" said the owner", "Owner greets everyone"))
        );
    }

    #[test]
    fn test_filter_can_empty_the_summary() {
        let out = default_pipeline().process(&doc(&["Body.", "@highlight", "日本"]));
        assert_eq!(out, Outcome::Empty);
    }

    #[test]
    fn test_unlimited_pipeline_keeps_all_highlights() {
        let pipeline = CorpusPipeline::new(
            TextNormalizer::new(QuoteStyle::Mixed),
            BudgetTruncator::unlimited(),
        );
        let out = pipeline.process(&doc(&["Body café.", "@highlight", "one", "@highlight", "two"]));
        assert_eq!(out, Outcome::Accepted(CorpusEntry::new("Body café.", "one two")));
    }

    #[test]
    fn test_unlimited_unfiltered_pipeline_keeps_inner_whitespace() {
        let pipeline = CorpusPipeline::new(
            TextNormalizer::new(QuoteStyle::Mixed),
            BudgetTruncator::unlimited(),
        );
        let out = pipeline.process(&doc(&[
            "He said ``hi''s -LRB- x -RRB- ok",
            "@highlight",
            "H -LRB- 1 -RRB-",
        ]));
        assert_eq!(
            out,
            Outcome::Accepted(CorpusEntry::new("He said \" hi\"s  x  ok", "H  1"))
        );
    }

    #[test]
    fn test_char_filter_still_retokenises_unlimited_pipeline() {
        let pipeline = CorpusPipeline::new(
            TextNormalizer::new(QuoteStyle::Mixed).with_char_filter(Charset::Ascii),
            BudgetTruncator::unlimited(),
        );
        let out = pipeline.process(&doc(&["a -LRB- b -RRB- café", "@highlight", "s"]));
        assert_eq!(out, Outcome::Accepted(CorpusEntry::new("a b", "s")));
    }

    #[test]
    fn test_collect_counts_every_outcome() {
        let source           = mixed_source();
        let order            = ids(&["good1", "empty", "bad", "good2"]);
        let (entries, counts) = default_pipeline()
            .collect(&source, &order, MalformedPolicy::Skip, None)
            .unwrap();

        assert_eq!(
            entries,
            vec![CorpusEntry::new("Body one.", "One."), CorpusEntry::new("Body two.", "Two.")]
        );
        assert_eq!(
            counts,
            ScanCounts { considered: 4, accepted: 2, empty: 1, malformed: 1 }
        );
    }

    #[test]
    fn test_collect_stops_at_cap() {
        let source           = mixed_source();
        let order            = ids(&["good1", "empty", "good2", "bad"]);
        let (entries, counts) = default_pipeline()
            .collect(&source, &order, MalformedPolicy::Abort, Some(1))
            .unwrap();
        assert_eq!(entries.len(),     1);
        assert_eq!(counts.considered, 1);
    }

    #[test]
    fn test_collect_abort_policy_fails_on_malformed() {
        let source = mixed_source();
        let order  = ids(&["good1", "bad", "good2"]);
        let err    = default_pipeline()
            .collect(&source, &order, MalformedPolicy::Abort, None)
            .unwrap_err();
        assert!(err.to_string().contains("bad"));
        assert!(matches!(
            err.downcast_ref::<CorpusError>(),
            Some(CorpusError::MalformedDocument { line: 1 })
        ));
    }

    #[test]
    fn test_collect_propagates_read_errors() {
        let source = mixed_source();
        let order  = ids(&["good1", "missing"]);
        assert!(default_pipeline()
            .collect(&source, &order, MalformedPolicy::Skip, None)
            .is_err());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("abort".parse::<MalformedPolicy>().unwrap(), MalformedPolicy::Abort);
        assert!("ignore".parse::<MalformedPolicy>().is_err());
    }
}
