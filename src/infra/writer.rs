// ============================================================
// Layer 6 — Corpus Writer
// ============================================================
// Serialises corpus entries, one record per line:
//
//   <text> TAB <summary> NEWLINE
//
// Two formats are supported:
//
//   tsv      → the historical format, written byte for byte.
//              A tab or newline inside a field corrupts the record.
//   escaped  → same layout, but backslash, tab, CR and LF inside
//              fields are written as \\ \t \r \n.
//
// Files are always UTF-8 and are created or truncated. A failure
// mid-write leaves a partial file behind and returns the error.
//
// File naming convention for a build:
//   {output_dir}/
//     {prefix}_train.txt
//     {prefix}_test.txt
//     {prefix}_valid.txt
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};
use serde::{Deserialize, Serialize};

use crate::domain::corpus_entry::{CorpusEntry, SplitLabel};
use crate::domain::error::CorpusError;
use crate::domain::traits::CorpusSink;

/// On-disk record encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tsv,
    Escaped,
}

impl FromStr for OutputFormat {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tsv"     => Ok(OutputFormat::Tsv),
            "escaped" => Ok(OutputFormat::Escaped),
            other     => Err(CorpusError::InvalidConfig(format!(
                "unknown output format '{other}' (expected tsv or escaped)"
            ))),
        }
    }
}

/// Writes each split to `{dir}/{prefix}_{split}.txt`.
pub struct CorpusWriter {
    dir:    PathBuf,
    prefix: String,
    format: OutputFormat,
}

impl CorpusWriter {
    /// Create a new CorpusWriter, creating `dir` if needed.
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, format: OutputFormat) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir, prefix: prefix.into(), format })
    }

    /// Path of the file holding `label`
    pub fn split_path(&self, label: SplitLabel) -> PathBuf {
        self.dir.join(format!("{}_{}.txt", self.prefix, label.suffix()))
    }
}

impl CorpusSink for CorpusWriter {
    fn write_split(&mut self, label: SplitLabel, entries: &[CorpusEntry]) -> Result<()> {
        let path = self.split_path(label);
        write_corpus_file(&path, entries, self.format)?;
        tracing::info!("Wrote {} {} entries to '{}'", entries.len(), label, path.display());
        Ok(())
    }
}

/// Write `entries` to `path`, one record per line, replacing any old file.
pub fn write_corpus_file(path: &Path, entries: &[CorpusEntry], format: OutputFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create corpus file '{}'", path.display()))?;
    let mut out = BufWriter::new(file);

    for entry in entries {
        write_record(&mut out, entry, format)
            .with_context(|| format!("Write to '{}' failed", path.display()))?;
    }

    out.flush()
        .with_context(|| format!("Cannot flush corpus file '{}'", path.display()))?;
    Ok(())
}

/// Write a single record, including its trailing newline.
pub fn write_record<W: Write>(out: &mut W, entry: &CorpusEntry, format: OutputFormat) -> std::io::Result<()> {
    match format {
        OutputFormat::Tsv => {
            writeln!(out, "{}\t{}", entry.text, entry.summary)
        }
        OutputFormat::Escaped => {
            writeln!(out, "{}\t{}", escape_field(&entry.text), escape_field(&entry.summary))
        }
    }
}

/// Read a corpus file back into entries.
pub fn read_corpus(path: &Path, format: OutputFormat) -> Result<Vec<CorpusEntry>> {
    let file = File::open(path)
        .with_context(|| format!("Cannot open corpus file '{}'", path.display()))?;

    let mut entries = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("Cannot read '{}'", path.display()))?;
        let entry = parse_record(&line, i + 1, format)
            .with_context(|| format!("Bad record in '{}'", path.display()))?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Split one line on its first tab into (text, summary).
/// `line_no` is one-based and only used for error messages.
pub fn parse_record(line: &str, line_no: usize, format: OutputFormat) -> Result<CorpusEntry, CorpusError> {
    let (text, summary) = line.split_once('\t').ok_or_else(|| CorpusError::MalformedRecord {
        line:   line_no,
        reason: "no tab separator".to_string(),
    })?;

    match format {
        OutputFormat::Tsv     => Ok(CorpusEntry::new(text, summary)),
        OutputFormat::Escaped => Ok(CorpusEntry::new(
            unescape_field(text, line_no)?,
            unescape_field(summary, line_no)?,
        )),
    }
}

fn escape_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c    => out.push(c),
        }
    }
    out
}

fn unescape_field(field: &str, line_no: usize) -> Result<String, CorpusError> {
    let mut out   = String::with_capacity(field.len());
    let mut chars = field.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('t')  => out.push('\t'),
            Some('n')  => out.push('\n'),
            Some('r')  => out.push('\r'),
            other      => {
                return Err(CorpusError::MalformedRecord {
                    line:   line_no,
                    reason: format!("invalid escape sequence {:?}", other.map(|c| format!("\\{c}"))),
                })
            }
        }
    }
    Ok(out)
}
