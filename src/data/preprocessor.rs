// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Cleans story lines before they are joined into corpus fields.
//
// The raw stories are PTB-tokenised, so punctuation shows up as
// placeholder tokens:
//   -LRB- / -RRB-   → ( and )
//   ``    / ''      → opening and closing double quotes
//
// Cleaning steps (applied in order, literal substring matches):
//   1. Remove the "(CNN) --" and "(CNN Student News) --" lead-ins
//   2. Remove any remaining -LRB- / -RRB- tokens
//   3. Replace `` and '' with a double quote (see QuoteStyle)
//   4. Trim leading/trailing whitespace
//
// The steps are repeated until the text stops changing, so
// normalize(normalize(x)) == normalize(x) for every input.
//
// An optional character filter drops whole whitespace tokens
// that contain a character at or above a code-point limit.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::CorpusError;

/// Lead-ins removed before the generic parenthesis tokens,
/// longest first so the Student News variant is matched whole.
const LEAD_INS: [&str; 2] = [
    "-LRB- CNN Student News -RRB- --",
    "-LRB- CNN -RRB- --",
];

const PAREN_TOKENS: [&str; 2] = ["-LRB-", "-RRB-"];

const QUOTE_TOKENS: [&str; 2] = ["''", "``"];

/// What a doubled-quote placeholder becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// Both become `"` with no trailing space
    #[default]
    Tight,
    /// Both become `" ` with a trailing space
    Spaced,
    /// `''` becomes `"`, ``` `` ``` becomes `" `, as in the uncropped
    /// stories files
    Mixed,
}

impl QuoteStyle {
    fn replacement(self, token: &str) -> &'static str {
        match (self, token) {
            (QuoteStyle::Tight, _)     => "\"",
            (QuoteStyle::Spaced, _)    => "\" ",
            (QuoteStyle::Mixed, "``")  => "\" ",
            (QuoteStyle::Mixed, _)     => "\"",
        }
    }
}

impl FromStr for QuoteStyle {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tight"  => Ok(QuoteStyle::Tight),
            "spaced" => Ok(QuoteStyle::Spaced),
            "mixed"  => Ok(QuoteStyle::Mixed),
            other    => Err(CorpusError::InvalidConfig(format!(
                "unknown quote style '{other}' (expected tight, spaced or mixed)"
            ))),
        }
    }
}

/// Which characters survive the token filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Code points below 138. Reproduces previously published corpora,
    /// which let a handful of C1 control characters through.
    #[default]
    Legacy,
    /// Strict 7-bit ASCII, code points below 128.
    Ascii,
}

impl Charset {
    /// Exclusive upper bound on accepted code points
    pub fn limit(self) -> u32 {
        match self {
            Charset::Legacy => 138,
            Charset::Ascii  => 128,
        }
    }

    /// True when every character of `token` is below the limit
    pub fn admits(self, token: &str) -> bool {
        let limit = self.limit();
        token.chars().all(|c| (c as u32) < limit)
    }
}

impl FromStr for Charset {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(Charset::Legacy),
            "ascii"  => Ok(Charset::Ascii),
            other    => Err(CorpusError::InvalidConfig(format!(
                "unknown charset '{other}' (expected legacy or ascii)"
            ))),
        }
    }
}

/// Cleans story text. Cheap to copy; holds only policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextNormalizer {
    quote_style: QuoteStyle,
    /// None disables the character filter entirely
    char_filter: Option<Charset>,
    /// Leave "(CNN) --" lead-ins in place; only the paren tokens go
    keep_lead_ins: bool,
}

impl TextNormalizer {
    /// Create a normalizer with the given quote policy and no char filter
    pub fn new(quote_style: QuoteStyle) -> Self {
        Self { quote_style, char_filter: None, keep_lead_ins: false }
    }

    /// Skip step 1, so "-LRB- CNN -RRB- --" becomes "CNN  --"
    pub fn keeping_lead_ins(mut self) -> Self {
        self.keep_lead_ins = true;
        self
    }

    /// Enable the token filter for `charset`
    pub fn with_char_filter(mut self, charset: Charset) -> Self {
        self.char_filter = Some(charset);
        self
    }

    /// True when `filtered_tokens` can drop tokens
    pub fn filters_chars(&self) -> bool {
        self.char_filter.is_some()
    }

    /// Clean one line (or an already joined text).
    pub fn normalize(&self, text: &str) -> String {
        let mut current = self.apply_rules(text);
        loop {
            let next = self.apply_rules(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    /// Split `text` on whitespace and keep the tokens the char filter admits.
    /// With the filter disabled every token is kept.
    pub fn filtered_tokens<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let filter = self.char_filter;
        text.split_whitespace()
            .filter(|token| filter.map_or(true, |charset| charset.admits(token)))
            .collect()
    }

    fn apply_rules(&self, text: &str) -> String {
        let mut out = text.to_string();

        let lead_ins: &[&str] = if self.keep_lead_ins { &[] } else { &LEAD_INS };
        for pattern in lead_ins.iter().chain(PAREN_TOKENS.iter()) {
            if out.contains(pattern) {
                out = out.replace(pattern, "");
            }
        }

        for pattern in QUOTE_TOKENS {
            if out.contains(pattern) {
                out = out.replace(pattern, self.quote_style.replacement(pattern));
            }
        }

        out.trim().to_string()
    }
}
