//! Unicode normalization of composed alias text.
//!
//! Reduces arbitrary text to lowercase tokens joined by ASCII hyphens. The
//! passes run in a fixed order; reordering them changes the output (for
//! example, punctuation must become spaces before edges are trimmed, and
//! symbols must be deleted before whitespace runs are collapsed).

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Which set of filtering passes to apply after NFKC and lowercasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationPolicy {
    /// Word-separating punctuation becomes a hyphen; symbols, marks, control
    /// characters and remaining punctuation are deleted.
    #[default]
    Standard,

    /// All punctuation is deleted; symbols and marks are kept.
    Simple,
}

impl NormalizationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizationPolicy::Standard => "standard",
            NormalizationPolicy::Simple => "simple",
        }
    }
}

impl fmt::Display for NormalizationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(NormalizationPolicy::Standard),
            "simple" => Ok(NormalizationPolicy::Simple),
            other => Err(format!(
                "unknown normalization policy '{}' (expected 'standard' or 'simple')",
                other
            )),
        }
    }
}

// Compiled once, shared by every call
static PUNCT_TO_SPACE_REGEX: OnceLock<Regex> = OnceLock::new();
static DISALLOWED_REGEX: OnceLock<Regex> = OnceLock::new();
static PUNCTUATION_REGEX: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RUN_REGEX: OnceLock<Regex> = OnceLock::new();

/// Dashes, quotation marks, ampersands, periods/commas across scripts and
/// apostrophe variants.
fn punct_to_space() -> &'static Regex {
    PUNCT_TO_SPACE_REGEX.get_or_init(|| {
        Regex::new(concat!(
            r"[\p{Dash}\p{Quotation_Mark}",
            r"&\x{FE60}\x{FF06}",
            r".,\x{201A}\x{060C}\x{2024}\x{3002}\x{FE52}\x{FF0E}\x{FF61}",
            r"'\x{2019}\x{2018}\x{201B}\x{FF07}]",
        ))
        .unwrap()
    })
}

/// Control, format, private-use and unassigned code points, symbols,
/// punctuation and combining marks. Surrogates cannot appear in a `str`.
fn disallowed() -> &'static Regex {
    DISALLOWED_REGEX.get_or_init(|| {
        Regex::new(r"[\p{Cc}\p{Cf}\p{Co}\p{Cn}\p{So}\p{Sm}\p{Sc}\p{Sk}\p{P}\p{M}]").unwrap()
    })
}

fn punctuation() -> &'static Regex {
    PUNCTUATION_REGEX.get_or_init(|| Regex::new(r"\p{P}").unwrap())
}

fn whitespace_run() -> &'static Regex {
    WHITESPACE_RUN_REGEX.get_or_init(|| Regex::new(r"\p{White_Space}+").unwrap())
}

/// Normalize `text` with the [`NormalizationPolicy::Standard`] policy.
pub fn normalize(text: &str) -> String {
    normalize_with(text, NormalizationPolicy::Standard)
}

/// Normalize `text` into an alias using `policy`.
///
/// Never fails. The result is empty when every character is filtered out.
pub fn normalize_with(text: &str, policy: NormalizationPolicy) -> String {
    let folded = fold(text);

    let filtered = match policy {
        NormalizationPolicy::Standard => {
            let spaced = punct_to_space().replace_all(&folded, " ");
            disallowed().replace_all(spaced.trim(), "").into_owned()
        }
        NormalizationPolicy::Simple => punctuation().replace_all(folded.trim(), "").into_owned(),
    };

    whitespace_run().replace_all(&filtered, "-").into_owned()
}

/// NFKC followed by full Unicode lowercasing.
fn fold(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}
