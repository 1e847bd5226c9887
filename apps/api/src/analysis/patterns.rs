//! Pattern sources shared by the detectors.
//!
//! All matching goes through the `regex` crate, whose finite-automata engine
//! runs in time linear in the haystack. None of these patterns rely on
//! backreferences or look-around.

use regex::Regex;
use thiserror::Error;

pub const EMAIL: &str = r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}";

/// Loose international phone number: optional `+` and country code, optional
/// parenthesised area code, `-` `.` or whitespace separators.
pub const PHONE: &str =
    r"\+?[0-9]{1,3}?[-.\s]?\(?[0-9]{2,4}\)?[-.\s]?[0-9]{3,4}[-.\s]?[0-9]{3,4}";

pub const LINK: &str = r"https?://\S+";

/// A bare four-digit year, or a month name (abbreviated or full) followed by a year.
pub const DATE: &str = r"(?i)\b[0-9]{4}\b|\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+[0-9]{4}\b";

pub const LINKEDIN: &str = r"(?i)https?://(?:www\.)?linkedin\.com/[^\s)]+";

pub const GITHUB: &str = r"(?i)https?://(?:www\.)?github\.com/[^\s)]+";

/// Any URL with a dotted host. Candidates mentioning linkedin/github are
/// filtered out by the contact detector.
pub const WEB_URL: &str = r"(?i)https?://\S+\.[a-z]{2,}/?\S*";

/// Percentages, dollar amounts, `k` suffixes, comma-grouped or bare numbers.
pub const METRIC: &str = r"\b(?:[0-9]+%|\$[0-9]+|[0-9]+k|[0-9]+,[0-9]+|\b[0-9]+\b)\b";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid {name} pattern: {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Compiles one pattern, tagging failures with a readable name.
pub fn compile(name: &'static str, pattern: &str) -> Result<Regex, AnalysisError> {
    Regex::new(pattern).map_err(|source| AnalysisError::Pattern { name, source })
}

/// Builds a pattern that matches a line holding only one of `labels`.
///
/// The match starts at the beginning of the heading line, so the offset can
/// be used directly as a section boundary.
pub fn heading_pattern(labels: &[&str]) -> String {
    let alternatives = labels
        .iter()
        .map(|label| regex::escape(label))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?im)^[^\S\n]*(?:{alternatives})[^\S\n]*$")
}
