//! Section Extractor — splits a résumé into heading-delimited sections and
//! picks out contact details.
//!
//! A heading is a line holding nothing but one of the labels in
//! [`SECTION_HEADINGS`]. Each section runs from its heading line up to the
//! next heading of any kind, or to the end of the text.

use std::str::FromStr;

use regex::Regex;

use crate::analysis::contact::ContactDetector;
use crate::analysis::models::{ContactInfo, NormalizedText, SectionKey, Sections};
use crate::analysis::patterns::{self, AnalysisError};
use crate::analysis::vocabulary::SECTION_HEADINGS;

/// What to do when the same section heading appears more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateHeadingPolicy {
    /// The later slice replaces the earlier one.
    #[default]
    LastWins,
    KeepFirst,
    /// Slices are joined in document order, separated by a blank line.
    Concatenate,
}

impl FromStr for DuplicateHeadingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last_wins" => Ok(Self::LastWins),
            "keep_first" => Ok(Self::KeepFirst),
            "concatenate" => Ok(Self::Concatenate),
            other => Err(format!(
                "unknown duplicate heading policy '{other}' (expected last_wins, keep_first or concatenate)"
            )),
        }
    }
}

/// Output of [`SectionExtractor::extract`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub sections: Sections,
    pub contact: ContactInfo,
}

pub struct SectionExtractor {
    headings: Vec<(SectionKey, Regex)>,
    contact: ContactDetector,
    policy: DuplicateHeadingPolicy,
}

impl SectionExtractor {
    pub fn new(policy: DuplicateHeadingPolicy) -> Result<Self, AnalysisError> {
        let headings = SECTION_HEADINGS
            .iter()
            .map(|(key, labels)| {
                patterns::compile("section heading", &patterns::heading_pattern(labels))
                    .map(|rx| (*key, rx))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            headings,
            contact: ContactDetector::new()?,
            policy,
        })
    }

    pub fn policy(&self) -> DuplicateHeadingPolicy {
        self.policy
    }

    pub fn extract(&self, text: &NormalizedText) -> Extraction {
        Extraction {
            sections: self.split_sections(text.as_str()),
            contact: self.contact.detect(text.as_str()),
        }
    }

    fn split_sections(&self, text: &str) -> Sections {
        let mut boundaries: Vec<(usize, SectionKey)> = self
            .headings
            .iter()
            .flat_map(|(key, rx)| rx.find_iter(text).map(move |m| (m.start(), *key)))
            .collect();
        boundaries.sort_by_key(|&(offset, _)| offset);

        let mut sections = Sections::new();
        for (i, &(start, key)) in boundaries.iter().enumerate() {
            let end = boundaries
                .get(i + 1)
                .map_or(text.len(), |&(next, _)| next);
            let slice = text[start..end].trim();

            match self.policy {
                DuplicateHeadingPolicy::LastWins => {
                    sections.insert(key, slice.to_string());
                }
                DuplicateHeadingPolicy::KeepFirst => {
                    sections.entry(key).or_insert_with(|| slice.to_string());
                }
                DuplicateHeadingPolicy::Concatenate => {
                    sections
                        .entry(key)
                        .and_modify(|existing| {
                            existing.push_str("\n\n");
                            existing.push_str(slice);
                        })
                        .or_insert_with(|| slice.to_string());
                }
            }
        }

        tracing::debug!(
            headings = boundaries.len(),
            sections = sections.len(),
            "sections extracted"
        );
        sections
    }
}
