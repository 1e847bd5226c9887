//! Keyword Extractor — ranks the terms of a job description for ATS matching.
//!
//! Weighting:
//! - +1 per occurrence of a token that is not a stopword and is at least 2 chars
//! - +3 for each curated term found anywhere in the description (substring)
//! - +5 for each custom keyword supplied by the caller
//!
//! Terms are ranked by descending weight. Equal weights keep insertion order:
//! description tokens by first appearance, then curated terms, then custom
//! keywords. After stripping trailing periods, the first occurrence of each
//! term is kept, up to [`MAX_KEYWORDS`].

use std::collections::{HashMap, HashSet};

use crate::analysis::normalize::{normalize, words};
use crate::analysis::vocabulary::{CURATED_TERMS, STOPWORDS};

pub const MAX_KEYWORDS: usize = 40;

const MIN_TERM_LEN: usize = 2;
const CURATED_BOOST: u32 = 3;
const CUSTOM_BOOST: u32 = 5;

pub struct KeywordExtractor {
    stopwords: HashSet<&'static str>,
    curated: Vec<&'static str>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(STOPWORDS, CURATED_TERMS)
    }
}

impl KeywordExtractor {
    pub fn new(stopwords: &[&'static str], curated: &[&'static str]) -> Self {
        Self {
            stopwords: stopwords.iter().copied().collect(),
            curated: curated.to_vec(),
        }
    }

    /// Returns up to [`MAX_KEYWORDS`] unique canonical keywords, highest weight first.
    pub fn extract(&self, job_description: &str, custom_keywords: &[String]) -> Vec<String> {
        let jd = normalize(job_description).as_str().to_lowercase();
        let mut weights = WeightTable::default();

        for token in words(&jd) {
            if token.len() < MIN_TERM_LEN || self.stopwords.contains(token.as_str()) {
                continue;
            }
            weights.bump(&token, 1);
        }

        for term in &self.curated {
            if jd.contains(term) {
                weights.bump(term, CURATED_BOOST);
            }
        }

        for keyword in clean_custom_keywords(custom_keywords) {
            weights.bump(&keyword, CUSTOM_BOOST);
        }

        let ranked = weights.ranked();
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();
        for (term, _) in ranked {
            if keywords.len() >= MAX_KEYWORDS {
                break;
            }
            let canonical = term.trim_end_matches('.');
            if canonical.chars().count() < MIN_TERM_LEN || !seen.insert(canonical.to_string()) {
                continue;
            }
            keywords.push(canonical.to_string());
        }

        tracing::debug!(count = keywords.len(), "keywords extracted");
        keywords
    }
}

/// Trims and lowercases caller-supplied keywords, dropping empty ones.
pub fn clean_custom_keywords(custom_keywords: &[String]) -> Vec<String> {
    custom_keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Term weights in insertion order.
#[derive(Default)]
struct WeightTable {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl WeightTable {
    fn bump(&mut self, term: &str, by: u32) {
        match self.index.get(term) {
            Some(&i) => self.entries[i].1 += by,
            None => {
                self.index.insert(term.to_string(), self.entries.len());
                self.entries.push((term.to_string(), by));
            }
        }
    }

    /// Descending weight; `sort_by` is stable so ties keep insertion order.
    fn ranked(mut self) -> Vec<(String, u32)> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries
    }
}
