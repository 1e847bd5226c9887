// ATS analysis engine
// Pipeline: normalize → {stats, sections + contact} → keywords → match → score → suggestions.
// Pure and synchronous: no I/O, no shared mutable state. One `Analyzer` serves all requests.

pub mod contact;
pub mod handlers;
pub mod keywords;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod patterns;
pub mod scoring;
pub mod sections;
pub mod stats;
pub mod suggestions;
pub mod vocabulary;

#[cfg(test)]
pub(crate) mod fixtures;

use tracing::info;

use crate::analysis::keywords::KeywordExtractor;
use crate::analysis::matcher::match_keywords;
use crate::analysis::models::{AnalysisReport, ChecklistItem, SectionKey};
use crate::analysis::normalize::normalize;
use crate::analysis::patterns::AnalysisError;
use crate::analysis::scoring::{compute_score, Signals};
use crate::analysis::sections::{DuplicateHeadingPolicy, SectionExtractor};
use crate::analysis::stats::StatisticsCollector;
use crate::analysis::suggestions::SuggestionGenerator;

/// Inputs for one analysis. Custom keywords are expected pre-split; they are
/// trimmed and lowercased again by the keyword extractor.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisInput<'a> {
    pub resume_text: &'a str,
    pub job_description: &'a str,
    pub custom_keywords: &'a [String],
}

/// Owns every stage of the pipeline with its patterns compiled once.
pub struct Analyzer {
    stats: StatisticsCollector,
    sections: SectionExtractor,
    keywords: KeywordExtractor,
    suggestions: SuggestionGenerator,
}

impl Analyzer {
    pub fn new(policy: DuplicateHeadingPolicy) -> Result<Self, AnalysisError> {
        Ok(Self {
            stats: StatisticsCollector::new()?,
            sections: SectionExtractor::new(policy)?,
            keywords: KeywordExtractor::default(),
            suggestions: SuggestionGenerator::new()?,
        })
    }

    pub fn duplicate_heading_policy(&self) -> DuplicateHeadingPolicy {
        self.sections.policy()
    }

    /// Ranked keyword list for a job description, without a résumé.
    pub fn extract_keywords(&self, job_description: &str, custom_keywords: &[String]) -> Vec<String> {
        self.keywords.extract(job_description, custom_keywords)
    }

    /// Runs the full pipeline. Total over any input, including empty strings.
    pub fn analyze(&self, input: AnalysisInput<'_>) -> AnalysisReport {
        let text = normalize(input.resume_text);

        let stats = self.stats.collect(&text);
        let extraction = self.sections.extract(&text);
        let keywords = self
            .keywords
            .extract(input.job_description, input.custom_keywords);
        let keyword_match = match_keywords(&text, &keywords);

        let signals = Signals {
            sections: &extraction.sections,
            contact: &extraction.contact,
            stats: &stats,
            keyword_match: &keyword_match,
        };
        let scoring = compute_score(&signals);
        let suggestions = self.suggestions.generate(&signals, text.as_str());

        info!(
            score = scoring.score,
            label = ?scoring.label,
            words = stats.word_count,
            keywords = keywords.len(),
            found = keyword_match.found.len(),
            suggestions = suggestions.len(),
            "Resume analyzed"
        );

        let checklist = SectionKey::ALL
            .iter()
            .map(|key| ChecklistItem {
                section: *key,
                label: key.label().to_string(),
                present: extraction.sections.contains_key(key),
            })
            .collect();

        AnalysisReport {
            sections: extraction.sections,
            checklist,
            contact: extraction.contact,
            stats,
            keywords,
            keyword_match,
            scoring,
            suggestions,
            normalized_resume_text: text,
        }
    }
}
