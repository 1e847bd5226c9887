//! Suggestion Generator — fixed, ordered rules producing actionable advice.
//!
//! Rules are independent: each appends at most one message and none
//! suppresses another. Output order is rule order.

use regex::Regex;

use crate::analysis::models::SectionKey;
use crate::analysis::patterns::{self, AnalysisError};
use crate::analysis::scoring::{Signals, MAX_WORDS, MIN_BULLETS, MIN_DATES, MIN_WORDS};
use crate::analysis::vocabulary::ACTION_VERBS;

/// Missing keywords listed in the suggestion text.
const MAX_LISTED_KEYWORDS: usize = 12;
const MIN_ACTION_VERBS: usize = 3;

const SECTION_ADVICE: [(SectionKey, &str); 4] = [
    (
        SectionKey::Experience,
        "Add a 'Work Experience' section with role, company, dates, and achievements.",
    ),
    (
        SectionKey::Education,
        "Add an 'Education' section with degree, institution, and graduation date.",
    ),
    (
        SectionKey::Skills,
        "Add a 'Skills' section listing relevant technologies and tools.",
    ),
    (
        SectionKey::Summary,
        "Add a brief professional summary at the top tailored to the job.",
    ),
];

pub struct SuggestionGenerator {
    metric: Regex,
    action_verbs: Vec<&'static str>,
}

impl SuggestionGenerator {
    pub fn new() -> Result<Self, AnalysisError> {
        Ok(Self {
            metric: patterns::compile("metric", patterns::METRIC)?,
            action_verbs: ACTION_VERBS.to_vec(),
        })
    }

    pub fn generate(&self, signals: &Signals<'_>, text: &str) -> Vec<String> {
        let Signals {
            sections,
            contact,
            stats,
            keyword_match,
        } = *signals;
        let mut suggestions = Vec::new();

        for (key, advice) in SECTION_ADVICE {
            if !sections.contains_key(&key) {
                suggestions.push(advice.to_string());
            }
        }

        if contact.email.is_none() {
            suggestions.push("Include a professional email address.".to_string());
        }
        if contact.phone.is_none() {
            suggestions
                .push("Include a reachable phone number with country/area code.".to_string());
        }
        if !contact.has_profile_link() {
            suggestions.push("Add a LinkedIn, GitHub, or portfolio link.".to_string());
        }

        if !keyword_match.missing.is_empty() {
            let listed: Vec<&str> = keyword_match
                .missing
                .iter()
                .take(MAX_LISTED_KEYWORDS)
                .map(String::as_str)
                .collect();
            suggestions.push(format!(
                "Incorporate missing job keywords: {}. Mention where applicable.",
                listed.join(", ")
            ));
        }

        if stats.word_count < MIN_WORDS {
            suggestions.push(
                "Your resume is quite short. Expand content with responsibilities and quantified achievements."
                    .to_string(),
            );
        }
        if stats.word_count > MAX_WORDS {
            suggestions.push(
                "Your resume is long. Condense content to 1–2 pages focusing on impact.".to_string(),
            );
        }

        if stats.bullet_lines < MIN_BULLETS {
            suggestions.push(
                "Use bullet points for readability and scannability (aim for 5+).".to_string(),
            );
        }
        if !self.metric.is_match(text) {
            suggestions.push(
                "Add metrics to quantify impact (e.g., increased X by Y%, reduced Z by N)."
                    .to_string(),
            );
        }

        if stats.dates < MIN_DATES {
            suggestions.push(
                "Include dates for roles and education to establish a clear timeline.".to_string(),
            );
        }

        if self.action_verb_hits(text) < MIN_ACTION_VERBS {
            suggestions.push(
                "Start bullet points with strong action verbs (e.g., Led, Built, Optimized)."
                    .to_string(),
            );
        }

        tracing::debug!(count = suggestions.len(), "suggestions generated");
        suggestions
    }

    /// Number of distinct action verbs occurring anywhere in the text.
    fn action_verb_hits(&self, text: &str) -> usize {
        let lower = text.to_lowercase();
        self.action_verbs
            .iter()
            .filter(|verb| lower.contains(*verb))
            .count()
    }
}
