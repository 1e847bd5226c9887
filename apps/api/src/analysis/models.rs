use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Résumé text after normalization. Only `normalize::normalize` builds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(pub(super) String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Résumé sections recognised by heading. Declaration order is checklist order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Summary,
    Skills,
    Experience,
    Education,
    Projects,
    Certifications,
    Awards,
}

impl SectionKey {
    pub const ALL: [SectionKey; 7] = [
        SectionKey::Summary,
        SectionKey::Skills,
        SectionKey::Experience,
        SectionKey::Education,
        SectionKey::Projects,
        SectionKey::Certifications,
        SectionKey::Awards,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionKey::Summary => "Summary",
            SectionKey::Skills => "Skills",
            SectionKey::Experience => "Experience",
            SectionKey::Education => "Education",
            SectionKey::Projects => "Projects",
            SectionKey::Certifications => "Certifications",
            SectionKey::Awards => "Awards",
        }
    }
}

/// Section slices keyed by section. `BTreeMap` keeps serialization order stable.
pub type Sections = BTreeMap<SectionKey, String>;

/// Contact fields found anywhere in the résumé text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
}

impl ContactInfo {
    /// True when any of linkedin / github / portfolio was found.
    pub fn has_profile_link(&self) -> bool {
        self.linkedin.is_some() || self.github.is_some() || self.portfolio.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub word_count: usize,
    pub estimated_pages: usize,
    pub reading_time_min: usize,
    pub bullet_lines: usize,
    pub emails: usize,
    pub phones: usize,
    pub links: usize,
    pub dates: usize,
}

/// Partition of the keyword list into those present in and absent from the résumé.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordMatch {
    pub fn total(&self) -> usize {
        self.found.len() + self.missing.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ScoreLabel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 85 => ScoreLabel::Excellent,
            s if s >= 70 => ScoreLabel::Good,
            s if s >= 55 => ScoreLabel::Fair,
            _ => ScoreLabel::Poor,
        }
    }
}

/// The four additive subscores behind the overall score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub structure: u32,  // max 30
    pub contact: u32,    // max 5
    pub keywords: u32,   // max 50
    pub formatting: u32, // max 15
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32, // 0 – 100
    pub label: ScoreLabel,
    pub coverage: f64, // 0.0 – 1.0
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub section: SectionKey,
    pub label: String,
    pub present: bool,
}

/// Everything one analysis produces. Handed as-is to whatever renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub sections: Sections,
    pub checklist: Vec<ChecklistItem>,
    pub contact: ContactInfo,
    pub stats: Stats,
    pub keywords: Vec<String>,
    pub keyword_match: KeywordMatch,
    #[serde(flatten)]
    pub scoring: ScoreResult,
    pub suggestions: Vec<String>,
    pub normalized_resume_text: NormalizedText,
}
