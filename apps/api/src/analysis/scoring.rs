//! Score Calculator — combines structure, contact, keyword coverage and
//! formatting signals into a 0–100 ATS score.
//!
//! Subscores (additive, each capped by construction):
//! - structure  (30): experience 8, education 7, skills 8, summary 4, projects|certifications 3
//! - contact     (5): email 2, phone 2, any profile link 1
//! - keywords   (50): round(coverage × 50)
//! - formatting (15): 350–1200 words 6, ≥5 bullets 4, ≥3 dates 3, any email/phone 2

use crate::analysis::models::{
    ContactInfo, KeywordMatch, ScoreBreakdown, ScoreLabel, ScoreResult, SectionKey, Sections,
    Stats,
};

pub const MIN_WORDS: usize = 350;
pub const MAX_WORDS: usize = 1200;
pub const MIN_BULLETS: usize = 5;
pub const MIN_DATES: usize = 3;

const KEYWORD_WEIGHT: f64 = 50.0;

/// Borrowed view of the earlier stages' outputs.
#[derive(Debug, Clone, Copy)]
pub struct Signals<'a> {
    pub sections: &'a Sections,
    pub contact: &'a ContactInfo,
    pub stats: &'a Stats,
    pub keyword_match: &'a KeywordMatch,
}

pub fn compute_score(signals: &Signals<'_>) -> ScoreResult {
    let coverage = coverage(signals.keyword_match);
    let breakdown = ScoreBreakdown {
        structure: structure_score(signals.sections),
        contact: contact_score(signals.contact),
        keywords: (coverage * KEYWORD_WEIGHT).round() as u32,
        formatting: formatting_score(signals.stats),
    };

    let raw = breakdown.structure + breakdown.contact + breakdown.keywords + breakdown.formatting;
    let score = raw.min(100);
    tracing::debug!(score, ?breakdown, "score computed");

    ScoreResult {
        score,
        label: ScoreLabel::from_score(score),
        coverage,
        breakdown,
    }
}

/// found / (found + missing); 0 when there are no keywords.
pub fn coverage(keyword_match: &KeywordMatch) -> f64 {
    match keyword_match.total() {
        0 => 0.0,
        total => keyword_match.found.len() as f64 / total as f64,
    }
}

pub fn structure_score(sections: &Sections) -> u32 {
    let has = |key: SectionKey| sections.contains_key(&key);

    let mut score = 0;
    if has(SectionKey::Experience) {
        score += 8;
    }
    if has(SectionKey::Education) {
        score += 7;
    }
    if has(SectionKey::Skills) {
        score += 8;
    }
    if has(SectionKey::Summary) {
        score += 4;
    }
    if has(SectionKey::Projects) || has(SectionKey::Certifications) {
        score += 3;
    }
    score
}

pub fn contact_score(contact: &ContactInfo) -> u32 {
    let mut score = 0;
    if contact.email.is_some() {
        score += 2;
    }
    if contact.phone.is_some() {
        score += 2;
    }
    if contact.has_profile_link() {
        score += 1;
    }
    score
}

pub fn formatting_score(stats: &Stats) -> u32 {
    let mut score = 0;
    if (MIN_WORDS..=MAX_WORDS).contains(&stats.word_count) {
        score += 6;
    }
    if stats.bullet_lines >= MIN_BULLETS {
        score += 4;
    }
    if stats.dates >= MIN_DATES {
        score += 3;
    }
    if stats.emails >= 1 || stats.phones >= 1 {
        score += 2;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(keys: &[SectionKey]) -> Sections {
        keys.iter()
            .map(|k| (*k, k.label().to_string()))
            .collect()
    }

    fn keyword_match(found: usize, missing: usize) -> KeywordMatch {
        KeywordMatch {
            found: (0..found).map(|i| format!("f{i}")).collect(),
            missing: (0..missing).map(|i| format!("m{i}")).collect(),
        }
    }

    fn full_contact() -> ContactInfo {
        ContactInfo {
            email: Some("jane@example.com".to_string()),
            phone: Some("+1 555-123-4567".to_string()),
            linkedin: None,
            github: Some("https://github.com/jane".to_string()),
            portfolio: None,
        }
    }

    fn good_stats() -> Stats {
        Stats {
            word_count: 600,
            estimated_pages: 1,
            reading_time_min: 3,
            bullet_lines: 8,
            emails: 1,
            phones: 1,
            links: 1,
            dates: 4,
        }
    }

    #[test]
    fn test_perfect_resume_scores_100() {
        let s = sections(&SectionKey::ALL);
        let contact = full_contact();
        let stats = good_stats();
        let km = keyword_match(10, 0);
        let result = compute_score(&Signals {
            sections: &s,
            contact: &contact,
            stats: &stats,
            keyword_match: &km,
        });

        assert_eq!(result.score, 100);
        assert_eq!(result.label, ScoreLabel::Excellent);
        assert_eq!(
            result.breakdown,
            ScoreBreakdown {
                structure: 30,
                contact: 5,
                keywords: 50,
                formatting: 15
            }
        );
        assert!((result.coverage - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_everything_scores_zero() {
        let s = Sections::new();
        let contact = ContactInfo::default();
        let stats = Stats::default();
        let km = KeywordMatch::default();
        let result = compute_score(&Signals {
            sections: &s,
            contact: &contact,
            stats: &stats,
            keyword_match: &km,
        });

        assert_eq!(result.score, 0);
        assert_eq!(result.label, ScoreLabel::Poor);
        assert_eq!(result.coverage, 0.0);
    }

    #[test]
    fn test_coverage_is_unrounded_ratio() {
        let km = keyword_match(1, 2);
        assert!((coverage(&km) - 1.0 / 3.0).abs() < 1e-12);
        // round(0.333.. × 50) = 17
        let s = Sections::new();
        let contact = ContactInfo::default();
        let stats = Stats::default();
        let result = compute_score(&Signals {
            sections: &s,
            contact: &contact,
            stats: &stats,
            keyword_match: &km,
        });
        assert_eq!(result.breakdown.keywords, 17);
        assert_eq!(result.score, 17);
    }

    #[test]
    fn test_structure_weights() {
        assert_eq!(structure_score(&sections(&[SectionKey::Experience])), 8);
        assert_eq!(structure_score(&sections(&[SectionKey::Education])), 7);
        assert_eq!(structure_score(&sections(&[SectionKey::Skills])), 8);
        assert_eq!(structure_score(&sections(&[SectionKey::Summary])), 4);
        assert_eq!(
            structure_score(&sections(&[SectionKey::Projects, SectionKey::Certifications])),
            3
        );
        assert_eq!(structure_score(&sections(&[SectionKey::Awards])), 0);
    }

    #[test]
    fn test_adding_a_section_never_lowers_structure() {
        let mut keys = Vec::new();
        let mut previous = structure_score(&sections(&keys));
        for key in SectionKey::ALL {
            keys.push(key);
            let current = structure_score(&sections(&keys));
            assert!(current >= previous, "{key:?} lowered structure score");
            previous = current;
        }
        assert_eq!(previous, 30);
    }

    #[test]
    fn test_contact_weights() {
        assert_eq!(contact_score(&full_contact()), 5);
        let email_only = ContactInfo {
            email: Some("a@b.io".to_string()),
            ..ContactInfo::default()
        };
        assert_eq!(contact_score(&email_only), 2);
    }

    #[test]
    fn test_word_count_band_is_inclusive() {
        let at = |word_count| {
            formatting_score(&Stats {
                word_count,
                ..Stats::default()
            })
        };
        assert_eq!(at(349), 0);
        assert_eq!(at(350), 6);
        assert_eq!(at(1200), 6);
        assert_eq!(at(1201), 0);
    }

    #[test]
    fn test_formatting_thresholds() {
        let stats = Stats {
            bullet_lines: 5,
            dates: 3,
            phones: 1,
            ..Stats::default()
        };
        assert_eq!(formatting_score(&stats), 4 + 3 + 2);
    }
}
