//! Statistics Collector — word, page, bullet and pattern counts over normalized text.

use regex::Regex;

use crate::analysis::models::{NormalizedText, Stats};
use crate::analysis::normalize::words;
use crate::analysis::patterns::{self, AnalysisError};

const WORDS_PER_PAGE: f64 = 500.0;
const WORDS_PER_MINUTE: f64 = 200.0;
const BULLET_MARKERS: [char; 3] = ['-', '*', '•'];

/// Collects [`Stats`]. Every counter is an independent scan of the same text.
pub struct StatisticsCollector {
    email: Regex,
    phone: Regex,
    link: Regex,
    date: Regex,
}

impl StatisticsCollector {
    pub fn new() -> Result<Self, AnalysisError> {
        Ok(Self {
            email: patterns::compile("email", patterns::EMAIL)?,
            phone: patterns::compile("phone", patterns::PHONE)?,
            link: patterns::compile("link", patterns::LINK)?,
            date: patterns::compile("date", patterns::DATE)?,
        })
    }

    pub fn collect(&self, text: &NormalizedText) -> Stats {
        let text = text.as_str();
        let word_count = words(text).len();

        let stats = Stats {
            word_count,
            estimated_pages: at_least_one(word_count as f64 / WORDS_PER_PAGE),
            reading_time_min: at_least_one(word_count as f64 / WORDS_PER_MINUTE),
            bullet_lines: count_bullet_lines(text),
            emails: self.email.find_iter(text).count(),
            phones: self.phone.find_iter(text).count(),
            links: self.link.find_iter(text).count(),
            dates: self.date.find_iter(text).count(),
        };

        tracing::debug!(
            words = stats.word_count,
            bullets = stats.bullet_lines,
            dates = stats.dates,
            "stats collected"
        );
        stats
    }
}

/// Rounds half away from zero, floored at 1.
fn at_least_one(value: f64) -> usize {
    (value.round() as usize).max(1)
}

fn count_bullet_lines(text: &str) -> usize {
    text.lines()
        .filter(|line| line.trim_start().starts_with(BULLET_MARKERS))
        .count()
}
