//! Text normalization and word tokenization.

use crate::analysis::models::NormalizedText;

/// Canonicalizes raw text: drops carriage returns and zero-width / BOM code
/// points, turns tabs into single spaces, trims the ends. Never fails.
pub fn normalize(raw: &str) -> NormalizedText {
    let cleaned: String = raw
        .chars()
        .filter_map(|c| match c {
            '\r' | '\u{200B}'..='\u{200D}' | '\u{FEFF}' => None,
            '\t' => Some(' '),
            other => Some(other),
        })
        .collect();

    let text = cleaned.trim().to_string();
    tracing::debug!(bytes = text.len(), "text normalized");
    NormalizedText(text)
}

/// Splits text into lowercase words. Any character outside `[a-z0-9+#.]`
/// (ASCII, case-insensitive) separates words, so `c#`, `c++` and `node.js`
/// survive intact while `ci/cd` does not.
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '#' | '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_carriage_returns_and_tabs() {
        let text = normalize("  Name\r\n\tSkills\r\n");
        assert_eq!(text.as_str(), "Name\n Skills");
    }

    #[test]
    fn test_strips_zero_width_and_bom() {
        let text = normalize("\u{FEFF}Ja\u{200B}ne\u{200D} Doe");
        assert_eq!(text.as_str(), "Jane Doe");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert!(normalize("").as_str().is_empty());
        assert!(normalize(" \t\r\n ").as_str().is_empty());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("\tHello\r\nWorld \u{200C}");
        let twice = normalize(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_words_keep_tech_punctuation() {
        assert_eq!(
            words("Node.js, C#, C++ and CI/CD"),
            vec!["node.js", "c#", "c++", "and", "ci", "cd"]
        );
    }

    #[test]
    fn test_words_split_on_non_ascii() {
        assert_eq!(words("résumé—done"), vec!["r", "sum", "done"]);
    }

    #[test]
    fn test_words_empty() {
        assert!(words("").is_empty());
        assert!(words(" ,;/ ").is_empty());
    }
}
