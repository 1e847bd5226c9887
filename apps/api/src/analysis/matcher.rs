//! Keyword Matcher — splits a keyword list into found / missing for one résumé.

use std::collections::HashSet;

use crate::analysis::models::{KeywordMatch, NormalizedText};
use crate::analysis::normalize::words;

/// A keyword is found when it equals a résumé word, or failing that, occurs
/// anywhere in the lowercased résumé (so `ci/cd` and multi-word phrases still
/// match). Input order is preserved in both lists.
pub fn match_keywords(resume: &NormalizedText, keywords: &[String]) -> KeywordMatch {
    let text = resume.as_str().to_lowercase();
    let bag: HashSet<String> = words(&text).into_iter().collect();

    let mut result = KeywordMatch::default();
    for keyword in keywords {
        let needle = keyword.to_lowercase();
        if bag.contains(&needle) || text.contains(&needle) {
            result.found.push(keyword.clone());
        } else {
            result.missing.push(keyword.clone());
        }
    }

    tracing::debug!(
        found = result.found.len(),
        missing = result.missing.len(),
        "keywords matched"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalize::normalize;

    fn kws(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_word_match() {
        let resume = normalize("Skills: Rust, Python, Node.js");
        let result = match_keywords(&resume, &kws(&["rust", "node.js", "java"]));
        assert_eq!(result.found, kws(&["rust", "node.js"]));
        assert_eq!(result.missing, kws(&["java"]));
    }

    #[test]
    fn test_substring_fallback_for_split_tokens() {
        let resume = normalize("Owned CI/CD pipelines and machine learning models");
        let result = match_keywords(&resume, &kws(&["ci/cd", "machine learning"]));
        assert_eq!(result.found, kws(&["ci/cd", "machine learning"]));
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let resume = normalize("POSTGRESQL and GraphQL");
        let result = match_keywords(&resume, &kws(&["PostgreSQL", "graphql"]));
        assert_eq!(result.found.len(), 2);
    }

    #[test]
    fn test_partition_preserves_order_and_is_complete() {
        let keywords = kws(&["go", "kafka", "rust", "scala", "sql"]);
        let resume = normalize("Rust and SQL");
        let result = match_keywords(&resume, &keywords);

        assert_eq!(result.found, kws(&["rust", "sql"]));
        assert_eq!(result.missing, kws(&["go", "kafka", "scala"]));
        assert_eq!(result.total(), keywords.len());
        assert!(result.found.iter().all(|k| !result.missing.contains(k)));
    }

    #[test]
    fn test_empty_inputs() {
        let result = match_keywords(&normalize(""), &kws(&["rust"]));
        assert_eq!(result.missing, kws(&["rust"]));
        assert_eq!(match_keywords(&normalize("Rust"), &[]), KeywordMatch::default());
    }
}
