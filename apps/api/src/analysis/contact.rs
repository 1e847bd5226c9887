use regex::Regex;

use crate::analysis::models::ContactInfo;
use crate::analysis::patterns::{self, AnalysisError};

/// Finds the first email, phone and profile links anywhere in a résumé.
pub struct ContactDetector {
    email: Regex,
    phone: Regex,
    linkedin: Regex,
    github: Regex,
    web_url: Regex,
}

impl ContactDetector {
    pub fn new() -> Result<Self, AnalysisError> {
        Ok(Self {
            email: patterns::compile("email", patterns::EMAIL)?,
            phone: patterns::compile("phone", patterns::PHONE)?,
            linkedin: patterns::compile("linkedin", patterns::LINKEDIN)?,
            github: patterns::compile("github", patterns::GITHUB)?,
            web_url: patterns::compile("web url", patterns::WEB_URL)?,
        })
    }

    pub fn detect(&self, text: &str) -> ContactInfo {
        ContactInfo {
            email: first_match(&self.email, text),
            phone: first_match(&self.phone, text),
            linkedin: first_match(&self.linkedin, text),
            github: first_match(&self.github, text),
            portfolio: self
                .web_url
                .find_iter(text)
                .map(|m| m.as_str())
                .find(|url| !is_social_profile(url))
                .map(str::to_string),
        }
    }
}

fn first_match(rx: &Regex, text: &str) -> Option<String> {
    rx.find(text).map(|m| m.as_str().to_string())
}

fn is_social_profile(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.contains("linkedin") || lower.contains("github")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> ContactInfo {
        ContactDetector::new().unwrap().detect(text)
    }

    #[test]
    fn test_email_and_phone() {
        let contact = detect("Jane Doe\njane@example.com | +1 555-123-4567");
        assert_eq!(contact.email.as_deref(), Some("jane@example.com"));
        assert_eq!(contact.phone.as_deref(), Some("+1 555-123-4567"));
    }

    #[test]
    fn test_dotted_phone() {
        let contact = detect("Phone: 555.123.4567");
        assert_eq!(contact.phone.as_deref(), Some("555.123.4567"));
    }

    #[test]
    fn test_profile_links_are_classified() {
        let contact = detect(
            "https://www.linkedin.com/in/jane (profile)\nhttps://github.com/jane\nhttps://jane.dev/work",
        );
        assert_eq!(
            contact.linkedin.as_deref(),
            Some("https://www.linkedin.com/in/jane")
        );
        assert_eq!(contact.github.as_deref(), Some("https://github.com/jane"));
        assert_eq!(contact.portfolio.as_deref(), Some("https://jane.dev/work"));
    }

    #[test]
    fn test_portfolio_skips_social_urls() {
        let contact = detect("https://GitHub.com/jane only");
        assert_eq!(contact.github.as_deref(), Some("https://GitHub.com/jane"));
        assert!(contact.portfolio.is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let contact = detect("a@one.com then b@two.com");
        assert_eq!(contact.email.as_deref(), Some("a@one.com"));
    }

    #[test]
    fn test_nothing_found_is_all_absent() {
        assert_eq!(detect("no contact details here"), ContactInfo::default());
        assert_eq!(detect(""), ContactInfo::default());
    }

    #[test]
    fn test_bare_domain_is_not_a_link() {
        let contact = detect("linkedin.com/in/jane github.com/jane");
        assert!(contact.linkedin.is_none());
        assert!(contact.github.is_none());
        assert!(!contact.has_profile_link());
    }
}
