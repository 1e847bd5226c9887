//! Static word lists used by the analysis stages.
//!
//! These are plain data. Each component copies what it needs into its own
//! lookup structure at construction time.

use crate::analysis::models::SectionKey;

/// Words excluded from job-description keyword frequency.
pub const STOPWORDS: &[&str] = &[
    "and", "or", "the", "a", "an", "to", "of", "in", "on", "for", "with", "by", "is", "are", "as",
    "at", "from", "this", "that", "be", "it", "which", "we", "you", "your", "our", "will", "can",
    "should", "must", "may", "not", "into", "per", "via", "using", "use", "used", "including",
    "include", "includes", "etc", "over", "under", "within", "ability", "experience",
    "responsibilities", "requirements", "preferred", "years", "year", "plus", "strong", "good",
    "excellent", "familiarity", "knowledge",
];

/// Technology and role terms boosted whenever they occur anywhere in a job description.
pub const CURATED_TERMS: &[&str] = &[
    // languages and web
    "javascript", "typescript", "react", "node", "node.js", "nodejs", "express", "angular", "vue",
    // python and data science
    "python", "django", "flask", "pandas", "numpy", "ml", "machine", "learning",
    // jvm
    "java", "spring", "springboot", "kotlin", "scala",
    // .net
    "c#", "dotnet", ".net", "asp.net",
    "go", "golang",
    "php", "laravel", "symfony",
    "ruby", "rails",
    // databases
    "sql", "mysql", "postgres", "postgresql", "mssql", "oracle", "sqlite", "nosql", "mongodb",
    "redis", "elasticsearch",
    // cloud and devops
    "aws", "azure", "gcp", "docker", "kubernetes", "k8s", "terraform", "ci/cd", "jenkins", "git",
    // apis and messaging
    "graphql", "rest", "microservices", "serverless", "kafka", "rabbitmq",
    // frontend styling
    "html", "css", "sass", "less", "tailwind", "bootstrap",
    // data tooling
    "data", "analysis", "etl", "airflow", "dbt", "powerbi", "tableau",
];

/// Verbs whose presence suggests achievement-oriented bullet points.
pub const ACTION_VERBS: &[&str] = &[
    "led",
    "built",
    "designed",
    "developed",
    "implemented",
    "optimized",
    "created",
    "launched",
    "migrated",
    "refactored",
    "automated",
    "improved",
    "reduced",
    "increased",
    "delivered",
];

/// Heading labels per section, matched case-insensitively against a whole line.
pub const SECTION_HEADINGS: &[(SectionKey, &[&str])] = &[
    (SectionKey::Summary, &["summary", "profile", "about me"]),
    (
        SectionKey::Skills,
        &["skills", "technical skills", "core competencies"],
    ),
    (
        SectionKey::Experience,
        &[
            "experience",
            "work experience",
            "professional experience",
            "employment history",
        ],
    ),
    (
        SectionKey::Education,
        &["education", "academics", "academic background"],
    ),
    (
        SectionKey::Projects,
        &["projects", "personal projects", "selected projects"],
    ),
    (
        SectionKey::Certifications,
        &["certifications", "licenses", "certifications & licenses"],
    ),
    (SectionKey::Awards, &["awards", "honors", "achievements"]),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_section_has_headings() {
        let keys: HashSet<_> = SECTION_HEADINGS.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), SectionKey::ALL.len());
    }

    #[test]
    fn test_curated_terms_are_lowercase_and_unique() {
        let unique: HashSet<_> = CURATED_TERMS.iter().collect();
        assert_eq!(unique.len(), CURATED_TERMS.len());
        assert!(CURATED_TERMS.iter().all(|t| *t == t.to_lowercase()));
    }

    #[test]
    fn test_action_verb_count() {
        assert_eq!(ACTION_VERBS.len(), 15);
    }
}
