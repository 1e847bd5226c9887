use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::analysis::sections::DuplicateHeadingPolicy;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on a request body, enforced before JSON parsing.
    pub max_body_bytes: usize,
    /// Upper bound on résumé / job-description length, checked before any matching.
    pub max_input_chars: usize,
    /// Allowed CORS origin. `None` means permissive.
    pub cors_origin: Option<String>,
    pub duplicate_heading_policy: DuplicateHeadingPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 3000,
            rust_log: "info".to_string(),
            max_body_bytes: 1024 * 1024,
            max_input_chars: 200_000,
            cors_origin: None,
            duplicate_heading_policy: DuplicateHeadingPolicy::LastWins,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes)?,
            max_input_chars: parse_or(&lookup, "MAX_INPUT_CHARS", defaults.max_input_chars)?,
            cors_origin: lookup("CORS_ORIGIN").filter(|origin| !origin.trim().is_empty()),
            duplicate_heading_policy: parse_or(
                &lookup,
                "DUPLICATE_HEADING_POLICY",
                defaults.duplicate_heading_policy,
            )?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("Environment variable '{key}' has invalid value '{raw}': {e}")),
        None => Ok(default),
    }
}
