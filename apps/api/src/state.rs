use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled analysis pipeline. Immutable, so shared without locking.
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let analyzer = Analyzer::new(config.duplicate_heading_policy)?;
        Ok(AppState {
            config,
            analyzer: Arc::new(analyzer),
        })
    }
}
