use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::evaluation::FitEvaluator;
use crate::roster::RosterStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Current roster snapshot, swappable on reload.
    pub roster: RosterStore,
    /// Pluggable fit evaluator. `None` when no LLM API key is configured.
    pub evaluator: Option<Arc<dyn FitEvaluator>>,
    pub config: Config,
}

impl AppState {
    /// The configured evaluator, or `Unavailable` if evaluation is disabled.
    pub fn evaluator(&self) -> Result<Arc<dyn FitEvaluator>, AppError> {
        self.evaluator.clone().ok_or_else(|| {
            AppError::Unavailable(
                "Fit evaluation is disabled: set OPENAI_API_KEY to enable it".to_string(),
            )
        })
    }
}
