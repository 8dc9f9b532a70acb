use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;
use crate::matching::shortlist::DEFAULT_SHORTLIST_CAP;

/// Application configuration loaded from environment variables.
/// Nothing is required: without an API key the service runs with evaluation disabled.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON roster file. `None` uses the roster embedded in the binary.
    pub roster_path: Option<PathBuf>,
    pub shortlist_cap: usize,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    /// Upper bound on concurrent LLM calls within one batch evaluation.
    pub evaluation_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let evaluation_concurrency = parse_or(&lookup, "EVALUATION_CONCURRENCY", 4usize)?;
        if evaluation_concurrency == 0 {
            bail!("EVALUATION_CONCURRENCY must be at least 1");
        }

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080u16)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            roster_path: non_blank("ROSTER_PATH").map(PathBuf::from),
            shortlist_cap: parse_or(&lookup, "SHORTLIST_CAP", DEFAULT_SHORTLIST_CAP)?,
            openai_api_key: non_blank("OPENAI_API_KEY"),
            openai_base_url: non_blank("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            evaluation_concurrency,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
