use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_JOB_SOURCE_URL: &str = "https://jobs.github.com/positions.json";
const DEFAULT_MONKEYLEARN_BASE_URL: &str = "https://api.monkeylearn.com";
const DEFAULT_MONKEYLEARN_MODEL_ID: &str = "ex_YCya9nrn";

/// Keyword sent to the job source when neither the caller nor the environment supplies one.
pub const FALLBACK_KEYWORD: &str = "developer";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub job_source_url: String,
    pub monkeylearn_api_key: String,
    pub monkeylearn_base_url: String,
    pub monkeylearn_model_id: String,
    pub monkeylearn_max_keywords: u32,
    pub default_keyword: String,
    pub http_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            job_source_url: env_or("JOB_SOURCE_URL", DEFAULT_JOB_SOURCE_URL),
            monkeylearn_api_key: require_env("MONKEYLEARN_API_KEY")?,
            monkeylearn_base_url: env_or("MONKEYLEARN_BASE_URL", DEFAULT_MONKEYLEARN_BASE_URL),
            monkeylearn_model_id: env_or("MONKEYLEARN_MODEL_ID", DEFAULT_MONKEYLEARN_MODEL_ID),
            monkeylearn_max_keywords: env_or("MONKEYLEARN_MAX_KEYWORDS", "3")
                .parse::<u32>()
                .context("MONKEYLEARN_MAX_KEYWORDS must be a positive integer")?,
            default_keyword: env_or("DEFAULT_KEYWORD", FALLBACK_KEYWORD),
            http_timeout: Duration::from_secs(
                env_or("HTTP_TIMEOUT_SECS", "10")
                    .parse::<u64>()
                    .context("HTTP_TIMEOUT_SECS must be a number of seconds")?,
            ),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads an optional variable; blank values count as unset.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
