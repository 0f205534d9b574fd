//! Keyword extraction: pluggable, trait-based batch extractor.
//!
//! Default: `MonkeyLearnExtractor` (remote text-analysis API).
//!
//! `AppState` holds an `Arc<dyn KeywordExtractor>`, so tests and alternative
//! backends plug in without touching the enrichment code.

use async_trait::async_trait;
use thiserror::Error;

pub mod monkeylearn;

pub use monkeylearn::MonkeyLearnExtractor;

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },
}

/// Batch keyword extractor.
///
/// Implementations MUST return one keyword list per input text, in input order.
/// Callers submit whole batches to stay inside the backend's request quota.
#[async_trait]
pub trait KeywordExtractor: Send + Sync {
    async fn extract(&self, texts: &[String]) -> Result<Vec<Vec<String>>, ExtractorError>;
}
