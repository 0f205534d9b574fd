//! MonkeyLearn keyword extractor client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ExtractorError, KeywordExtractor};

const MAX_RETRIES: u32 = 3;
const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Serialize)]
struct ExtractRequest<'a> {
    data: &'a [String],
    max_keywords: u32,
}

/// One entry of the extractor response, positionally matching one input text.
#[derive(Debug, Deserialize)]
struct ExtractResult {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    extractions: Vec<Extraction>,
}

#[derive(Debug, Deserialize)]
struct Extraction {
    parsed_value: String,
}

#[derive(Debug, Deserialize)]
struct MonkeyLearnError {
    detail: String,
}

/// Wraps the MonkeyLearn extractor endpoint with retry on 429 / 5xx.
#[derive(Clone)]
pub struct MonkeyLearnExtractor {
    client: Client,
    endpoint: String,
    api_key: String,
    max_keywords: u32,
    retry_base_delay: Duration,
}

impl MonkeyLearnExtractor {
    pub fn new(
        client: Client,
        base_url: &str,
        model_id: &str,
        api_key: String,
        max_keywords: u32,
    ) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}/v3/extractors/{}/extract/",
                base_url.trim_end_matches('/'),
                model_id
            ),
            api_key,
            max_keywords,
            retry_base_delay: DEFAULT_RETRY_BASE_DELAY,
        }
    }

    /// Overrides the first backoff step; later steps double it.
    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    async fn call(&self, texts: &[String]) -> Result<Vec<ExtractResult>, ExtractorError> {
        let request_body = ExtractRequest {
            data: texts,
            max_keywords: self.max_keywords,
        };

        let mut last_error: Option<ExtractorError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = self.retry_base_delay * (1 << (attempt - 1));
                warn!(
                    "Keyword extraction attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .header("Authorization", format!("Token {}", self.api_key))
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(ExtractorError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Keyword extractor returned {}: {}", status, body);
                last_error = Some(ExtractorError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<MonkeyLearnError>(&body)
                    .map(|e| e.detail)
                    .unwrap_or(body);
                return Err(ExtractorError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let body = response.text().await?;
            let results: Vec<ExtractResult> = serde_json::from_str(&body)?;
            debug!(texts = texts.len(), results = results.len(), "Keyword extraction succeeded");
            return Ok(results);
        }

        // Every attempt rate limited
        match last_error {
            Some(ExtractorError::Api { status: 429, .. }) | None => {
                Err(ExtractorError::RateLimited {
                    retries: MAX_RETRIES,
                })
            }
            Some(e) => Err(e),
        }
    }
}

#[async_trait]
impl KeywordExtractor for MonkeyLearnExtractor {
    async fn extract(&self, texts: &[String]) -> Result<Vec<Vec<String>>, ExtractorError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let results = self.call(texts).await?;

        Ok(results
            .into_iter()
            .map(|result| {
                if result.error {
                    Vec::new()
                } else {
                    result
                        .extractions
                        .into_iter()
                        .map(|e| e.parsed_value)
                        .collect()
                }
            })
            .collect())
    }
}
