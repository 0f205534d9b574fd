//! Job source client: one GET per search against the job-board positions API.
//!
//! Every failure (transport, status, empty body, bad JSON) is logged and
//! recovered as an empty posting list.

use reqwest::{Client, Url};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::FALLBACK_KEYWORD;
use crate::jobs::models::Posting;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Invalid job source URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Job source returned status {0}")]
    Status(u16),

    #[error("Job source returned an empty body")]
    EmptyBody,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct JobSourceClient {
    client: Client,
    base_url: String,
    default_keyword: String,
}

impl JobSourceClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url,
            default_keyword: FALLBACK_KEYWORD.to_string(),
        }
    }

    /// Keyword used when a search supplies none.
    pub fn with_default_keyword(mut self, keyword: String) -> Self {
        self.default_keyword = keyword;
        self
    }

    /// Returns the postings matching the query, or an empty list on any failure.
    pub async fn search(&self, lat: f64, lon: f64, keyword: Option<&str>) -> Vec<Posting> {
        match self.try_search(lat, lon, keyword).await {
            Ok(postings) => postings,
            Err(e) => {
                warn!(lat, lon, "Job source query failed: {e}");
                Vec::new()
            }
        }
    }

    async fn try_search(
        &self,
        lat: f64,
        lon: f64,
        keyword: Option<&str>,
    ) -> Result<Vec<Posting>, SourceError> {
        let url = self.build_search_url(lat, lon, keyword)?;
        debug!(%url, "Querying job source");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(SourceError::EmptyBody);
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Builds `{base}?description=<keyword>&lat=<lat>&long=<lon>`.
    /// The keyword is form-url-encoded, so spaces become `+`.
    pub fn build_search_url(
        &self,
        lat: f64,
        lon: f64,
        keyword: Option<&str>,
    ) -> Result<Url, SourceError> {
        let keyword = keyword.unwrap_or(&self.default_keyword);

        let mut url =
            Url::parse(&self.base_url).map_err(|e| SourceError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("description", keyword)
            .append_pair("lat", &lat.to_string())
            .append_pair("long", &lon.to_string());

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client(base_url: String) -> JobSourceClient {
        JobSourceClient::new(Client::new(), base_url)
    }

    #[test]
    fn test_url_defaults_keyword_to_developer() {
        let url = client("https://jobs.example.com/positions.json".to_string())
            .build_search_url(37.38, -122.08, None)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://jobs.example.com/positions.json?description=developer&lat=37.38&long=-122.08"
        );
    }

    #[test]
    fn test_url_uses_configured_default_keyword() {
        let url = client("https://jobs.example.com/positions.json".to_string())
            .with_default_keyword("rust".to_string())
            .build_search_url(1.5, 2.5, None)
            .unwrap();
        assert!(url.as_str().contains("description=rust&"));
    }

    #[test]
    fn test_url_encodes_keyword() {
        let url = client("https://jobs.example.com/positions.json".to_string())
            .build_search_url(0.0, 0.0, Some("c++ engineer & lead"))
            .unwrap();
        assert!(url
            .as_str()
            .contains("description=c%2B%2B+engineer+%26+lead&"));
    }

    #[test]
    fn test_invalid_base_url_is_error() {
        let err = client("not a url".to_string())
            .build_search_url(0.0, 0.0, None)
            .unwrap_err();
        assert!(matches!(err, SourceError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_search_parses_postings() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/positions.json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("description".into(), "backend dev".into()),
                Matcher::UrlEncoded("lat".into(), "40.7".into()),
                Matcher::UrlEncoded("long".into(), "-74".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    {"id": "1", "title": "Backend Dev", "location": "NYC",
                     "url": "https://jobs.example.com/1", "company_logo": null,
                     "description": "Go and Postgres"},
                    {"id": "2", "title": "Platform Dev"}
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let postings = client(format!("{}/positions.json", server.url()))
            .search(40.7, -74.0, Some("backend dev"))
            .await;

        mock.assert_async().await;
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].id, "1");
        assert_eq!(postings[0].company_logo, "");
        assert_eq!(postings[1].title, "Platform Dev");
        assert_eq!(postings[1].description, "");
    }

    #[tokio::test]
    async fn test_omitted_keyword_queries_developer() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/positions.json")
            .match_query(Matcher::UrlEncoded(
                "description".into(),
                "developer".into(),
            ))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let postings = client(format!("{}/positions.json", server.url()))
            .search(0.0, 0.0, None)
            .await;

        mock.assert_async().await;
        assert!(postings.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_yields_empty_list() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/positions.json")
            .with_status(500)
            .with_body(r#"[{"id": "ignored"}]"#)
            .create_async()
            .await;

        let postings = client(format!("{}/positions.json", server.url()))
            .search(0.0, 0.0, None)
            .await;

        assert!(postings.is_empty());
    }

    #[tokio::test]
    async fn test_empty_body_yields_empty_list() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/positions.json")
            .with_status(200)
            .with_body("")
            .create_async()
            .await;

        let postings = client(format!("{}/positions.json", server.url()))
            .search(0.0, 0.0, None)
            .await;

        assert!(postings.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_yields_empty_list() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/positions.json")
            .with_status(200)
            .with_body(r#"{"not": "an array"}"#)
            .create_async()
            .await;

        let postings = client(format!("{}/positions.json", server.url()))
            .search(0.0, 0.0, None)
            .await;

        assert!(postings.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_yields_empty_list() {
        // Port 9 (discard) is closed on test hosts; the connect fails fast.
        let postings = client("http://127.0.0.1:9/positions.json".to_string())
            .search(0.0, 0.0, None)
            .await;

        assert!(postings.is_empty());
    }
}
