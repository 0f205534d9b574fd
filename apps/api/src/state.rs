use std::sync::Arc;

use crate::jobs::source::JobSourceClient;
use crate::keywords::KeywordExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub job_source: JobSourceClient,
    /// Pluggable keyword extractor. Default: MonkeyLearnExtractor.
    pub extractor: Arc<dyn KeywordExtractor>,
}
