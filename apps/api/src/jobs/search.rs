use tracing::info;

use crate::jobs::enrichment::{enrich, EnrichmentError};
use crate::jobs::models::Record;
use crate::jobs::source::JobSourceClient;
use crate::keywords::KeywordExtractor;

/// Full search pipeline: query the job source, then enrich with keywords.
///
/// A failed source query is indistinguishable from "no results"; only
/// keyword extraction errors reach the caller.
pub async fn search_jobs(
    source: &JobSourceClient,
    extractor: &dyn KeywordExtractor,
    lat: f64,
    lon: f64,
    keyword: Option<&str>,
) -> Result<Vec<Record>, EnrichmentError> {
    let postings = source.search(lat, lon, keyword).await;
    info!(lat, lon, keyword, postings = postings.len(), "Fetched job postings");

    let records = enrich(postings, extractor).await?;
    info!(records = records.len(), "Enriched job postings with keywords");
    Ok(records)
}
