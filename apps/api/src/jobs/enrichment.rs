//! Enrichment: attaches extracted keywords to postings by position.
//!
//! All posting texts go to the extractor in one batch; result i belongs to posting i.

use thiserror::Error;
use tracing::debug;

use crate::jobs::models::{Posting, Record};
use crate::keywords::{ExtractorError, KeywordExtractor};

#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("keyword extractor failed: {0}")]
    Extractor(#[from] ExtractorError),

    #[error("keyword extractor returned {actual} results for {expected} texts")]
    BatchLengthMismatch { expected: usize, actual: usize },
}

/// Text submitted for keyword extraction: the description, or the title when
/// the description is empty or a lone newline.
pub fn text_for(posting: &Posting) -> &str {
    if posting.description.is_empty() || posting.description == "\n" {
        &posting.title
    } else {
        &posting.description
    }
}

/// Builds one `Record` per posting, in posting order.
pub async fn enrich(
    postings: Vec<Posting>,
    extractor: &dyn KeywordExtractor,
) -> Result<Vec<Record>, EnrichmentError> {
    if postings.is_empty() {
        return Ok(Vec::new());
    }

    let texts: Vec<String> = postings.iter().map(|p| text_for(p).to_string()).collect();
    let keywords = extractor.extract(&texts).await?;

    if keywords.len() != postings.len() {
        return Err(EnrichmentError::BatchLengthMismatch {
            expected: postings.len(),
            actual: keywords.len(),
        });
    }

    debug!(count = postings.len(), "Attaching extracted keywords to postings");

    Ok(postings
        .into_iter()
        .zip(keywords)
        .map(|(posting, keywords)| Record::from_posting(posting, keywords))
        .collect())
}
