// Job search: job source query, keyword enrichment, HTTP handlers.
// Keyword extraction always goes through a `KeywordExtractor`; no direct API calls here.

pub mod enrichment;
pub mod handlers;
pub mod models;
pub mod search;
pub mod source;
