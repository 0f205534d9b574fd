//! Axum route handlers for the Jobs API.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::models::Record;
use crate::jobs::search::search_jobs;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub lat: f64,
    pub lon: f64,
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub records: Vec<Record>,
}

impl SearchQuery {
    fn validate(&self) -> Result<(), AppError> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(AppError::Validation(format!(
                "lat must be within [-90, 90], got {}",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(AppError::Validation(format!(
                "lon must be within [-180, 180], got {}",
                self.lon
            )));
        }
        Ok(())
    }

    /// A blank `keyword=` parameter counts as omitted.
    fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|k| !k.trim().is_empty())
    }
}

/// GET /api/v1/jobs/search?lat=..&lon=..&keyword=..
///
/// Returns postings near the coordinates, each tagged with extracted keywords.
/// Missing or non-numeric coordinates are reported as validation errors.
pub async fn handle_search(
    State(state): State<AppState>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Query(params) = params.map_err(|e| AppError::Validation(e.body_text()))?;
    params.validate()?;

    let records = search_jobs(
        &state.job_source,
        state.extractor.as_ref(),
        params.lat,
        params.lon,
        params.keyword(),
    )
    .await?;

    Ok(Json(SearchResponse { records }))
}
