use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use super::{DuplicateThreshold, NameComparison, NameMatcher};
use crate::error::AppError;
use crate::roster::{dedupe, entries_from_names, DedupeReport};

#[derive(Debug, Deserialize)]
pub struct SimilarityRequest {
    pub left: String,
    pub right: String,
    #[serde(default)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct DuplicatesRequest {
    pub names: Vec<String>,
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// Router builder exposing the matcher over HTTP.
pub fn name_router(matcher: Arc<NameMatcher>) -> Router {
    Router::new()
        .route("/api/v1/names/similarity", post(similarity_handler))
        .route("/api/v1/names/duplicates", post(duplicates_handler))
        .with_state(matcher)
}

pub(crate) async fn similarity_handler(
    State(matcher): State<Arc<NameMatcher>>,
    Json(request): Json<SimilarityRequest>,
) -> Result<Json<NameComparison>, AppError> {
    let matcher = resolve_matcher(&matcher, request.threshold)?;
    Ok(Json(matcher.compare(&request.left, &request.right)))
}

pub(crate) async fn duplicates_handler(
    State(matcher): State<Arc<NameMatcher>>,
    Json(request): Json<DuplicatesRequest>,
) -> Result<Json<DedupeReport>, AppError> {
    let matcher = resolve_matcher(&matcher, request.threshold)?;
    let entries = entries_from_names(request.names);
    Ok(Json(dedupe(&entries, &matcher)))
}

fn resolve_matcher(base: &NameMatcher, threshold: Option<f64>) -> Result<NameMatcher, AppError> {
    match threshold {
        Some(value) => Ok(NameMatcher::new(DuplicateThreshold::new(value)?)),
        None => Ok(*base),
    }
}
