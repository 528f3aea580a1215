//! # Samples API
//!
//! Search over the configured GitHub samples repository.

use axum::{extract::State, routing::post, Json, Router};
use lodestar_core::ranking::SearchKind;
use lodestar_core::samples::SampleSearchReport;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::SharedState;

/// Request to search agent samples
#[derive(Debug, Deserialize, ToSchema)]
pub struct SampleSearchRequest {
    /// Search terms (e.g. "customer service", "data science")
    pub query: String,
    /// "architecture" (default), "code", "documentation" or "general"
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub kind: Option<SearchKind>,
}

pub fn sample_routes() -> Router<SharedState> {
    Router::new().route("/search", post(search_samples))
}

/// Search agent samples
///
/// Always answers 200; repository failures are reported in `error`.
#[utoipa::path(
    post,
    path = "/api/v1/samples/search",
    tag = "samples",
    request_body = SampleSearchRequest,
    responses(
        (status = 200, description = "Ranked samples and inferred patterns")
    )
)]
pub async fn search_samples(
    State(state): State<SharedState>,
    Json(req): Json<SampleSearchRequest>,
) -> Json<SampleSearchReport> {
    let kind = req.kind.unwrap_or_default();
    Json(state.samples.search(&req.query, kind).await)
}
