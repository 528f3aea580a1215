//! # References API
//!
//! Endpoints for reference-architecture lookup against the static catalog.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use lodestar_core::catalog::{
    exemplar_schema, ArchitectureExemplar, MatchMode, QueryResult, ScoredExemplar,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::SharedState;

/// Request to find reference architectures
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReferencesRequest {
    /// Free-text problem description
    pub description: String,
    /// "keyword" (default) or "weighted"
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub mode: Option<MatchMode>,
}

/// Matched exemplars for one description
#[derive(Debug, Serialize, ToSchema)]
pub struct ReferencesResponse {
    pub mode: String,
    /// True when the only match is the generic fallback architecture
    pub fallback: bool,
    #[schema(value_type = Vec<Object>)]
    pub matches: Vec<ScoredExemplar>,
}

impl From<QueryResult> for ReferencesResponse {
    fn from(result: QueryResult) -> Self {
        Self {
            mode: result.mode.to_string(),
            fallback: result.fallback,
            matches: result.matches,
        }
    }
}

/// Full catalog listing
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    pub count: usize,
    #[schema(value_type = Vec<Object>)]
    pub entries: Vec<ArchitectureExemplar>,
}

pub fn reference_routes() -> Router<SharedState> {
    Router::new().route("/", post(find_references))
}

pub fn catalog_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_catalog))
        .route("/schema", get(get_schema))
}

/// Find reference architectures for a description
#[utoipa::path(
    post,
    path = "/api/v1/references",
    tag = "references",
    request_body = ReferencesRequest,
    responses(
        (status = 200, description = "Matching exemplars, or the fallback", body = ReferencesResponse)
    )
)]
pub async fn find_references(
    State(state): State<SharedState>,
    Json(req): Json<ReferencesRequest>,
) -> Json<ReferencesResponse> {
    let mode = req.mode.unwrap_or_default();
    Json(state.index.query(&req.description, mode).into())
}

/// List the catalog
#[utoipa::path(
    get,
    path = "/api/v1/catalog",
    tag = "references",
    responses(
        (status = 200, description = "All catalog entries in order", body = CatalogResponse)
    )
)]
pub async fn list_catalog(State(state): State<SharedState>) -> Json<CatalogResponse> {
    let catalog = state.index.catalog();
    Json(CatalogResponse {
        count: catalog.len(),
        entries: catalog.entries().to_vec(),
    })
}

/// JSON Schema of the exemplar record
#[utoipa::path(
    get,
    path = "/api/v1/catalog/schema",
    tag = "references",
    responses(
        (status = 200, description = "JSON Schema for ArchitectureExemplar")
    )
)]
pub async fn get_schema() -> Json<serde_json::Value> {
    Json(exemplar_schema())
}
