//! # Quality API
//!
//! Scores a documentation answer for relevance, completeness and specificity.

use axum::{routing::post, Json, Router};
use lodestar_core::ranking::{assess_answer, AnswerQuality};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::SharedState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct QualityRequest {
    pub question: String,
    pub answer: String,
}

/// Metrics on a 0-10 scale
#[derive(Debug, Serialize, ToSchema)]
pub struct QualityResponse {
    pub relevance: f64,
    pub completeness: f64,
    pub specificity: f64,
    pub score: f64,
}

impl From<AnswerQuality> for QualityResponse {
    fn from(q: AnswerQuality) -> Self {
        Self {
            relevance: q.relevance,
            completeness: q.completeness,
            specificity: q.specificity,
            score: q.score,
        }
    }
}

pub fn quality_routes() -> Router<SharedState> {
    Router::new().route("/", post(assess))
}

/// Assess a documentation answer against its question
#[utoipa::path(
    post,
    path = "/api/v1/quality",
    tag = "quality",
    request_body = QualityRequest,
    responses(
        (status = 200, description = "Quality metrics", body = QualityResponse)
    )
)]
pub async fn assess(Json(req): Json<QualityRequest>) -> Json<QualityResponse> {
    Json(assess_answer(&req.question, &req.answer).into())
}
