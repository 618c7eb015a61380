//! Analysis route handler.

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use triage_core::analysis::{self, model::AnalysisResult};

/// Request body for `POST /analyze`. Both fields are required; extra
/// fields are ignored.
#[derive(Deserialize)]
pub struct AnalysisRequest {
    pub title: String,
    pub description: String,
}

/// Error body returned for malformed requests.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Classify a request title and description.
///
/// Body deserialization failures (missing field, wrong type, invalid
/// JSON) are mapped to the rejection's own client-error status with a
/// structured body; the classifier only ever sees well-formed input.
pub async fn analyze(
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, (StatusCode, Json<ErrorResponse>)> {
    let Json(req) = payload.map_err(|rejection| {
        (
            rejection.status(),
            Json(ErrorResponse {
                error: rejection.body_text(),
            }),
        )
    })?;

    Ok(Json(analysis::classify(&req.title, &req.description)))
}
