//! Axum route handlers for the Evaluation API.

use std::collections::HashSet;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::evaluation::{evaluate_batch, BatchEvaluation, Evaluation};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub consultant_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub consultant_id: String,
    pub evaluation: Evaluation,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEvaluateRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub consultant_ids: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/evaluate
///
/// Scores one consultant's fit for a job description via the configured evaluator.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let job_description = request.job_description.trim();
    let consultant_id = request.consultant_id.trim();
    if job_description.is_empty() || consultant_id.is_empty() {
        return Err(AppError::Validation(
            "Both `jobDescription` and `consultantId` are required".to_string(),
        ));
    }

    let roster = state.roster.snapshot();
    let consultant = roster.find(consultant_id).ok_or_else(|| {
        AppError::NotFound(format!("Consultant with ID \"{consultant_id}\" not found"))
    })?;

    let evaluator = state.evaluator()?;
    let evaluation = evaluator.evaluate(job_description, consultant).await?;

    Ok(Json(EvaluateResponse {
        consultant_id: consultant.id.clone(),
        evaluation,
    }))
}

/// POST /api/evaluate/batch
///
/// Evaluates several consultants at once. Unknown ids and failed evaluations are
/// reported per id instead of failing the request.
pub async fn handle_evaluate_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchEvaluateRequest>,
) -> Result<Json<BatchEvaluation>, AppError> {
    let job_description = request.job_description.trim();
    if job_description.is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }

    let evaluator = state.evaluator()?;
    let roster = state.roster.snapshot();

    let mut seen = HashSet::new();
    let mut consultants = Vec::new();
    let mut not_found = Vec::new();
    for id in request.consultant_ids.iter().filter(|id| seen.insert(id.as_str())) {
        match roster.find(id) {
            Some(consultant) => consultants.push(consultant.clone()),
            None => not_found.push(id.clone()),
        }
    }

    info!(
        "Batch evaluation: {} consultants, {} unknown ids",
        consultants.len(),
        not_found.len()
    );

    let mut batch = evaluate_batch(
        evaluator,
        job_description,
        consultants,
        state.config.evaluation_concurrency,
    )
    .await;
    batch.not_found = not_found;

    Ok(Json(batch))
}
