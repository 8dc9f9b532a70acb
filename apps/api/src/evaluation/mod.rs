//! Fit Evaluation: pluggable, trait-based scoring of one consultant against a job description.
//!
//! Default backend: `LlmFitEvaluator` (chat-completions via `llm_client`).
//! `AppState` holds an `Option<Arc<dyn FitEvaluator>>`, `None` when no API key is
//! configured; shortlisting never depends on it.

pub mod handlers;
pub mod prompts;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::warn;

use crate::errors::AppError;
use crate::evaluation::prompts::build_evaluation_prompt;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::consultant::ConsultantRecord;

pub const MAX_FIT_SCORE: u32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Structured fit evaluation for one consultant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub fit_score: u32, // 0 – 100
    pub summary: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub questions: Vec<String>,
}

impl Evaluation {
    /// Rejects scores outside 0–100 as a malformed model answer.
    pub fn validated(self) -> Result<Self, AppError> {
        if self.fit_score > MAX_FIT_SCORE {
            return Err(AppError::EvaluationParse(format!(
                "fitScore {} is outside 0-{MAX_FIT_SCORE}",
                self.fit_score
            )));
        }
        Ok(self)
    }
}

/// Outcome of evaluating many consultants against one job description.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEvaluation {
    pub evaluations: BTreeMap<String, Evaluation>,
    /// Ids whose evaluation failed, in request order.
    pub failed: Vec<String>,
    /// Requested ids that are not on the roster, in request order.
    pub not_found: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap evaluation backends without touching handlers.
#[async_trait]
pub trait FitEvaluator: Send + Sync {
    async fn evaluate(
        &self,
        job_description: &str,
        consultant: &ConsultantRecord,
    ) -> Result<Evaluation, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmFitEvaluator: default implementation
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmFitEvaluator(pub LlmClient);

#[async_trait]
impl FitEvaluator for LlmFitEvaluator {
    async fn evaluate(
        &self,
        job_description: &str,
        consultant: &ConsultantRecord,
    ) -> Result<Evaluation, AppError> {
        let prompt = build_evaluation_prompt(job_description, consultant);
        let evaluation: Evaluation = self.0.call_json(&prompt, JSON_ONLY_SYSTEM).await?;
        evaluation.validated()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Batch evaluation
// ────────────────────────────────────────────────────────────────────────────

/// Evaluates `consultants` concurrently, at most `concurrency` at a time.
///
/// A failed evaluation is logged and listed in `failed`; it never fails the batch.
/// Dropping the returned future aborts every evaluation still in flight.
pub async fn evaluate_batch(
    evaluator: Arc<dyn FitEvaluator>,
    job_description: &str,
    consultants: Vec<ConsultantRecord>,
    concurrency: usize,
) -> BatchEvaluation {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let job_description: Arc<str> = Arc::from(job_description);
    let ids: Vec<String> = consultants.iter().map(|c| c.id.clone()).collect();

    let mut tasks = JoinSet::new();
    for (index, consultant) in consultants.into_iter().enumerate() {
        let evaluator = Arc::clone(&evaluator);
        let semaphore = Arc::clone(&semaphore);
        let job_description = Arc::clone(&job_description);

        tasks.spawn(async move {
            let outcome = match semaphore.acquire_owned().await {
                Ok(_permit) => evaluator.evaluate(&job_description, &consultant).await,
                Err(e) => Err(AppError::Internal(e.into())),
            };
            (index, outcome)
        });
    }

    let mut outcomes: Vec<Option<Result<Evaluation, AppError>>> =
        ids.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, outcome)) => outcomes[index] = Some(outcome),
            Err(e) => warn!("Evaluation task did not complete: {e}"),
        }
    }

    // Reported in request order regardless of completion order
    let mut batch = BatchEvaluation::default();
    for (id, outcome) in ids.into_iter().zip(outcomes) {
        match outcome {
            Some(Ok(evaluation)) => {
                batch.evaluations.insert(id, evaluation);
            }
            Some(Err(e)) => {
                warn!("Evaluation failed for consultant {id}: {e}");
                batch.failed.push(id);
            }
            None => batch.failed.push(id),
        }
    }
    batch
}
