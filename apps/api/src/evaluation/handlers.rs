//! Axum route handlers for the Evaluation API.
//!
//! Handlers are stateless: each request carries the candidate and the record
//! snapshot to evaluate against. Store access stays with the caller.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::evaluation::aptitude::{analyze_aptitude, AptitudeAnalysis};
use crate::evaluation::assessment::{assess_candidate, CandidateAssessment};
use crate::evaluation::criteria::default_criteria;
use crate::evaluation::history::build_history_pool;
use crate::evaluation::matcher::{SimilarCandidate, SimilarityMatcher};
use crate::evaluation::predictor::{predict_outcome, PredictionResult};
use crate::evaluation::score_aggregator::{aggregate_scores, ScoreSummary};
use crate::models::candidate::{AptitudeResult, Candidate, JobType};
use crate::models::evaluation::{Evaluation, EvaluationCriterion};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub evaluation: Evaluation,
    /// Falls back to the built-in criteria for the evaluation's job type.
    pub criteria: Option<Vec<EvaluationCriterion>>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeAptitudeRequest {
    pub aptitude: Option<AptitudeResult>,
    pub job_type: JobType,
}

#[derive(Debug, Deserialize)]
pub struct SimilarRequest {
    pub candidate: Candidate,
    pub candidates: Vec<Candidate>,
    pub evaluations: Vec<Evaluation>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub candidate: Candidate,
    pub current_evaluation: Option<Evaluation>,
    pub candidates: Vec<Candidate>,
    pub evaluations: Vec<Evaluation>,
}

#[derive(Debug, Deserialize)]
pub struct PredictionTarget {
    pub candidate: Candidate,
    pub current_evaluation: Option<Evaluation>,
}

#[derive(Debug, Deserialize)]
pub struct BatchPredictRequest {
    pub targets: Vec<PredictionTarget>,
    pub candidates: Vec<Candidate>,
    pub evaluations: Vec<Evaluation>,
}

#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    pub candidate: Candidate,
    pub evaluation: Option<Evaluation>,
    pub criteria: Option<Vec<EvaluationCriterion>>,
    pub candidates: Vec<Candidate>,
    pub evaluations: Vec<Evaluation>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CriteriaResponse {
    pub job_type: JobType,
    pub criteria: Vec<EvaluationCriterion>,
}

// ────────────────────────────────────────────────────────────────────────────
// Validation helpers
// ────────────────────────────────────────────────────────────────────────────

fn check_pool_size(state: &AppState, candidates: &[Candidate]) -> Result<(), AppError> {
    if candidates.len() > state.config.max_pool_size {
        return Err(AppError::Validation(format!(
            "candidates exceeds the maximum pool size ({} > {})",
            candidates.len(),
            state.config.max_pool_size
        )));
    }
    Ok(())
}

fn resolve_limit(state: &AppState, limit: Option<usize>) -> Result<usize, AppError> {
    match limit {
        Some(0) => Err(AppError::Validation("limit must be at least 1".to_string())),
        Some(limit) => Ok(limit),
        None => Ok(state.config.default_match_limit),
    }
}

fn check_evaluation_owner(
    candidate: &Candidate,
    evaluation: Option<&Evaluation>,
) -> Result<(), AppError> {
    match evaluation {
        Some(e) if e.candidate_id != candidate.id => Err(AppError::UnprocessableEntity(format!(
            "evaluation belongs to candidate {}, not {}",
            e.candidate_id, candidate.id
        ))),
        _ => Ok(()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/criteria/:job_type
pub async fn handle_get_criteria(
    Path(job_type): Path<String>,
) -> Result<Json<CriteriaResponse>, AppError> {
    let job_type: JobType = serde_json::from_value(serde_json::Value::String(job_type.clone()))
        .map_err(|_| AppError::NotFound(format!("Unknown job type '{job_type}'")))?;
    Ok(Json(CriteriaResponse {
        job_type,
        criteria: default_criteria(job_type),
    }))
}

/// POST /api/v1/evaluations/score
pub async fn handle_score(Json(request): Json<ScoreRequest>) -> Json<ScoreSummary> {
    let criteria = request
        .criteria
        .unwrap_or_else(|| default_criteria(request.evaluation.job_type));
    Json(aggregate_scores(&request.evaluation, &criteria))
}

/// POST /api/v1/aptitude/analyze
///
/// Returns `null` when no aptitude result is supplied.
pub async fn handle_analyze_aptitude(
    Json(request): Json<AnalyzeAptitudeRequest>,
) -> Json<Option<AptitudeAnalysis>> {
    Json(analyze_aptitude(request.aptitude.as_ref(), request.job_type))
}

/// POST /api/v1/matching/similar
pub async fn handle_find_similar(
    State(state): State<AppState>,
    Json(request): Json<SimilarRequest>,
) -> Result<Json<Vec<SimilarCandidate>>, AppError> {
    check_pool_size(&state, &request.candidates)?;
    let limit = resolve_limit(&state, request.limit)?;

    let pool = build_history_pool(request.candidate.id, &request.candidates, &request.evaluations);
    let matcher = SimilarityMatcher::new(state.text_similarity.as_ref());
    Ok(Json(matcher.find_similar(&request.candidate, &pool, limit)))
}

/// POST /api/v1/matching/predict
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictionResult>, AppError> {
    check_pool_size(&state, &request.candidates)?;
    check_evaluation_owner(&request.candidate, request.current_evaluation.as_ref())?;

    let pool = build_history_pool(request.candidate.id, &request.candidates, &request.evaluations);
    Ok(Json(predict_outcome(
        &request.candidate,
        request.current_evaluation.as_ref(),
        &pool,
        state.text_similarity.as_ref(),
    )))
}

/// POST /api/v1/matching/predict/batch
///
/// Predictions are independent and run concurrently on the blocking pool,
/// sharing one read-only record snapshot. Results keep target order.
pub async fn handle_predict_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchPredictRequest>,
) -> Result<Json<Vec<PredictionResult>>, AppError> {
    check_pool_size(&state, &request.candidates)?;
    if request.targets.is_empty() {
        return Err(AppError::Validation("targets cannot be empty".to_string()));
    }
    if request.targets.len() > state.config.max_pool_size {
        return Err(AppError::Validation(format!(
            "targets exceeds the maximum batch size ({} > {})",
            request.targets.len(),
            state.config.max_pool_size
        )));
    }
    for target in &request.targets {
        check_evaluation_owner(&target.candidate, target.current_evaluation.as_ref())?;
    }

    info!("Batch prediction for {} candidates", request.targets.len());

    let candidates = Arc::new(request.candidates);
    let evaluations = Arc::new(request.evaluations);

    let handles: Vec<_> = request
        .targets
        .into_iter()
        .map(|target| {
            let candidates = Arc::clone(&candidates);
            let evaluations = Arc::clone(&evaluations);
            let text = Arc::clone(&state.text_similarity);
            tokio::task::spawn_blocking(move || {
                let pool = build_history_pool(target.candidate.id, &candidates, &evaluations);
                predict_outcome(
                    &target.candidate,
                    target.current_evaluation.as_ref(),
                    &pool,
                    text.as_ref(),
                )
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let result = handle.await.map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in batch prediction: {e}"))
        })?;
        results.push(result);
    }

    Ok(Json(results))
}

/// POST /api/v1/candidates/assess
pub async fn handle_assess(
    State(state): State<AppState>,
    Json(request): Json<AssessRequest>,
) -> Result<Json<CandidateAssessment>, AppError> {
    check_pool_size(&state, &request.candidates)?;
    check_evaluation_owner(&request.candidate, request.evaluation.as_ref())?;
    let limit = resolve_limit(&state, request.limit)?;

    let criteria = request
        .criteria
        .unwrap_or_else(|| default_criteria(request.candidate.applied_job_type));
    let pool = build_history_pool(request.candidate.id, &request.candidates, &request.evaluations);

    Ok(Json(assess_candidate(
        &request.candidate,
        request.evaluation.as_ref(),
        &criteria,
        &pool,
        limit,
        state.text_similarity.as_ref(),
    )))
}
