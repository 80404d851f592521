//! Outcome Predictor: hire/reject heuristic over the most similar decided
//! candidates, adjusted by the current evaluation's scores.
//!
//! This is a deterministic rate-based heuristic over a small sample, not a
//! trained model.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::evaluation::matcher::{SimilarCandidate, SimilarityMatcher};
use crate::evaluation::text_similarity::TextSimilarity;
use crate::models::candidate::Candidate;
use crate::models::evaluation::{Evaluation, HistoricalCandidate};

/// Number of similar candidates a prediction is based on.
pub const PREDICTION_LIMIT: usize = 10;

const DEFAULT_CONFIDENCE: f64 = 0.5;
const MIN_SAMPLE_FOR_RATE: usize = 3;

// Override thresholds on the current evaluation's mean score (1–4 scale).
const STRONG_SCORE_OVERRIDE: f64 = 3.5;
const WEAK_SCORE_OVERRIDE: f64 = 2.0;
const OVERRIDE_PENALTY: f64 = 0.1;
const OVERRIDE_FLOOR: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prediction {
    Hire,
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: Prediction,
    pub confidence: f64,
    pub reasons: Vec<String>,
}

/// Predicts the outcome for `candidate` from its `PREDICTION_LIMIT` most
/// similar pool entries and its in-progress evaluation, if any.
pub fn predict_outcome(
    candidate: &Candidate,
    current: Option<&Evaluation>,
    pool: &[HistoricalCandidate],
    text: &dyn TextSimilarity,
) -> PredictionResult {
    let similar = SimilarityMatcher::new(text).find_similar(candidate, pool, PREDICTION_LIMIT);
    let result = predict_from_matches(&similar, current);
    info!(
        "Prediction for {}: {:?} ({:.2}) from {} similar candidates",
        candidate.id,
        result.prediction,
        result.confidence,
        similar.len()
    );
    result
}

/// Core heuristic over an already-matched similar set.
pub fn predict_from_matches(
    similar: &[SimilarCandidate],
    current: Option<&Evaluation>,
) -> PredictionResult {
    if similar.is_empty() {
        debug!("No similar history; returning default prediction");
        return PredictionResult {
            prediction: Prediction::Hire,
            confidence: DEFAULT_CONFIDENCE,
            reasons: vec![
                "Insufficient history: no similar past candidates to compare against".to_string(),
            ],
        };
    }

    let hired: Vec<&SimilarCandidate> = similar.iter().filter(|s| s.evaluation.is_hired()).collect();
    let hire_rate = hired.len() as f64 / similar.len() as f64;
    let current_avg = current.and_then(Evaluation::average_score);
    // Nothing submitted counts as an average of 0 for the override.
    let override_avg = current_avg.unwrap_or(0.0);
    let hired_avg = hired_score_average(&hired);

    let (mut prediction, mut confidence) = base_prediction(hire_rate);

    let mut reasons = Vec::new();
    if similar.len() >= MIN_SAMPLE_FOR_RATE {
        reasons.push(format!(
            "{} similar past candidates: {} hired ({:.0}%)",
            similar.len(),
            hired.len(),
            hire_rate * 100.0
        ));
    } else {
        reasons.push(format!(
            "Limited history: only {} similar past candidate(s)",
            similar.len()
        ));
    }
    if let Some(hired_avg) = hired_avg {
        reasons.push(format!("Hired similar candidates averaged {hired_avg:.2}"));
        if let Some(current_avg) = current_avg {
            if current_avg >= hired_avg {
                reasons.push(format!(
                    "Current average {current_avg:.2} is at or above the hired average"
                ));
            } else {
                reasons.push(format!(
                    "Current average {current_avg:.2} is below the hired average"
                ));
            }
        }
    }

    if override_avg >= STRONG_SCORE_OVERRIDE && prediction == Prediction::Reject {
        prediction = Prediction::Hire;
        confidence = OVERRIDE_FLOOR.max(confidence - OVERRIDE_PENALTY);
        reasons.push(format!(
            "Strong current evaluation ({override_avg:.2}) overrides the historical trend"
        ));
    } else if override_avg <= WEAK_SCORE_OVERRIDE && prediction == Prediction::Hire {
        prediction = Prediction::Reject;
        confidence = OVERRIDE_FLOOR.max(confidence - OVERRIDE_PENALTY);
        reasons.push(format!(
            "Weak current evaluation ({override_avg:.2}) overrides the historical trend"
        ));
    }

    PredictionResult {
        prediction,
        confidence,
        reasons,
    }
}

/// Maps a historical hire rate to a base prediction and confidence.
fn base_prediction(hire_rate: f64) -> (Prediction, f64) {
    match hire_rate {
        r if r >= 0.7 => (Prediction::Hire, 0.70 + (r - 0.7) * 0.5),
        r if r >= 0.5 => (Prediction::Hire, 0.50 + (r - 0.5) * 1.0),
        r if r >= 0.3 => (Prediction::Reject, 0.50 + (0.5 - r) * 1.0),
        r => (Prediction::Reject, 0.70 + (0.3 - r) * 0.5),
    }
}

/// Mean of every per-criterion score across hired evaluations, `None` when
/// no hired evaluation has a score.
fn hired_score_average(hired: &[&SimilarCandidate]) -> Option<f64> {
    let scores: Vec<f64> = hired
        .iter()
        .flat_map(|s| s.evaluation.scores.values())
        .map(|&score| f64::from(score))
        .collect();
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}
