use serde::{Deserialize, Serialize};

use crate::evaluation::aptitude::{analyze_aptitude, AptitudeAnalysis};
use crate::evaluation::matcher::{SimilarCandidate, SimilarityMatcher};
use crate::evaluation::predictor::{predict_outcome, PredictionResult};
use crate::evaluation::score_aggregator::{aggregate_scores, ScoreSummary};
use crate::evaluation::text_similarity::TextSimilarity;
use crate::models::candidate::Candidate;
use crate::models::evaluation::{Evaluation, EvaluationCriterion, HistoricalCandidate};

/// Everything the engine can say about one candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateAssessment {
    pub score_summary: Option<ScoreSummary>,
    pub aptitude: Option<AptitudeAnalysis>,
    pub similar_candidates: Vec<SimilarCandidate>,
    pub prediction: PredictionResult,
}

/// Runs aggregation, aptitude analysis, matching and prediction for one
/// candidate over a pre-filtered history pool.
pub fn assess_candidate(
    candidate: &Candidate,
    evaluation: Option<&Evaluation>,
    criteria: &[EvaluationCriterion],
    pool: &[HistoricalCandidate],
    limit: usize,
    text: &dyn TextSimilarity,
) -> CandidateAssessment {
    CandidateAssessment {
        score_summary: evaluation.map(|e| aggregate_scores(e, criteria)),
        aptitude: analyze_aptitude(candidate.aptitude.as_ref(), candidate.applied_job_type),
        similar_candidates: SimilarityMatcher::new(text).find_similar(candidate, pool, limit),
        prediction: predict_outcome(candidate, evaluation, pool, text),
    }
}
