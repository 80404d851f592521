use std::collections::HashMap;

use uuid::Uuid;

use crate::models::candidate::Candidate;
use crate::models::evaluation::{Evaluation, FinalDecision, HistoricalCandidate};

/// Builds the matching pool from a record snapshot.
///
/// Keeps candidates whose evaluation is completed and decided (hired or
/// rejected), drops the target itself, and preserves candidate order.
pub fn build_history_pool(
    target_id: Uuid,
    candidates: &[Candidate],
    evaluations: &[Evaluation],
) -> Vec<HistoricalCandidate> {
    let by_candidate: HashMap<Uuid, &Evaluation> = evaluations
        .iter()
        .map(|e| (e.candidate_id, e))
        .collect();

    candidates
        .iter()
        .filter(|c| c.id != target_id)
        .filter_map(|c| {
            let evaluation = by_candidate.get(&c.id)?;
            is_decided(evaluation).then(|| HistoricalCandidate {
                candidate: c.clone(),
                evaluation: (*evaluation).clone(),
            })
        })
        .collect()
}

fn is_decided(evaluation: &Evaluation) -> bool {
    evaluation.is_completed
        && matches!(
            evaluation.final_decision,
            Some(FinalDecision::Hired) | Some(FinalDecision::Rejected)
        )
}
