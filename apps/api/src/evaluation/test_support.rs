//! Builders shared by the evaluation test modules.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::models::candidate::{
    AptitudeResult, BehavioralTraits, Candidate, CognitiveTraits, EmotionalTraits, JobFitScores,
    JobType, Personality, Reliability,
};
use crate::models::evaluation::{
    Evaluation, FinalDecision, HistoricalCandidate, Recommendation,
};

/// Aptitude result with every personality score set to `level`.
pub fn flat_aptitude(level: f64, language: f64, non_verbal: f64) -> AptitudeResult {
    AptitudeResult {
        language,
        non_verbal,
        reliability: Reliability::High,
        personality: Personality {
            behavioral: BehavioralTraits {
                leadership: level,
                teamwork: level,
                communication: level,
                initiative: level,
                persistence: level,
                adaptability: level,
            },
            cognitive: CognitiveTraits {
                analytical: level,
                creative: level,
                practical: level,
                strategic: level,
            },
            emotional: EmotionalTraits {
                stability: level,
                stress_tolerance: level,
                empathy: level,
            },
            job_fit: JobFitScores {
                sales: level,
                management: level,
                technical: level,
                creative: level,
                service: level,
            },
        },
    }
}

pub fn make_candidate(job_type: JobType, age: u32, experience: &str) -> Candidate {
    Candidate {
        id: Uuid::new_v4(),
        name: "Test Candidate".to_string(),
        age,
        education: "Keio University".to_string(),
        major: Some("Economics".to_string()),
        experience: experience.to_string(),
        self_pr: "Driven team player who enjoys customer work".to_string(),
        applied_job_type: job_type,
        aptitude: None,
        created_at: Utc::now(),
    }
}

pub fn make_evaluation(
    candidate_id: Uuid,
    scores: &[(&str, u8)],
    decision: Option<FinalDecision>,
) -> Evaluation {
    Evaluation {
        candidate_id,
        job_type: JobType::Sales,
        scores: scores.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        comments: HashMap::new(),
        recommendation: Recommendation::Consider,
        is_completed: decision.is_some(),
        final_decision: decision,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A decided historical candidate that shares job type and experience text
/// with `make_candidate(JobType::Sales, 30, experience)`.
pub fn make_historical(
    experience: &str,
    decision: FinalDecision,
    scores: &[(&str, u8)],
) -> HistoricalCandidate {
    let candidate = make_candidate(JobType::Sales, 30, experience);
    let evaluation = make_evaluation(candidate.id, scores, Some(decision));
    HistoricalCandidate {
        candidate,
        evaluation,
    }
}
