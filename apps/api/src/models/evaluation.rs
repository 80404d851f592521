use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::candidate::{Candidate, JobType};

/// Closed set of criterion categories. Unknown categories fail to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionCategory {
    Skill,
    Personality,
    CultureFit,
}

impl CriterionCategory {
    /// Reporting order.
    pub const ALL: [CriterionCategory; 3] = [
        CriterionCategory::Skill,
        CriterionCategory::Personality,
        CriterionCategory::CultureFit,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationCriterion {
    pub id: String,
    pub category: CriterionCategory,
    /// Percentage, 0–100.
    pub weight: f64,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Hire,
    Consider,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalDecision {
    Hired,
    Rejected,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub candidate_id: Uuid,
    pub job_type: JobType,
    /// criterion id → score (1–4)
    pub scores: HashMap<String, u8>,
    #[serde(default)]
    pub comments: HashMap<String, String>,
    pub recommendation: Recommendation,
    pub is_completed: bool,
    pub final_decision: Option<FinalDecision>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Evaluation {
    /// Mean of every submitted score, `None` when nothing was scored.
    pub fn average_score(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        let sum: f64 = self.scores.values().map(|&s| f64::from(s)).sum();
        Some(sum / self.scores.len() as f64)
    }

    pub fn is_hired(&self) -> bool {
        self.final_decision == Some(FinalDecision::Hired)
    }
}

/// A previously decided candidate together with its evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalCandidate {
    pub candidate: Candidate,
    pub evaluation: Evaluation,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_evaluation(scores: &[(&str, u8)]) -> Evaluation {
        Evaluation {
            candidate_id: Uuid::new_v4(),
            job_type: JobType::Sales,
            scores: scores.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            comments: HashMap::new(),
            recommendation: Recommendation::Consider,
            is_completed: true,
            final_decision: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_average_score_empty_is_none() {
        assert!(make_evaluation(&[]).average_score().is_none());
    }

    #[test]
    fn test_average_score() {
        let avg = make_evaluation(&[("a", 4), ("b", 3), ("c", 2)])
            .average_score()
            .unwrap();
        assert!((avg - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{"id":"x","category":"charisma","weight":10,"label":"X","description":""}"#;
        assert!(serde_json::from_str::<EvaluationCriterion>(json).is_err());
    }

    #[test]
    fn test_final_decision_serde() {
        let d: FinalDecision = serde_json::from_str(r#""hired""#).unwrap();
        assert_eq!(d, FinalDecision::Hired);
    }
}
