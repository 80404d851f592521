use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Job families a candidate can apply for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Sales,
    Engineer,
    Marketing,
    Management,
    CustomerService,
    Design,
    Administration,
    Other,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Sales => "sales",
            JobType::Engineer => "engineer",
            JobType::Marketing => "marketing",
            JobType::Management => "management",
            JobType::CustomerService => "customer_service",
            JobType::Design => "design",
            JobType::Administration => "administration",
            JobType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub education: String,
    pub major: Option<String>,
    /// Free-text work history.
    pub experience: String,
    /// Free-text self-summary written by the candidate.
    pub self_pr: String,
    pub applied_job_type: JobType,
    pub aptitude: Option<AptitudeResult>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reliability {
    High,
    Medium,
    Low,
}

/// Raw aptitude (SPI) test result.
///
/// `language` and `non_verbal` are deviation-scale totals (typically 20–80).
/// Every personality score is on a 0–100 scale. Ranges are a caller contract
/// and are not re-checked by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AptitudeResult {
    pub language: f64,
    pub non_verbal: f64,
    pub reliability: Reliability,
    pub personality: Personality,
}

impl AptitudeResult {
    /// Combined ability score: mean of the language and non-verbal totals.
    pub fn total_score(&self) -> f64 {
        (self.language + self.non_verbal) / 2.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personality {
    pub behavioral: BehavioralTraits,
    pub cognitive: CognitiveTraits,
    pub emotional: EmotionalTraits,
    pub job_fit: JobFitScores,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralTraits {
    pub leadership: f64,
    pub teamwork: f64,
    pub communication: f64,
    pub initiative: f64,
    pub persistence: f64,
    pub adaptability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CognitiveTraits {
    pub analytical: f64,
    pub creative: f64,
    pub practical: f64,
    pub strategic: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionalTraits {
    pub stability: f64,
    pub stress_tolerance: f64,
    pub empathy: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFitScores {
    pub sales: f64,
    pub management: f64,
    pub technical: f64,
    pub creative: f64,
    pub service: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_serde_snake_case() {
        let job: JobType = serde_json::from_str(r#""customer_service""#).unwrap();
        assert_eq!(job, JobType::CustomerService);
        assert_eq!(job.as_str(), "customer_service");
    }

    #[test]
    fn test_unknown_job_type_rejected() {
        assert!(serde_json::from_str::<JobType>(r#""astronaut""#).is_err());
    }

    #[test]
    fn test_reliability_serde() {
        let r: Reliability = serde_json::from_str(r#""low""#).unwrap();
        assert_eq!(r, Reliability::Low);
    }
}
