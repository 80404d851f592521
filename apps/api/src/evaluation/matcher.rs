//! Similarity Matcher: ranks decided historical candidates by how closely
//! they resemble a target candidate.
//!
//! Raw score (points):
//!   job type match 40 · education 10 · major 10 · experience 20 ·
//!   self-PR 15 · age proximity 5 · aptitude proximity 10
//!
//! The raw score is normalized against a basis of 100, or 90 when either
//! side has no aptitude result, and clamped to [0, 100].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluation::text_similarity::TextSimilarity;
use crate::models::candidate::{Candidate, JobType};
use crate::models::evaluation::{Evaluation, HistoricalCandidate};

const JOB_TYPE_POINTS: f64 = 40.0;
const EDUCATION_POINTS: f64 = 10.0;
const MAJOR_POINTS: f64 = 10.0;
const EXPERIENCE_POINTS: f64 = 20.0;
const SELF_PR_POINTS: f64 = 15.0;
const APTITUDE_POINTS: f64 = 10.0;

const FULL_BASIS: f64 = 100.0;

/// (max age gap in years, points)
const AGE_STEPS: &[(u32, f64)] = &[(3, 5.0), (7, 3.0), (10, 1.0)];
/// (max aptitude total gap, points)
const APTITUDE_STEPS: &[(f64, f64)] = &[(5.0, 10.0), (10.0, 7.0), (15.0, 4.0), (20.0, 2.0)];

// Reason thresholds
const EDUCATION_REASON: f64 = 0.5;
const MAJOR_REASON: f64 = 0.5;
const EXPERIENCE_REASON: f64 = 0.4;
const SELF_PR_REASON: f64 = 0.3;
const AGE_REASON_GAP: u32 = 3;
const APTITUDE_REASON_GAP: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarCandidate {
    pub candidate: Candidate,
    pub evaluation: Evaluation,
    pub similarity_score: f64, // 0 – 100
    pub reasons: Vec<String>,
}

/// Field-by-field comparison of two candidates; feeds both score and reasons.
#[derive(Debug, Clone)]
struct PairComparison {
    job_type: Option<JobType>,
    education: f64,
    major: Option<f64>,
    experience: f64,
    self_pr: f64,
    age_gap: u32,
    aptitude_gap: Option<f64>,
}

impl PairComparison {
    fn score(&self) -> f64 {
        let mut raw = 0.0;
        if self.job_type.is_some() {
            raw += JOB_TYPE_POINTS;
        }
        raw += self.education * EDUCATION_POINTS;
        raw += self.major.unwrap_or(0.0) * MAJOR_POINTS;
        raw += self.experience * EXPERIENCE_POINTS;
        raw += self.self_pr * SELF_PR_POINTS;
        raw += age_points(self.age_gap);

        let basis = match self.aptitude_gap {
            Some(gap) => {
                raw += aptitude_points(gap);
                FULL_BASIS
            }
            None => FULL_BASIS - APTITUDE_POINTS,
        };

        (raw / basis * 100.0).clamp(0.0, 100.0)
    }

    fn reasons(&self) -> Vec<String> {
        let mut reasons = Vec::new();
        if let Some(job_type) = self.job_type {
            reasons.push(format!("Applied for the same job type ({})", job_type.as_str()));
        }
        if self.education > EDUCATION_REASON {
            reasons.push("Similar educational background".to_string());
        }
        if self.major.is_some_and(|m| m > MAJOR_REASON) {
            reasons.push("Similar field of study".to_string());
        }
        if self.experience > EXPERIENCE_REASON {
            reasons.push("Similar work experience".to_string());
        }
        if self.self_pr > SELF_PR_REASON {
            reasons.push("Similar self-PR".to_string());
        }
        if self.age_gap <= AGE_REASON_GAP {
            reasons.push(format!("Close in age ({} years apart)", self.age_gap));
        }
        if let Some(gap) = self.aptitude_gap {
            if gap <= APTITUDE_REASON_GAP {
                reasons.push(format!("Similar aptitude test results ({gap:.1} points apart)"));
            }
        }
        reasons
    }
}

fn age_points(gap: u32) -> f64 {
    AGE_STEPS
        .iter()
        .find(|(max_gap, _)| gap <= *max_gap)
        .map(|(_, points)| *points)
        .unwrap_or(0.0)
}

fn aptitude_points(gap: f64) -> f64 {
    APTITUDE_STEPS
        .iter()
        .find(|(max_gap, _)| gap <= *max_gap)
        .map(|(_, points)| *points)
        .unwrap_or(0.0)
}

/// Multi-factor candidate similarity over a caller-supplied history pool.
pub struct SimilarityMatcher<'a> {
    text: &'a dyn TextSimilarity,
}

impl<'a> SimilarityMatcher<'a> {
    pub fn new(text: &'a dyn TextSimilarity) -> Self {
        Self { text }
    }

    fn compare(&self, a: &Candidate, b: &Candidate) -> PairComparison {
        let major = match (a.major.as_deref(), b.major.as_deref()) {
            (Some(ma), Some(mb)) => Some(self.text.similarity(ma, mb)),
            _ => None,
        };
        let aptitude_gap = match (&a.aptitude, &b.aptitude) {
            (Some(x), Some(y)) => Some((x.total_score() - y.total_score()).abs()),
            _ => None,
        };

        PairComparison {
            job_type: (a.applied_job_type == b.applied_job_type).then_some(a.applied_job_type),
            education: self.text.similarity(&a.education, &b.education),
            major,
            experience: self.text.similarity(&a.experience, &b.experience),
            self_pr: self.text.similarity(&a.self_pr, &b.self_pr),
            age_gap: a.age.abs_diff(b.age),
            aptitude_gap,
        }
    }

    /// Returns the `limit` most similar pool entries, highest score first.
    ///
    /// The pool must already be restricted to completed, decided evaluations
    /// and must not contain the target. Equal scores keep pool order.
    pub fn find_similar(
        &self,
        target: &Candidate,
        pool: &[HistoricalCandidate],
        limit: usize,
    ) -> Vec<SimilarCandidate> {
        if pool.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(&HistoricalCandidate, PairComparison, f64)> = pool
            .iter()
            .map(|entry| {
                let comparison = self.compare(target, &entry.candidate);
                let score = comparison.score();
                (entry, comparison, score)
            })
            .collect();

        // sort_by is stable, so ties keep pool order.
        scored.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);

        debug!(
            "Matched {} of {} historical candidates for {}",
            scored.len(),
            pool.len(),
            target.id
        );

        scored
            .into_iter()
            .map(|(entry, comparison, similarity_score)| SimilarCandidate {
                candidate: entry.candidate.clone(),
                evaluation: entry.evaluation.clone(),
                similarity_score,
                reasons: comparison.reasons(),
            })
            .collect()
    }
}

#[cfg(test)]
impl SimilarityMatcher<'_> {
    fn similarity_score(&self, a: &Candidate, b: &Candidate) -> f64 {
        self.compare(a, b).score()
    }

    fn similarity_reasons(&self, a: &Candidate, b: &Candidate) -> Vec<String> {
        self.compare(a, b).reasons()
    }
}
