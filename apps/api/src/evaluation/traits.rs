//! Named access to aptitude personality scores, so rule sets and job
//! weightings can be written as data tables instead of branches.

use serde::{Deserialize, Serialize};

use crate::models::candidate::{JobFitScores, Personality};

/// A single behavioral, cognitive or emotional personality trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    Leadership,
    Teamwork,
    Communication,
    Initiative,
    Persistence,
    Adaptability,
    Analytical,
    Creative,
    Practical,
    Strategic,
    Stability,
    StressTolerance,
    Empathy,
}

impl Trait {
    /// Scan order: behavioral, cognitive, emotional.
    pub const ALL: [Trait; 13] = [
        Trait::Leadership,
        Trait::Teamwork,
        Trait::Communication,
        Trait::Initiative,
        Trait::Persistence,
        Trait::Adaptability,
        Trait::Analytical,
        Trait::Creative,
        Trait::Practical,
        Trait::Strategic,
        Trait::Stability,
        Trait::StressTolerance,
        Trait::Empathy,
    ];

    pub fn value(&self, p: &Personality) -> f64 {
        match self {
            Trait::Leadership => p.behavioral.leadership,
            Trait::Teamwork => p.behavioral.teamwork,
            Trait::Communication => p.behavioral.communication,
            Trait::Initiative => p.behavioral.initiative,
            Trait::Persistence => p.behavioral.persistence,
            Trait::Adaptability => p.behavioral.adaptability,
            Trait::Analytical => p.cognitive.analytical,
            Trait::Creative => p.cognitive.creative,
            Trait::Practical => p.cognitive.practical,
            Trait::Strategic => p.cognitive.strategic,
            Trait::Stability => p.emotional.stability,
            Trait::StressTolerance => p.emotional.stress_tolerance,
            Trait::Empathy => p.emotional.empathy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trait::Leadership => "Leadership",
            Trait::Teamwork => "Teamwork",
            Trait::Communication => "Communication",
            Trait::Initiative => "Initiative",
            Trait::Persistence => "Persistence",
            Trait::Adaptability => "Adaptability",
            Trait::Analytical => "Analytical thinking",
            Trait::Creative => "Creative thinking",
            Trait::Practical => "Practical thinking",
            Trait::Strategic => "Strategic thinking",
            Trait::Stability => "Emotional stability",
            Trait::StressTolerance => "Stress tolerance",
            Trait::Empathy => "Empathy",
        }
    }
}

/// Job-fit sub-score areas, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobFitArea {
    Sales,
    Management,
    Technical,
    Creative,
    Service,
}

impl JobFitArea {
    pub const ALL: [JobFitArea; 5] = [
        JobFitArea::Sales,
        JobFitArea::Management,
        JobFitArea::Technical,
        JobFitArea::Creative,
        JobFitArea::Service,
    ];

    pub fn value(&self, scores: &JobFitScores) -> f64 {
        match self {
            JobFitArea::Sales => scores.sales,
            JobFitArea::Management => scores.management,
            JobFitArea::Technical => scores.technical,
            JobFitArea::Creative => scores.creative,
            JobFitArea::Service => scores.service,
        }
    }
}

/// Strict threshold test on one trait.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    Above(Trait, f64),
    Below(Trait, f64),
}

impl Condition {
    pub fn holds(&self, p: &Personality) -> bool {
        match *self {
            Condition::Above(t, threshold) => t.value(p) > threshold,
            Condition::Below(t, threshold) => t.value(p) < threshold,
        }
    }
}

/// Σ(trait × weight) over a weight table.
pub fn weighted_sum(p: &Personality, weights: &[(Trait, f64)]) -> f64 {
    weights.iter().map(|(t, w)| t.value(p) * w).sum()
}

/// Mean of the listed traits, 0 for an empty list.
pub fn mean_of(p: &Personality, traits: &[Trait]) -> f64 {
    if traits.is_empty() {
        return 0.0;
    }
    traits.iter().map(|t| t.value(p)).sum::<f64>() / traits.len() as f64
}
