use serde::{Deserialize, Serialize};

use crate::models::evaluation::{CriterionCategory, Evaluation, EvaluationCriterion};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: CriterionCategory,
    /// Mean score of the category's scored criteria, 0 when none are scored.
    pub average: f64,
    /// Sum of the weights of every criterion in the category.
    pub total_weight: f64,
    pub scored_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Unweighted mean of all submitted scores.
    pub total_score: f64,
    /// Σ(score × weight/100) / Σ(weight/100) over scored criteria.
    pub weighted_score: f64,
    pub scored_count: usize,
    /// Reporting only; not used for the final decision.
    pub categories: Vec<CategoryScore>,
}

/// Aggregates an evaluation's per-criterion scores against its criteria.
///
/// Every ratio short-circuits to 0 when its denominator is 0.
pub fn aggregate_scores(evaluation: &Evaluation, criteria: &[EvaluationCriterion]) -> ScoreSummary {
    let total_score = evaluation.average_score().unwrap_or(0.0);

    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for criterion in criteria {
        if let Some(&score) = evaluation.scores.get(&criterion.id) {
            let weight = criterion.weight / 100.0;
            weighted_sum += f64::from(score) * weight;
            weight_sum += weight;
        }
    }
    let weighted_score = if weight_sum > 0.0 {
        weighted_sum / weight_sum
    } else {
        0.0
    };

    let categories = CriterionCategory::ALL
        .iter()
        .map(|&category| category_score(evaluation, criteria, category))
        .collect();

    ScoreSummary {
        total_score,
        weighted_score,
        scored_count: evaluation.scores.len(),
        categories,
    }
}

fn category_score(
    evaluation: &Evaluation,
    criteria: &[EvaluationCriterion],
    category: CriterionCategory,
) -> CategoryScore {
    let in_category: Vec<&EvaluationCriterion> =
        criteria.iter().filter(|c| c.category == category).collect();

    let total_weight: f64 = in_category.iter().map(|c| c.weight).sum();
    let scores: Vec<f64> = in_category
        .iter()
        .filter_map(|c| evaluation.scores.get(&c.id))
        .map(|&s| f64::from(s))
        .collect();

    let average = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };

    CategoryScore {
        category,
        average,
        total_weight,
        scored_count: scores.len(),
    }
}
