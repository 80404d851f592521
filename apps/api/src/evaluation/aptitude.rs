//! Aptitude Analyzer: turns raw SPI sub-scores into a job-fit analysis.
//!
//! Thresholds are tuning values and must stay stable between releases.
//! Rule tables are evaluated top to bottom and then capped.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluation::job_profiles::{profile_for, ABILITY_WEIGHT, BLEND_WEIGHTS};
use crate::evaluation::traits::{mean_of, weighted_sum, Condition, JobFitArea, Trait};
use crate::models::candidate::{AptitudeResult, JobType, Personality, Reliability};

use crate::evaluation::traits::Condition::{Above, Below};

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamFit {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AptitudeAnalysis {
    pub job_fit_score: u32, // 0 – 100
    pub strength_areas: Vec<String>,
    pub development_areas: Vec<String>,
    pub personality_insights: Vec<String>,
    pub recommended_role: String,
    pub team_fit: TeamFit,
    pub management_potential: u32, // 0 – 100
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Thresholds and rule tables
// ────────────────────────────────────────────────────────────────────────────

const STRENGTH_THRESHOLD: f64 = 70.0;
const DEVELOPMENT_THRESHOLD: f64 = 40.0;
const ABILITY_STRENGTH_THRESHOLD: f64 = 60.0;
const ROLE_THRESHOLD: f64 = 60.0;

const MAX_STRENGTHS: usize = 5;
const MAX_DEVELOPMENT_AREAS: usize = 3;
const MAX_INSIGHTS: usize = 4;
const MAX_RISKS: usize = 3;
const MAX_RECOMMENDATIONS: usize = 4;

const INSIGHT_RULES: &[([Condition; 2], &str)] = &[
    (
        [Above(Trait::Leadership, 60.0), Above(Trait::Teamwork, 60.0)],
        "Balances leadership with teamwork; can lead without isolating the team",
    ),
    (
        [Above(Trait::Initiative, 70.0), Above(Trait::Persistence, 70.0)],
        "Self-starter who stays resilient when work gets difficult",
    ),
    (
        [Above(Trait::Creative, 70.0), Below(Trait::Analytical, 50.0)],
        "Strong on ideas but light on analytical rigor; pair with data-driven colleagues",
    ),
    (
        [Above(Trait::Analytical, 70.0), Above(Trait::Practical, 70.0)],
        "Turns analysis into workable, practical solutions",
    ),
    (
        [Above(Trait::Empathy, 70.0), Above(Trait::Communication, 70.0)],
        "Builds rapport quickly with customers and colleagues",
    ),
    (
        [Above(Trait::Stability, 70.0), Above(Trait::StressTolerance, 70.0)],
        "Stays composed under sustained pressure",
    ),
];

struct RoleRule {
    area: JobFitArea,
    refined: Option<(Condition, &'static str)>,
    label: &'static str,
}

const ROLE_RULES: &[RoleRule] = &[
    RoleRule {
        area: JobFitArea::Sales,
        refined: Some((Above(Trait::Leadership, 70.0), "Sales team leader")),
        label: "Field sales",
    },
    RoleRule {
        area: JobFitArea::Management,
        refined: Some((Above(Trait::Leadership, 70.0), "Department manager")),
        label: "Project manager",
    },
    RoleRule {
        area: JobFitArea::Technical,
        refined: Some((Above(Trait::Creative, 70.0), "R&D engineer")),
        label: "Systems engineer",
    },
    RoleRule {
        area: JobFitArea::Creative,
        refined: Some((Above(Trait::Leadership, 70.0), "Creative director")),
        label: "Creative planner",
    },
    RoleRule {
        area: JobFitArea::Service,
        refined: None,
        label: "Customer success",
    },
];

const TEAM_FIT_WEIGHTS: &[(Trait, f64)] = &[
    (Trait::Teamwork, 0.30),
    (Trait::Communication, 0.25),
    (Trait::Empathy, 0.20),
    (Trait::Adaptability, 0.15),
    (Trait::Stability, 0.10),
];
const TEAM_FIT_HIGH: f64 = 65.0;
const TEAM_FIT_MEDIUM: f64 = 45.0;

const MANAGEMENT_WEIGHTS: &[(Trait, f64)] = &[
    (Trait::Leadership, 0.25),
    (Trait::Strategic, 0.20),
    (Trait::Communication, 0.15),
    (Trait::Stability, 0.15),
    (Trait::Initiative, 0.10),
    (Trait::StressTolerance, 0.05),
];
const MANAGEMENT_JOB_FIT_WEIGHT: f64 = 0.10;

const RISK_RULES: &[(Condition, &str)] = &[
    (
        Below(Trait::Stability, 30.0),
        "Low emotional stability; performance may swing under pressure",
    ),
    (
        Below(Trait::StressTolerance, 30.0),
        "Low stress tolerance; risk of burnout in high-pressure periods",
    ),
    (
        Below(Trait::Teamwork, 30.0),
        "Low teamwork; may struggle in collaborative assignments",
    ),
    (
        Below(Trait::Communication, 30.0),
        "Low communication; information sharing may break down",
    ),
    (
        Below(Trait::Adaptability, 30.0),
        "Low adaptability; may resist changes in role or process",
    ),
];
const LOW_RELIABILITY_RISK: &str =
    "Test responses have low reliability; verify key traits in interview";

const RECOMMENDATION_RULES: &[(Condition, &str)] = &[
    (
        Above(Trait::Leadership, 60.0),
        "Enroll in the leadership development track",
    ),
    (
        Above(Trait::Analytical, 60.0),
        "Assign analysis-heavy work such as planning or reporting",
    ),
    (
        Above(Trait::Communication, 60.0),
        "Place in client-facing or cross-team coordination work",
    ),
    (
        Below(Trait::StressTolerance, 50.0),
        "Provide stress-management support and regular check-ins after onboarding",
    ),
    (
        Below(Trait::Teamwork, 50.0),
        "Pair with a mentor to build collaboration habits",
    ),
    (
        Below(Trait::Practical, 50.0),
        "Start with hands-on assignments to build practical judgment",
    ),
];

// ────────────────────────────────────────────────────────────────────────────
// Analysis
// ────────────────────────────────────────────────────────────────────────────

/// Analyzes an aptitude result for a job type.
///
/// Returns `None` when no aptitude test was administered.
pub fn analyze_aptitude(
    aptitude: Option<&AptitudeResult>,
    job_type: JobType,
) -> Option<AptitudeAnalysis> {
    let aptitude = aptitude?;
    let personality = &aptitude.personality;

    let analysis = AptitudeAnalysis {
        job_fit_score: compute_job_fit_score(aptitude, job_type),
        strength_areas: strength_areas(aptitude),
        development_areas: development_areas(personality),
        personality_insights: personality_insights(personality),
        recommended_role: recommended_role(personality, job_type),
        team_fit: team_fit(personality),
        management_potential: management_potential(personality),
        risk_factors: risk_factors(aptitude),
        recommendations: recommendations(personality, job_type),
    };

    debug!(
        "Aptitude analysis for {}: job_fit={} team_fit={:?} management={}",
        job_type.as_str(),
        analysis.job_fit_score,
        analysis.team_fit,
        analysis.management_potential
    );

    Some(analysis)
}

/// Blends the job type's personality weighting 80/20 with the ability score.
pub fn compute_job_fit_score(aptitude: &AptitudeResult, job_type: JobType) -> u32 {
    let p = &aptitude.personality;

    let base = match profile_for(job_type).and_then(|profile| profile.fit) {
        Some(fit) => {
            BLEND_WEIGHTS.job_fit * fit.job_fit.value(&p.job_fit)
                + BLEND_WEIGHTS.cognitive * mean_of(p, &fit.cognitive)
                + BLEND_WEIGHTS.behavioral * mean_of(p, fit.behavioral)
        }
        None => {
            JobFitArea::ALL
                .iter()
                .map(|area| area.value(&p.job_fit))
                .sum::<f64>()
                / JobFitArea::ALL.len() as f64
        }
    };

    let ability = aptitude.total_score();
    to_percent(base * (1.0 - ABILITY_WEIGHT) + ability * ABILITY_WEIGHT)
}

fn strength_areas(aptitude: &AptitudeResult) -> Vec<String> {
    let mut strengths = Vec::new();
    if aptitude.language >= ABILITY_STRENGTH_THRESHOLD {
        strengths.push("Language ability".to_string());
    }
    if aptitude.non_verbal >= ABILITY_STRENGTH_THRESHOLD {
        strengths.push("Non-verbal ability".to_string());
    }
    strengths.extend(
        Trait::ALL
            .iter()
            .filter(|t| t.value(&aptitude.personality) >= STRENGTH_THRESHOLD)
            .map(|t| t.label().to_string()),
    );
    strengths.truncate(MAX_STRENGTHS);
    strengths
}

fn development_areas(p: &Personality) -> Vec<String> {
    Trait::ALL
        .iter()
        .filter(|t| t.value(p) < DEVELOPMENT_THRESHOLD)
        .take(MAX_DEVELOPMENT_AREAS)
        .map(|t| t.label().to_string())
        .collect()
}

fn personality_insights(p: &Personality) -> Vec<String> {
    INSIGHT_RULES
        .iter()
        .filter(|(conditions, _)| conditions.iter().all(|c| c.holds(p)))
        .take(MAX_INSIGHTS)
        .map(|(_, insight)| insight.to_string())
        .collect()
}

fn recommended_role(p: &Personality, job_type: JobType) -> String {
    // First maximum wins ties.
    let mut best = JobFitArea::ALL[0];
    for area in JobFitArea::ALL.iter().skip(1) {
        if area.value(&p.job_fit) > best.value(&p.job_fit) {
            best = *area;
        }
    }

    if best.value(&p.job_fit) > ROLE_THRESHOLD {
        if let Some(rule) = ROLE_RULES.iter().find(|r| r.area == best) {
            let label = match rule.refined {
                Some((condition, refined)) if condition.holds(p) => refined,
                _ => rule.label,
            };
            return label.to_string();
        }
    }

    profile_for(job_type)
        .map(|profile| profile.fallback_role)
        .unwrap_or("General staff")
        .to_string()
}

fn team_fit(p: &Personality) -> TeamFit {
    match weighted_sum(p, TEAM_FIT_WEIGHTS) {
        s if s >= TEAM_FIT_HIGH => TeamFit::High,
        s if s >= TEAM_FIT_MEDIUM => TeamFit::Medium,
        _ => TeamFit::Low,
    }
}

fn management_potential(p: &Personality) -> u32 {
    let score = weighted_sum(p, MANAGEMENT_WEIGHTS)
        + p.job_fit.management * MANAGEMENT_JOB_FIT_WEIGHT;
    to_percent(score)
}

fn risk_factors(aptitude: &AptitudeResult) -> Vec<String> {
    let mut risks: Vec<String> = RISK_RULES
        .iter()
        .filter(|(condition, _)| condition.holds(&aptitude.personality))
        .map(|(_, risk)| risk.to_string())
        .collect();
    if aptitude.reliability == Reliability::Low {
        risks.push(LOW_RELIABILITY_RISK.to_string());
    }
    risks.truncate(MAX_RISKS);
    risks
}

fn recommendations(p: &Personality, job_type: JobType) -> Vec<String> {
    let mut recs: Vec<String> = RECOMMENDATION_RULES
        .iter()
        .filter(|(condition, _)| condition.holds(p))
        .map(|(_, rec)| rec.to_string())
        .collect();
    if let Some(profile) = profile_for(job_type) {
        recs.push(profile.closing_recommendation.to_string());
    }
    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}

fn to_percent(score: f64) -> u32 {
    score.clamp(0.0, 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::test_support::flat_aptitude;

    #[test]
    fn test_absent_aptitude_returns_none() {
        assert!(analyze_aptitude(None, JobType::Sales).is_none());
    }

    #[test]
    fn test_present_aptitude_returns_analysis() {
        let apt = flat_aptitude(50.0, 50.0, 50.0);
        let analysis = analyze_aptitude(Some(&apt), JobType::Sales).unwrap();
        assert_eq!(analysis.job_fit_score, 50);
        assert_eq!(analysis.management_potential, 50);
    }

    #[test]
    fn test_sales_job_fit_blend() {
        let mut apt = flat_aptitude(50.0, 60.0, 40.0);
        let p = &mut apt.personality;
        p.job_fit.sales = 80.0;
        p.cognitive.practical = 70.0;
        p.cognitive.strategic = 50.0;
        p.behavioral.communication = 90.0;
        p.behavioral.initiative = 60.0;
        p.behavioral.persistence = 60.0;
        // base = 0.4×80 + 0.3×60 + 0.3×70 = 71; final = 71×0.8 + 50×0.2 = 66.8
        assert_eq!(compute_job_fit_score(&apt, JobType::Sales), 67);
    }

    #[test]
    fn test_engineer_uses_technical_fit() {
        let mut apt = flat_aptitude(50.0, 50.0, 50.0);
        apt.personality.job_fit.technical = 100.0;
        apt.personality.job_fit.sales = 0.0;
        // base = 0.4×100 + 0.3×50 + 0.3×50 = 70; final = 56 + 10 = 66
        assert_eq!(compute_job_fit_score(&apt, JobType::Engineer), 66);
        // Sales weighting ignores technical: base = 0 + 15 + 15 = 30 → 24 + 10
        assert_eq!(compute_job_fit_score(&apt, JobType::Sales), 34);
    }

    #[test]
    fn test_unweighted_fallback_for_unprofiled_job_type() {
        let mut apt = flat_aptitude(10.0, 60.0, 60.0);
        let jf = &mut apt.personality.job_fit;
        jf.sales = 20.0;
        jf.management = 40.0;
        jf.technical = 60.0;
        jf.creative = 80.0;
        jf.service = 100.0;
        // mean job-fit 60, ability 60 → 60
        assert_eq!(compute_job_fit_score(&apt, JobType::Administration), 60);
    }

    #[test]
    fn test_scores_clamped_to_range() {
        let apt = flat_aptitude(150.0, 120.0, 120.0);
        let analysis = analyze_aptitude(Some(&apt), JobType::Design).unwrap();
        assert_eq!(analysis.job_fit_score, 100);
        assert_eq!(analysis.management_potential, 100);

        let apt = flat_aptitude(-20.0, 0.0, 0.0);
        let analysis = analyze_aptitude(Some(&apt), JobType::Design).unwrap();
        assert_eq!(analysis.job_fit_score, 0);
        assert_eq!(analysis.management_potential, 0);
    }

    #[test]
    fn test_strengths_truncated_in_scan_order() {
        let apt = flat_aptitude(75.0, 65.0, 65.0);
        let analysis = analyze_aptitude(Some(&apt), JobType::Sales).unwrap();
        assert_eq!(
            analysis.strength_areas,
            vec![
                "Language ability",
                "Non-verbal ability",
                "Leadership",
                "Teamwork",
                "Communication"
            ]
        );
        assert!(analysis.development_areas.is_empty());
    }

    #[test]
    fn test_ability_below_60_not_a_strength() {
        let mut apt = flat_aptitude(50.0, 59.0, 45.0);
        apt.personality.emotional.empathy = 70.0;
        let analysis = analyze_aptitude(Some(&apt), JobType::Sales).unwrap();
        assert_eq!(analysis.strength_areas, vec!["Empathy"]);
    }

    #[test]
    fn test_development_areas_capped_at_three() {
        let apt = flat_aptitude(30.0, 50.0, 50.0);
        let analysis = analyze_aptitude(Some(&apt), JobType::Sales).unwrap();
        assert_eq!(
            analysis.development_areas,
            vec!["Leadership", "Teamwork", "Communication"]
        );
    }

    #[test]
    fn test_insights_capped_at_four_in_rule_order() {
        let apt = flat_aptitude(80.0, 50.0, 50.0);
        let analysis = analyze_aptitude(Some(&apt), JobType::Sales).unwrap();
        assert_eq!(analysis.personality_insights.len(), 4);
        assert!(analysis.personality_insights[0].contains("leadership with teamwork"));
        assert!(analysis.personality_insights[1].contains("resilient"));
        assert!(analysis.personality_insights[2].contains("practical solutions"));
    }

    #[test]
    fn test_creative_imbalance_insight() {
        let mut apt = flat_aptitude(60.0, 50.0, 50.0);
        apt.personality.cognitive.creative = 80.0;
        apt.personality.cognitive.analytical = 40.0;
        let analysis = analyze_aptitude(Some(&apt), JobType::Design).unwrap();
        assert_eq!(analysis.personality_insights.len(), 1);
        assert!(analysis.personality_insights[0].contains("analytical rigor"));
    }

    #[test]
    fn test_recommended_role_refined_by_creativity() {
        let mut apt = flat_aptitude(50.0, 50.0, 50.0);
        apt.personality.job_fit.technical = 75.0;
        apt.personality.cognitive.creative = 80.0;
        let analysis = analyze_aptitude(Some(&apt), JobType::Sales).unwrap();
        assert_eq!(analysis.recommended_role, "R&D engineer");
    }

    #[test]
    fn test_recommended_role_tie_takes_first_area() {
        let apt = flat_aptitude(70.0, 50.0, 50.0);
        // All job-fit areas tie at 70 → sales; leadership 70 is not > 70.
        let analysis = analyze_aptitude(Some(&apt), JobType::Engineer).unwrap();
        assert_eq!(analysis.recommended_role, "Field sales");
    }

    #[test]
    fn test_recommended_role_falls_back_to_job_type() {
        let apt = flat_aptitude(60.0, 50.0, 50.0);
        let analysis = analyze_aptitude(Some(&apt), JobType::Engineer).unwrap();
        assert_eq!(analysis.recommended_role, "Software engineer");
    }

    #[test]
    fn test_team_fit_classification() {
        let high = flat_aptitude(70.0, 50.0, 50.0);
        let medium = flat_aptitude(50.0, 50.0, 50.0);
        let low = flat_aptitude(30.0, 50.0, 50.0);
        assert_eq!(team_fit(&high.personality), TeamFit::High);
        assert_eq!(team_fit(&medium.personality), TeamFit::Medium);
        assert_eq!(team_fit(&low.personality), TeamFit::Low);
    }

    #[test]
    fn test_management_potential_weights() {
        let mut apt = flat_aptitude(0.0, 50.0, 50.0);
        apt.personality.behavioral.leadership = 100.0;
        apt.personality.job_fit.management = 100.0;
        // 100×0.25 + 100×0.10 = 35
        assert_eq!(management_potential(&apt.personality), 35);
    }

    #[test]
    fn test_risk_factors_capped_at_three() {
        let mut apt = flat_aptitude(20.0, 50.0, 50.0);
        apt.reliability = Reliability::Low;
        let risks = risk_factors(&apt);
        assert_eq!(risks.len(), 3);
        assert!(risks[0].contains("emotional stability"));
        assert!(risks[1].contains("stress tolerance"));
        assert!(risks[2].contains("teamwork"));
    }

    #[test]
    fn test_low_reliability_is_a_risk() {
        let mut apt = flat_aptitude(50.0, 50.0, 50.0);
        apt.reliability = Reliability::Low;
        assert_eq!(risk_factors(&apt), vec![LOW_RELIABILITY_RISK.to_string()]);
    }

    #[test]
    fn test_recommendations_include_closing_line() {
        let apt = flat_aptitude(70.0, 50.0, 50.0);
        let recs = recommendations(&apt.personality, JobType::Engineer);
        assert_eq!(recs.len(), 4);
        assert!(recs[0].contains("leadership"));
        assert_eq!(
            recs[3],
            profile_for(JobType::Engineer).unwrap().closing_recommendation
        );
    }

    #[test]
    fn test_recommendations_cap_drops_closing_line() {
        let mut apt = flat_aptitude(70.0, 50.0, 50.0);
        apt.personality.emotional.stress_tolerance = 40.0;
        let recs = recommendations(&apt.personality, JobType::Sales);
        assert_eq!(recs.len(), 4);
        assert!(recs[3].contains("stress-management"));
    }

    #[test]
    fn test_output_list_caps_hold() {
        for level in [0.0, 25.0, 50.0, 75.0, 100.0] {
            let mut apt = flat_aptitude(level, level, level);
            apt.reliability = Reliability::Low;
            let a = analyze_aptitude(Some(&apt), JobType::Management).unwrap();
            assert!(a.strength_areas.len() <= 5);
            assert!(a.development_areas.len() <= 3);
            assert!(a.personality_insights.len() <= 4);
            assert!(a.risk_factors.len() <= 3);
            assert!(a.recommendations.len() <= 4);
            assert!(a.job_fit_score <= 100);
            assert!(a.management_potential <= 100);
        }
    }
}
