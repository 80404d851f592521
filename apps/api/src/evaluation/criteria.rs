//! Built-in evaluation criteria per job type. Used when the caller does not
//! supply its own criteria list. Weights per job type sum to 100.

use crate::models::candidate::JobType;
use crate::models::evaluation::{CriterionCategory, EvaluationCriterion};

use crate::models::evaluation::CriterionCategory::{CultureFit, Personality, Skill};

/// (id, category, weight, label, description)
type CriterionRow = (&'static str, CriterionCategory, f64, &'static str, &'static str);

const COMMON: &[CriterionRow] = &[
    ("communication", Personality, 20.0, "Communication", "Explains ideas clearly and listens actively"),
    ("motivation", Personality, 15.0, "Motivation", "Shows drive and a clear reason for applying"),
    ("culture_fit", CultureFit, 15.0, "Culture fit", "Values and working style match the team"),
];

const SALES: &[CriterionRow] = &[
    ("negotiation", Skill, 30.0, "Negotiation", "Handles objections and closes deals"),
    ("customer_focus", Skill, 20.0, "Customer focus", "Understands and anticipates client needs"),
];

const ENGINEER: &[CriterionRow] = &[
    ("technical_skill", Skill, 35.0, "Technical skill", "Depth in the required technologies"),
    ("problem_solving", Skill, 15.0, "Problem solving", "Breaks down unfamiliar problems methodically"),
];

const MARKETING: &[CriterionRow] = &[
    ("market_analysis", Skill, 25.0, "Market analysis", "Reads data and market signals accurately"),
    ("planning", Skill, 25.0, "Planning", "Designs campaigns with measurable goals"),
];

const MANAGEMENT: &[CriterionRow] = &[
    ("leadership", Skill, 30.0, "Leadership", "Sets direction and develops people"),
    ("decision_making", Skill, 20.0, "Decision making", "Makes sound calls under uncertainty"),
];

const CUSTOMER_SERVICE: &[CriterionRow] = &[
    ("hospitality", Skill, 30.0, "Hospitality", "Treats every customer with care"),
    ("issue_resolution", Skill, 20.0, "Issue resolution", "Resolves complaints calmly and completely"),
];

const DESIGN: &[CriterionRow] = &[
    ("creativity", Skill, 30.0, "Creativity", "Produces original, on-brief ideas"),
    ("portfolio_quality", Skill, 20.0, "Portfolio quality", "Craft and finish of past work"),
];

const ADMINISTRATION: &[CriterionRow] = &[
    ("accuracy", Skill, 30.0, "Accuracy", "Processes work without errors"),
    ("organization", Skill, 20.0, "Organization", "Keeps schedules, records and priorities in order"),
];

const GENERAL: &[CriterionRow] = &[
    ("job_knowledge", Skill, 30.0, "Job knowledge", "Understands what the role requires"),
    ("learning_ability", Skill, 20.0, "Learning ability", "Picks up new skills quickly"),
];

const CATALOG: &[(JobType, &[CriterionRow])] = &[
    (JobType::Sales, SALES),
    (JobType::Engineer, ENGINEER),
    (JobType::Marketing, MARKETING),
    (JobType::Management, MANAGEMENT),
    (JobType::CustomerService, CUSTOMER_SERVICE),
    (JobType::Design, DESIGN),
    (JobType::Administration, ADMINISTRATION),
    (JobType::Other, GENERAL),
];

/// Ordered default criteria for a job type: role-specific skills first, then
/// the criteria shared by every role.
pub fn default_criteria(job_type: JobType) -> Vec<EvaluationCriterion> {
    let specific = CATALOG
        .iter()
        .find(|(jt, _)| *jt == job_type)
        .map(|(_, rows)| *rows)
        .unwrap_or(GENERAL);

    specific
        .iter()
        .chain(COMMON.iter())
        .map(|&(id, category, weight, label, description)| EvaluationCriterion {
            id: id.to_string(),
            category,
            weight,
            label: label.to_string(),
            description: description.to_string(),
        })
        .collect()
}
