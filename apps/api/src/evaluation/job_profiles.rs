//! Per-job-type aptitude weighting table.
//!
//! Adding a job type is a new row here, not a new branch in the analyzer.

use crate::evaluation::traits::{JobFitArea, Trait};
use crate::models::candidate::JobType;

/// Weights of the three personality sub-blocks in the job-fit base score.
#[derive(Debug, Clone, Copy)]
pub struct BlendWeights {
    pub job_fit: f64,
    pub cognitive: f64,
    pub behavioral: f64,
}

pub const BLEND_WEIGHTS: BlendWeights = BlendWeights {
    job_fit: 0.4,
    cognitive: 0.3,
    behavioral: 0.3,
};

/// Share of the normalized ability score in the final job-fit score.
pub const ABILITY_WEIGHT: f64 = 0.2;

/// Trait selection for one job type's job-fit blend.
#[derive(Debug, Clone, Copy)]
pub struct FitWeighting {
    pub job_fit: JobFitArea,
    pub cognitive: [Trait; 2],
    pub behavioral: &'static [Trait],
}

#[derive(Debug, Clone, Copy)]
pub struct JobProfile {
    pub job_type: JobType,
    /// `None` falls back to the unweighted mean of all job-fit sub-scores.
    pub fit: Option<FitWeighting>,
    /// Role label used when no job-fit area is strong enough.
    pub fallback_role: &'static str,
    pub closing_recommendation: &'static str,
}

pub const JOB_PROFILES: &[JobProfile] = &[
    JobProfile {
        job_type: JobType::Sales,
        fit: Some(FitWeighting {
            job_fit: JobFitArea::Sales,
            cognitive: [Trait::Practical, Trait::Strategic],
            behavioral: &[Trait::Communication, Trait::Initiative, Trait::Persistence],
        }),
        fallback_role: "Sales representative",
        closing_recommendation: "Shadow senior account managers on client visits during the first quarter",
    },
    JobProfile {
        job_type: JobType::Engineer,
        fit: Some(FitWeighting {
            job_fit: JobFitArea::Technical,
            cognitive: [Trait::Analytical, Trait::Practical],
            behavioral: &[Trait::Persistence, Trait::Adaptability],
        }),
        fallback_role: "Software engineer",
        closing_recommendation: "Run a hands-on technical assignment to confirm practical skill",
    },
    JobProfile {
        job_type: JobType::Marketing,
        fit: Some(FitWeighting {
            job_fit: JobFitArea::Creative,
            cognitive: [Trait::Creative, Trait::Strategic],
            behavioral: &[Trait::Communication, Trait::Initiative],
        }),
        fallback_role: "Marketing planner",
        closing_recommendation: "Review a campaign proposal to check both creativity and data use",
    },
    JobProfile {
        job_type: JobType::Management,
        fit: Some(FitWeighting {
            job_fit: JobFitArea::Management,
            cognitive: [Trait::Strategic, Trait::Analytical],
            behavioral: &[Trait::Leadership, Trait::Communication, Trait::Teamwork],
        }),
        fallback_role: "Management trainee",
        closing_recommendation: "Probe past people-management situations in a structured interview",
    },
    JobProfile {
        job_type: JobType::CustomerService,
        fit: Some(FitWeighting {
            job_fit: JobFitArea::Service,
            cognitive: [Trait::Practical, Trait::Analytical],
            behavioral: &[Trait::Communication, Trait::Teamwork, Trait::Adaptability],
        }),
        fallback_role: "Customer support specialist",
        closing_recommendation: "Use a role-play with a difficult customer to observe composure",
    },
    JobProfile {
        job_type: JobType::Design,
        fit: Some(FitWeighting {
            job_fit: JobFitArea::Creative,
            cognitive: [Trait::Creative, Trait::Analytical],
            behavioral: &[Trait::Initiative, Trait::Persistence],
        }),
        fallback_role: "Designer",
        closing_recommendation: "Walk through the portfolio to understand the design process",
    },
    JobProfile {
        job_type: JobType::Administration,
        fit: None,
        fallback_role: "Administrative staff",
        closing_recommendation: "Confirm accuracy with a short document-processing exercise",
    },
    JobProfile {
        job_type: JobType::Other,
        fit: None,
        fallback_role: "General staff",
        closing_recommendation: "Clarify career goals to find the best-matching department",
    },
];

pub fn profile_for(job_type: JobType) -> Option<&'static JobProfile> {
    JOB_PROFILES.iter().find(|p| p.job_type == job_type)
}
