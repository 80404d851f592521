// Candidate evaluation engine
// Implements: score aggregation, aptitude analysis, similarity matching, outcome prediction.
// Everything below handlers is synchronous and works on caller-supplied snapshots.

pub mod aptitude;
pub mod assessment;
pub mod criteria;
pub mod handlers;
pub mod history;
pub mod job_profiles;
pub mod matcher;
pub mod predictor;
pub mod score_aggregator;
pub mod text_similarity;
pub mod traits;

#[cfg(test)]
pub mod test_support;
