pub mod candidate;
pub mod evaluation;
