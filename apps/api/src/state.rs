use std::sync::Arc;

use crate::config::Config;
use crate::evaluation::text_similarity::TextSimilarity;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no records: every request brings the snapshot it is evaluated against.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text similarity. Default: JaccardSimilarity.
    pub text_similarity: Arc<dyn TextSimilarity>,
}
