use std::sync::Arc;

use crate::extraction::extractor::CandidateExtractor;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both collaborators are trait objects so handlers and the pipeline never
/// depend on a concrete service or database implementation.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn CandidateExtractor>,
    pub store: Arc<dyn ResumeStore>,
}
