use std::sync::Arc;

use crate::ats::extractor::TextExtractor;
use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; concurrent ATS runs share only these handles.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generation backend. Default: `GeminiClient`.
    pub generator: Arc<dyn TextGenerator>,
    pub extractor: TextExtractor,
    pub config: Config,
}
