use std::sync::Arc;

use crate::generation::generator::GenerationOptions;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup, so concurrent requests need no locking.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `LlmClient` in production, scripted doubles in tests.
    pub llm: Arc<dyn CompletionService>,
    pub generation: GenerationOptions,
}
