//! Plant profile generator — prompt → completion → brace extraction → JSON.
//!
//! Pipeline:
//! 1. Build the system + user turns for the plant name
//! 2. One completion call (fixed model, temperature 0.7, no retry)
//! 3. Trim the first choice's text and log it
//! 4. Extract the embedded object (greedy by default, balanced if configured)
//! 5. Parse it as JSON
//! 6. Optionally check the 4-language × 9-field shape
//!
//! Every failure aborts the request; there is no partial result.

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::generation::extract::ExtractionMode;
use crate::generation::profile::validate_profile;
use crate::generation::prompts::{user_prompt, SYSTEM_PROMPT, TEMPERATURE};
use crate::llm_client::{ChatMessage, CompletionService, LlmError};

/// Why a generation failed. Kept for logs and tests; the HTTP boundary
/// collapses all of them into one response.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(LlmError),

    #[error("no JSON detected in model output")]
    NoJsonFound,

    #[error("malformed JSON in model output: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("profile does not match the expected shape: {0}")]
    SchemaMismatch(String),

    #[error("unexpected fault: {0}")]
    UnexpectedFault(String),
}

impl From<LlmError> for GenerationError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey | LlmError::Http(_) | LlmError::Api { .. } => {
                GenerationError::UpstreamUnavailable(err)
            }
            LlmError::Parse(_) | LlmError::EmptyContent => {
                GenerationError::UnexpectedFault(err.to_string())
            }
        }
    }
}

/// Knobs for the parsing half of the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationOptions {
    pub extraction: ExtractionMode,
    pub validate_schema: bool,
}

/// Generates a localized profile for `name`. The name is not validated.
pub async fn generate_plant_info(
    name: &str,
    llm: &dyn CompletionService,
    options: GenerationOptions,
) -> Result<Value, GenerationError> {
    let messages = [
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt(name)),
    ];

    let raw = llm.complete(&messages, TEMPERATURE).await?;
    let raw = raw.trim();

    info!(plant = %name, model = llm.model(), "raw model response:\n{raw}");

    parse_profile(raw, options)
}

/// Pure half of the pipeline: extracts, parses and (optionally) checks the profile.
pub fn parse_profile(raw: &str, options: GenerationOptions) -> Result<Value, GenerationError> {
    let candidate = options
        .extraction
        .extract(raw)
        .ok_or(GenerationError::NoJsonFound)?;

    let profile: Value = serde_json::from_str(candidate).map_err(GenerationError::MalformedJson)?;

    if options.validate_schema {
        validate_profile(&profile).map_err(GenerationError::SchemaMismatch)?;
    }

    Ok(profile)
}
