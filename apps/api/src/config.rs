use anyhow::{Context, Result};

use crate::generation::extract::ExtractionMode;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Application configuration loaded from environment variables.
/// Fails at startup on malformed values. A missing API key is tolerated here and
/// only surfaces when the first completion is requested.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub port: u16,
    pub rust_log: String,
    /// `greedy` (first `{` to last `}`) or `balanced` (matching close brace).
    pub json_extraction: ExtractionMode,
    /// Reject LLM output that is not the full 4-language x 9-field profile.
    pub validate_profile_schema: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json_extraction: std::env::var("JSON_EXTRACTION")
                .unwrap_or_else(|_| "greedy".to_string())
                .parse::<ExtractionMode>()
                .map_err(|e| anyhow::anyhow!("JSON_EXTRACTION must be 'greedy' or 'balanced': {e}"))?,
            validate_profile_schema: parse_flag(
                "VALIDATE_PROFILE_SCHEMA",
                std::env::var("VALIDATE_PROFILE_SCHEMA").ok().as_deref(),
            )?,
        })
    }
}

/// Treats unset and blank variables the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(key: &str, value: Option<&str>) -> Result<bool> {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(v) => match v.as_str() {
            "" | "0" | "false" | "no" | "off" => Ok(false),
            "1" | "true" | "yes" | "on" => Ok(true),
            other => anyhow::bail!("{key} must be a boolean, got '{other}'"),
        },
    }
}
