//! Runtime configuration loaded from environment variables.
//!
//! Environment lookup is confined to this module and invoked from the entry
//! point only; everything downstream receives credentials explicitly.

use crate::features::GenerationOptions;
use crate::figma;

/// Process configuration: required credentials plus generation tunables.
#[derive(Debug, Clone)]
pub struct Config {
    pub figma_token: String,
    pub figma_file_key: String,
    pub openai_api_key: String,
    pub figma_base_url: String,
    pub generation: GenerationOptions,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Returns `None` when any of `FIGMA_TOKEN`, `FIGMA_FILE_KEY` or
    /// `OPENAI_API_KEY` is missing or holds a placeholder value; the caller
    /// owns the guidance message. Optional tunables fall back to their
    /// defaults when absent or unparseable.
    pub fn from_env() -> Option<Self> {
        let figma_token = required_var("FIGMA_TOKEN")?;
        let figma_file_key = required_var("FIGMA_FILE_KEY")?;
        let openai_api_key = required_var("OPENAI_API_KEY")?;

        let figma_base_url = std::env::var("FIGMA_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| figma::DEFAULT_BASE_URL.to_string());

        let defaults = GenerationOptions::default();
        let generation = GenerationOptions {
            model: std::env::var("OPENAI_MODEL")
                .ok()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(defaults.model),
            temperature: parse_or(std::env::var("OPENAI_TEMPERATURE").ok(), defaults.temperature)
                .clamp(0.0, 2.0),
            max_tokens: parse_or(std::env::var("OPENAI_MAX_TOKENS").ok(), defaults.max_tokens),
        };

        Some(Self {
            figma_token,
            figma_file_key,
            openai_api_key,
            figma_base_url,
            generation,
        })
    }
}

fn required_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !is_placeholder(v))
}

/// Reject unset-looking credential values (empty, unexpanded templates, or
/// well-known placeholders) so a half-filled .env reads as "not configured".
fn is_placeholder(s: &str) -> bool {
    let t = s.trim();
    t.is_empty()
        || t.contains("${")
        || t.eq_ignore_ascii_case("your-api-key-here")
        || t.eq_ignore_ascii_case("changeme")
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
