//! Feature suggestion generation via the OpenAI chat completion API.
//!
//! Turns a list of frame names into a single prompt, sends one completion
//! request, and normalizes the model's textual reply into feature records.
//! Normalization is a separate pure step so the parse-failure fallback can be
//! tested without a network.

use crate::error::{FigmaFeaturesError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const SYSTEM_PERSONA: &str = "You are a helpful product manager.";

/// Substituted when an array element has no usable title.
const DEFAULT_TITLE: &str = "Untitled Feature";
/// Title of the single diagnostic record produced for unparseable replies.
const FALLBACK_TITLE: &str = "Model response";

/// A generated feature suggestion; both fields are always populated after
/// normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSuggestion {
    pub title: String,
    pub description: String,
}

/// Tunable generation parameters for the completion call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            temperature: 0.2,
            max_tokens: 512,
        }
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
    n: u8,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

pub struct FeatureGenerator {
    client: reqwest::Client,
    api_key: String,
    options: GenerationOptions,
}

impl FeatureGenerator {
    pub fn new(api_key: String, options: GenerationOptions) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            api_key,
            options,
        })
    }

    /// Generate feature suggestions for the given frame names.
    ///
    /// An empty input short-circuits to an empty result without any network
    /// call. A non-success response surfaces as [`FigmaFeaturesError::Api`];
    /// a reply the model failed to format as JSON does not — it becomes a
    /// single diagnostic record (see [`normalize_features`]).
    pub async fn generate(&self, frame_names: &[String]) -> Result<Vec<FeatureSuggestion>> {
        if frame_names.is_empty() {
            return Ok(Vec::new());
        }

        let prompt = build_prompt(frame_names);
        debug!(
            "Requesting feature suggestions (model={}, frames={})",
            self.options.model,
            frame_names.len()
        );

        let body = ChatRequest {
            model: &self.options.model,
            temperature: self.options.temperature,
            max_tokens: self.options.max_tokens,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PERSONA,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            n: 1,
        };

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FigmaFeaturesError::Api {
                service: "OpenAI",
                status: status.as_u16(),
                body,
            });
        }

        let data: ChatResponse = response.json().await?;
        let content = data
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(normalize_features(&content))
    }
}

/// Format the frame names into the completion prompt.
pub fn build_prompt(frame_names: &[String]) -> String {
    let frames_formatted = frame_names
        .iter()
        .map(|name| format!("- {}", name))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "The following is a list of design sections extracted from a Figma file. \
         For each section, suggest a concise feature title and a short description \
         (one sentence) suitable for inclusion in a product requirements document. \
         Respond with a JSON array where each element has 'title' and 'description' \
         fields.\n\nDesign sections:\n{}\n",
        frames_formatted
    )
}

/// Normalize the model's reply into feature records.
///
/// A JSON array keeps its object elements (missing fields defaulted) and
/// silently drops everything else. Any reply that is not a JSON array becomes
/// a single diagnostic record carrying the raw text, so callers always get a
/// well-formed list.
pub fn normalize_features(content: &str) -> Vec<FeatureSuggestion> {
    let items = match serde_json::from_str::<Value>(content) {
        Ok(Value::Array(items)) => items,
        Ok(_) => return Vec::new(),
        Err(_) => {
            return vec![FeatureSuggestion {
                title: FALLBACK_TITLE.to_string(),
                description: content.to_string(),
            }];
        }
    };

    items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            Some(FeatureSuggestion {
                title: obj
                    .get("title")
                    .and_then(Value::as_str)
                    .unwrap_or(DEFAULT_TITLE)
                    .to_string(),
                description: obj
                    .get("description")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_input_short_circuits_without_network() {
        let generator =
            FeatureGenerator::new("sk-test".to_string(), GenerationOptions::default()).unwrap();
        let features = generator.generate(&[]).await.unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn prompt_contains_framing_and_bulleted_names() {
        let prompt = build_prompt(&["Login".to_string(), "Checkout".to_string()]);
        assert!(prompt.contains("Design sections:\n- Login\n- Checkout"));
        assert!(prompt.contains("JSON array"));
        assert!(prompt.contains("'title' and 'description'"));
    }

    #[test]
    fn valid_array_is_normalized_with_defaults() {
        let features = normalize_features(r#"[{"title":"Login flow"}]"#);
        assert_eq!(
            features,
            vec![FeatureSuggestion {
                title: "Login flow".to_string(),
                description: "".to_string(),
            }]
        );
    }

    #[test]
    fn missing_title_gets_placeholder() {
        let features = normalize_features(r#"[{"description":"Lets users sign in."}]"#);
        assert_eq!(features[0].title, "Untitled Feature");
        assert_eq!(features[0].description, "Lets users sign in.");
    }

    #[test]
    fn non_object_elements_are_dropped() {
        let features = normalize_features(r#"[{"title":"A"}, "noise", 3, null, {"title":"B"}]"#);
        let titles: Vec<&str> = features.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn order_matches_model_output() {
        let features = normalize_features(r#"[{"title":"First"},{"title":"Second"}]"#);
        assert_eq!(features[0].title, "First");
        assert_eq!(features[1].title, "Second");
    }

    #[test]
    fn malformed_reply_becomes_diagnostic_record() {
        let features = normalize_features("not json");
        assert_eq!(
            features,
            vec![FeatureSuggestion {
                title: "Model response".to_string(),
                description: "not json".to_string(),
            }]
        );
    }

    #[test]
    fn valid_non_array_json_yields_no_features() {
        assert!(normalize_features(r#"{"title":"Lone object"}"#).is_empty());
        assert!(normalize_features("42").is_empty());
    }
}
