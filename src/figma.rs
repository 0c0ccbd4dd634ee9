//! Figma REST API client.
//!
//! One authenticated read of `/files/{file_key}` returning the full document
//! tree. The client does no schema validation; downstream extraction works on
//! the raw JSON value.

use crate::error::{FigmaFeaturesError, Result};
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.figma.com/v1";

pub struct FigmaClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl FigmaClient {
    pub fn new(token: String) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(token: String, base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full document tree of a Figma file.
    ///
    /// Single attempt, no retries: a non-2xx response surfaces as
    /// [`FigmaFeaturesError::Api`] with the status and body.
    pub async fn get_file(&self, file_key: &str) -> Result<Value> {
        let url = format!("{}/files/{}", self.base_url, file_key);
        debug!("Fetching Figma file {}", file_key);

        let response = self
            .client
            .get(&url)
            .header("X-Figma-Token", &self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FigmaFeaturesError::Api {
                service: "Figma",
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
