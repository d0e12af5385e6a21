//! Gemini provider implementation
//!
//! This module implements the InferenceProvider trait for Google's Gemini
//! models via the generateContent endpoint.
//! See: https://ai.google.dev/api/generate-content
//!
//! # Examples
//!
//! ```no_run
//! use saham_llm::{InferenceRequest, InferenceProvider};
//! use saham_llm::providers::GeminiProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create provider from GEMINI_API_KEY environment variable
//!     let provider = GeminiProvider::from_env()?;
//!
//!     let request = InferenceRequest::builder("gemini-2.5-flash")
//!         .content("Classify the trend of this price series: 100, 102, 104")
//!         .build();
//!
//!     let response = provider.complete(request).await?;
//!     println!("{}", response.text);
//!
//!     Ok(())
//! }
//! ```

use crate::{
    InferenceError, InferenceProvider, InferenceRequest, InferenceResponse, Result, TokenUsage,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for Gemini provider
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication
    pub api_key: String,

    /// Base URL for the Gemini API (default: the v1beta endpoint)
    pub api_base: String,

    /// Request timeout in seconds (default: 120)
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Create a new config with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create config from environment variables
    ///
    /// Reads the API key from `GEMINI_API_KEY`. Optionally reads the base
    /// URL from `GEMINI_API_BASE` if set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            InferenceError::ConfigurationError(
                "GEMINI_API_KEY environment variable not set".to_string(),
            )
        })?;

        let api_base = std::env::var("GEMINI_API_BASE")
            .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string());

        Ok(Self {
            api_key,
            api_base,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Set custom API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Gemini provider
///
/// Supports the generateContent API with structured JSON output via
/// `responseSchema`, which the workbench relies on for verdict parsing.
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Create a new Gemini provider with custom configuration
    pub fn with_config(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a new Gemini provider with API key and default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(GeminiConfig::new(api_key))
    }

    /// Create a provider from the `GEMINI_API_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        let config = GeminiConfig::from_env()?;
        Self::with_config(config)
    }

    /// Get the current configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

#[async_trait]
impl InferenceProvider for GeminiProvider {
    #[instrument(skip(self, request), fields(model = %request.model, api_base = %self.config.api_base))]
    async fn complete(&self, request: InferenceRequest) -> Result<InferenceResponse> {
        debug!("Sending request to Gemini API at {}", self.config.api_base);

        let gemini_request = build_gemini_request(&request);

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.config.api_base, request.model
            ))
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;

            return Err(match status.as_u16() {
                401 | 403 => InferenceError::AuthenticationFailed,
                429 => InferenceError::RateLimitExceeded(error_text),
                400 => InferenceError::InvalidRequest(error_text),
                404 => InferenceError::ModelNotFound(request.model),
                _ => InferenceError::RequestFailed(format!("HTTP {status}: {error_text}")),
            });
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            InferenceError::UnexpectedResponse(format!("Failed to parse response: {e}"))
        })?;

        let candidate = gemini_response.candidates.into_iter().next().ok_or_else(|| {
            InferenceError::UnexpectedResponse("No candidates in response".to_string())
        })?;

        let text = candidate
            .content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(InferenceError::UnexpectedResponse(
                "Candidate contained no text parts".to_string(),
            ));
        }

        let usage = gemini_response.usage_metadata.map(|u| TokenUsage {
            input_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
        });

        debug!(
            "Received response - finish_reason: {}, {} chars",
            candidate.finish_reason.as_deref().unwrap_or("unknown"),
            text.len()
        );

        Ok(InferenceResponse {
            text: strip_json_fences(&text).to_string(),
            usage,
        })
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

/// Strip a markdown code fence the model sometimes wraps JSON output in
fn strip_json_fences(text: &str) -> &str {
    let trimmed = text.trim();
    if let Some(rest) = trimmed.strip_prefix("```json") {
        rest.trim_end_matches("```").trim()
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest.trim_end_matches("```").trim()
    } else {
        trimmed
    }
}

fn build_gemini_request(request: &InferenceRequest) -> GeminiRequest {
    let mut generation_config = GenerationConfig {
        temperature: request.decoding.temperature,
        top_k: request.decoding.top_k,
        top_p: request.decoding.top_p,
        seed: request.decoding.seed,
        max_output_tokens: request.max_output_tokens,
        response_mime_type: None,
        response_schema: None,
    };

    if let Some(schema) = &request.response_schema {
        generation_config.response_mime_type = Some("application/json".to_string());
        generation_config.response_schema = Some(schema.clone());
    }

    GeminiRequest {
        system_instruction: request.system.as_ref().map(|text| GeminiContent {
            role: None,
            parts: vec![GeminiPart { text: text.clone() }],
        }),
        contents: vec![GeminiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiPart {
                text: request.content.clone(),
            }],
        }],
        generation_config,
    }
}

// ============================================================================
// Gemini-specific request types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    seed: u64,
    max_output_tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

// ============================================================================
// Gemini-specific response types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: GeminiResponseContent,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: usize,
    #[serde(default)]
    candidates_token_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_defaults() {
        let config = GeminiConfig::new("test-key");
        assert_eq!(config.api_base, DEFAULT_GEMINI_API_BASE);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_request_body_carries_decoding_and_schema() {
        let request = InferenceRequest::builder("gemini-2.5-flash")
            .system("system text")
            .content("user text")
            .response_schema(json!({"type": "OBJECT"}))
            .build();

        let body = build_gemini_request(&request);
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["generationConfig"]["temperature"], 0.0);
        assert_eq!(value["generationConfig"]["topK"], 1);
        assert_eq!(value["generationConfig"]["seed"], 42);
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "system text");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "user text");
    }

    #[test]
    fn test_strip_json_fences() {
        assert_eq!(strip_json_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_json_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_json_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_response_parsing() {
        let raw = json!({
            "candidates": [{
                "content": {"parts": [{"text": "{\"verdict\":\"ok\"}"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 5}
        });

        let parsed: GeminiResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.candidates.len(), 1);
        assert_eq!(
            parsed.candidates[0].content.parts[0].text.as_deref(),
            Some("{\"verdict\":\"ok\"}")
        );
        assert_eq!(parsed.usage_metadata.unwrap().prompt_token_count, 10);
    }
}
