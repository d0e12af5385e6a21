//! Inference request and response types

use serde::{Deserialize, Serialize};

/// Seed passed to the decoder so that repeated calls with identical input
/// reproduce the same completion.
pub const FIXED_SEED: u64 = 42;

/// Decoding parameters for an inference call
///
/// The workbench always analyzes with [`DecodingPolicy::deterministic`]:
/// greedy sampling with a pinned seed, so a verdict can be reproduced from
/// the same input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodingPolicy {
    /// Sampling temperature (0.0-1.0)
    pub temperature: f32,

    /// Number of highest-probability tokens considered at each step
    pub top_k: u32,

    /// Nucleus sampling probability mass
    pub top_p: f32,

    /// Decoder seed
    pub seed: u64,
}

impl DecodingPolicy {
    /// The fixed deterministic tuple: most-probable-token-only sampling
    /// over a narrow nucleus, pinned seed.
    pub const fn deterministic() -> Self {
        Self {
            temperature: 0.0,
            top_k: 1,
            top_p: 0.1,
            seed: FIXED_SEED,
        }
    }
}

impl Default for DecodingPolicy {
    fn default() -> Self {
        Self::deterministic()
    }
}

/// Request for a structured inference completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Model identifier (provider-specific)
    pub model: String,

    /// System instruction describing the analytical framework
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// User content to analyze
    pub content: String,

    /// JSON schema the response text must conform to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,

    /// Decoding parameters
    pub decoding: DecodingPolicy,

    /// Maximum tokens to generate
    pub max_output_tokens: usize,
}

/// Response from an inference completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceResponse {
    /// Raw text payload produced by the model
    pub text: String,

    /// Token usage statistics, when the provider reports them
    pub usage: Option<TokenUsage>,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of input tokens
    pub input_tokens: usize,

    /// Number of output tokens
    pub output_tokens: usize,
}

impl TokenUsage {
    /// Total tokens used (input + output)
    pub fn total(&self) -> usize {
        self.input_tokens + self.output_tokens
    }
}

impl InferenceRequest {
    /// Create a builder for inference requests
    pub fn builder(model: impl Into<String>) -> InferenceRequestBuilder {
        InferenceRequestBuilder::new(model)
    }
}

/// Builder for InferenceRequest
pub struct InferenceRequestBuilder {
    model: String,
    system: Option<String>,
    content: String,
    response_schema: Option<serde_json::Value>,
    decoding: DecodingPolicy,
    max_output_tokens: usize,
}

impl InferenceRequestBuilder {
    /// Create a new builder
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system: None,
            content: String::new(),
            response_schema: None,
            decoding: DecodingPolicy::deterministic(),
            max_output_tokens: 8192,
        }
    }

    /// Set the system instruction
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the user content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the expected response schema
    pub fn response_schema(mut self, schema: serde_json::Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    /// Set the decoding policy
    pub fn decoding(mut self, decoding: DecodingPolicy) -> Self {
        self.decoding = decoding;
        self
    }

    /// Set the maximum output tokens
    pub fn max_output_tokens(mut self, max_output_tokens: usize) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Build the inference request
    pub fn build(self) -> InferenceRequest {
        InferenceRequest {
            model: self.model,
            system: self.system,
            content: self.content,
            response_schema: self.response_schema,
            decoding: self.decoding,
            max_output_tokens: self.max_output_tokens,
        }
    }
}
