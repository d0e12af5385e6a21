//! Inference provider trait definition

use crate::{InferenceRequest, InferenceResponse, Result};
use async_trait::async_trait;

/// Trait for inference providers
///
/// Implementations of this trait provide access to hosted inference
/// services (e.g., Gemini, or an OpenAI-compatible deployment).
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Generate a completion from the inference service
    ///
    /// # Arguments
    ///
    /// * `request` - The request with content, schema, and decoding policy
    ///
    /// # Returns
    ///
    /// The response with the raw text payload and usage metadata
    async fn complete(&self, request: InferenceRequest) -> Result<InferenceResponse>;

    /// Get the provider name (e.g., "gemini")
    fn name(&self) -> &str;
}
