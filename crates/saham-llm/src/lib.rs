//! Inference provider abstraction layer for sahamlab
//!
//! This crate provides provider-agnostic abstractions for requesting
//! structured verdicts from hosted inference services. It includes:
//!
//! - Request/response types with a deterministic decoding policy
//! - A response-schema slot for structured JSON output
//! - Provider trait for inference implementations
//! - Concrete provider implementations (behind feature flags)

pub mod error;
pub mod provider;
pub mod request;

// Re-export main types
pub use error::{InferenceError, Result};
pub use provider::InferenceProvider;
pub use request::{DecodingPolicy, InferenceRequest, InferenceResponse, TokenUsage, FIXED_SEED};

// Provider implementations (feature-gated)
#[cfg(feature = "gemini")]
pub mod providers;
