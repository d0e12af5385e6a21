//! Deterministic request composition
//!
//! Pure transformation from a validated input to the text and decoding
//! settings of one inference call. No I/O happens here and nothing here can
//! fail; malformed input is rejected earlier by the submission gate.

use crate::input::StockAnalysisInput;
use crate::prompts;
use saham_llm::DecodingPolicy;

/// The fully composed payload of one analysis call
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedRequest {
    /// System instruction: fixed framework plus the risk-policy clause
    pub instruction: String,
    /// User message with every input field interpolated verbatim
    pub prompt: String,
    /// Always the deterministic policy; not configurable per call
    pub decoding: DecodingPolicy,
}

/// Compose the inference request for one submitted input
pub fn compose(input: &StockAnalysisInput) -> ComposedRequest {
    ComposedRequest {
        instruction: prompts::analysis_instruction(input.risk_profile),
        prompt: prompts::analysis_prompt(input),
        decoding: DecodingPolicy::deterministic(),
    }
}
