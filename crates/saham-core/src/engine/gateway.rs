//! Analysis gateway
//!
//! One submitted input becomes exactly one inference call. The gateway
//! validates locally, composes the request, sends it with the deterministic
//! decoding policy and the structured-output schema, parses the reply, and
//! stamps local identity on the verdict. There is no retry and no fallback;
//! a failed call surfaces once, as a single opaque analysis error.

use crate::compose::compose;
use crate::engine::parse_payload;
use crate::error::{AnalysisFailure, Result, WorkbenchError};
use crate::input::StockAnalysisInput;
use crate::result::AnalysisResult;
use crate::schema::analysis_response_schema;
use saham_llm::{InferenceProvider, InferenceRequest};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Model used when the caller does not pick one
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gateway from validated input to a stamped verdict
pub struct AnalysisGateway {
    provider: Arc<dyn InferenceProvider>,
    model: String,
}

impl AnalysisGateway {
    /// Create a gateway over the given provider with the default model
    pub fn new(provider: Arc<dyn InferenceProvider>) -> Self {
        Self {
            provider,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Run one analysis round trip
    ///
    /// Transport, malformed-body, and schema failures all come back as
    /// [`WorkbenchError::Analysis`]; the internal kind is logged here and
    /// kept as the error source.
    #[instrument(skip(self, input), fields(ticker = %input.ticker, model = %self.model))]
    pub async fn analyze(&self, input: &StockAnalysisInput) -> Result<AnalysisResult> {
        input.submission_ready()?;
        let input = input.normalized();
        let composed = compose(&input);

        debug!(
            provider = self.provider.name(),
            prompt_chars = composed.prompt.len(),
            "Dispatching analysis request"
        );

        let request = InferenceRequest::builder(&self.model)
            .system(composed.instruction)
            .content(composed.prompt)
            .response_schema(analysis_response_schema())
            .decoding(composed.decoding)
            .build();

        let response = self.provider.complete(request).await.map_err(|e| {
            let failure = AnalysisFailure::Transport(e);
            warn!(kind = %failure, "Analysis call failed");
            WorkbenchError::Analysis(failure)
        })?;

        let mut result: AnalysisResult = parse_payload(&response.text).map_err(|failure| {
            warn!(kind = %failure, "Analysis response rejected");
            WorkbenchError::Analysis(failure)
        })?;

        result.stamp_identity();

        debug!(
            id = result.id.as_deref().unwrap_or(""),
            "Analysis verdict accepted"
        );
        Ok(result)
    }
}
