//! Trend-consistency engine
//!
//! The engine guarantees temporal ordering and precondition enforcement;
//! the trend classification and score come entirely from the model. History
//! is sorted by timestamp ascending with a stable sort, so entries sharing
//! a timestamp keep their original relative order.

use crate::engine::parse_payload;
use crate::error::{AnalysisFailure, Result, WorkbenchError};
use crate::prompts;
use crate::result::{AnalysisResult, ConsistencyResult};
use crate::schema::consistency_response_schema;
use saham_llm::{DecodingPolicy, InferenceProvider, InferenceRequest};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Fewest history entries a consistency check accepts
pub const MIN_HISTORY_LEN: usize = 2;

/// Sort a verdict history by timestamp ascending
///
/// Stable: ties keep their original relative order.
pub fn order_by_time(mut history: Vec<AnalysisResult>) -> Vec<AnalysisResult> {
    history.sort_by_key(|result| result.timestamp);
    history
}

/// Engine judging how a verdict history evolved over time
pub struct ConsistencyEngine {
    provider: Arc<dyn InferenceProvider>,
    model: String,
}

impl ConsistencyEngine {
    /// Create an engine over the given provider with the default model
    pub fn new(provider: Arc<dyn InferenceProvider>) -> Self {
        Self {
            provider,
            model: super::DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Judge the consistency of an ordered verdict history
    ///
    /// Requires at least [`MIN_HISTORY_LEN`] entries, all for one ticker.
    #[instrument(skip(self, history), fields(entries = history.len(), model = %self.model))]
    pub async fn run_consistency_check(
        &self,
        history: Vec<AnalysisResult>,
    ) -> Result<ConsistencyResult> {
        if history.len() < MIN_HISTORY_LEN {
            return Err(WorkbenchError::Selection(format!(
                "consistency check needs at least {MIN_HISTORY_LEN} entries, got {}",
                history.len()
            )));
        }

        let ticker = history[0].ticker.clone();
        if let Some(stray) = history.iter().find(|r| r.ticker != ticker) {
            return Err(WorkbenchError::Selection(format!(
                "history mixes tickers {ticker} and {}",
                stray.ticker
            )));
        }

        let ordered = order_by_time(history);
        let serialized = serde_json::to_string_pretty(&ordered)
            .map_err(|e| WorkbenchError::Analysis(AnalysisFailure::Malformed(e)))?;

        debug!(
            provider = self.provider.name(),
            ticker, "Dispatching consistency request"
        );

        let request = InferenceRequest::builder(&self.model)
            .system(prompts::consistency_instruction())
            .content(prompts::consistency_prompt(&ticker, &serialized))
            .response_schema(consistency_response_schema())
            .decoding(DecodingPolicy::deterministic())
            .build();

        let response = self.provider.complete(request).await.map_err(|e| {
            let failure = AnalysisFailure::Transport(e);
            warn!(kind = %failure, "Consistency call failed");
            WorkbenchError::Analysis(failure)
        })?;

        parse_payload(&response.text).map_err(|failure| {
            warn!(kind = %failure, "Consistency response rejected");
            WorkbenchError::Analysis(failure)
        })
    }
}
