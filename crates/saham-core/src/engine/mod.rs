//! Inference-backed engines
//!
//! Both engines share the same boundary discipline: one outbound call, no
//! retry, and a two-stage parse of the returned text. Stage one requires
//! valid JSON, stage two requires the typed shape. The stages map to
//! distinct failure kinds so the log can tell a broken transport from a
//! model that ignored the schema.

mod consistency;
mod gateway;

pub use consistency::{order_by_time, ConsistencyEngine};
pub use gateway::{AnalysisGateway, DEFAULT_MODEL};

use crate::error::AnalysisFailure;
use serde::de::DeserializeOwned;

/// Parse a response payload in two stages
///
/// Non-JSON text is a malformed response; JSON that fails typed
/// deserialization is a schema violation. The distinction is preserved for
/// logging even though both surface identically to the caller.
pub(crate) fn parse_payload<T: DeserializeOwned>(text: &str) -> Result<T, AnalysisFailure> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(AnalysisFailure::Malformed)?;
    serde_json::from_value(value).map_err(|e| AnalysisFailure::Schema(e.to_string()))
}
