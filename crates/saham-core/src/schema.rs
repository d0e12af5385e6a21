//! Structured-output schemas sent to the inference service
//!
//! These mirror the typed model in [`crate::result`]. The schema is advisory
//! toward the service; the authoritative check is typed deserialization at
//! the gateway, so a drift between the two surfaces as a schema violation
//! rather than silent coercion.

use serde_json::{json, Value};

/// Response schema for a full stock analysis call
///
/// Wire names and enum values must stay in lockstep with the serde
/// attributes on [`crate::result::AnalysisResult`].
pub fn analysis_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "ticker": { "type": "STRING" },
            "priceInfo": {
                "type": "OBJECT",
                "properties": {
                    "currentPrice": { "type": "STRING" },
                    "bandarAvgPrice": { "type": "STRING" },
                    "percentDiff": { "type": "NUMBER" },
                    "status": { "type": "STRING" }
                },
                "required": ["currentPrice", "bandarAvgPrice", "percentDiff", "status"]
            },
            "marketCapAnalysis": {
                "type": "OBJECT",
                "properties": {
                    "category": {
                        "type": "STRING",
                        "enum": ["Small Cap", "Mid Cap", "Big Cap", "UNKNOWN"]
                    },
                    "behavior": { "type": "STRING" }
                },
                "required": ["category", "behavior"]
            },
            "supplyDemand": {
                "type": "OBJECT",
                "properties": {
                    "bidStrength": { "type": "INTEGER" },
                    "offerStrength": { "type": "INTEGER" },
                    "verdict": { "type": "STRING" }
                },
                "required": ["bidStrength", "offerStrength", "verdict"]
            },
            "prediction": {
                "type": "OBJECT",
                "properties": {
                    "direction": {
                        "type": "STRING",
                        "enum": ["UP", "DOWN", "CONSOLIDATE", "UNKNOWN"]
                    },
                    "probability": { "type": "INTEGER" },
                    "reasoning": { "type": "STRING" }
                },
                "required": ["direction", "probability", "reasoning"]
            },
            "stressTest": {
                "type": "OBJECT",
                "properties": {
                    "passed": { "type": "BOOLEAN" },
                    "score": { "type": "INTEGER" },
                    "details": { "type": "STRING" }
                },
                "required": ["passed", "score", "details"]
            },
            "brokerAnalysis": {
                "type": "OBJECT",
                "properties": {
                    "classification": { "type": "STRING" },
                    "insight": { "type": "STRING" }
                },
                "required": ["classification", "insight"]
            },
            "summary": { "type": "STRING" },
            "bearCase": { "type": "STRING" },
            "strategy": {
                "type": "OBJECT",
                "properties": {
                    "bestTimeframe": {
                        "type": "STRING",
                        "enum": ["SHORT", "MEDIUM", "LONG"]
                    },
                    "short": trade_plan_schema(),
                    "medium": trade_plan_schema(),
                    "long": trade_plan_schema()
                },
                "required": ["bestTimeframe", "short", "medium", "long"]
            },
            "fullAnalysis": { "type": "STRING" }
        },
        "required": [
            "ticker",
            "priceInfo",
            "marketCapAnalysis",
            "supplyDemand",
            "prediction",
            "stressTest",
            "brokerAnalysis",
            "summary",
            "bearCase",
            "strategy",
            "fullAnalysis"
        ]
    })
}

/// Response schema for a trend-consistency call
pub fn consistency_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "ticker": { "type": "STRING" },
            "dataPoints": { "type": "INTEGER" },
            "trendVerdict": {
                "type": "STRING",
                "enum": ["IMPROVING", "STABLE", "DEGRADING", "VOLATILE"]
            },
            "consistencyScore": { "type": "INTEGER" },
            "analysis": { "type": "STRING" },
            "actionItem": { "type": "STRING" }
        },
        "required": [
            "ticker",
            "dataPoints",
            "trendVerdict",
            "consistencyScore",
            "analysis",
            "actionItem"
        ]
    })
}

fn trade_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "verdict": { "type": "STRING" },
            "entry": { "type": "STRING" },
            "tp": { "type": "STRING" },
            "sl": { "type": "STRING" },
            "reasoning": { "type": "STRING" },
            "status": {
                "type": "STRING",
                "enum": ["RECOMMENDED", "POSSIBLE", "FORBIDDEN"]
            }
        },
        "required": ["verdict", "entry", "tp", "sl", "reasoning", "status"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::tests::sample_result;

    #[test]
    fn test_analysis_schema_names_every_required_top_level_key() {
        let schema = analysis_response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        for key in [
            "ticker",
            "priceInfo",
            "supplyDemand",
            "prediction",
            "strategy",
            "fullAnalysis",
        ] {
            assert!(required.contains(&key), "missing {key}");
        }
        // identity is stamped locally and never requested from the wire
        assert!(!required.contains(&"id"));
        assert!(!required.contains(&"timestamp"));
    }

    #[test]
    fn test_schema_enums_match_serde_wire_values() {
        let schema = analysis_response_schema();

        let direction_enum = &schema["properties"]["prediction"]["properties"]["direction"]["enum"];
        for value in direction_enum.as_array().unwrap() {
            let parsed: Result<crate::result::PredictionDirection, _> =
                serde_json::from_value(value.clone());
            assert!(parsed.is_ok(), "unparseable direction {value}");
        }

        let status_enum =
            &schema["properties"]["strategy"]["properties"]["short"]["properties"]["status"]["enum"];
        for value in status_enum.as_array().unwrap() {
            let parsed: Result<crate::result::PlanStatus, _> =
                serde_json::from_value(value.clone());
            assert!(parsed.is_ok(), "unparseable status {value}");
        }
    }

    #[test]
    fn test_serialized_result_satisfies_schema_shape() {
        // a serialized sample must carry every key the schema requires
        let value = serde_json::to_value(sample_result("BBCA")).unwrap();
        let schema = analysis_response_schema();

        for key in schema["required"].as_array().unwrap() {
            let key = key.as_str().unwrap();
            assert!(value.get(key).is_some(), "sample lacks {key}");
        }
    }

    #[test]
    fn test_consistency_schema_requires_all_fields() {
        let schema = consistency_response_schema();
        assert_eq!(schema["required"].as_array().unwrap().len(), 6);
        assert_eq!(
            schema["properties"]["trendVerdict"]["enum"]
                .as_array()
                .unwrap()
                .len(),
            4
        );
    }
}
