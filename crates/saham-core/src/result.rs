//! Verdict data model
//!
//! These types are the parsed form of the structured payload the inference
//! service returns. Missing required keys or out-of-enum values fail typed
//! deserialization at the gateway boundary; nothing is coerced. `id` and
//! `timestamp` are local identity, stamped after parsing and never trusted
//! from the wire.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Market-capitalization bucket assigned by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketCapCategory {
    #[serde(rename = "Small Cap")]
    SmallCap,
    #[serde(rename = "Mid Cap")]
    MidCap,
    #[serde(rename = "Big Cap")]
    BigCap,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

/// Predicted price direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredictionDirection {
    Up,
    Down,
    Consolidate,
    Unknown,
}

/// Trade horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Timeframe {
    Short,
    Medium,
    Long,
}

/// Actionability of a trade plan
///
/// `Forbidden` is terminal: entry/tp/sl values on a forbidden plan must not
/// be treated as actionable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanStatus {
    Recommended,
    Possible,
    Forbidden,
}

/// Trend classification over an ordered verdict history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendVerdict {
    Improving,
    Stable,
    Degrading,
    Volatile,
}

/// Price snapshot relative to the dealer average
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceInfo {
    pub current_price: String,
    pub bandar_avg_price: String,
    /// Signed percent difference between current and dealer average
    pub percent_diff: f64,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCapAnalysis {
    pub category: MarketCapCategory,
    pub behavior: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyDemand {
    /// 0-100
    pub bid_strength: u8,
    /// 0-100
    pub offer_strength: u8,
    pub verdict: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub direction: PredictionDirection,
    /// 0-100
    pub probability: u8,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressTest {
    pub passed: bool,
    /// 0-100
    pub score: u8,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerAnalysis {
    pub classification: String,
    pub insight: String,
}

/// One plan per timeframe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradePlan {
    pub verdict: String,
    pub entry: String,
    pub tp: String,
    pub sl: String,
    pub reasoning: String,
    pub status: PlanStatus,
}

impl TradePlan {
    /// Whether entry/exit values may be acted on
    pub fn is_actionable(&self) -> bool {
        self.status != PlanStatus::Forbidden
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub best_timeframe: Timeframe,
    pub short: TradePlan,
    pub medium: TradePlan,
    pub long: TradePlan,
}

/// Grounding citation attached by the inference service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub uri: String,
}

/// One produced verdict
///
/// Created once by the gateway per successful call and immutable afterwards,
/// except for archive-time re-stamping of id/timestamp on add or import.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Locally generated identity; absent only on legacy archive entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Milliseconds since epoch, captured locally at receipt
    #[serde(default)]
    pub timestamp: i64,

    pub ticker: String,
    pub price_info: PriceInfo,
    pub market_cap_analysis: MarketCapAnalysis,
    pub supply_demand: SupplyDemand,
    pub prediction: Prediction,
    pub stress_test: StressTest,
    pub broker_analysis: BrokerAnalysis,
    pub summary: String,
    pub bear_case: String,
    pub strategy: Strategy,
    pub full_analysis: String,

    /// Ordered grounding citations, may be empty
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl AnalysisResult {
    /// Identity key: id when present, ticker as the legacy fallback
    pub fn identity_key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.ticker)
    }

    /// Overwrite id and timestamp with fresh local values
    ///
    /// Whatever the wire happened to carry for either field is discarded.
    pub fn stamp_identity(&mut self) {
        self.id = Some(Uuid::new_v4().to_string());
        self.timestamp = Utc::now().timestamp_millis();
    }

    /// Assign a fresh id without touching the timestamp (import migration)
    pub fn assign_id(&mut self) {
        self.id = Some(Uuid::new_v4().to_string());
    }
}

/// Trend-consistency judgment over a verdict history
///
/// Produced fresh per consistency call and not archived.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyResult {
    pub ticker: String,
    /// Count of history entries considered
    pub data_points: usize,
    pub trend_verdict: TrendVerdict,
    /// 0-100
    pub consistency_score: u8,
    pub analysis: String,
    pub action_item: String,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[test]
    fn test_identity_key_falls_back_to_ticker() {
        let mut result = sample_result("BBCA");
        result.id = None;
        assert_eq!(result.identity_key(), "BBCA");

        result.id = Some("abc-123".to_string());
        assert_eq!(result.identity_key(), "abc-123");
    }

    #[test]
    fn test_stamp_identity_overwrites_wire_values() {
        let mut result = sample_result("BBCA");
        result.id = Some("model-invented".to_string());
        result.timestamp = 1;

        result.stamp_identity();

        assert_ne!(result.id.as_deref(), Some("model-invented"));
        assert!(result.timestamp > 1);
    }

    #[test]
    fn test_forbidden_plan_is_not_actionable() {
        let mut result = sample_result("BBCA");
        result.strategy.short.status = PlanStatus::Forbidden;
        assert!(!result.strategy.short.is_actionable());
        assert!(result.strategy.medium.is_actionable());
    }

    #[test]
    fn test_enum_wire_values() {
        assert_eq!(
            serde_json::to_string(&MarketCapCategory::BigCap).unwrap(),
            "\"Big Cap\""
        );
        assert_eq!(
            serde_json::to_string(&PredictionDirection::Consolidate).unwrap(),
            "\"CONSOLIDATE\""
        );
        assert_eq!(serde_json::to_string(&Timeframe::Medium).unwrap(), "\"MEDIUM\"");
        assert_eq!(
            serde_json::to_string(&TrendVerdict::Degrading).unwrap(),
            "\"DEGRADING\""
        );

        // out-of-enum values are rejected, not coerced
        assert!(serde_json::from_str::<PlanStatus>("\"MAYBE\"").is_err());
    }

    pub(crate) fn sample_result(ticker: &str) -> AnalysisResult {
        let plan = TradePlan {
            verdict: "Accumulate on weakness".to_string(),
            entry: "9150-9250".to_string(),
            tp: "9800".to_string(),
            sl: "8900".to_string(),
            reasoning: "Dealer average sits below market".to_string(),
            status: PlanStatus::Recommended,
        };

        AnalysisResult {
            id: Some(Uuid::new_v4().to_string()),
            timestamp: Utc::now().timestamp_millis(),
            ticker: ticker.to_string(),
            price_info: PriceInfo {
                current_price: "9250".to_string(),
                bandar_avg_price: "9100".to_string(),
                percent_diff: 1.65,
                status: "Above dealer average".to_string(),
            },
            market_cap_analysis: MarketCapAnalysis {
                category: MarketCapCategory::BigCap,
                behavior: "Institutional rotation".to_string(),
            },
            supply_demand: SupplyDemand {
                bid_strength: 70,
                offer_strength: 35,
                verdict: "Demand dominates".to_string(),
            },
            prediction: Prediction {
                direction: PredictionDirection::Up,
                probability: 68,
                reasoning: "Accumulation continues".to_string(),
            },
            stress_test: StressTest {
                passed: true,
                score: 81,
                details: "CFO confirms net income".to_string(),
            },
            broker_analysis: BrokerAnalysis {
                classification: "Accumulation".to_string(),
                insight: "Three institutional desks active".to_string(),
            },
            summary: "Constructive".to_string(),
            bear_case: "Breakdown below dealer average".to_string(),
            strategy: Strategy {
                best_timeframe: Timeframe::Medium,
                short: plan.clone(),
                medium: plan.clone(),
                long: plan,
            },
            full_analysis: "Full narrative".to_string(),
            sources: Vec::new(),
        }
    }
}
