//! Input model and local validation
//!
//! Everything here is synchronous, pure, and runs before any network call:
//! the capital-fit advisory classifies, the submission gate rejects, and
//! neither touches the inference service.

use crate::error::{Result, WorkbenchError};
use serde::{Deserialize, Serialize};

/// Minimum trimmed length of the raw intelligence text before a request
/// becomes submission-eligible.
pub const MIN_INTELLIGENCE_LEN: usize = 50;

const MICRO_CAPITAL_CEILING: f64 = 150_000_000.0;
const RETAIL_CAPITAL_CEILING: f64 = 600_000_000.0;
const INSTITUTIONAL_CAPITAL_FLOOR: f64 = 1_000_000_000.0;

/// Coarse bucket of the user's investable capital
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapitalTier {
    Micro,
    Retail,
    HighNet,
    Institutional,
}

/// Policy selector altering valuation tolerance in the composed instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskProfile {
    Conservative,
    Balanced,
    Aggressive,
}

/// The eight fundamental ratios, entered as numeric strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fundamentals {
    pub roe: String,
    pub der: String,
    pub pbv: String,
    pub per: String,
    pub npm: String,
    pub growth: String,
    pub cfo: String,
    pub fcf: String,
}

impl Fundamentals {
    /// Field name / value pairs in display order
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("ROE", &self.roe),
            ("DER", &self.der),
            ("PBV", &self.pbv),
            ("PER", &self.per),
            ("NPM", &self.npm),
            ("Growth", &self.growth),
            ("CFO", &self.cfo),
            ("FCF", &self.fcf),
        ]
    }
}

/// Market-microstructure observations entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bandarmology {
    /// Order-book bid depth, free text
    pub order_book_bid: String,
    /// Order-book ask depth, free text
    pub order_book_ask: String,
    /// Aggressive-trade flow on the bid side, free text
    pub aggressive_bid: String,
    /// Aggressive-trade flow on the ask side, free text
    pub aggressive_ask: String,
    /// Sentiment score, 0-100
    pub sentiment_score: u8,
    /// Dominant broker codes, free text
    pub top_brokers: String,
    /// Accumulation duration, free text
    pub duration: String,
    /// Estimated dealer average cost price, numeric string
    pub avg_price: String,
}

/// One user-submitted analysis request
///
/// Constructed fresh per submission and never mutated after being handed to
/// the composer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAnalysisInput {
    pub ticker: String,
    pub price: String,
    pub capital: String,
    pub capital_tier: CapitalTier,
    pub risk_profile: RiskProfile,
    pub fundamentals: Fundamentals,
    pub bandarmology: Bandarmology,
    pub raw_intelligence: String,
}

impl StockAnalysisInput {
    /// Return a copy with the ticker trimmed and upper-cased
    pub fn normalized(&self) -> Self {
        let mut input = self.clone();
        input.ticker = input.ticker.trim().to_uppercase();
        input
    }

    /// Check whether this input is eligible for submission
    ///
    /// Pure predicate: ticker, price, and capital non-empty, all eight
    /// fundamentals non-empty, top-broker codes and average price non-empty,
    /// and the trimmed raw intelligence longer than
    /// [`MIN_INTELLIGENCE_LEN`]. Fails naming the first unmet field.
    pub fn submission_ready(&self) -> Result<()> {
        if self.ticker.trim().is_empty() {
            return Err(WorkbenchError::required("ticker"));
        }
        if self.price.trim().is_empty() {
            return Err(WorkbenchError::required("price"));
        }
        if self.capital.trim().is_empty() {
            return Err(WorkbenchError::required("capital"));
        }
        for (name, value) in self.fundamentals.fields() {
            if value.trim().is_empty() {
                return Err(WorkbenchError::Validation {
                    field: name,
                    reason: "is required",
                });
            }
        }
        if self.bandarmology.top_brokers.trim().is_empty() {
            return Err(WorkbenchError::required("topBrokers"));
        }
        if self.bandarmology.avg_price.trim().is_empty() {
            return Err(WorkbenchError::required("avgPrice"));
        }
        if self.raw_intelligence.trim().chars().count() <= MIN_INTELLIGENCE_LEN {
            return Err(WorkbenchError::Validation {
                field: "rawIntelligence",
                reason: "must be longer than 50 characters",
            });
        }
        Ok(())
    }
}

/// Severity of a capital-fit advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorySeverity {
    /// Treated as blocking by the collaborator; this layer only classifies
    Blocking,
    Warning,
    Invalid,
}

/// Advisory produced when capital and tier are mutually implausible
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalAdvisory {
    pub severity: AdvisorySeverity,
    pub message: &'static str,
}

/// Classify the fit between a capital amount and its declared tier
///
/// Pure function of its arguments; rules are evaluated in order and the
/// first match wins. An unparseable capital yields no advisory (emptiness
/// and form belong to the submission gate). This advisory never blocks by
/// itself; it is recomputed on every change to capital or tier.
pub fn capital_fit(capital: &str, tier: CapitalTier) -> Option<CapitalAdvisory> {
    let amount: f64 = capital.trim().parse().ok()?;

    match tier {
        CapitalTier::Micro if amount > MICRO_CAPITAL_CEILING => Some(CapitalAdvisory {
            severity: AdvisorySeverity::Blocking,
            message: "Capital too large for the MICRO tier",
        }),
        CapitalTier::Retail if amount > RETAIL_CAPITAL_CEILING => Some(CapitalAdvisory {
            severity: AdvisorySeverity::Warning,
            message: "Approaching HIGH_NET territory, consider upgrading the tier",
        }),
        CapitalTier::Institutional if amount < INSTITUTIONAL_CAPITAL_FLOOR => {
            Some(CapitalAdvisory {
                severity: AdvisorySeverity::Invalid,
                message: "INSTITUTIONAL tier requires capital of at least 1 billion",
            })
        }
        _ => None,
    }
}
