//! Workbench preferences
//!
//! Small user-level blob persisted alongside the vault. Everything has a
//! default so a missing or never-written file behaves like a fresh install.

use crate::input::{CapitalTier, RiskProfile};
use serde::{Deserialize, Serialize};

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchConfig {
    /// Tier pre-selected on a new submission form
    #[serde(default = "default_tier")]
    pub default_tier: CapitalTier,

    /// Risk profile pre-selected on a new submission form
    #[serde(default = "default_risk")]
    pub risk_profile: RiskProfile,

    /// Display name, free text, may be empty
    #[serde(default)]
    pub user_name: String,
}

fn default_tier() -> CapitalTier {
    CapitalTier::Retail
}

fn default_risk() -> RiskProfile {
    RiskProfile::Balanced
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            default_tier: default_tier(),
            risk_profile: default_risk(),
            user_name: String::new(),
        }
    }
}
