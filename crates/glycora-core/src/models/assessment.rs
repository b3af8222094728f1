use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Risk tier assigned by the rule-based screening.
///
/// Serialized as the product's condition labels so the payload matches what
/// the frontend renders verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskTier {
    #[serde(rename = "High Concern (Diabetes Indicators)")]
    HighConcern,
    #[serde(rename = "Medium Concern (Pre-diabetes Indicators)")]
    MediumConcern,
    #[serde(rename = "Low Concern (At Risk)")]
    LowConcern,
    #[serde(rename = "Healthy Profile")]
    Healthy,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::HighConcern => "High Concern (Diabetes Indicators)",
            RiskTier::MediumConcern => "Medium Concern (Pre-diabetes Indicators)",
            RiskTier::LowConcern => "Low Concern (At Risk)",
            RiskTier::Healthy => "Healthy Profile",
        }
    }
}

/// Result of screening one survey record. Created fresh per call; nothing
/// about it is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub condition: RiskTier,
    pub explanation: String,
    pub recommendations: Vec<String>,
}
