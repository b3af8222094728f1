use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the six survey indicators used for risk screening.
///
/// The variant order is the canonical evaluation order; every iteration in
/// the system goes through [`Indicator::ALL`] so that explanations and
/// recommendation lists come out in a stable, predictable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Indicator {
    #[serde(rename = "BMI")]
    Bmi,
    Age,
    #[serde(rename = "HighBP")]
    HighBp,
    HighChol,
    Smoker,
    PhysActivity,
}

impl Indicator {
    /// All indicators, in canonical evaluation order.
    pub const ALL: [Indicator; 6] = [
        Indicator::Bmi,
        Indicator::Age,
        Indicator::HighBp,
        Indicator::HighChol,
        Indicator::Smoker,
        Indicator::PhysActivity,
    ];

    /// The dataset column name, as it appears in survey payloads and
    /// assessment explanations.
    pub fn name(&self) -> &'static str {
        match self {
            Indicator::Bmi => "BMI",
            Indicator::Age => "Age",
            Indicator::HighBp => "HighBP",
            Indicator::HighChol => "HighChol",
            Indicator::Smoker => "Smoker",
            Indicator::PhysActivity => "PhysActivity",
        }
    }
}

impl FromStr for Indicator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Indicator::ALL
            .into_iter()
            .find(|i| i.name() == s)
            .ok_or_else(|| CoreError::UnknownIndicator(s.to_string()))
    }
}
