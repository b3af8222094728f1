use serde::{Deserialize, Serialize};

use glycora_core::models::indicator::Indicator;

/// Per-indicator numeric cutoffs for one sensitivity level.
///
/// Values are compared with `>=`, except PhysActivity which hits on exact
/// equality with its cutoff (0 flags inactivity on the 0/1 field).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable {
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "HighBP")]
    pub high_bp: f64,
    #[serde(rename = "HighChol")]
    pub high_chol: f64,
    #[serde(rename = "Smoker")]
    pub smoker: f64,
    #[serde(rename = "PhysActivity")]
    pub phys_activity: f64,
}

impl ThresholdTable {
    /// Cutoffs tuned for pre-diabetes sensitivity.
    pub const fn prediabetes() -> Self {
        Self {
            bmi: 30.0,
            age: 9.0,
            high_bp: 1.0,
            high_chol: 1.0,
            smoker: 1.0,
            phys_activity: 0.0,
        }
    }

    /// Cutoffs tuned for diabetes sensitivity.
    pub const fn diabetes() -> Self {
        Self {
            bmi: 31.0,
            age: 10.0,
            high_bp: 1.0,
            high_chol: 1.0,
            smoker: 1.0,
            phys_activity: 0.0,
        }
    }

    pub fn threshold(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::Bmi => self.bmi,
            Indicator::Age => self.age,
            Indicator::HighBp => self.high_bp,
            Indicator::HighChol => self.high_chol,
            Indicator::Smoker => self.smoker,
            Indicator::PhysActivity => self.phys_activity,
        }
    }

    /// Whether a value trips this table's cutoff for the given indicator.
    pub fn is_hit(&self, indicator: Indicator, value: f64) -> bool {
        match indicator {
            // Inverted polarity: the cutoff is 0 and only exact inactivity
            // hits. Must stay `==`, not `<=`.
            Indicator::PhysActivity => value == self.threshold(indicator),
            _ => value >= self.threshold(indicator),
        }
    }
}
