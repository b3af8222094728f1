use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::indicator::Indicator;

/// A single respondent's answers, as submitted to the prediction endpoint.
///
/// Field names on the wire match the dataset columns. `age` is the BRFSS
/// ordinal age category (1–13), not years. The four flags are 0/1;
/// `phys_activity` has inverted polarity — 1 means active, so risk is
/// flagged when it is 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurveyRecord {
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "Age")]
    pub age: u8,
    #[serde(rename = "HighBP")]
    pub high_bp: u8,
    #[serde(rename = "HighChol")]
    pub high_chol: u8,
    #[serde(rename = "Smoker")]
    pub smoker: u8,
    #[serde(rename = "PhysActivity")]
    pub phys_activity: u8,
}

impl SurveyRecord {
    /// Uniform numeric view of any indicator; the screening rules only ever
    /// compare numbers.
    pub fn value(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::Bmi => self.bmi,
            Indicator::Age => f64::from(self.age),
            Indicator::HighBp => f64::from(self.high_bp),
            Indicator::HighChol => f64::from(self.high_chol),
            Indicator::Smoker => f64::from(self.smoker),
            Indicator::PhysActivity => f64::from(self.phys_activity),
        }
    }

    /// Parse a record from a request payload.
    pub fn from_json(payload: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(payload)?)
    }
}
