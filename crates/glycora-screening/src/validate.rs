use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use glycora_core::models::indicator::Indicator;
use glycora_core::models::survey::SurveyRecord;

/// Inclusive bounds an indicator value is expected to fall in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// An out-of-bounds indicator value, reported but never fatal.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub indicator: Indicator,
    pub value: f64,
    pub expected_range: ValueRange,
    pub message: String,
}

/// The bounds enforced by the product's input form.
pub fn expected_range(indicator: Indicator) -> ValueRange {
    match indicator {
        Indicator::Bmi => ValueRange {
            min: 10.0,
            max: 60.0,
        },
        Indicator::Age => ValueRange {
            min: 1.0,
            max: 13.0,
        },
        Indicator::HighBp
        | Indicator::HighChol
        | Indicator::Smoker
        | Indicator::PhysActivity => ValueRange { min: 0.0, max: 1.0 },
    }
}

/// Check a record against the form bounds.
///
/// Advisory only: the classifier itself never rejects out-of-range values,
/// they simply participate in the threshold comparisons. Callers that want
/// to warn the respondent surface these.
pub fn validate(record: &SurveyRecord) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for indicator in Indicator::ALL {
        let value = record.value(indicator);
        let range = expected_range(indicator);
        if !range.contains(value) {
            errors.push(ValidationError {
                indicator,
                value,
                expected_range: range,
                message: format!(
                    "{} value {} is outside range [{}, {}]",
                    indicator.name(),
                    value,
                    range.min,
                    range.max,
                ),
            });
        }
    }
    errors
}
