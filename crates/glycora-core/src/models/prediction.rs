use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::assessment::Assessment;

/// The three outcome classes of the statistical model, matching the
/// dataset's 0/1/2 coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiabetesClass {
    NoDiabetes,
    Prediabetes,
    Diabetes,
}

impl DiabetesClass {
    pub fn code(&self) -> u8 {
        match self {
            DiabetesClass::NoDiabetes => 0,
            DiabetesClass::Prediabetes => 1,
            DiabetesClass::Diabetes => 2,
        }
    }

    pub fn from_code(code: i64) -> Result<Self, CoreError> {
        match code {
            0 => Ok(DiabetesClass::NoDiabetes),
            1 => Ok(DiabetesClass::Prediabetes),
            2 => Ok(DiabetesClass::Diabetes),
            other => Err(CoreError::InvalidClassCode(other)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiabetesClass::NoDiabetes => "Low Risk: No Diabetes",
            DiabetesClass::Prediabetes => "Medium Risk: Pre-diabetes",
            DiabetesClass::Diabetes => "High Risk: Diabetes",
        }
    }
}

/// Full prediction payload: the model's class and confidence next to the
/// rule-based assessment. This is the shape the serving layer returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionReport {
    pub prediction: u8,
    pub prediction_label: String,
    pub confidence_score: String,
    pub assessment: Assessment,
}

impl PredictionReport {
    pub fn new(class: DiabetesClass, confidence_score: String, assessment: Assessment) -> Self {
        Self {
            prediction: class.code(),
            prediction_label: class.label().to_string(),
            confidence_score,
            assessment,
        }
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}
