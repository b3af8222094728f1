use serde::{Deserialize, Serialize};

use glycora_core::models::indicator::Indicator;

/// Advice strings surfaced with an assessment, one per indicator, plus the
/// maintenance advice shown on a healthy profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationCatalog {
    #[serde(rename = "BMI")]
    pub bmi: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "HighBP")]
    pub high_bp: String,
    #[serde(rename = "HighChol")]
    pub high_chol: String,
    #[serde(rename = "Smoker")]
    pub smoker: String,
    #[serde(rename = "PhysActivity")]
    pub phys_activity: String,
    pub maintenance: String,
}

impl RecommendationCatalog {
    pub fn advice(&self, indicator: Indicator) -> &str {
        match indicator {
            Indicator::Bmi => &self.bmi,
            Indicator::Age => &self.age,
            Indicator::HighBp => &self.high_bp,
            Indicator::HighChol => &self.high_chol,
            Indicator::Smoker => &self.smoker,
            Indicator::PhysActivity => &self.phys_activity,
        }
    }

    pub fn maintenance(&self) -> &str {
        &self.maintenance
    }
}

impl Default for RecommendationCatalog {
    fn default() -> Self {
        Self {
            bmi: "Aim for a healthy weight through balanced meals and portion control."
                .to_string(),
            age: "Keep up regular blood sugar screenings; diabetes risk rises with age."
                .to_string(),
            high_bp: "Monitor your blood pressure regularly and limit sodium intake."
                .to_string(),
            high_chol: "Review your cholesterol with a clinician and cut down on saturated fats."
                .to_string(),
            smoker: "Consider a smoking cessation program; quitting lowers long-term risk."
                .to_string(),
            phys_activity: "Build up to at least 150 minutes of moderate activity per week."
                .to_string(),
            maintenance:
                "Maintain your current routine: balanced meals, regular activity, and an annual checkup."
                    .to_string(),
        }
    }
}
