//! glycora-screening
//!
//! Threshold tables, advice catalog, and the rule-based risk classifier.
//! Pure data and comparisons — no model inference, no I/O. The statistical
//! prediction lives in the serving layer; this crate only explains which
//! survey indicators look concerning and what to do about them.

pub mod error;
pub mod policy;
pub mod recommendations;
pub mod thresholds;
pub mod validate;

use glycora_core::models::assessment::{Assessment, RiskTier};
use glycora_core::models::indicator::Indicator;
use glycora_core::models::survey::SurveyRecord;

use crate::error::ScreeningError;
use crate::policy::ScreeningPolicy;

const HEALTHY_EXPLANATION: &str =
    "None of the provided health indicators raised a risk flag.";

/// Rule-based risk classifier over a fixed [`ScreeningPolicy`].
///
/// Stateless after construction: `assess` reads only the immutable policy,
/// so one classifier can serve any number of concurrent callers.
pub struct RiskClassifier {
    policy: ScreeningPolicy,
}

impl RiskClassifier {
    pub fn new(policy: ScreeningPolicy) -> Self {
        Self { policy }
    }

    /// Screen one survey record.
    ///
    /// Total over any well-typed record: out-of-range values are not
    /// rejected, they participate in the same comparisons. See
    /// [`validate::validate`] for the advisory bounds check.
    pub fn assess(&self, record: &SurveyRecord) -> Assessment {
        let mut prediabetes_hits: Vec<Indicator> = Vec::new();
        let mut diabetes_hits: Vec<Indicator> = Vec::new();

        for indicator in Indicator::ALL {
            let value = record.value(indicator);
            if self.policy.prediabetes.is_hit(indicator, value) {
                prediabetes_hits.push(indicator);
            }
            if self.policy.diabetes.is_hit(indicator, value) {
                diabetes_hits.push(indicator);
            }
        }

        // First matching tier wins; the diabetes table outranks the
        // pre-diabetes table whenever it has four or more hits.
        let (condition, affected) = if diabetes_hits.len() >= 4 {
            (RiskTier::HighConcern, diabetes_hits)
        } else if prediabetes_hits.len() >= 3 {
            (RiskTier::MediumConcern, prediabetes_hits)
        } else if !prediabetes_hits.is_empty() {
            (RiskTier::LowConcern, prediabetes_hits)
        } else {
            (RiskTier::Healthy, Vec::new())
        };

        tracing::debug!(
            tier = condition.label(),
            flagged = affected.len(),
            "survey record screened"
        );

        if affected.is_empty() {
            return Assessment {
                condition,
                explanation: HEALTHY_EXPLANATION.to_string(),
                recommendations: vec![self.policy.catalog.maintenance().to_string()],
            };
        }

        let names: Vec<&str> = affected.iter().map(|i| i.name()).collect();
        Assessment {
            condition,
            explanation: format!(
                "The following factors contributed to this assessment: {}.",
                names.join(", ")
            ),
            recommendations: affected
                .iter()
                .map(|&i| self.policy.catalog.advice(i).to_string())
                .collect(),
        }
    }

    /// Screen a record straight from a request payload.
    pub fn assess_json(&self, payload: &str) -> Result<Assessment, ScreeningError> {
        let record = SurveyRecord::from_json(payload)?;
        Ok(self.assess(&record))
    }
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::new(ScreeningPolicy::default())
    }
}
