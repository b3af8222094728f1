use serde::{Deserialize, Serialize};

use crate::error::ScreeningError;
use crate::recommendations::RecommendationCatalog;
use crate::thresholds::ThresholdTable;

/// The immutable configuration bundle a classifier is built from: both
/// threshold tables and the advice catalog.
///
/// [`ScreeningPolicy::default`] yields the product's fixed values; a
/// deployment can also inject its own via [`ScreeningPolicy::from_json`].
/// Either way the policy never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningPolicy {
    pub prediabetes: ThresholdTable,
    pub diabetes: ThresholdTable,
    #[serde(default)]
    pub catalog: RecommendationCatalog,
}

impl ScreeningPolicy {
    pub fn from_json(payload: &str) -> Result<Self, ScreeningError> {
        Ok(serde_json::from_str(payload)?)
    }
}

impl Default for ScreeningPolicy {
    fn default() -> Self {
        Self {
            prediabetes: ThresholdTable::prediabetes(),
            diabetes: ThresholdTable::diabetes(),
            catalog: RecommendationCatalog::default(),
        }
    }
}
