use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Display settings applied to module results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorSettings {
    /// Suffix appended to finance results.
    pub currency: String,
    /// Suffix appended to ballistics distances.
    pub distance_unit: String,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            currency: "UAH".to_string(),
            distance_unit: "m".to_string(),
        }
    }
}

impl CalculatorSettings {
    /// Rejects blank unit suffixes, which would render as dangling spaces.
    pub fn validate(&self) -> Result<()> {
        if self.currency.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "currency must not be empty".to_string(),
            ));
        }
        if self.distance_unit.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "distance unit must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
