//! Hand-off Configuration

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Where the selected plan travels between the two pages
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandoffConfig {
    /// Storage key holding the plan name
    pub storage_key: String,

    /// Query parameter carrying the plan name on the checkout URL
    pub query_param: String,

    /// Checkout page, relative to the landing page URL
    pub checkout_path: String,

    /// Shown when neither the URL nor storage carries a plan
    pub fallback_label: String,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            storage_key: "selectedPlan".into(),
            query_param: "plan".into(),
            checkout_path: "checkout".into(),
            fallback_label: "No plan selected".into(),
        }
    }
}

impl HandoffConfig {
    /// Parse overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(PlanError::Config("storage_key must not be empty".into()));
        }
        if self.query_param.trim().is_empty() {
            return Err(PlanError::Config("query_param must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config = HandoffConfig::from_json(r#"{"query_param": "p"}"#).unwrap();
        assert_eq!(config.query_param, "p");
        assert_eq!(config.storage_key, "selectedPlan");
    }

    #[test]
    fn test_rejects_empty_key() {
        let err = HandoffConfig::from_json(r#"{"storage_key": " "}"#).unwrap_err();
        assert!(matches!(err, PlanError::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            HandoffConfig::from_json("{"),
            Err(PlanError::Json(_))
        ));
    }
}
