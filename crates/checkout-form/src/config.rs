//! Form Configuration

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};
use crate::field::FieldSpec;

/// Notices shown after a submit attempt
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub success: String,
    pub failure: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            success: "Purchase completed successfully! You will receive a confirmation email shortly."
                .into(),
            failure: "Please correct the fields highlighted in red.".into(),
        }
    }
}

/// Checkout form layout
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Known fields; ids not listed here are validated as generic
    pub fields: Vec<FieldSpec>,
    pub messages: Messages,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            fields: ["name", "email", "phone", "card-number", "expiry-date", "cvv"]
                .into_iter()
                .map(FieldSpec::for_id)
                .collect(),
            messages: Messages::default(),
        }
    }
}

impl FormConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for spec in &self.fields {
            if spec.id.trim().is_empty() {
                return Err(FormError::Config("field id must not be empty".into()));
            }
            if !seen.insert(spec.id.as_str()) {
                return Err(FormError::Config(format!("duplicate field id: {}", spec.id)));
            }
        }
        Ok(())
    }

    /// Spec for `id`, derived from the id when not configured
    pub fn spec_for(&self, id: &str) -> FieldSpec {
        self.fields
            .iter()
            .find(|spec| spec.id == id)
            .cloned()
            .unwrap_or_else(|| FieldSpec::for_id(id))
    }
}
