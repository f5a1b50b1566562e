//! Field Kinds
//!
//! Maps checkout field identifiers to the validator and mask that apply.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{mask, validate};

/// Kind of a checkout form field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Email,
    Phone,
    CardNumber,
    ExpiryDate,
    Cvv,
    /// Free-text field that only has to be filled in
    Generic,
}

impl FieldKind {
    /// Static mapping from form field id; unknown ids are generic
    pub fn from_field_id(id: &str) -> Self {
        match id {
            "email" => Self::Email,
            "phone" => Self::Phone,
            "card-number" => Self::CardNumber,
            "expiry-date" => Self::ExpiryDate,
            "cvv" => Self::Cvv,
            _ => Self::Generic,
        }
    }

    /// Validate against today's local date
    pub fn validate(&self, raw: &str) -> bool {
        self.validate_at(raw, Local::now().date_naive())
    }

    /// Validate the trimmed value; `today` only matters for expiry dates
    pub fn validate_at(&self, raw: &str, today: NaiveDate) -> bool {
        let value = raw.trim();
        match self {
            Self::Email => validate::validate_email(value),
            Self::Phone => validate::validate_phone(value),
            Self::CardNumber => validate::validate_card(value),
            Self::ExpiryDate => validate::validate_expiry_at(value, today),
            Self::Cvv => validate::validate_cvv(value),
            Self::Generic => validate::validate_generic(value),
        }
    }

    /// Display form of `raw`, or `None` when the kind has no mask
    pub fn mask(&self, raw: &str) -> Option<String> {
        match self {
            Self::Phone => Some(mask::mask_phone(raw)),
            Self::CardNumber => Some(mask::mask_card(raw)),
            Self::ExpiryDate => Some(mask::mask_expiry(raw)),
            Self::Cvv => Some(mask::mask_cvv(raw)),
            Self::Email | Self::Generic => None,
        }
    }

    /// Input length cap imposed on the field element
    pub const fn default_max_len(&self) -> Option<usize> {
        match self {
            Self::CardNumber => Some(19),
            Self::ExpiryDate => Some(5),
            Self::Cvv => Some(4),
            Self::Email | Self::Phone | Self::Generic => None,
        }
    }
}

/// A field present on the checkout form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub max_len: Option<usize>,
}

impl FieldSpec {
    /// Spec derived from the id alone, with the kind's default length cap
    pub fn for_id(id: impl Into<String>) -> Self {
        let id = id.into();
        let kind = FieldKind::from_field_id(&id);
        Self {
            id,
            kind,
            max_len: kind.default_max_len(),
        }
    }

    /// Apply the kind's mask, then the length cap
    pub fn display_value(&self, raw: &str) -> String {
        let masked = self.kind.mask(raw).unwrap_or_else(|| raw.to_string());
        match self.max_len {
            Some(max) => masked.chars().take(max).collect(),
            None => masked,
        }
    }
}
