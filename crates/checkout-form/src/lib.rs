//! # checkout-form
//!
//! Validation and input masking for the course checkout form.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    FormController                        │
//! │   on_input ──▶ mask ──▶ length cap ──▶ (re)validate      │
//! │   on_blur  ──▶ validate ──▶ error marker                 │
//! │   on_submit ─▶ validate all ──▶ notice + reset + clear   │
//! └───────┬──────────────────┬──────────────────┬────────────┘
//!         │                  │                  │
//!   ┌─────▼─────┐      ┌─────▼─────┐      ┌─────▼─────┐
//!   │ FormField │      │ FieldKind │      │ Notifier  │
//!   │  (UI)     │      │ validate/ │      │  (UI)     │
//!   └───────────┘      │   mask    │      └───────────┘
//!                      └───────────┘
//! ```
//!
//! Validators and masks are plain functions of their input, so they can be
//! used without any UI runtime:
//!
//! ```rust
//! use checkout_form::{mask, validate, FieldKind};
//!
//! assert_eq!(mask::mask_card("4111111111111111"), "4111 1111 1111 1111");
//! assert!(validate::validate_phone("(11) 91234-5678"));
//! assert!(!FieldKind::from_field_id("cvv").validate("12"));
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod mask;
pub mod validate;

pub use config::{FormConfig, Messages};
pub use controller::{FormController, FormField, Notifier, SubmitOutcome};
pub use error::{FormError, Result};
pub use field::{FieldKind, FieldSpec};
