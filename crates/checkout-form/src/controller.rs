//! Form Controller
//!
//! Wires field events to masks and validators and decides whether a submit
//! is accepted. The UI layer provides the fields and the notice dialogs; the
//! controller itself holds no per-field state.

use std::sync::Arc;

use checkout_plans::{PlanHandoff, SelectionStore};
use chrono::{Local, NaiveDate};

use crate::config::FormConfig;

/// An input element on the checkout form
pub trait FormField {
    fn id(&self) -> &str;

    fn value(&self) -> String;

    fn set_value(&self, value: &str);

    /// Whether the field currently shows the error marker
    fn is_marked_invalid(&self) -> bool;

    fn set_invalid(&self, invalid: bool);

    /// Clear the value
    fn reset(&self);
}

/// Blocking notices shown to the customer
pub trait Notifier {
    fn success(&self, message: &str);

    fn failure(&self, message: &str);
}

/// Result of a submit attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the form was reset
    Accepted,
    /// At least one field failed; ids in form order
    Rejected { invalid_fields: Vec<String> },
}

impl SubmitOutcome {
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

pub struct FormController<S: SelectionStore, N: Notifier> {
    config: FormConfig,
    handoff: Arc<PlanHandoff<S>>,
    notifier: N,
    /// Fixed reference date for expiry checks; local date when unset
    today: Option<NaiveDate>,
}

impl<S: SelectionStore, N: Notifier> FormController<S, N> {
    pub fn new(handoff: Arc<PlanHandoff<S>>, notifier: N) -> Self {
        Self::with_config(FormConfig::default(), handoff, notifier)
    }

    pub fn with_config(config: FormConfig, handoff: Arc<PlanHandoff<S>>, notifier: N) -> Self {
        Self {
            config,
            handoff,
            notifier,
            today: None,
        }
    }

    /// Pin the date expiry fields are checked against
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub const fn config(&self) -> &FormConfig {
        &self.config
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Validate a field and update its error marker
    pub fn validate_field<F: FormField>(&self, field: &F) -> bool {
        let spec = self.config.spec_for(field.id());
        let valid = spec.kind.validate_at(&field.value(), self.today());
        field.set_invalid(!valid);

        tracing::debug!(field = %spec.id, kind = ?spec.kind, valid, "Validated field");
        valid
    }

    /// Reformat the field as typed; re-check it if it is already marked
    ///
    /// The re-check runs on the masked and capped value, the one the
    /// customer actually sees.
    pub fn on_input<F: FormField>(&self, field: &F) {
        let spec = self.config.spec_for(field.id());
        let raw = field.value();
        let display = spec.display_value(&raw);

        if display != raw {
            field.set_value(&display);
        }

        if field.is_marked_invalid() {
            self.validate_field(field);
        }
    }

    pub fn on_blur<F: FormField>(&self, field: &F) -> bool {
        self.validate_field(field)
    }

    /// Validate every field and accept the form only if all pass
    ///
    /// Exactly one notice is shown either way. On success the fields are
    /// reset and the stored plan selection is cleared.
    pub fn on_submit<F: FormField>(&self, fields: &[F]) -> SubmitOutcome {
        let invalid_fields: Vec<String> = fields
            .iter()
            .filter(|field| !self.validate_field(*field))
            .map(|field| field.id().to_string())
            .collect();

        if !invalid_fields.is_empty() {
            tracing::info!(invalid = ?invalid_fields, "Checkout rejected");
            self.notifier.failure(&self.config.messages.failure);
            return SubmitOutcome::Rejected { invalid_fields };
        }

        self.notifier.success(&self.config.messages.success);
        for field in fields {
            field.reset();
        }

        if let Err(e) = self.handoff.clear() {
            tracing::warn!(error = %e, "Failed to clear stored plan selection");
        }

        tracing::info!(fields = fields.len(), "Checkout accepted");
        SubmitOutcome::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_plans::MemoryStore;
    use std::cell::{Cell, RefCell};

    struct TestField {
        id: &'static str,
        value: RefCell<String>,
        invalid: Cell<bool>,
    }

    impl TestField {
        fn new(id: &'static str, value: &str) -> Self {
            Self {
                id,
                value: RefCell::new(value.to_string()),
                invalid: Cell::new(false),
            }
        }
    }

    impl FormField for TestField {
        fn id(&self) -> &str {
            self.id
        }

        fn value(&self) -> String {
            self.value.borrow().clone()
        }

        fn set_value(&self, value: &str) {
            *self.value.borrow_mut() = value.to_string();
        }

        fn is_marked_invalid(&self) -> bool {
            self.invalid.get()
        }

        fn set_invalid(&self, invalid: bool) {
            self.invalid.set(invalid);
        }

        fn reset(&self) {
            self.value.borrow_mut().clear();
        }
    }

    struct Silent;

    impl Notifier for Silent {
        fn success(&self, _: &str) {}
        fn failure(&self, _: &str) {}
    }

    fn controller() -> FormController<MemoryStore, Silent> {
        let handoff = Arc::new(PlanHandoff::new(Arc::new(MemoryStore::new())));
        FormController::new(handoff, Silent)
            .with_today(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    #[test]
    fn test_input_masks_and_caps() {
        let controller = controller();
        let card = TestField::new("card-number", "41111111111111112");

        controller.on_input(&card);
        assert_eq!(card.value(), "4111 1111 1111 1111");
        assert!(!card.is_marked_invalid());
    }

    #[test]
    fn test_input_does_not_validate_unmarked_field() {
        let controller = controller();
        let cvv = TestField::new("cvv", "1");

        controller.on_input(&cvv);
        assert!(!cvv.is_marked_invalid());
    }

    #[test]
    fn test_input_revalidates_marked_field() {
        let controller = controller();
        let cvv = TestField::new("cvv", "1");

        assert!(!controller.on_blur(&cvv));
        assert!(cvv.is_marked_invalid());

        cvv.set_value("123");
        controller.on_input(&cvv);
        assert!(!cvv.is_marked_invalid());
    }

    #[test]
    fn test_blur_marks_and_clears() {
        let controller = controller();
        let email = TestField::new("email", "ana@");

        assert!(!controller.on_blur(&email));
        assert!(email.is_marked_invalid());

        email.set_value("ana@example.com");
        assert!(controller.on_blur(&email));
        assert!(!email.is_marked_invalid());
    }

    #[test]
    fn test_expiry_uses_pinned_date() {
        let controller = controller();
        let expiry = TestField::new("expiry-date", "10/26");
        assert!(!controller.on_blur(&expiry));

        expiry.set_value("11/26");
        assert!(controller.on_blur(&expiry));
    }

    #[test]
    fn test_submit_outcome() {
        let controller = controller();
        let fields = [TestField::new("name", "Ana"), TestField::new("cvv", "12")];

        let outcome = controller.on_submit(&fields);
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                invalid_fields: vec!["cvv".into()]
            }
        );
        assert!(!outcome.is_accepted());
        assert!(!fields[0].is_marked_invalid());
        assert!(fields[1].is_marked_invalid());
    }
}
