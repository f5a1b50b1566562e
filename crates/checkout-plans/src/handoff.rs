//! Plan Hand-off
//!
//! The landing page records the chosen plan and redirects to checkout with
//! the plan in the query string. The checkout page reads it back, preferring
//! the URL, then the store, then a fixed fallback label.

use std::sync::Arc;

use url::Url;

use crate::config::HandoffConfig;
use crate::error::{PlanError, Result};
use crate::store::SelectionStore;

/// Carries a plan selection from the landing page to checkout
pub struct PlanHandoff<S: SelectionStore> {
    store: Arc<S>,
    config: HandoffConfig,
}

impl<S: SelectionStore> PlanHandoff<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, HandoffConfig::default())
    }

    pub const fn with_config(store: Arc<S>, config: HandoffConfig) -> Self {
        Self { store, config }
    }

    pub const fn config(&self) -> &HandoffConfig {
        &self.config
    }

    /// Message shown before navigating away
    pub fn announcement(plan_name: &str) -> String {
        format!("You selected the plan: {plan_name}. Redirecting to checkout...")
    }

    /// Persist the selection and build the checkout URL
    ///
    /// `base` is the landing page URL; the checkout path is resolved
    /// against it.
    pub fn redirect_url(&self, base: &Url, plan_name: &str) -> Result<Url> {
        if plan_name.trim().is_empty() {
            tracing::warn!("Redirect requested without a plan");
            return Err(PlanError::MissingPlan);
        }

        self.store.set(&self.config.storage_key, plan_name)?;

        let mut url = base.join(&self.config.checkout_path)?;
        url.query_pairs_mut()
            .clear()
            .append_pair(&self.config.query_param, plan_name);

        tracing::info!(plan = %plan_name, url = %url, "Redirecting to checkout");
        Ok(url)
    }

    /// Resolve the plan name shown on the checkout page
    pub fn selected_plan(&self, url: &Url) -> Result<String> {
        let from_query = url
            .query_pairs()
            .find(|(key, _)| *key == self.config.query_param.as_str())
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty());

        if let Some(plan) = from_query {
            return Ok(plan);
        }

        let stored = self
            .store
            .get(&self.config.storage_key)?
            .filter(|value| !value.is_empty());

        Ok(stored.unwrap_or_else(|| self.config.fallback_label.clone()))
    }

    /// Heading text for the checkout page
    pub fn selected_plan_label(&self, url: &Url) -> Result<String> {
        Ok(format!("Selected plan: {}", self.selected_plan(url)?))
    }

    /// Forget the persisted selection
    pub fn clear(&self) -> Result<()> {
        self.store.remove(&self.config.storage_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Plan;
    use crate::store::MemoryStore;

    struct FailingStore;

    impl SelectionStore for FailingStore {
        fn get(&self, _: &str) -> Result<Option<String>> {
            Err(PlanError::Storage("storage disabled".into()))
        }

        fn set(&self, _: &str, _: &str) -> Result<()> {
            Err(PlanError::Storage("storage disabled".into()))
        }

        fn remove(&self, _: &str) -> Result<()> {
            Err(PlanError::Storage("storage disabled".into()))
        }
    }

    fn landing() -> Url {
        Url::parse("https://course.example/index.html").unwrap()
    }

    #[test]
    fn test_redirect_persists_and_encodes() {
        let store = Arc::new(MemoryStore::new());
        let handoff = PlanHandoff::new(store.clone());

        let url = handoff
            .redirect_url(&landing(), Plan::Premium.display_name())
            .unwrap();

        assert_eq!(url.path(), "/checkout");
        assert_eq!(url.query(), Some("plan=Premium+Plan"));
        assert_eq!(
            store.get("selectedPlan").unwrap().as_deref(),
            Some("Premium Plan")
        );
    }

    #[test]
    fn test_redirect_rejects_blank_plan() {
        let store = Arc::new(MemoryStore::new());
        let handoff = PlanHandoff::new(store.clone());

        let result = handoff.redirect_url(&landing(), "  ");
        assert!(matches!(result, Err(PlanError::MissingPlan)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_query_param_wins_over_store() {
        let store = Arc::new(MemoryStore::new());
        store.set("selectedPlan", "Basic Plan").unwrap();
        let handoff = PlanHandoff::new(store);

        let url = Url::parse("https://course.example/checkout?plan=Lifetime%20Plan").unwrap();
        assert_eq!(handoff.selected_plan(&url).unwrap(), "Lifetime Plan");
    }

    #[test]
    fn test_falls_back_to_store() {
        let store = Arc::new(MemoryStore::new());
        store.set("selectedPlan", "Basic Plan").unwrap();
        let handoff = PlanHandoff::new(store);

        let url = Url::parse("https://course.example/checkout?plan=").unwrap();
        assert_eq!(handoff.selected_plan(&url).unwrap(), "Basic Plan");
    }

    #[test]
    fn test_falls_back_to_label() {
        let handoff = PlanHandoff::new(Arc::new(MemoryStore::new()));
        let url = Url::parse("https://course.example/checkout").unwrap();

        assert_eq!(handoff.selected_plan(&url).unwrap(), "No plan selected");
        assert_eq!(
            handoff.selected_plan_label(&url).unwrap(),
            "Selected plan: No plan selected"
        );
    }

    #[test]
    fn test_store_failure_propagates_without_query() {
        let handoff = PlanHandoff::new(Arc::new(FailingStore));

        let url = Url::parse("https://course.example/checkout").unwrap();
        assert!(matches!(
            handoff.selected_plan(&url),
            Err(PlanError::Storage(_))
        ));

        let url = Url::parse("https://course.example/checkout?plan=Basic%20Plan").unwrap();
        assert_eq!(handoff.selected_plan(&url).unwrap(), "Basic Plan");
    }

    #[test]
    fn test_round_trip_through_redirect() {
        let store = Arc::new(MemoryStore::new());
        let handoff = PlanHandoff::new(store);

        let url = handoff.redirect_url(&landing(), "Plan & Más").unwrap();
        assert_eq!(handoff.selected_plan(&url).unwrap(), "Plan & Más");
    }

    #[test]
    fn test_clear() {
        let store = Arc::new(MemoryStore::new());
        let handoff = PlanHandoff::new(store.clone());
        handoff.redirect_url(&landing(), "Basic Plan").unwrap();

        handoff.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_announcement() {
        assert_eq!(
            PlanHandoff::<MemoryStore>::announcement("Basic Plan"),
            "You selected the plan: Basic Plan. Redirecting to checkout..."
        );
    }
}
