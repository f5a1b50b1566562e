//! Browser Bindings
//!
//! `localStorage`, `alert` and reactive signals behind the traits the
//! checkout crates consume.

use checkout_form::{FormController, FormField, Notifier};
use checkout_plans::{PlanError, PlanHandoff, Result, SelectionStore};
use leptos::prelude::*;
use url::Url;
use wasm_bindgen::JsValue;

pub type CheckoutController = FormController<LocalStorageStore, AlertNotifier>;

fn js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// `window.localStorage`, looked up on every call
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| PlanError::Storage("no window".into()))?
            .local_storage()
            .map_err(|e| PlanError::Storage(js_error(&e)))?
            .ok_or_else(|| PlanError::Storage("localStorage unavailable".into()))
    }
}

impl SelectionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| PlanError::Storage(js_error(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| PlanError::Storage(js_error(&e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| PlanError::Storage(js_error(&e)))
    }
}

/// Blocking `window.alert` dialogs
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

impl Notifier for AlertNotifier {
    fn success(&self, message: &str) {
        alert(message);
    }

    fn failure(&self, message: &str) {
        alert(message);
    }
}

/// Form input backed by reactive signals
#[derive(Clone, Copy)]
pub struct SignalField {
    pub id: &'static str,
    pub value: RwSignal<String>,
    pub invalid: RwSignal<bool>,
}

impl SignalField {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            value: RwSignal::new(String::new()),
            invalid: RwSignal::new(false),
        }
    }
}

impl FormField for SignalField {
    fn id(&self) -> &str {
        self.id
    }

    fn value(&self) -> String {
        self.value.get_untracked()
    }

    fn set_value(&self, value: &str) {
        self.value.set(value.to_string());
    }

    fn is_marked_invalid(&self) -> bool {
        self.invalid.get_untracked()
    }

    fn set_invalid(&self, invalid: bool) {
        self.invalid.set(invalid);
    }

    fn reset(&self) {
        self.value.set(String::new());
    }
}

/// URL of the current page
pub fn current_url() -> Result<Url> {
    let href = web_sys::window()
        .ok_or_else(|| PlanError::Navigation("no window".into()))?
        .location()
        .href()
        .map_err(|e| PlanError::Navigation(js_error(&e)))?;
    Ok(Url::parse(&href)?)
}

/// Record the plan, announce it and navigate to checkout
pub fn go_to_checkout(handoff: &PlanHandoff<LocalStorageStore>, plan_name: &str) -> Result<()> {
    let target = handoff.redirect_url(&current_url()?, plan_name)?;

    alert(&PlanHandoff::<LocalStorageStore>::announcement(plan_name));

    web_sys::window()
        .ok_or_else(|| PlanError::Navigation("no window".into()))?
        .location()
        .set_href(target.as_str())
        .map_err(|e| PlanError::Navigation(js_error(&e)))
}

/// Smoothly scroll the first element matching `selector` into view
pub fn scroll_into_view(selector: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Ok(Some(element)) = document.query_selector(selector) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
