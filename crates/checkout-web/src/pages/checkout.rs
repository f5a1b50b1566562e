//! Checkout Page

use std::sync::Arc;

use checkout_form::FormController;
use checkout_plans::PlanHandoff;
use leptos::prelude::*;

use crate::browser::{self, AlertNotifier, LocalStorageStore, SignalField};
use crate::components::FieldInput;

/// (id, label, input type, placeholder)
const FIELDS: [(&str, &str, &str, &str); 6] = [
    ("name", "Full name", "text", "Your full name"),
    ("email", "Email", "email", "you@example.com"),
    ("phone", "Phone", "tel", "(11) 91234-5678"),
    ("card-number", "Card number", "text", "0000 0000 0000 0000"),
    ("expiry-date", "Expiry date", "text", "MM/YY"),
    ("cvv", "CVV", "text", "123"),
];

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let handoff = Arc::new(PlanHandoff::new(Arc::new(LocalStorageStore)));

    let heading = browser::current_url()
        .and_then(|url| handoff.selected_plan_label(&url))
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not resolve selected plan");
            format!("Selected plan: {}", handoff.config().fallback_label)
        });

    let controller = Arc::new(FormController::new(handoff, AlertNotifier));
    let fields: Vec<SignalField> = FIELDS.iter().map(|(id, ..)| SignalField::new(*id)).collect();

    let on_submit = {
        let controller = controller.clone();
        let fields = fields.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            controller.on_submit(&fields);
        }
    };

    let inputs = fields
        .into_iter()
        .zip(FIELDS)
        .map(|(field, (_, label, input_type, placeholder))| {
            view! {
                <FieldInput
                    field=field
                    label=label
                    input_type=input_type
                    placeholder=placeholder
                    controller=controller.clone()
                />
            }
        })
        .collect_view();

    view! {
        <div class="checkout">
            <h1>"Checkout"</h1>
            <p id="selected-plan" class="selected-plan">{heading}</p>

            <form class="checkout-form" novalidate=true on:submit=on_submit>
                {inputs}
                <button type="submit" class="btn btn-primary">"Complete purchase"</button>
            </form>
        </div>
    }
}
