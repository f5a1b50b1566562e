//! UI Components

use std::sync::Arc;

use leptos::prelude::*;

use crate::browser::{CheckoutController, SignalField};

/// Labelled checkout input wired to the form controller
#[component]
pub fn FieldInput(
    field: SignalField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    controller: Arc<CheckoutController>,
) -> impl IntoView {
    let max_len = controller
        .config()
        .spec_for(field.id)
        .max_len
        .map(|n| n.to_string());

    let on_input = {
        let controller = controller.clone();
        move |ev: leptos::ev::Event| {
            field.value.set(event_target_value(&ev));
            controller.on_input(&field);
        }
    };

    let on_blur = move |_: leptos::ev::FocusEvent| {
        controller.on_blur(&field);
    };

    view! {
        <div class="form-group">
            <label for=field.id>{label}</label>
            <input
                id=field.id
                name=field.id
                type=input_type
                placeholder=placeholder
                maxlength=max_len
                class:error=move || field.invalid.get()
                prop:value=move || field.value.get()
                on:input=on_input
                on:blur=on_blur
            />
        </div>
    }
}

/// Offer card on the landing page
#[component]
pub fn PlanCard(
    title: &'static str,
    features: &'static [&'static str],
    #[prop(optional)] featured: bool,
    on_choose: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    let class = if featured { "plan featured" } else { "plan" };

    view! {
        <div class=class>
            <h2>{title}</h2>
            <ul>
                {features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
            </ul>
            <button class="button" on:click=move |_| on_choose()>
                "Choose plan"
            </button>
        </div>
    }
}
