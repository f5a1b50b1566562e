//! Landing Page

use std::sync::Arc;

use checkout_plans::{Plan, PlanHandoff};
use leptos::prelude::*;

use crate::browser::{self, LocalStorageStore};
use crate::components::PlanCard;

const BASIC_FEATURES: &[&str] = &["Core modules", "Exercises", "6 months of access"];
const PREMIUM_FEATURES: &[&str] = &["Everything in Basic", "Projects with review", "Certificate"];
const LIFETIME_FEATURES: &[&str] = &["Everything in Premium", "Lifetime access", "Future updates"];

#[component]
pub fn LandingPage() -> impl IntoView {
    let handoff = Arc::new(PlanHandoff::new(Arc::new(LocalStorageStore)));

    let choose = move |index: usize| {
        let handoff = handoff.clone();
        move || {
            let plan = Plan::from_button_index(index);
            if let Err(e) = browser::go_to_checkout(&handoff, plan.display_name()) {
                tracing::warn!(error = %e, plan = %plan, "Could not start checkout");
                browser::alert(e.user_message());
            }
        }
    };

    view! {
        <div class="landing">
            <header class="hero">
                <h1>"Front-End Development Course"</h1>
                <p class="tagline">"HTML, CSS and JavaScript from the first tag to your first job"</p>
                <button
                    class="cta-button btn btn-primary"
                    on:click=move |_| browser::scroll_into_view(".offers")
                >
                    "Enroll now"
                </button>
            </header>

            <section class="offers">
                <h2>"Choose your plan"</h2>
                <div class="plans">
                    <PlanCard
                        title=Plan::Basic.display_name()
                        features=BASIC_FEATURES
                        on_choose=choose(0)
                    />
                    <PlanCard
                        title=Plan::Premium.display_name()
                        features=PREMIUM_FEATURES
                        featured=true
                        on_choose=choose(1)
                    />
                    <PlanCard
                        title=Plan::Lifetime.display_name()
                        features=LIFETIME_FEATURES
                        on_choose=choose(2)
                    />
                </div>
            </section>
        </div>
    }
}
