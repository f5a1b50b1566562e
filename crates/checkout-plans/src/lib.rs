//! # checkout-plans
//!
//! Plan catalogue and the hand-off that carries a plan selection from the
//! course landing page to the checkout page.
//!
//! ```text
//! ┌──────────────┐  set(key, plan)   ┌────────────────┐
//! │ Landing page │──────────────────▶│ SelectionStore │
//! │  (buttons)   │                   └───────┬────────┘
//! └──────┬───────┘                           │ get(key)
//!        │ checkout?plan=<name>              ▼
//!        └─────────────────────────▶┌────────────────┐
//!                                   │ Checkout page  │
//!                                   └────────────────┘
//! ```
//!
//! The store is injected, so both pages share whatever backend the host
//! provides (`localStorage` in the browser, [`MemoryStore`] in tests).
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use checkout_plans::{MemoryStore, Plan, PlanHandoff};
//! use url::Url;
//!
//! let handoff = PlanHandoff::new(Arc::new(MemoryStore::new()));
//! let landing = Url::parse("https://course.example/").unwrap();
//!
//! let checkout = handoff
//!     .redirect_url(&landing, Plan::Premium.display_name())
//!     .unwrap();
//! assert_eq!(handoff.selected_plan(&checkout).unwrap(), "Premium Plan");
//! ```

mod config;
mod error;
mod handoff;
mod plan;
mod store;

pub use config::HandoffConfig;
pub use error::{PlanError, Result};
pub use handoff::PlanHandoff;
pub use plan::Plan;
pub use store::{MemoryStore, SelectionStore};
