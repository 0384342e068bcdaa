//! Monthly budget tracking.
//!
//! The budget card on the dashboard shows spending against a monthly budget
//! and can be flipped into an edit form without leaving the page. This
//! module contains the status calculations, the card views and the route
//! handlers for the card fragments.

mod core;
mod handlers;
mod view;

pub use core::{BudgetBand, BudgetStatus, DEFAULT_BUDGET, budget_status};
pub use handlers::{get_budget_card_partial, get_budget_edit_form, save_budget_endpoint};

pub(crate) use view::budget_card;
