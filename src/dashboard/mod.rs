//! The dashboard page.
//!
//! Summarizes the ledger at a glance: total balance, income and expenses,
//! spending against the monthly budget, and a pie chart of expenses by
//! category.

mod aggregation;
mod cards;
mod chart;
mod handlers;

pub use handlers::get_dashboard_page;

pub(crate) use aggregation::total_expenses;
