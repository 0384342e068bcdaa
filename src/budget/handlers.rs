//! Route handlers for the budget card fragments.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRequest;
use serde::Deserialize;

use crate::{AppState, Error, dashboard::total_expenses, endpoints, ledger::Ledger};

use super::{
    core::budget_status,
    view::{budget_card, budget_edit_card},
};

/// The state needed to render and edit the budget card.
#[derive(Debug, Clone)]
pub struct BudgetCardState {
    /// The ledger holding the budget and the recorded expenses.
    ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for BudgetCardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

impl BudgetCardState {
    fn lock_ledger(&self) -> Result<MutexGuard<'_, Ledger>, Error> {
        self.ledger
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
            .map_err(|_| Error::LedgerLock)
    }
}

/// The form data for saving an edited budget.
#[derive(Debug, Deserialize)]
pub struct BudgetForm {
    /// The raw text from the budget input.
    ///
    /// Kept as text so rejected values can be echoed back into the form.
    #[serde(default)]
    pub budget: Option<String>,
}

/// A route handler for the display face of the budget card.
///
/// Also serves as the cancel action for an edit in progress. Cancelling
/// discards the edit without changing the budget. Requests made outside
/// HTMX are redirected to the dashboard since a bare fragment is not a
/// useful page.
pub async fn get_budget_card_partial(
    HxRequest(is_htmx): HxRequest,
    State(state): State<BudgetCardState>,
) -> Response {
    if !is_htmx {
        return Redirect::to(endpoints::DASHBOARD_VIEW).into_response();
    }

    let ledger = match state.lock_ledger() {
        Ok(ledger) => ledger,
        Err(error) => return error.into_alert_response(),
    };

    let status = budget_status(ledger.budget(), total_expenses(ledger.transactions()));

    budget_card(&status).into_response()
}

/// A route handler for the edit face of the budget card.
///
/// The input starts out with the current budget. Requests made outside HTMX
/// are redirected to the dashboard.
pub async fn get_budget_edit_form(
    HxRequest(is_htmx): HxRequest,
    State(state): State<BudgetCardState>,
) -> Response {
    if !is_htmx {
        return Redirect::to(endpoints::DASHBOARD_VIEW).into_response();
    }

    let ledger = match state.lock_ledger() {
        Ok(ledger) => ledger,
        Err(error) => return error.into_alert_response(),
    };

    budget_edit_card(&format!("{}", ledger.budget())).into_response()
}

/// A route handler for saving an edited budget.
///
/// A valid budget is committed and the display face is rendered. An invalid
/// budget, anything that is not a finite positive number, leaves the
/// committed budget unchanged and re-renders the edit face with the rejected
/// text still in the input. No error message is shown.
pub async fn save_budget_endpoint(
    State(state): State<BudgetCardState>,
    Form(form): Form<BudgetForm>,
) -> Response {
    let mut ledger = match state.lock_ledger() {
        Ok(ledger) => ledger,
        Err(error) => return error.into_alert_response(),
    };

    let buffer = form.budget.unwrap_or_default();

    match buffer.parse::<f64>() {
        Ok(new_budget) if ledger.set_budget(new_budget).is_ok() => {
            let status = budget_status(ledger.budget(), total_expenses(ledger.transactions()));
            budget_card(&status).into_response()
        }
        _ => budget_edit_card(&buffer).into_response(),
    }
}
