//! Defines the endpoint for creating a new transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use maud::html;
use serde::Deserialize;
use time::{Date, OffsetDateTime};

use crate::{
    AppState, Error,
    alert::AlertTemplate,
    html::format_currency,
    ledger::Ledger,
    timezone::get_local_offset,
    transaction::{
        core::{Category, NewTransaction, TransactionType},
        transactions_page::transactions_content,
    },
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The ledger the new transaction is added to.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: Option<String>,
    /// The value of the transaction.
    #[serde(default)]
    pub amount: Option<f64>,
    /// Whether the transaction is an income or an expense.
    pub type_: TransactionType,
    /// The category the transaction belongs to.
    #[serde(default)]
    pub category: Option<Category>,
}

/// A route handler for creating a new transaction.
///
/// Responds with the refreshed transactions content fragment plus an
/// out-of-band success alert. Submissions missing the description, amount or
/// category are dropped without feedback.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let (Some(description), Some(amount), Some(category)) =
        (form.description, form.amount, form.category)
    else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };

    if description.trim().is_empty() {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }

    let date = match current_local_date(&state.local_timezone) {
        Ok(date) => date,
        Err(error) => return error.into_alert_response(),
    };

    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLock.into_alert_response();
        }
    };

    let transaction = ledger.add_transaction(
        NewTransaction {
            description,
            amount,
            kind: form.type_,
            category,
        },
        date,
    );

    let details = format!(
        "{} of {} recorded successfully.",
        transaction.kind.label(),
        format_currency(transaction.amount)
    );
    let alert = AlertTemplate::success("Transaction added", &details).into_oob_markup();
    let content = transactions_content(ledger.transactions());

    html! {
        (content)
        (alert)
    }
    .into_response()
}

fn current_local_date(local_timezone: &str) -> Result<Date, Error> {
    let Some(local_offset) = get_local_offset(local_timezone) else {
        tracing::error!("Invalid timezone {}", local_timezone);
        return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
    };

    Ok(OffsetDateTime::now_utc().to_offset(local_offset).date())
}
