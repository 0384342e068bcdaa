//! Defines the endpoint for deleting a transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState, Error,
    alert::AlertTemplate,
    ledger::Ledger,
    transaction::{core::TransactionId, transactions_page::transactions_content},
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The ledger the transaction is removed from.
    ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler for deleting a transaction.
///
/// Responds with the refreshed transactions content fragment plus an
/// out-of-band alert confirming the deletion. Deleting a transaction that
/// does not exist responds with a 404 error alert.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLock.into_alert_response();
        }
    };

    if !ledger.remove_transaction(transaction_id) {
        return Error::TransactionNotFound(transaction_id).into_alert_response();
    }

    let alert =
        AlertTemplate::success("Transaction deleted", "The transaction has been removed.")
            .into_oob_markup();
    let content = transactions_content(ledger.transactions());

    html! {
        (content)
        (alert)
    }
    .into_response()
}

#[cfg(test)]
mod delete_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::Response,
    };
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        ledger::Ledger,
        transaction::core::{Category, NewTransaction, TransactionType},
    };

    use super::{DeleteTransactionState, delete_transaction_endpoint};

    fn create_test_state_with_transaction() -> DeleteTransactionState {
        let mut ledger = Ledger::default();
        ledger.add_transaction(
            NewTransaction {
                description: "Groceries".to_owned(),
                amount: 45.99,
                kind: TransactionType::Expense,
                category: Category::Food,
            },
            date!(2026 - 01 - 05),
        );

        DeleteTransactionState {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    async fn parse_html(response: Response) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX)
            .await
            .expect("Could not get response body");
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_fragment(&text)
    }

    #[tokio::test]
    async fn deletes_transaction_and_confirms() {
        let state = create_test_state_with_transaction();

        let response = delete_transaction_endpoint(State(state.clone()), Path(1)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.ledger.lock().unwrap().transactions().is_empty());

        let html = parse_html(response).await;
        let alert_selector = Selector::parse("div[hx-swap-oob='true'] div[role='alert']").unwrap();
        let alert_text = html
            .select(&alert_selector)
            .next()
            .expect("want out-of-band alert in response")
            .text()
            .collect::<String>();
        assert!(alert_text.contains("Transaction deleted"));
        assert!(alert_text.contains("The transaction has been removed."));
    }

    #[tokio::test]
    async fn responds_with_refreshed_empty_list() {
        let state = create_test_state_with_transaction();

        let response = delete_transaction_endpoint(State(state), Path(1)).await;

        let html = parse_html(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(
            text.contains("No transactions yet. Add your first transaction above!"),
            "want empty state after deleting the only transaction"
        );
    }

    #[tokio::test]
    async fn missing_transaction_responds_with_error_alert() {
        let state = create_test_state_with_transaction();

        let response = delete_transaction_endpoint(State(state.clone()), Path(42)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        // The existing transaction is untouched.
        assert_eq!(state.ledger.lock().unwrap().transactions().len(), 1);

        let html = parse_html(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Could not delete transaction"));
    }

    #[tokio::test]
    async fn deleting_twice_responds_with_error_alert_the_second_time() {
        let state = create_test_state_with_transaction();

        let first = delete_transaction_endpoint(State(state.clone()), Path(1)).await;
        assert_eq!(first.status(), StatusCode::OK);

        let second = delete_transaction_endpoint(State(state), Path(1)).await;
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }
}
