//! Defines the route handler for the transactions page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{CARD_STYLE, PAGE_CONTAINER_STYLE, base},
    ledger::Ledger,
    navigation::NavBar,
};

use super::{core::Transaction, form::transaction_form, list::transaction_list};

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsViewState {
    /// The ledger holding the transactions to display.
    ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for TransactionsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// Render the page for adding transactions and viewing the transaction list.
pub async fn get_transactions_page(
    State(state): State<TransactionsViewState>,
) -> Result<Response, Error> {
    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLock)?;

    Ok(transactions_view(ledger.transactions()).into_response())
}

fn transactions_view(transactions: &[Transaction]) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div id="transactions-content" class="space-y-6"
            {
                (transactions_content(transactions))
            }
        }
    };

    base("Transactions", &[], &content)
}

/// The inner content of the transactions page, the entry form and the list.
///
/// The create and delete endpoints respond with this fragment so the list
/// refreshes in place without a full page load.
pub(crate) fn transactions_content(transactions: &[Transaction]) -> Markup {
    html! {
        section class=(CARD_STYLE)
        {
            h2 class="text-xl font-semibold mb-4" { "Add Transaction" }
            (transaction_form())
        }

        section class=(CARD_STYLE)
        {
            (transaction_list(transactions))
        }
    }
}

#[cfg(test)]
mod transactions_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, response::Response};
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        ledger::Ledger,
        transaction::core::{Category, NewTransaction, TransactionType},
    };

    use super::{TransactionsViewState, get_transactions_page};

    fn create_test_state() -> TransactionsViewState {
        TransactionsViewState {
            ledger: Arc::new(Mutex::new(Ledger::default())),
        }
    }

    async fn parse_html(response: Response) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX)
            .await
            .expect("Could not get response body");
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }

    #[tokio::test]
    async fn page_shows_form_and_empty_state() {
        let state = create_test_state();

        let response = get_transactions_page(State(state)).await.unwrap();

        let html = parse_html(response).await;
        let form_selector = Selector::parse("form[hx-post='/api/transactions']").unwrap();
        assert_eq!(html.select(&form_selector).count(), 1);
        let text = html.root_element().text().collect::<String>();
        assert!(
            text.contains("No transactions yet. Add your first transaction above!"),
            "want empty state prompt in page"
        );
    }

    #[tokio::test]
    async fn page_lists_transactions_newest_first() {
        let state = create_test_state();
        {
            let mut ledger = state.ledger.lock().unwrap();
            ledger.add_transaction(
                NewTransaction {
                    description: "Older".to_owned(),
                    amount: 10.0,
                    kind: TransactionType::Expense,
                    category: Category::Food,
                },
                date!(2026 - 01 - 01),
            );
            ledger.add_transaction(
                NewTransaction {
                    description: "Newer".to_owned(),
                    amount: 20.0,
                    kind: TransactionType::Income,
                    category: Category::Salary,
                },
                date!(2026 - 01 - 02),
            );
        }

        let response = get_transactions_page(State(state)).await.unwrap();

        let html = parse_html(response).await;
        let row_selector = Selector::parse("#transaction-list li").unwrap();
        let descriptions: Vec<String> = html
            .select(&row_selector)
            .map(|row| row.text().collect::<String>())
            .collect();
        assert_eq!(descriptions.len(), 2);
        assert!(
            descriptions[0].contains("Newer"),
            "want newest transaction first, got {descriptions:?}"
        );
        assert!(descriptions[1].contains("Older"));
    }
}
