//! The route handler and view rendering for the dashboard page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    budget::{BudgetStatus, budget_card, budget_status},
    endpoints,
    html::{CARD_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base},
    ledger::Ledger,
    navigation::NavBar,
};

use super::{
    aggregation::{balance, expense_totals_by_category, total_expenses, total_income},
    cards::summary_cards,
    chart::{DashboardChart, category_chart, charts_script},
};

const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The ledger holding the transactions and budget to summarize.
    ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// Holds all the data needed to render the dashboard.
struct DashboardData {
    balance: f64,
    total_income: f64,
    total_expenses: f64,
    budget: BudgetStatus,
    chart: Option<DashboardChart>,
}

/// Render the dashboard: summary totals, the budget tracker and the
/// spending breakdown chart.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLock)?;

    let transactions = ledger.transactions();
    let spent = total_expenses(transactions);
    let category_totals = expense_totals_by_category(transactions);

    let chart = (!category_totals.is_empty()).then(|| DashboardChart {
        id: "category-chart",
        options: category_chart(&category_totals).to_string(),
    });

    let data = DashboardData {
        balance: balance(transactions),
        total_income: total_income(transactions),
        total_expenses: spent,
        budget: budget_status(ledger.budget(), spent),
        chart,
    };

    Ok(dashboard_view(&data).into_response())
}

fn dashboard_view(data: &DashboardData) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let scripts = match &data.chart {
        Some(chart) => vec![
            HeadElement::ScriptLink(ECHARTS_CDN.to_owned()),
            charts_script(std::slice::from_ref(chart)),
        ],
        None => Vec::new(),
    };

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            header class="w-full mb-8"
            {
                h1 class="text-4xl font-bold mb-2" { "Smart Finance Tracker" }
                p class="text-gray-600 dark:text-gray-400"
                {
                    "Take control of your personal finances with intelligent budget planning"
                }
            }

            (summary_cards(data.balance, data.total_income, data.total_expenses))

            div class="grid grid-cols-1 lg:grid-cols-2 gap-6 w-full"
            {
                (budget_card(&data.budget))
                (chart_card(data.chart.as_ref()))
            }
        }
    };

    base("Dashboard", &scripts, &content)
}

fn chart_card(chart: Option<&DashboardChart>) -> Markup {
    html! {
        section class=(CARD_STYLE)
        {
            h2 class="text-xl font-semibold mb-4" { "Spending by Category" }

            @match chart {
                Some(chart) => {
                    div id=(chart.id) class="min-h-[300px]" {}
                }
                None => {
                    p class="text-center text-gray-600 dark:text-gray-400 py-8"
                    {
                        "No expense data yet. Add some expenses to see your spending breakdown!"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod dashboard_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, response::Response};
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        ledger::Ledger,
        transaction::{Category, NewTransaction, TransactionType},
    };

    use super::{DashboardState, get_dashboard_page};

    fn create_test_state() -> DashboardState {
        DashboardState {
            ledger: Arc::new(Mutex::new(Ledger::default())),
        }
    }

    fn add_transaction(state: &DashboardState, amount: f64, kind: TransactionType) {
        state.ledger.lock().unwrap().add_transaction(
            NewTransaction {
                description: "Test".to_owned(),
                amount,
                kind,
                category: match kind {
                    TransactionType::Income => Category::Salary,
                    TransactionType::Expense => Category::Food,
                },
            },
            date!(2026 - 01 - 05),
        );
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
    async fn empty_ledger_shows_zero_totals_and_no_chart() {
        let state = create_test_state();

        let response = get_dashboard_page(State(state)).await.unwrap();

        let html = parse_html(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Total Balance"));
        assert!(text.contains("₹0.00"));
        assert!(
            text.contains("No expense data yet. Add some expenses to see your spending breakdown!"),
            "want chart empty state"
        );

        let chart_selector = Selector::parse("#category-chart").unwrap();
        assert_eq!(html.select(&chart_selector).count(), 0);
    }

    #[tokio::test]
    async fn totals_reflect_recorded_transactions() {
        let state = create_test_state();
        add_transaction(&state, 1500.0, TransactionType::Income);
        add_transaction(&state, 500.0, TransactionType::Expense);

        let response = get_dashboard_page(State(state)).await.unwrap();

        let html = parse_html(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("₹1,500.00"), "want income total in {text}");
        assert!(text.contains("₹500.00"), "want expense total in {text}");
        assert!(text.contains("₹1,000.00"), "want balance in {text}");
    }

    #[tokio::test]
    async fn expenses_produce_a_chart_container() {
        let state = create_test_state();
        add_transaction(&state, 50.0, TransactionType::Expense);

        let response = get_dashboard_page(State(state)).await.unwrap();

        let html = parse_html(response).await;
        let chart_selector = Selector::parse("#category-chart").unwrap();
        assert_eq!(html.select(&chart_selector).count(), 1);
    }

    #[tokio::test]
    async fn budget_card_is_on_the_dashboard() {
        let state = create_test_state();
        add_transaction(&state, 1900.0, TransactionType::Expense);

        let response = get_dashboard_page(State(state)).await.unwrap();

        let html = parse_html(response).await;
        let card_selector = Selector::parse("#budget-card").unwrap();
        assert_eq!(html.select(&card_selector).count(), 1);
        let text = html.root_element().text().collect::<String>();
        assert!(
            text.contains("⚠️ You've used 95% of your budget!"),
            "want critical banner in {text}"
        );
    }
}
