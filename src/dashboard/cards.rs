//! The summary cards at the top of the dashboard.

use maud::{Markup, html};

use crate::html::{CARD_STYLE, format_currency};

/// Which total a summary card displays, used for the accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardKind {
    Balance,
    Income,
    Expense,
}

impl CardKind {
    fn amount_class(self) -> &'static str {
        match self {
            CardKind::Balance => "text-blue-600 dark:text-blue-400",
            CardKind::Income => "text-green-600 dark:text-green-400",
            CardKind::Expense => "text-red-600 dark:text-red-400",
        }
    }
}

/// Renders the three summary cards: balance, income and expenses.
///
/// Amounts are shown as absolute values; the card colour carries the sign.
pub(super) fn summary_cards(balance: f64, total_income: f64, total_expenses: f64) -> Markup {
    html! {
        div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8 w-full"
        {
            (summary_card("Total Balance", balance, CardKind::Balance))
            (summary_card("Total Income", total_income, CardKind::Income))
            (summary_card("Total Expenses", total_expenses, CardKind::Expense))
        }
    }
}

fn summary_card(title: &str, amount: f64, kind: CardKind) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            p class="text-sm text-gray-600 dark:text-gray-400 font-medium" { (title) }

            p class=(format!("text-3xl font-bold {}", kind.amount_class()))
            {
                (format_currency(amount.abs()))
            }
        }
    }
}
