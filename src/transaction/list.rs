//! HTML rendering for the newest-first transaction list.

use maud::{Markup, html};
use time::{format_description::BorrowedFormatItem, macros::format_description};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints::{self, format_endpoint},
    html::{BUTTON_DELETE_STYLE, CATEGORY_BADGE_STYLE, format_currency},
    transaction::core::{Transaction, TransactionType},
};

/// The max number of graphemes to display in a list row before truncating
/// and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

/// The short date format used in list rows, e.g. "Jan 5, 2026".
const DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[month repr:short] [day padding:none], [year]");

fn amount_class(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Income => "text-green-700 dark:text-green-300",
        TransactionType::Expense => "text-red-700 dark:text-red-300",
    }
}

fn amount_sign(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    }
}

fn truncate_description(description: &str) -> String {
    let graphemes: Vec<&str> = description.graphemes(true).collect();

    if graphemes.len() <= MAX_DESCRIPTION_GRAPHEMES {
        description.to_owned()
    } else {
        format!("{}...", graphemes[..MAX_DESCRIPTION_GRAPHEMES].concat())
    }
}

/// Renders the recent transactions list, newest first.
///
/// Shows a prompt to add the first transaction when the ledger is empty.
pub(super) fn transaction_list(transactions: &[Transaction]) -> Markup {
    html! {
        section id="transaction-list" class="w-full"
        {
            h2 class="text-xl font-semibold mb-4" { "Recent Transactions" }

            @if transactions.is_empty() {
                p class="text-center text-gray-600 dark:text-gray-400 py-8"
                {
                    "No transactions yet. Add your first transaction above!"
                }
            } @else {
                ul class="space-y-3"
                {
                    @for transaction in transactions {
                        (transaction_row(transaction))
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let delete_endpoint = format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id);
    let formatted_date = transaction
        .date
        .format(DATE_FORMAT)
        .unwrap_or_else(|_| transaction.date.to_string());

    html! {
        li
            class="flex items-center justify-between p-4 rounded-lg border
                border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800
                hover:bg-gray-50 dark:hover:bg-gray-700 transition-colors"
        {
            div class="flex-1 min-w-0"
            {
                p class="font-medium truncate" { (truncate_description(&transaction.description)) }

                div class="flex items-center gap-2 text-xs text-gray-600 dark:text-gray-400"
                {
                    span class=(CATEGORY_BADGE_STYLE) { (transaction.category) }
                    span { (formatted_date) }
                }
            }

            div class="flex items-center gap-3"
            {
                p class=(format!("font-bold text-lg {}", amount_class(transaction.kind)))
                {
                    (amount_sign(transaction.kind)) (format_currency(transaction.amount))
                }

                button
                    hx-delete=(delete_endpoint)
                    hx-target="#transactions-content"
                    hx-swap="innerHTML"
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}

#[cfg(test)]
mod list_tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::transaction::core::{Category, Transaction, TransactionType};

    use super::{MAX_DESCRIPTION_GRAPHEMES, transaction_list, truncate_description};

    fn create_test_transaction(id: u64, kind: TransactionType, description: &str) -> Transaction {
        Transaction {
            id,
            amount: 45.99,
            kind,
            category: Category::Food,
            description: description.to_owned(),
            date: date!(2026 - 01 - 05),
        }
    }

    fn render_list(transactions: &[Transaction]) -> Html {
        Html::parse_fragment(&transaction_list(transactions).into_string())
    }

    #[test]
    fn empty_list_shows_prompt() {
        let html = render_list(&[]);

        let text = html.root_element().text().collect::<String>();
        assert!(
            text.contains("No transactions yet. Add your first transaction above!"),
            "want empty state prompt in {text}"
        );
    }

    #[test]
    fn renders_one_row_per_transaction() {
        let transactions = vec![
            create_test_transaction(1, TransactionType::Expense, "Groceries"),
            create_test_transaction(2, TransactionType::Income, "Paycheck"),
        ];

        let html = render_list(&transactions);

        let selector = Selector::parse("li").unwrap();
        assert_eq!(html.select(&selector).count(), 2);
    }

    #[test]
    fn row_shows_category_date_and_signed_amount() {
        let transactions = vec![create_test_transaction(
            1,
            TransactionType::Expense,
            "Groceries",
        )];

        let html = render_list(&transactions);

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Food"), "want category in {text}");
        assert!(text.contains("Jan 5, 2026"), "want short date in {text}");
        assert!(text.contains("-₹45.99"), "want signed amount in {text}");
    }

    #[test]
    fn income_amount_is_prefixed_with_plus() {
        let transactions = vec![create_test_transaction(
            1,
            TransactionType::Income,
            "Paycheck",
        )];

        let html = render_list(&transactions);

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("+₹45.99"), "want signed amount in {text}");
    }

    #[test]
    fn delete_button_targets_the_transaction() {
        let transactions = vec![create_test_transaction(
            7,
            TransactionType::Expense,
            "Groceries",
        )];

        let html = render_list(&transactions);

        let selector = Selector::parse("button[hx-delete='/api/transactions/7']").unwrap();
        assert_eq!(html.select(&selector).count(), 1);
    }

    #[test]
    fn truncates_long_descriptions() {
        let description = "a".repeat(MAX_DESCRIPTION_GRAPHEMES + 10);

        let truncated = truncate_description(&description);

        assert_eq!(
            truncated,
            format!("{}...", "a".repeat(MAX_DESCRIPTION_GRAPHEMES))
        );
    }

    #[test]
    fn keeps_short_descriptions_as_is() {
        assert_eq!(truncate_description("Lunch"), "Lunch");
    }
}
