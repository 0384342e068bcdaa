//! Transaction data aggregation for the dashboard.
//!
//! Provides functions to total income and expenses, derive the overall
//! balance, and group expense totals by category for the spending chart.
//! All totals are computed from the transaction sequence on demand.

use crate::transaction::{Category, Transaction, TransactionType};

/// The total amount earned across all income transactions.
pub(crate) fn total_income(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.kind == TransactionType::Income)
        .map(|transaction| transaction.amount)
        .sum()
}

/// The total amount spent across all expense transactions.
pub(crate) fn total_expenses(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.kind == TransactionType::Expense)
        .map(|transaction| transaction.amount)
        .sum()
}

/// Income minus expenses. Negative when spending exceeds earnings.
pub(crate) fn balance(transactions: &[Transaction]) -> f64 {
    total_income(transactions) - total_expenses(transactions)
}

/// The total spent in one category.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// Groups expense amounts by category, largest total first.
///
/// Income transactions are ignored. Categories with no expenses are omitted
/// rather than reported as zero. Ties keep the order in which the categories
/// first appear in the sequence.
pub(crate) fn expense_totals_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for transaction in transactions {
        if transaction.kind != TransactionType::Expense {
            continue;
        }

        match totals
            .iter_mut()
            .find(|entry| entry.category == transaction.category)
        {
            Some(entry) => entry.total += transaction.amount,
            None => totals.push(CategoryTotal {
                category: transaction.category,
                total: transaction.amount,
            }),
        }
    }

    totals.sort_by(|a, b| b.total.total_cmp(&a.total));

    totals
}
