//! Defines the core data models for transactions.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;

/// Uniquely identifies a transaction within the ledger.
///
/// IDs are assigned sequentially by the ledger at insertion time and are
/// never reused within a session.
pub type TransactionId = u64;

/// Whether a transaction brings money in or takes money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned, e.g. a salary payment.
    Income,
    /// Money spent, e.g. a grocery run.
    Expense,
}

impl TransactionType {
    /// The capitalised label used in notifications and list rows.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

/// The fixed set of labels used to group transactions.
///
/// Expense transactions are grouped by category for the spending breakdown
/// chart. [Category::Other] is the catch-all for anything that does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[allow(missing_docs)]
    Food,
    #[allow(missing_docs)]
    Rent,
    #[allow(missing_docs)]
    Entertainment,
    #[allow(missing_docs)]
    Bills,
    #[allow(missing_docs)]
    Transportation,
    #[allow(missing_docs)]
    Healthcare,
    #[allow(missing_docs)]
    Shopping,
    #[allow(missing_docs)]
    Salary,
    /// The catch-all category.
    Other,
}

impl Category {
    /// Every category in the order it is displayed in the form.
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Rent,
        Category::Entertainment,
        Category::Bills,
        Category::Transportation,
        Category::Healthcare,
        Category::Shopping,
        Category::Salary,
        Category::Other,
    ];

    /// The display name of the category.
    ///
    /// Matches the serialized form so that form option values round-trip.
    pub fn name(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Rent => "Rent",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Transportation => "Transportation",
            Category::Healthcare => "Healthcare",
            Category::Shopping => "Shopping",
            Category::Salary => "Salary",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are created through [crate::Ledger::add_transaction], which
/// assigns the `id` and `date` fields. They are immutable after creation
/// except for removal, and are owned exclusively by the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the ledger.
    pub id: TransactionId,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// Whether the transaction is an income or an expense.
    pub kind: TransactionType,
    /// The category the transaction belongs to.
    pub category: Category,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction was recorded.
    pub date: Date,
}

/// The caller-supplied fields of a transaction.
///
/// The ledger fills in the `id` and `date` at insertion time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// Whether the transaction is an income or an expense.
    pub kind: TransactionType,
    /// The category the transaction belongs to.
    pub category: Category,
}

#[cfg(test)]
mod category_tests {
    use super::Category;

    #[test]
    fn display_matches_serialized_name() {
        for category in Category::ALL {
            let serialized = serde_html_form::to_string([("category", category)]).unwrap();

            assert_eq!(serialized, format!("category={category}"));
        }
    }

    #[test]
    fn other_is_listed_last() {
        assert_eq!(Category::ALL.last(), Some(&Category::Other));
    }
}
