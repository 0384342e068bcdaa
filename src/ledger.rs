//! The in-memory store for transactions and the monthly budget.

use time::Date;

use crate::{
    Error,
    budget::DEFAULT_BUDGET,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// Holds every transaction recorded this session along with the monthly
/// budget.
///
/// The ledger is the sole owner of its transactions. The sequence is kept
/// newest-first: new transactions are inserted at the front. All totals are
/// derived from the sequence on demand and never stored redundantly.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
    budget: f64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
            budget: DEFAULT_BUDGET,
        }
    }
}

impl Ledger {
    /// Record a new transaction at the front of the sequence.
    ///
    /// The ledger assigns the next sequential ID and stamps the transaction
    /// with `date`, which should be today's date in the configured local
    /// timezone.
    pub fn add_transaction(&mut self, new_transaction: NewTransaction, date: Date) -> &Transaction {
        let transaction = Transaction {
            id: self.next_id,
            amount: new_transaction.amount,
            kind: new_transaction.kind,
            category: new_transaction.category,
            description: new_transaction.description,
            date,
        };

        self.next_id += 1;
        self.transactions.insert(0, transaction);

        &self.transactions[0]
    }

    /// Remove the transaction with the given `id`.
    ///
    /// Returns `true` if a transaction was removed, and `false` if no
    /// transaction with that ID exists. A missing ID is a no-op, not an
    /// error.
    pub fn remove_transaction(&mut self, id: TransactionId) -> bool {
        let count_before = self.transactions.len();
        self.transactions.retain(|transaction| transaction.id != id);

        self.transactions.len() < count_before
    }

    /// The recorded transactions, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The committed monthly budget.
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Replace the committed monthly budget.
    ///
    /// # Errors
    /// Returns [Error::InvalidBudget] if `value` is not a finite, positive
    /// number. The committed budget is left unchanged in that case.
    pub fn set_budget(&mut self, value: f64) -> Result<(), Error> {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::InvalidBudget(value));
        }

        self.budget = value;

        Ok(())
    }
}

#[cfg(test)]
mod ledger_tests {
    use time::macros::date;

    use crate::{
        Error,
        budget::DEFAULT_BUDGET,
        transaction::{Category, NewTransaction, TransactionType},
    };

    use super::Ledger;

    fn new_expense(description: &str, amount: f64) -> NewTransaction {
        NewTransaction {
            description: description.to_owned(),
            amount,
            kind: TransactionType::Expense,
            category: Category::Food,
        }
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let mut ledger = Ledger::default();
        let today = date!(2026 - 08 - 30);

        let first_id = ledger.add_transaction(new_expense("Groceries", 45.0), today).id;
        let second_id = ledger.add_transaction(new_expense("Lunch", 12.5), today).id;

        assert_ne!(first_id, second_id);
        assert_eq!(second_id, first_id + 1);
    }

    #[test]
    fn add_stamps_date_and_keeps_newest_first() {
        let mut ledger = Ledger::default();
        let today = date!(2026 - 08 - 30);

        ledger.add_transaction(new_expense("Groceries", 45.0), today);
        ledger.add_transaction(new_expense("Lunch", 12.5), today);

        let descriptions: Vec<&str> = ledger
            .transactions()
            .iter()
            .map(|transaction| transaction.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Lunch", "Groceries"]);
        assert!(
            ledger
                .transactions()
                .iter()
                .all(|transaction| transaction.date == today)
        );
    }

    #[test]
    fn remove_deletes_matching_transaction() {
        let mut ledger = Ledger::default();
        let today = date!(2026 - 08 - 30);
        let id = ledger.add_transaction(new_expense("Groceries", 45.0), today).id;

        assert!(ledger.remove_transaction(id));
        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn remove_is_idempotent() {
        let mut ledger = Ledger::default();
        let today = date!(2026 - 08 - 30);
        let id = ledger.add_transaction(new_expense("Groceries", 45.0), today).id;
        ledger.add_transaction(new_expense("Lunch", 12.5), today);

        assert!(ledger.remove_transaction(id));
        assert!(!ledger.remove_transaction(id));
        assert_eq!(ledger.transactions().len(), 1);
    }

    #[test]
    fn remove_missing_id_is_a_no_op() {
        let mut ledger = Ledger::default();

        assert!(!ledger.remove_transaction(42));
        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn budget_defaults_to_2000() {
        let ledger = Ledger::default();

        assert_eq!(ledger.budget(), DEFAULT_BUDGET);
        assert_eq!(ledger.budget(), 2000.0);
    }

    #[test]
    fn set_budget_commits_valid_value() {
        let mut ledger = Ledger::default();

        ledger.set_budget(3500.0).unwrap();

        assert_eq!(ledger.budget(), 3500.0);
    }

    #[test]
    fn set_budget_rejects_invalid_values() {
        let mut ledger = Ledger::default();

        for value in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = ledger.set_budget(value);

            assert!(
                matches!(result, Err(Error::InvalidBudget(_))),
                "want InvalidBudget for {value}, got {result:?}"
            );
            assert_eq!(ledger.budget(), DEFAULT_BUDGET);
        }
    }
}
