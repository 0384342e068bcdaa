//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model, the fixed `Category` set and `TransactionType`
//! - View functions for the entry form and the newest-first transaction list
//! - Route handlers for the transactions page and the create/delete endpoints

mod core;
mod create_endpoint;
mod delete_endpoint;
mod form;
mod list;
mod transactions_page;

pub use core::{Category, NewTransaction, Transaction, TransactionId, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use transactions_page::get_transactions_page;
