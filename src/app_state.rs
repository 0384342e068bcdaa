//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::ledger::Ledger;

/// The state of the REST server.
///
/// All application data lives in the [Ledger] behind a mutex; there is no
/// database connection. The state is cheap to clone since the ledger is
/// shared through an [Arc].
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory ledger holding transactions and the monthly budget.
    pub ledger: Arc<Mutex<Ledger>>,

    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] with an empty ledger and the default budget.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g.
    /// "Asia/Kolkata". It is used to assign dates to new transactions.
    pub fn new(local_timezone: &str) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(Ledger::default())),
            local_timezone: local_timezone.to_owned(),
        }
    }
}
