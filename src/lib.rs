//! Smart Finance Tracker is a web app for recording income and expenses,
//! tracking spending against a monthly budget, and viewing a category
//! breakdown of expenses.
//!
//! This library provides a REST API that directly serves HTML pages. All
//! state lives in process memory for the lifetime of the server session;
//! there is no database and no persistence.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod budget;
mod dashboard;
mod endpoints;
mod html;
mod internal_server_error;
mod ledger;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use ledger::Ledger;
pub use logging::logging_middleware;
pub use routing::build_router;
pub use timezone::get_local_offset;

use crate::{
    alert::AlertTemplate,
    html::render,
    internal_server_error::{InternalServerErrorPageTemplate, render_internal_server_error},
    not_found::get_404_not_found_response,
    transaction::TransactionId,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// Could not acquire the ledger lock.
    ///
    /// This only happens when another handler panicked while holding the
    /// lock, poisoning it.
    #[error("could not acquire the ledger lock")]
    LedgerLock,

    /// Tried to delete a transaction that does not exist.
    #[error("the transaction with ID {0} could not be found")]
    TransactionNotFound(TransactionId),

    /// A budget edit was submitted with a value that is not a finite,
    /// positive number.
    ///
    /// The committed budget is left unchanged when this error occurs.
    #[error("a budget must be a finite, positive number, got {0}")]
    InvalidBudget(f64),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::TransactionNotFound(_) => get_404_not_found_response(),
            Error::InvalidTimezoneError(timezone) => {
                render_internal_server_error(InternalServerErrorPageTemplate {
                    description: "Invalid Timezone Settings",
                    fix: &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to a valid, canonical timezone string"
                    ),
                })
            }
            Error::LedgerLock => render_internal_server_error(Default::default()),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_internal_server_error(Default::default())
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => render(
                StatusCode::INTERNAL_SERVER_ERROR,
                AlertTemplate::error(
                    "Invalid Timezone Settings",
                    &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to a valid, canonical timezone string"
                    ),
                )
                .into_markup(),
            ),
            Error::TransactionNotFound(_) => render(
                StatusCode::NOT_FOUND,
                AlertTemplate::error(
                    "Could not delete transaction",
                    "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has already been deleted.",
                )
                .into_markup(),
            ),
            _ => render(
                StatusCode::INTERNAL_SERVER_ERROR,
                AlertTemplate::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                )
                .into_markup(),
            ),
        }
    }
}
