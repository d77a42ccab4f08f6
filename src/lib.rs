//! Tallyboard is a web app for browsing a read-only set of customer
//! transactions.
//!
//! It serves HTML pages directly: a transactions table with live filtering by
//! customer name and amount, and a dashboard that charts per-day transaction
//! totals for a selected customer.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod dashboard;
mod dataset;
mod endpoints;
mod html;
mod logging;
mod model;
mod navigation;
mod not_found;
mod routing;
mod transactions;

pub use app_state::AppState;
pub use dataset::Dataset;
pub use logging::logging_middleware;
pub use model::{Customer, CustomerID, Transaction, TransactionID};
pub use routing::build_router;

use crate::{html::error_view, not_found::get_404_not_found_response};

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
    /// The dataset file could not be read.
    ///
    /// Callers should pass in the file path and the original error as a
    /// string.
    #[error("could not read dataset file \"{0}\": {1}")]
    DatasetRead(String, String),

    /// The dataset document could not be parsed as JSON with the expected
    /// `customers` and `transactions` arrays.
    #[error("could not parse dataset document: {0}")]
    DatasetParse(String),

    /// Two customers in the dataset document share the same ID.
    #[error("the customer ID {0} appears more than once in the dataset")]
    DuplicateCustomer(CustomerID),

    /// Two transactions in the dataset document share the same ID.
    #[error("the transaction ID {0} appears more than once in the dataset")]
    DuplicateTransaction(TransactionID),

    /// A transaction references a customer ID that is not in the dataset.
    ///
    /// This is a data-integrity fault in the input document: every
    /// transaction must belong to exactly one known customer.
    #[error("transaction {0} references unknown customer {1}")]
    UnknownCustomer(TransactionID, CustomerID),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., a customer ID) are correct.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    error_view(
                        "Internal Server Error",
                        "500",
                        "Sorry, something went wrong.",
                        "Try again later or check the server logs.",
                    ),
                )
                    .into_response()
            }
        }
    }
}
