//! Defines the route handlers for the page that displays transactions as a table.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{AppState, Error, dataset::Dataset};

use super::{
    filter::{TransactionFilter, filter_transactions},
    view::{TransactionRow, transaction_rows_view, transactions_view},
};

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsViewState {
    /// The loaded customer transaction dataset.
    dataset: Arc<Dataset>,
}

impl FromRef<AppState> for TransactionsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            dataset: state.dataset.clone(),
        }
    }
}

/// The filter queries taken from the URL query string.
///
/// Missing parameters are treated as empty queries, which match everything.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    /// Substring to match against customer names, case-insensitively.
    #[serde(default)]
    name: String,
    /// Substring to match against the decimal text form of amounts.
    #[serde(default)]
    amount: String,
}

/// Render the transactions page with the filtered table.
pub async fn get_transactions_page(
    State(state): State<TransactionsViewState>,
    Query(params): Query<FilterParams>,
) -> Result<Response, Error> {
    let rows = build_table_rows(&state.dataset, &params)?;

    Ok(transactions_view(&params.name, &params.amount, &rows).into_response())
}

/// Render only the filtered table rows.
///
/// Requested by htmx whenever a filter input changes; the response replaces
/// the table body contents.
pub async fn get_transactions_table(
    State(state): State<TransactionsViewState>,
    Query(params): Query<FilterParams>,
) -> Result<Response, Error> {
    let rows = build_table_rows(&state.dataset, &params)?;

    Ok(transaction_rows_view(&rows).into_response())
}

/// Join each matching transaction to its customer name, preserving the
/// dataset's original transaction order.
fn build_table_rows(dataset: &Dataset, params: &FilterParams) -> Result<Vec<TransactionRow>, Error> {
    let filter = TransactionFilter::new(&params.name, &params.amount);
    let transactions = filter_transactions(dataset, &filter)
        .inspect_err(|error| tracing::error!("could not filter transactions: {error}"))?;

    transactions
        .into_iter()
        .map(|transaction| {
            let customer = dataset.customer(transaction.customer_id)?;

            Ok(TransactionRow {
                customer_name: customer.name.clone(),
                date: transaction.date,
                amount: transaction.amount,
            })
        })
        .collect()
}
