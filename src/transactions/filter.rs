//! Pure filtering of transactions by customer name and amount text.
//!
//! Both predicates are substring tests: the name query is matched
//! case-insensitively against the joined customer name, and the amount query
//! is matched against the decimal text form of the amount. Neither is a
//! numeric or exact match.

use crate::{Error, dataset::Dataset, model::Transaction};

/// A normalized pair of filter queries.
///
/// Queries are trimmed and case-folded on construction. Empty queries match
/// every transaction.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct TransactionFilter {
    name_query: String,
    amount_query: String,
}

impl TransactionFilter {
    pub(super) fn new(name_query: &str, amount_query: &str) -> Self {
        Self {
            name_query: name_query.trim().to_lowercase(),
            amount_query: amount_query.trim().to_lowercase(),
        }
    }

    fn matches(&self, customer_name: &str, amount: f64) -> bool {
        customer_name.to_lowercase().contains(&self.name_query)
            && amount_text(amount).contains(&self.amount_query)
    }
}

/// The decimal text form of an amount, as used for substring filtering.
///
/// Whole amounts render without a fractional part ("1000", not "1000.0"), so
/// a query of "50" matches 1500, 2500, and 500 but not 1200.
pub(super) fn amount_text(amount: f64) -> String {
    amount.to_string()
}

/// Return the transactions whose joined customer name and amount text match
/// `filter`, preserving the dataset's original order.
///
/// # Errors
/// Returns [Error::NotFound] if a transaction references a customer that is
/// not in the dataset. The loader validates this at startup, so an error here
/// indicates a data-integrity bug rather than bad user input.
pub(super) fn filter_transactions<'a>(
    dataset: &'a Dataset,
    filter: &TransactionFilter,
) -> Result<Vec<&'a Transaction>, Error> {
    let mut matching = Vec::new();

    for transaction in dataset.transactions() {
        let customer = dataset.customer(transaction.customer_id)?;

        if filter.matches(&customer.name, transaction.amount) {
            matching.push(transaction);
        }
    }

    Ok(matching)
}
