//! The domain models for the customer transaction ledger.

use serde::Deserialize;
use time::Date;

/// Alias for the integer type used for customer IDs.
pub type CustomerID = i64;
/// Alias for the integer type used for transaction IDs.
pub type TransactionID = i64;

/// A customer that transactions belong to.
///
/// Customers are loaded once from the dataset document and never modified.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    /// The unique ID of the customer.
    pub id: CustomerID,
    /// The customer's display name.
    pub name: String,
}

/// A dated, amount-bearing record belonging to one customer.
///
/// Transactions are loaded once from the dataset document and never modified.
/// Every `customer_id` must refer to a customer in the same document, which
/// the loader checks at startup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// The unique ID of the transaction.
    pub id: TransactionID,
    /// The ID of the customer this transaction belongs to.
    pub customer_id: CustomerID,
    /// The date the transaction occurred on.
    pub date: Date,
    /// The transaction amount.
    pub amount: f64,
}
