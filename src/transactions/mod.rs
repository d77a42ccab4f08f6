//! Transactions module
//!
//! Provides the page that renders the transaction table and the pure
//! filtering of transactions by customer name and amount text.

mod filter;
mod page;
mod view;

pub use page::{get_transactions_page, get_transactions_table};
