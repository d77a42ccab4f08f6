//! Loading and validating the customer transaction dataset.
//!
//! The dataset is read from a JSON document once at startup and is read-only
//! for the lifetime of the process. Handlers share it behind an `Arc` and
//! only ever borrow it.

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

use serde::Deserialize;

use crate::{
    Error,
    model::{Customer, CustomerID, Transaction},
};

/// The shape of the JSON dataset document: two top-level arrays.
#[derive(Debug, Deserialize)]
struct DatasetDocument {
    customers: Vec<Customer>,
    transactions: Vec<Transaction>,
}

/// The immutable, validated set of customers and transactions.
///
/// Construction validates referential integrity: customer and transaction IDs
/// are unique, and every transaction's `customer_id` resolves to a customer.
/// This means lookups cannot fail for data that came through the loader, but
/// [Dataset::customer] still reports a miss as an error so that a violation
/// fails fast instead of being silently skipped.
#[derive(Debug)]
pub struct Dataset {
    customers: Vec<Customer>,
    transactions: Vec<Transaction>,
    customer_indices: HashMap<CustomerID, usize>,
}

impl Dataset {
    /// Read and validate the dataset document at `path`.
    ///
    /// # Errors
    /// Returns [Error::DatasetRead] if the file cannot be read,
    /// [Error::DatasetParse] if it is not a valid dataset document, or an
    /// integrity error from [Dataset::from_document].
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)
            .map_err(|error| Error::DatasetRead(path.display().to_string(), error.to_string()))?;

        let dataset = Self::from_json(&text)?;

        tracing::info!(
            "Loaded {} customers and {} transactions from {}",
            dataset.customers.len(),
            dataset.transactions.len(),
            path.display()
        );

        Ok(dataset)
    }

    /// Parse and validate a dataset document from JSON text.
    ///
    /// # Errors
    /// Returns [Error::DatasetParse] if the text is not a valid dataset
    /// document, or an integrity error from [Dataset::from_document].
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let document: DatasetDocument =
            serde_json::from_str(text).map_err(|error| Error::DatasetParse(error.to_string()))?;

        Self::from_document(document)
    }

    fn from_document(document: DatasetDocument) -> Result<Self, Error> {
        let DatasetDocument {
            customers,
            transactions,
        } = document;

        let mut customer_indices = HashMap::with_capacity(customers.len());

        for (index, customer) in customers.iter().enumerate() {
            if customer_indices.insert(customer.id, index).is_some() {
                return Err(Error::DuplicateCustomer(customer.id));
            }
        }

        let mut transaction_ids = HashSet::with_capacity(transactions.len());

        for transaction in &transactions {
            if !transaction_ids.insert(transaction.id) {
                return Err(Error::DuplicateTransaction(transaction.id));
            }

            if !customer_indices.contains_key(&transaction.customer_id) {
                return Err(Error::UnknownCustomer(
                    transaction.id,
                    transaction.customer_id,
                ));
            }
        }

        Ok(Self {
            customers,
            transactions,
            customer_indices,
        })
    }

    /// All customers in document order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// All transactions in document order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up a customer by ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no customer has the given ID.
    pub fn customer(&self, id: CustomerID) -> Result<&Customer, Error> {
        self.customer_indices
            .get(&id)
            .map(|&index| &self.customers[index])
            .ok_or(Error::NotFound)
    }
}
