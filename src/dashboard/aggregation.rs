//! Transaction data aggregation for the dashboard chart.
//!
//! Provides pure functions to select one customer's transactions and to group
//! them by date, summing the amounts per date.

use std::collections::HashMap;

use time::Date;

use crate::{
    dataset::Dataset,
    model::{CustomerID, Transaction},
};

/// Per-day transaction totals as parallel sequences.
///
/// `dates` holds each distinct transaction date in first-occurrence order and
/// `totals` holds the summed amount for the date at the same index. The two
/// vectors always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct DailyTotals {
    pub dates: Vec<Date>,
    pub totals: Vec<f64>,
}

impl DailyTotals {
    /// Whether there is any data to chart.
    pub(super) fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Selects the transactions belonging to `customer_id`, preserving the
/// dataset's original order.
pub(super) fn transactions_for_customer(
    dataset: &Dataset,
    customer_id: CustomerID,
) -> Vec<&Transaction> {
    dataset
        .transactions()
        .iter()
        .filter(|transaction| transaction.customer_id == customer_id)
        .collect()
}

/// Aggregates transaction amounts by date.
///
/// Dates appear in first-occurrence order, and transactions sharing a date
/// are summed into a single entry.
pub(super) fn daily_totals(transactions: &[&Transaction]) -> DailyTotals {
    let mut dates = Vec::new();
    let mut totals = Vec::new();
    let mut indices_by_date: HashMap<Date, usize> = HashMap::new();

    for transaction in transactions {
        match indices_by_date.get(&transaction.date) {
            Some(&index) => totals[index] += transaction.amount,
            None => {
                indices_by_date.insert(transaction.date, dates.len());
                dates.push(transaction.date);
                totals.push(transaction.amount);
            }
        }
    }

    DailyTotals { dates, totals }
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use crate::{dataset::Dataset, model::Transaction};

    use super::{DailyTotals, daily_totals, transactions_for_customer};

    fn create_test_transaction(id: i64, customer_id: i64, date: Date, amount: f64) -> Transaction {
        Transaction {
            id,
            customer_id,
            date,
            amount,
        }
    }

    #[test]
    fn daily_totals_sums_amounts_per_date() {
        let transactions = [
            create_test_transaction(1, 1, date!(2022 - 01 - 01), 1000.0),
            create_test_transaction(2, 1, date!(2022 - 01 - 02), 2000.0),
        ];
        let transactions: Vec<&Transaction> = transactions.iter().collect();

        let result = daily_totals(&transactions);

        assert_eq!(
            result,
            DailyTotals {
                dates: vec![date!(2022 - 01 - 01), date!(2022 - 01 - 02)],
                totals: vec![1000.0, 2000.0],
            }
        );
    }

    #[test]
    fn daily_totals_merges_same_date_transactions() {
        let transactions = [
            create_test_transaction(1, 1, date!(2022 - 01 - 01), 100.0),
            create_test_transaction(2, 1, date!(2022 - 01 - 01), 200.0),
        ];
        let transactions: Vec<&Transaction> = transactions.iter().collect();

        let result = daily_totals(&transactions);

        assert_eq!(
            result,
            DailyTotals {
                dates: vec![date!(2022 - 01 - 01)],
                totals: vec![300.0],
            }
        );
    }

    #[test]
    fn daily_totals_keeps_first_occurrence_order() {
        let transactions = [
            create_test_transaction(1, 1, date!(2022 - 01 - 02), 500.0),
            create_test_transaction(2, 1, date!(2022 - 01 - 01), 750.0),
            create_test_transaction(3, 1, date!(2022 - 01 - 02), 250.0),
        ];
        let transactions: Vec<&Transaction> = transactions.iter().collect();

        let result = daily_totals(&transactions);

        assert_eq!(
            result,
            DailyTotals {
                dates: vec![date!(2022 - 01 - 02), date!(2022 - 01 - 01)],
                totals: vec![750.0, 750.0],
            }
        );
    }

    #[test]
    fn daily_totals_handles_empty_input() {
        let result = daily_totals(&[]);

        assert!(result.is_empty());
        assert_eq!(result.dates.len(), 0);
        assert_eq!(result.totals.len(), 0);
    }

    #[test]
    fn transactions_for_customer_selects_in_order() {
        let dataset = Dataset::from_json(
            r#"{
                "customers": [
                    { "id": 1, "name": "Ahmed Ali" },
                    { "id": 2, "name": "Aya Elsayed" }
                ],
                "transactions": [
                    { "id": 1, "customer_id": 1, "date": "2022-01-01", "amount": 1000 },
                    { "id": 2, "customer_id": 2, "date": "2022-01-01", "amount": 550 },
                    { "id": 3, "customer_id": 1, "date": "2022-01-02", "amount": 2000 }
                ]
            }"#,
        )
        .unwrap();

        let selected = transactions_for_customer(&dataset, 1);

        let selected_ids: Vec<i64> = selected.iter().map(|transaction| transaction.id).collect();
        assert_eq!(selected_ids, vec![1, 3]);
    }

    #[test]
    fn transactions_for_customer_yields_empty_for_unknown_customer() {
        let dataset = Dataset::from_json(
            r#"{
                "customers": [{ "id": 1, "name": "Ahmed Ali" }],
                "transactions": [
                    { "id": 1, "customer_id": 1, "date": "2022-01-01", "amount": 1000 }
                ]
            }"#,
        )
        .unwrap();

        let selected = transactions_for_customer(&dataset, 99);

        assert!(selected.is_empty());
        assert!(daily_totals(&selected).is_empty());
    }
}
