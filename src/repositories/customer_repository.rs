use crate::models::{Customer, FilterState, Transaction};
use std::collections::HashSet;

/// Returns the customers matching both the name and the amount predicate,
/// in their original order.
pub fn filter_customers(
    customers: &[Customer],
    transactions: &[Transaction],
    name_substring: &str,
    exact_amount: Option<f64>,
) -> Vec<Customer> {
    let needle = name_substring.to_lowercase();
    let amount_matches: Option<HashSet<i64>> = exact_amount.map(|amount| {
        transactions
            .iter()
            .filter(|t| t.amount == amount)
            .map(|t| t.customer_id)
            .collect()
    });

    customers
        .iter()
        .filter(|customer| {
            let name_ok = needle.is_empty() || customer.name.to_lowercase().contains(&needle);
            let amount_ok = amount_matches
                .as_ref()
                .map_or(true, |ids| ids.contains(&customer.id));
            name_ok && amount_ok
        })
        .cloned()
        .collect()
}

pub fn apply_filter(
    customers: &[Customer],
    transactions: &[Transaction],
    filter: &FilterState,
) -> Vec<Customer> {
    filter_customers(
        customers,
        transactions,
        &filter.name_substring,
        filter.exact_amount,
    )
}

pub fn transactions_for_customer(
    transactions: &[Transaction],
    customer_id: i64,
) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|t| t.customer_id == customer_id)
        .collect()
}

pub fn find_customer(customers: &[Customer], customer_id: i64) -> Option<&Customer> {
    customers.iter().find(|c| c.id == customer_id)
}
