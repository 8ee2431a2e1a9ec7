use crate::models::{AllData, Customer, FilterState, LoadState, Transaction};
use crate::repositories::customer_repository;
use chrono::Utc;
use log::{info, warn};

/// Everything the dashboard shows, owned in one place. Filter and
/// aggregation functions read from it; only the methods below mutate it.
#[derive(Debug)]
pub struct DashboardState {
    customers: Vec<Customer>,
    transactions: Vec<Transaction>,
    filtered_customers: Vec<Customer>,
    filter: FilterState,
    selected_customer_id: Option<i64>,
    load_state: LoadState,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            customers: Vec::new(),
            transactions: Vec::new(),
            filtered_customers: Vec::new(),
            filter: FilterState::default(),
            selected_customer_id: None,
            load_state: LoadState::NotLoaded,
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn filtered_customers(&self) -> &[Customer] {
        &self.filtered_customers
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn selected_customer_id(&self) -> Option<i64> {
        self.selected_customer_id
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn mark_loading(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Replaces both collections wholesale, clears the filter and shows
    /// every customer again.
    pub fn apply_payload(&mut self, data: AllData) {
        let AllData {
            customers,
            transactions,
        } = data;
        self.load_state = LoadState::Loaded {
            at: Utc::now(),
            customers: customers.len(),
            transactions: transactions.len(),
        };
        self.filter = FilterState::default();
        self.filtered_customers = customers.clone();
        self.customers = customers;
        self.transactions = transactions;
    }

    /// Records a failed load. Collections from an earlier load stay in place.
    pub fn mark_failed(&mut self, reason: impl Into<String>) {
        self.load_state = LoadState::Failed {
            reason: reason.into(),
        };
    }

    pub fn set_name_filter(&mut self, name_substring: &str) -> &[Customer] {
        self.filter.name_substring = name_substring.to_string();
        self.refilter()
    }

    pub fn set_amount_filter(&mut self, exact_amount: Option<f64>) -> &[Customer] {
        self.filter.exact_amount = exact_amount;
        self.refilter()
    }

    pub fn clear_filter(&mut self) -> &[Customer] {
        self.filter = FilterState::default();
        self.refilter()
    }

    pub fn select_customer(&mut self, customer_id: Option<i64>) {
        if let Some(id) = customer_id {
            if customer_repository::find_customer(&self.customers, id).is_none() {
                warn!("Selected customer {} is not in the loaded data", id);
            }
        }
        self.selected_customer_id = customer_id;
    }

    fn refilter(&mut self) -> &[Customer] {
        info!(
            "Filtering customers by name: {:?} and amount: {:?}",
            self.filter.name_substring, self.filter.exact_amount
        );
        self.filtered_customers =
            customer_repository::apply_filter(&self.customers, &self.transactions, &self.filter);
        info!("Filtered customers: {}", self.filtered_customers.len());
        &self.filtered_customers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(names: &[(i64, &str)], amounts: &[(i64, f64)]) -> AllData {
        AllData {
            customers: names
                .iter()
                .map(|(id, name)| Customer {
                    id: *id,
                    name: name.to_string(),
                })
                .collect(),
            transactions: amounts
                .iter()
                .enumerate()
                .map(|(i, (customer_id, amount))| Transaction {
                    id: i as i64 + 1,
                    customer_id: *customer_id,
                    date: "2022-01-01".to_string(),
                    amount: *amount,
                })
                .collect(),
        }
    }

    #[test]
    fn new_state_is_empty_and_filtering_is_harmless() {
        let mut state = DashboardState::new();
        assert_eq!(state.load_state(), &LoadState::NotLoaded);
        assert!(state.set_name_filter("alice").is_empty());
        assert!(state.set_amount_filter(Some(10.0)).is_empty());
    }

    #[test]
    fn apply_payload_replaces_and_resets_filtered_view() {
        let mut state = DashboardState::new();
        state.apply_payload(payload(&[(1, "Alice"), (2, "Bob")], &[(1, 10.0)]));
        state.set_name_filter("bob");
        assert_eq!(state.filtered_customers().len(), 1);

        state.apply_payload(payload(&[(3, "Carol")], &[]));
        assert!(state.filter().is_empty());
        assert_eq!(
            state.filtered_customers(),
            customer_repository::apply_filter(
                state.customers(),
                state.transactions(),
                state.filter()
            )
            .as_slice()
        );
        assert_eq!(state.customers().len(), 1);
        assert_eq!(state.customers()[0].name, "Carol");
        assert!(state.transactions().is_empty());
        assert_eq!(state.filtered_customers(), state.customers());
        assert!(matches!(
            state.load_state(),
            LoadState::Loaded {
                customers: 1,
                transactions: 0,
                ..
            }
        ));
    }

    #[test]
    fn failed_load_keeps_previous_collections() {
        let mut state = DashboardState::new();
        state.apply_payload(payload(&[(1, "Alice")], &[(1, 10.0)]));
        state.mark_failed("connection refused");
        assert!(state.load_state().is_failed());
        assert_eq!(state.customers().len(), 1);
        assert_eq!(state.transactions().len(), 1);
    }

    #[test]
    fn filters_combine_and_clear() {
        let mut state = DashboardState::new();
        state.apply_payload(payload(
            &[(1, "Alice"), (2, "Alicia"), (3, "Bob")],
            &[(1, 10.0), (2, 20.0), (3, 10.0)],
        ));
        state.set_name_filter("ALI");
        let ids: Vec<i64> = state
            .set_amount_filter(Some(10.0))
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1]);

        assert_eq!(state.clear_filter().len(), 3);
        assert!(state.filter().is_empty());
    }

    #[test]
    fn selection_is_independent_of_filter() {
        let mut state = DashboardState::new();
        state.apply_payload(payload(&[(1, "Alice"), (2, "Bob")], &[]));
        state.select_customer(Some(2));
        state.set_name_filter("alice");
        assert_eq!(state.selected_customer_id(), Some(2));
        state.select_customer(None);
        assert_eq!(state.selected_customer_id(), None);
    }
}
