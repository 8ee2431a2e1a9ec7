use crate::models::{ChartSeries, Transaction};
use std::collections::HashMap;

/// Sums one customer's transaction amounts per date. Dates keep the order in
/// which they first appear; they are not sorted.
pub fn aggregate(transactions: &[Transaction], customer_id: i64) -> ChartSeries {
    let mut series = ChartSeries::default();
    let mut index_by_date: HashMap<&str, usize> = HashMap::new();

    for t in transactions.iter().filter(|t| t.customer_id == customer_id) {
        match index_by_date.get(t.date.as_str()) {
            Some(&i) => series.totals[i] += t.amount,
            None => {
                index_by_date.insert(t.date.as_str(), series.dates.len());
                series.dates.push(t.date.clone());
                series.totals.push(t.amount);
            }
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: i64, customer_id: i64, date: &str, amount: f64) -> Transaction {
        Transaction {
            id,
            customer_id,
            date: date.to_string(),
            amount,
        }
    }

    #[test]
    fn groups_and_sums_by_date() {
        let transactions = vec![
            tx(1, 7, "2024-01-01", 10.0),
            tx(2, 7, "2024-01-01", 5.0),
            tx(3, 7, "2024-01-02", 7.0),
        ];
        let series = aggregate(&transactions, 7);
        assert_eq!(series.dates, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(series.totals, vec![15.0, 7.0]);
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let transactions = vec![
            tx(1, 1, "2024-03-05", 1.0),
            tx(2, 1, "2024-01-01", 2.0),
            tx(3, 2, "2023-12-31", 100.0),
            tx(4, 1, "2024-03-05", 3.0),
            tx(5, 1, "2024-02-10", -4.5),
        ];
        let series = aggregate(&transactions, 1);
        assert_eq!(series.dates, vec!["2024-03-05", "2024-01-01", "2024-02-10"]);
        assert_eq!(series.totals, vec![4.0, 2.0, -4.5]);
    }

    #[test]
    fn ignores_other_customers() {
        let transactions = vec![tx(1, 1, "2024-01-01", 10.0), tx(2, 2, "2024-01-01", 99.0)];
        let series = aggregate(&transactions, 2);
        assert_eq!(series.dates, vec!["2024-01-01"]);
        assert_eq!(series.totals, vec![99.0]);
    }

    #[test]
    fn customer_without_transactions_gives_empty_series() {
        let transactions = vec![tx(1, 1, "2024-01-01", 10.0)];
        let series = aggregate(&transactions, 3);
        assert!(series.is_empty());
        assert!(series.totals.is_empty());
    }

    #[test]
    fn series_length_matches_distinct_dates() {
        let transactions: Vec<Transaction> = (0..30)
            .map(|i| tx(i, 1, &format!("2024-01-{:02}", i % 7 + 1), 1.0))
            .collect();
        let series = aggregate(&transactions, 1);
        assert_eq!(series.len(), 7);
        assert_eq!(series.totals.iter().sum::<f64>(), 30.0);
    }
}
