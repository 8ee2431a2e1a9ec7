use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub customer_id: i64,
    /// Calendar date as sent by the data source; never parsed.
    pub date: String,
    pub amount: f64,
}
