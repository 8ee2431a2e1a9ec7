use serde::{Deserialize, Serialize};

use super::{Customer, Transaction};

/// Body of `GET /allData`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AllData {
    pub customers: Vec<Customer>,
    pub transactions: Vec<Transaction>,
}
