#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub name_substring: String,
    pub exact_amount: Option<f64>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.name_substring.is_empty() && self.exact_amount.is_none()
    }
}
