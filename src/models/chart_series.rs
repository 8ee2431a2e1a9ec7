use serde::Serialize;

/// Per-date totals for one customer, dates in first-occurrence order.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub dates: Vec<String>,
    pub totals: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
