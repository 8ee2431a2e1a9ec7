use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Loaded {
        at: DateTime<Utc>,
        customers: usize,
        transactions: usize,
    },
    Failed {
        reason: String,
    },
}

impl LoadState {
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed { .. })
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::NotLoaded => write!(f, "not loaded"),
            LoadState::Loading => write!(f, "loading"),
            LoadState::Loaded {
                at,
                customers,
                transactions,
            } => write!(
                f,
                "loaded {} customers and {} transactions at {}",
                customers,
                transactions,
                at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            LoadState::Failed { reason } => write!(f, "load failed: {}", reason),
        }
    }
}
