mod all_data;
mod chart_series;
mod customer;
mod filter_state;
mod load_state;
mod transaction;

pub use all_data::AllData;
pub use chart_series::ChartSeries;
pub use customer::Customer;
pub use filter_state::FilterState;
pub use load_state::LoadState;
pub use transaction::Transaction;
