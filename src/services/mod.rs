pub mod aggregator;
pub mod chart_renderer;
pub mod data_loader;
pub mod terminal_surface;
