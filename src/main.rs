use dotenv::dotenv;
use crossterm::tty::IsTty;
use log::{error, info, warn};
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};

mod config;
mod console;
mod error;
mod models;
mod repositories;
mod services;
mod state;
mod utils;

use crate::config::Config;
use crate::console::{Command, Console};
use crate::services::chart_renderer::ChartRenderer;
use crate::services::data_loader::{self, DataSource, FileDataSource, HttpDataSource};
use crate::services::terminal_surface::TerminalSurface;
use crate::state::DashboardState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    info!("Starting customer dashboard");
    let config = Config::from_env();

    let source: Box<dyn DataSource> = match &config.data_file {
        Some(path) => Box::new(FileDataSource::new(path.clone())),
        None => Box::new(HttpDataSource::new(config.data_url.clone())),
    };

    let mut state = DashboardState::new();
    if let Err(e) = data_loader::load(source.as_ref(), &mut state).await {
        error!("Starting with no data: {}", e);
    }
    println!("{}", state.load_state());
    if state.load_state().is_failed() {
        println!("type 'reload' to try again");
    }

    let renderer = ChartRenderer::new(open_surface(&config));
    let mut console = Console::new(state, renderer, source.as_ref(), io::stdout());
    console.execute(Command::List).await?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    console.run(stdin).await?;

    info!("Customer dashboard closed");
    Ok(())
}

fn open_surface(config: &Config) -> TerminalSurface<CrosstermBackend<Stdout>> {
    let canvas = config.chart_canvas.clone();
    if canvas.is_empty() {
        warn!("CHART_CANVAS is empty, charts will not be drawn");
        return TerminalSurface::detached(canvas);
    }
    if !io::stdout().is_tty() {
        warn!("stdout is not a terminal, charts will not be drawn");
        return TerminalSurface::detached(canvas);
    }
    match TerminalSurface::inline(
        canvas.clone(),
        CrosstermBackend::new(io::stdout()),
        config.chart_height,
    ) {
        Ok(surface) => surface,
        Err(e) => {
            warn!("Could not open terminal for charts: {}", e);
            TerminalSurface::detached(canvas)
        }
    }
}
