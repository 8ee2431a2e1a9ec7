use crate::error::{DashboardError, DashboardResult};
use crate::services::chart_renderer::{BarChartConfig, ChartId, ChartSurface};
use log::debug;
use ratatui::{
    Terminal, TerminalOptions, Viewport,
    backend::Backend,
    layout::Direction,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};
use std::collections::HashSet;

/// Draws bar charts through a ratatui terminal. One horizontal bar per date,
/// measured from zero; negative totals keep their magnitude and turn red.
pub struct TerminalSurface<B: Backend> {
    canvas: String,
    terminal: Option<Terminal<B>>,
    next_id: u64,
    live: HashSet<ChartId>,
}

impl<B: Backend> TerminalSurface<B> {
    pub fn new(canvas: impl Into<String>, backend: B) -> DashboardResult<Self> {
        Ok(Self::with_terminal(canvas, Terminal::new(backend)?))
    }

    /// Draws into `height` rows below the cursor instead of taking the whole
    /// screen, so console output stays readable around the chart.
    pub fn inline(canvas: impl Into<String>, backend: B, height: u16) -> DashboardResult<Self> {
        let terminal = Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(height.max(3)),
            },
        )?;
        Ok(Self::with_terminal(canvas, terminal))
    }

    /// A surface with no drawing context behind it.
    pub fn detached(canvas: impl Into<String>) -> Self {
        Self {
            canvas: canvas.into(),
            terminal: None,
            next_id: 0,
            live: HashSet::new(),
        }
    }

    fn with_terminal(canvas: impl Into<String>, terminal: Terminal<B>) -> Self {
        Self {
            canvas: canvas.into(),
            terminal: Some(terminal),
            next_id: 0,
            live: HashSet::new(),
        }
    }

    #[cfg(test)]
    pub fn live_charts(&self) -> usize {
        self.live.len()
    }

    #[cfg(test)]
    pub fn backend(&self) -> Option<&B> {
        self.terminal.as_ref().map(|t| t.backend())
    }

    fn draw(&mut self, config: &BarChartConfig) -> DashboardResult<()> {
        let terminal = self
            .terminal
            .as_mut()
            .ok_or_else(|| DashboardError::SurfaceUnavailable {
                canvas: self.canvas.clone(),
            })?;

        let (label, data) = match config.datasets.first() {
            Some(dataset) => (dataset.label.as_str(), dataset.data.as_slice()),
            None => ("", &[][..]),
        };
        let title = format!(" {} - {} ", self.canvas, label);
        let bars: Vec<Bar> = config
            .labels
            .iter()
            .zip(data.iter().copied())
            .map(|(date, value)| bar_for(date, value))
            .collect();

        terminal.draw(|f| {
            let area = f.area();
            let block = Block::default().borders(Borders::ALL).title(title);
            if bars.is_empty() {
                f.render_widget(Paragraph::new("(no data)").block(block), area);
                return;
            }
            let chart = BarChart::default()
                .block(block)
                .direction(Direction::Horizontal)
                .bar_width(1)
                .bar_gap(0)
                .data(BarGroup::default().bars(&bars));
            f.render_widget(chart, area);
        })?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// Bar lengths are in cents so fractional totals still show.
fn bar_for(date: &str, value: f64) -> Bar<'static> {
    let color = if value < 0.0 { Color::Red } else { Color::Cyan };
    Bar::default()
        .label(Line::from(date.to_string()))
        .value((value.abs() * 100.0).round() as u64)
        .text_value(value.to_string())
        .style(Style::default().fg(color))
}

impl<B: Backend> ChartSurface for TerminalSurface<B> {
    fn canvas_id(&self) -> &str {
        &self.canvas
    }

    fn create_chart(&mut self, config: &BarChartConfig) -> DashboardResult<ChartId> {
        self.draw(config)?;
        self.next_id += 1;
        let id = ChartId(self.next_id);
        self.live.insert(id);
        Ok(id)
    }

    fn destroy_chart(&mut self, id: ChartId) {
        if !self.live.remove(&id) {
            return;
        }
        if let Some(terminal) = self.terminal.as_mut() {
            if let Err(e) = terminal.clear() {
                debug!("Could not clear '{}': {}", self.canvas, e);
            }
        }
        debug!("Chart {:?} destroyed on '{}'", id, self.canvas);
    }
}
