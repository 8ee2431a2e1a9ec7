use crate::error::{DashboardError, DashboardResult};
use crate::models::{ChartSeries, Transaction};
use crate::services::aggregator;
use log::{debug, error, info};
use serde::Serialize;

pub const DATASET_LABEL: &str = "Total Transaction Amount";
pub const BACKGROUND_COLOR: &str = "rgba(75, 192, 192, 0.2)";
pub const BORDER_COLOR: &str = "rgba(75, 192, 192, 1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub begin_at_zero: bool,
}

impl BarChartConfig {
    pub fn for_series(series: &ChartSeries) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels: series.dates.clone(),
            datasets: vec![Dataset {
                label: DATASET_LABEL.to_string(),
                data: series.totals.clone(),
                background_color: BACKGROUND_COLOR.to_string(),
                border_color: BORDER_COLOR.to_string(),
                border_width: 1,
            }],
            begin_at_zero: true,
        }
    }
}

/// A place charts can be drawn on, bound to one named canvas.
pub trait ChartSurface {
    fn canvas_id(&self) -> &str;

    /// Draws a new chart. Fails with `SurfaceUnavailable` when there is no
    /// drawing context.
    fn create_chart(&mut self, config: &BarChartConfig) -> DashboardResult<ChartId>;

    fn destroy_chart(&mut self, id: ChartId);
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// No customer selected.
    Skipped,
    Drawn(ChartSeries),
    SurfaceUnavailable,
    Failed(String),
}

/// Owns at most one live chart on its surface and swaps it on every render.
pub struct ChartRenderer<S: ChartSurface> {
    surface: S,
    chart: Option<ChartId>,
}

impl<S: ChartSurface> ChartRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            chart: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    pub fn render(
        &mut self,
        transactions: &[Transaction],
        selected_customer_id: Option<i64>,
    ) -> RenderOutcome {
        let customer_id = match selected_customer_id {
            Some(id) => id,
            None => return RenderOutcome::Skipped,
        };

        info!("Selected customer ID: {}", customer_id);
        let series = aggregator::aggregate(transactions, customer_id);
        info!(
            "Updating graph for customer {} with {} dates: {:?}, amounts: {:?}",
            customer_id,
            series.len(),
            series.dates,
            series.totals
        );

        self.release();

        let config = BarChartConfig::for_series(&series);
        match serde_json::to_string(&config) {
            Ok(json) => debug!("Chart config: {}", json),
            Err(e) => debug!("Chart config not serializable: {}", e),
        }

        match self.surface.create_chart(&config) {
            Ok(id) => {
                self.chart = Some(id);
                info!("Chart updated successfully");
                RenderOutcome::Drawn(series)
            }
            Err(DashboardError::SurfaceUnavailable { canvas }) => {
                error!("Failed to get canvas context for '{}'", canvas);
                RenderOutcome::SurfaceUnavailable
            }
            Err(e) => {
                error!("Failed to draw chart: {}", e);
                RenderOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn teardown(&mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(id) = self.chart.take() {
            debug!("Destroying chart {:?} on '{}'", id, self.surface.canvas_id());
            self.surface.destroy_chart(id);
        }
    }
}

impl<S: ChartSurface> Drop for ChartRenderer<S> {
    fn drop(&mut self) {
        self.release();
    }
}
