use crate::error::{DashboardError, DashboardResult};
use crate::models::AllData;
use crate::state::DashboardState;
use crate::utils::helpers;
use async_trait::async_trait;
use log::{error, info};

/// Where the customers and transactions come from.
#[async_trait]
pub trait DataSource {
    fn describe(&self) -> String;
    async fn fetch_all(&self) -> DashboardResult<AllData>;
}

pub struct HttpDataSource {
    client: reqwest::Client,
    url: String,
}

impl HttpDataSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_all(&self) -> DashboardResult<AllData> {
        info!("Fetching data from URL: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        // Decoded here rather than with `response.json()` so a bad body
        // surfaces as `Parse` instead of `Http`.
        let body = response.bytes().await?;
        let data: AllData = serde_json::from_slice(&body)?;
        Ok(data)
    }
}

pub struct FileDataSource {
    path: String,
}

impl FileDataSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    fn describe(&self) -> String {
        format!("file://{}", self.path)
    }

    async fn fetch_all(&self) -> DashboardResult<AllData> {
        info!("Reading data from file: {}", self.path);
        helpers::load_all_data(&self.path)
    }
}

/// Fetches from `source` and swaps the result into `state`. A failure is
/// recorded as `LoadState::Failed` and also returned to the caller.
pub async fn load(source: &dyn DataSource, state: &mut DashboardState) -> DashboardResult<()> {
    state.mark_loading();
    match source.fetch_all().await {
        Ok(data) => {
            info!(
                "Loaded {} customers and {} transactions from {}",
                data.customers.len(),
                data.transactions.len(),
                source.describe()
            );
            state.apply_payload(data);
            Ok(())
        }
        Err(e) => {
            error!("Failed to load data from {}: {}", source.describe(), e);
            state.mark_failed(e.to_string());
            Err(e)
        }
    }
}
