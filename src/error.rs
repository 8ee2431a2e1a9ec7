use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Payload error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to get drawing context for canvas '{canvas}'")]
    SurfaceUnavailable { canvas: String },

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
