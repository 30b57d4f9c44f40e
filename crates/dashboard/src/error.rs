use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected API response: {0}")]
    Json(#[from] serde_json::Error),

    /// An `{"error": ...}` body returned by the API layer.
    #[error("{message}")]
    Api {
        message: String,
        kind: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
