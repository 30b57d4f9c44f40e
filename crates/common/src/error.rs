use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketError {
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),
    #[error("Insufficient data: {required} price points required, {available} available")]
    InsufficientData { required: usize, available: usize },
    #[error("Upstream rejected request (HTTP {status}, code {code}): {message}")]
    UpstreamRejected {
        status: u16,
        code: i64,
        message: String,
    },
    #[error("Malformed upstream payload: {0}")]
    Decode(String),
}

/// Coarse classification attached to every error body the API returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UpstreamUnavailable,
    UnknownSymbol,
    InsufficientData,
    UpstreamRejected,
    Decode,
}

impl MarketError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            Self::UnknownSymbol(_) => ErrorKind::UnknownSymbol,
            Self::InsufficientData { .. } => ErrorKind::InsufficientData,
            Self::UpstreamRejected { .. } => ErrorKind::UpstreamRejected,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }
}

impl From<serde_json::Error> for MarketError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}
