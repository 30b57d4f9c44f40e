use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::warn;

use common::MarketError;

use crate::remote::BinanceClient;
use crate::traits::MarketDataClient;

pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

#[derive(Debug, Clone)]
pub struct BinanceConfig {
    pub api_key: Option<String>,
    pub secret_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for BinanceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            secret_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Hands out a client for the duration of one request. Failing to build one
/// is an ordinary error value, never a silently absent global.
pub trait ClientFactory: Send + Sync {
    fn connect(&self) -> Result<Arc<dyn MarketDataClient>, MarketError>;
}

pub struct BinanceClientFactory {
    http: Client,
    config: BinanceConfig,
}

impl BinanceClientFactory {
    pub fn new(config: BinanceConfig) -> Result<Self, MarketError> {
        let http = Client::builder()
            .user_agent(concat!("crypto_market_api/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| MarketError::UpstreamUnavailable(format!("HTTP client: {}", e)))?;

        if !has_value(&config.api_key) || !has_value(&config.secret_key) {
            warn!("Exchange credentials missing; every upstream call will fail until they are set");
        }

        Ok(Self { http, config })
    }
}

impl ClientFactory for BinanceClientFactory {
    fn connect(&self) -> Result<Arc<dyn MarketDataClient>, MarketError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty());

        match api_key {
            Some(api_key) if has_value(&self.config.secret_key) => Ok(Arc::new(
                BinanceClient::new(self.http.clone(), self.config.base_url.clone(), api_key),
            )),
            _ => Err(MarketError::UpstreamUnavailable(
                "exchange credentials are not configured (BINANCE_API_KEY / BINANCE_SECRET_KEY)"
                    .into(),
            )),
        }
    }
}

fn has_value(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
