use std::time::Duration;

use common::models::{PriceTicker, SignalReport, Symbol};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct LivePrice {
    pub symbol: String,
    pub live_price: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoinInfo {
    pub symbol: String,
    pub live_price: String,
    #[serde(rename = "24h_change_percent")]
    pub change_percent_24h: String,
    #[serde(rename = "24h_high")]
    pub high_24h: String,
    #[serde(rename = "24h_low")]
    pub low_24h: String,
    #[serde(rename = "24h_volume")]
    pub volume_24h: String,
}

#[derive(Debug, Deserialize)]
struct AllPrices {
    data: Vec<PriceTicker>,
}

/// HTTP client for the market data API.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn live_price(&self, coin: &Symbol) -> Result<LivePrice> {
        self.get(&format!("/live-price/{}", coin)).await
    }

    pub async fn coin_info(&self, coin: &Symbol) -> Result<CoinInfo> {
        self.get(&format!("/coin/{}", coin)).await
    }

    pub async fn signal(&self, coin: &Symbol) -> Result<SignalReport> {
        self.get(&format!("/signal/{}", coin)).await
    }

    pub async fn all_prices(&self) -> Result<Vec<PriceTicker>> {
        let prices: AllPrices = self.get("/all-live-prices").await?;
        Ok(prices.data)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        // Error bodies may arrive with any status, so the body decides.
        let body: Value = self.client.get(&url).send().await?.json().await?;

        if let Some(message) = body.get("error") {
            return Err(DashboardError::Api {
                message: message
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| message.to_string()),
                kind: body.get("kind").and_then(Value::as_str).map(str::to_string),
            });
        }

        Ok(serde_json::from_value(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::Signal;
    use mockito::Server;

    fn client_for(server: &Server) -> ApiClient {
        ApiClient::new(&server.url(), Duration::from_secs(5)).unwrap()
    }

    fn btc() -> Symbol {
        Symbol::parse("btcusdt").unwrap()
    }

    #[tokio::test]
    async fn decodes_live_price() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/live-price/BTCUSDT")
            .with_body(r#"{"symbol":"BTCUSDT","live_price":"67000.10"}"#)
            .create_async()
            .await;

        let price = client_for(&server).live_price(&btc()).await.unwrap();
        assert_eq!(price.live_price, "67000.10");
    }

    #[tokio::test]
    async fn error_body_becomes_api_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/coin/BTCUSDT")
            .with_status(200)
            .with_body(r#"{"error":"Unknown symbol: BTCUSDT","kind":"unknown_symbol"}"#)
            .create_async()
            .await;

        match client_for(&server).coin_info(&btc()).await {
            Err(DashboardError::Api { message, kind }) => {
                assert_eq!(message, "Unknown symbol: BTCUSDT");
                assert_eq!(kind.as_deref(), Some("unknown_symbol"));
            }
            other => panic!("expected API error, got {:?}", other.map(|c| c.symbol)),
        }
    }

    #[tokio::test]
    async fn strict_status_error_body_is_still_read() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/signal/BTCUSDT")
            .with_status(503)
            .with_body(r#"{"error":"Upstream unavailable: no key","kind":"upstream_unavailable"}"#)
            .create_async()
            .await;

        let err = client_for(&server).signal(&btc()).await.unwrap_err();
        assert_eq!(err.to_string(), "Upstream unavailable: no key");
    }

    #[tokio::test]
    async fn decodes_signal_and_prices() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/signal/BTCUSDT")
            .with_body(
                r#"{"symbol":"BTCUSDT","signal":"SELL","RSI":41.2,"short_MA":1.5,"long_MA":2.0,"last_price":1.4}"#,
            )
            .create_async()
            .await;
        server
            .mock("GET", "/all-live-prices")
            .with_body(r#"{"total":1,"data":[{"symbol":"BTCUSDT","price":"1.4"}]}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let report = client.signal(&btc()).await.unwrap();
        let prices = client.all_prices().await.unwrap();

        assert_eq!(report.signal, Signal::Sell);
        assert_eq!(report.rsi, 41.2);
        assert_eq!(prices[0].price, "1.4");
    }
}
