use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use common::MarketError;
use common::models::{DayStats, Kline, KlineInterval, PriceTicker, Symbol, SymbolInfo};

use crate::remote::error_response::upstream_error;
use crate::remote::exchange_info_response::ExchangeInfoResponse;
use crate::remote::kline_response::KlineRow;
use crate::remote::ticker_response::{DayStatsResponse, TickerPriceResponse};
use crate::traits::{MarketDataClient, RemoteResponse};

#[derive(Clone)]
pub struct BinanceClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl BinanceClient {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    async fn get<T>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        symbol: Option<&Symbol>,
    ) -> Result<T, MarketError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let resp = self
            .client
            .get(&url)
            .query(query)
            .header("X-MBX-APIKEY", &self.api_key)
            .send()
            .await
            .map_err(|e| MarketError::UpstreamUnavailable(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| MarketError::UpstreamUnavailable(e.to_string()))?;

        if !status.is_success() {
            warn!("Binance request {} failed: {} {}", path, status, body);
            return Err(upstream_error(status.as_u16(), &body, symbol));
        }

        Ok(serde_json::from_str::<T>(&body)?)
    }
}

#[async_trait]
impl MarketDataClient for BinanceClient {
    async fn ticker_price(&self, symbol: &Symbol) -> Result<PriceTicker, MarketError> {
        self.get::<TickerPriceResponse>(
            "/api/v3/ticker/price",
            &[("symbol", symbol.as_str())],
            Some(symbol),
        )
        .await?
        .to_model()
    }

    async fn day_stats(&self, symbol: &Symbol) -> Result<DayStats, MarketError> {
        self.get::<DayStatsResponse>(
            "/api/v3/ticker/24hr",
            &[("symbol", symbol.as_str())],
            Some(symbol),
        )
        .await?
        .to_model()
    }

    async fn klines(
        &self,
        symbol: &Symbol,
        interval: KlineInterval,
        limit: u16,
    ) -> Result<Vec<Kline>, MarketError> {
        let limit = limit.to_string();
        let rows = self
            .get::<Vec<KlineRow>>(
                "/api/v3/klines",
                &[
                    ("symbol", symbol.as_str()),
                    ("interval", interval.as_str()),
                    ("limit", limit.as_str()),
                ],
                Some(symbol),
            )
            .await?;

        rows.iter().map(|row| row.to_model()).collect()
    }

    async fn all_tickers(&self) -> Result<Vec<PriceTicker>, MarketError> {
        let rows = self
            .get::<Vec<TickerPriceResponse>>("/api/v3/ticker/price", &[], None)
            .await?;

        rows.iter().map(|row| row.to_model()).collect()
    }

    async fn exchange_symbols(&self) -> Result<Vec<SymbolInfo>, MarketError> {
        self.get::<ExchangeInfoResponse>("/api/v3/exchangeInfo", &[], None)
            .await?
            .to_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn client_for(server: &Server) -> BinanceClient {
        BinanceClient::new(Client::new(), server.url(), "test-key")
    }

    fn btc() -> Symbol {
        Symbol::parse("btcusdt").unwrap()
    }

    #[tokio::test]
    async fn ticker_price_sends_symbol_and_api_key() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v3/ticker/price")
            .match_query(Matcher::UrlEncoded("symbol".into(), "BTCUSDT".into()))
            .match_header("X-MBX-APIKEY", "test-key")
            .with_status(200)
            .with_body(r#"{"symbol":"BTCUSDT","price":"67012.34000000"}"#)
            .create_async()
            .await;

        let ticker = client_for(&server).ticker_price(&btc()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(ticker.symbol, "BTCUSDT");
        assert_eq!(ticker.price, "67012.34000000");
    }

    #[tokio::test]
    async fn invalid_symbol_maps_to_unknown_symbol() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v3/ticker/24hr")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"code":-1121,"msg":"Invalid symbol."}"#)
            .create_async()
            .await;

        let symbol = Symbol::parse("nosuchcoin").unwrap();
        let err = client_for(&server).day_stats(&symbol).await.unwrap_err();

        assert_eq!(
            err,
            MarketError::UnknownSymbol("NOSUCHCOIN: Invalid symbol.".into())
        );
    }

    #[tokio::test]
    async fn klines_are_decoded_in_order() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v3/klines")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("symbol".into(), "BTCUSDT".into()),
                Matcher::UrlEncoded("interval".into(), "1m".into()),
                Matcher::UrlEncoded("limit".into(), "2".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"[
                    [1700000000000,"10.0","11.0","9.5","10.5","3.0",1700000059999,"31.5",4,"1.0","10.5","0"],
                    [1700000060000,"10.5","12.0","10.4","11.75","2.0",1700000119999,"23.5",3,"1.0","11.75","0"]
                ]"#,
            )
            .create_async()
            .await;

        let klines = client_for(&server)
            .klines(&btc(), KlineInterval::OneMinute, 2)
            .await
            .unwrap();

        let closes: Vec<f64> = klines.iter().map(|k| k.close_price).collect();
        assert_eq!(closes, vec![10.5, 11.75]);
    }

    #[tokio::test]
    async fn all_tickers_and_exchange_symbols() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v3/ticker/price")
            .with_status(200)
            .with_body(r#"[{"symbol":"ETHBTC","price":"0.05"},{"symbol":"BTCUSDT","price":"67000.1"}]"#)
            .create_async()
            .await;
        server
            .mock("GET", "/api/v3/exchangeInfo")
            .with_status(200)
            .with_body(
                r#"{"timezone":"UTC","symbols":[
                    {"symbol":"ETHBTC","status":"TRADING","baseAsset":"ETH","quoteAsset":"BTC"},
                    {"symbol":"BTCUSDT","status":"TRADING","baseAsset":"BTC","quoteAsset":"USDT"}
                ]}"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let tickers = client.all_tickers().await.unwrap();
        let symbols = client.exchange_symbols().await.unwrap();

        assert_eq!(tickers.len(), 2);
        assert_eq!(tickers[1].price, "67000.1");
        assert_eq!(symbols[1].quote_asset, "USDT");
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v3/exchangeInfo")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let err = client_for(&server).exchange_symbols().await.unwrap_err();
        assert!(matches!(err, MarketError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_upstream_unavailable() {
        let client = BinanceClient::new(Client::new(), "http://127.0.0.1:1", "test-key");
        let err = client.all_tickers().await.unwrap_err();
        assert!(matches!(err, MarketError::UpstreamUnavailable(_)));
    }
}
