use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AllCoins {
    pub total_coins: usize,
    pub coins: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SearchResult {
    Found {
        total_found: usize,
        results: Vec<String>,
    },
    NotFound(Message),
}

pub async fn home() -> Json<Message> {
    Json(Message {
        message: "Crypto Search API Running",
    })
}

pub async fn all_coins(State(state): State<AppState>) -> Result<Json<AllCoins>, ApiError> {
    let coins: Vec<String> = state
        .connect()?
        .exchange_symbols()
        .await?
        .into_iter()
        .map(|info| info.symbol)
        .collect();

    Ok(Json(AllCoins {
        total_coins: coins.len(),
        coins,
    }))
}

/// Substring match over every listed pair, e.g. `eth` finds `ETHBTC` and `ETHUSDT`.
pub async fn search_coin(
    State(state): State<AppState>,
    Path(coin_name): Path<String>,
) -> Result<Json<SearchResult>, ApiError> {
    let needle = coin_name.trim().to_uppercase();
    let results: Vec<String> = state
        .connect()?
        .exchange_symbols()
        .await?
        .into_iter()
        .map(|info| info.symbol)
        .filter(|symbol| symbol.contains(&needle))
        .collect();

    if results.is_empty() {
        return Ok(Json(SearchResult::NotFound(Message {
            message: "Coin not found",
        })));
    }

    Ok(Json(SearchResult::Found {
        total_found: results.len(),
        results,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{connected, disconnected};
    use common::MarketError;
    use common::models::SymbolInfo;
    use market_data::traits::MockMarketDataClient;

    fn listing() -> MockMarketDataClient {
        let mut exchange = MockMarketDataClient::new();
        exchange.expect_exchange_symbols().returning(|| {
            Ok(["ETHBTC", "BTCUSDT", "ETHUSDT", "BNBETH"]
                .iter()
                .map(|s| SymbolInfo {
                    symbol: s.to_string(),
                    status: "TRADING".into(),
                    base_asset: s[..3].to_string(),
                    quote_asset: s[3..].to_string(),
                })
                .collect())
        });
        exchange
    }

    #[tokio::test]
    async fn home_reports_running() {
        let Json(body) = home().await;
        assert_eq!(body.message, "Crypto Search API Running");
    }

    #[tokio::test]
    async fn all_coins_counts_symbols() {
        let Json(body) = all_coins(State(connected(listing()))).await.unwrap();
        assert_eq!(body.total_coins, 4);
        assert_eq!(body.coins[1], "BTCUSDT");
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let Json(body) = search_coin(State(connected(listing())), Path("eth".into()))
            .await
            .unwrap();

        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json["total_found"], 3);
        assert_eq!(
            json["results"],
            serde_json::json!(["ETHBTC", "ETHUSDT", "BNBETH"])
        );
    }

    #[tokio::test]
    async fn search_miss_returns_message() {
        let Json(body) = search_coin(State(connected(listing())), Path("doge".into()))
            .await
            .unwrap();

        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Coin not found"}));
    }

    #[tokio::test]
    async fn listing_without_credentials_fails() {
        let err = all_coins(State(disconnected())).await.unwrap_err();
        assert!(matches!(err.0, MarketError::UpstreamUnavailable(_)));

        let err = search_coin(State(disconnected()), Path("eth".into()))
            .await
            .unwrap_err();
        assert!(matches!(err.0, MarketError::UpstreamUnavailable(_)));
    }
}
