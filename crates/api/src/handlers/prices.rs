use axum::Json;
use axum::extract::{Path, State};
use common::models::{PriceTicker, Symbol};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
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
    pub open_price: String,
    pub last_price: String,
}

#[derive(Debug, Serialize)]
pub struct LivePrice {
    pub symbol: String,
    pub live_price: String,
}

#[derive(Debug, Serialize)]
pub struct AllPrices {
    pub total: usize,
    pub data: Vec<PriceTicker>,
}

pub async fn coin_full_info(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<CoinInfo>, ApiError> {
    let symbol = Symbol::parse(&raw)?;
    let client = state.connect()?;

    let (ticker, stats) = tokio::try_join!(client.ticker_price(&symbol), client.day_stats(&symbol))?;

    Ok(Json(CoinInfo {
        symbol: symbol.to_string(),
        live_price: ticker.price,
        change_percent_24h: stats.price_change_percent,
        high_24h: stats.high_price,
        low_24h: stats.low_price,
        volume_24h: stats.volume,
        open_price: stats.open_price,
        last_price: stats.last_price,
    }))
}

pub async fn live_price(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<LivePrice>, ApiError> {
    let symbol = Symbol::parse(&raw)?;
    let ticker = state.connect()?.ticker_price(&symbol).await?;

    Ok(Json(LivePrice {
        symbol: symbol.to_string(),
        live_price: ticker.price,
    }))
}

pub async fn all_live_prices(State(state): State<AppState>) -> Result<Json<AllPrices>, ApiError> {
    let data = state.connect()?.all_tickers().await?;

    Ok(Json(AllPrices {
        total: data.len(),
        data,
    }))
}
