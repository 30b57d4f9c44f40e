use common::MarketError;
use common::models::{DayStats, PriceTicker};
use serde::Deserialize;

use crate::traits::RemoteResponse;

#[derive(Debug, Deserialize)]
pub struct TickerPriceResponse {
    pub symbol: String,
    pub price: String,
}

impl RemoteResponse<PriceTicker> for TickerPriceResponse {
    fn to_model(&self) -> Result<PriceTicker, MarketError> {
        Ok(PriceTicker {
            symbol: self.symbol.clone(),
            price: self.price.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStatsResponse {
    pub symbol: String,
    pub price_change_percent: String,
    pub high_price: String,
    pub low_price: String,
    pub volume: String,
    pub open_price: String,
    pub last_price: String,
}

impl RemoteResponse<DayStats> for DayStatsResponse {
    fn to_model(&self) -> Result<DayStats, MarketError> {
        Ok(DayStats {
            symbol: self.symbol.clone(),
            price_change_percent: self.price_change_percent.clone(),
            high_price: self.high_price.clone(),
            low_price: self.low_price.clone(),
            volume: self.volume.clone(),
            open_price: self.open_price.clone(),
            last_price: self.last_price.clone(),
        })
    }
}
