use chrono::{DateTime, Utc};
use common::MarketError;
use common::models::Kline;
use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::traits::RemoteResponse;

/// One row of `/api/v3/klines`:
/// `[open_time, open, high, low, close, volume, close_time, quote_volume,
/// trades, taker_base, taker_quote, ignore]`.
#[derive(Debug, Deserialize)]
pub struct KlineRow(
    pub i64,
    pub String,
    pub String,
    pub String,
    pub String,
    pub String,
    pub i64,
    pub IgnoredAny,
    pub u64,
    pub IgnoredAny,
    pub IgnoredAny,
    pub IgnoredAny,
);

impl RemoteResponse<Kline> for KlineRow {
    fn to_model(&self) -> Result<Kline, MarketError> {
        Ok(Kline {
            open_time: millis_to_utc(self.0)?,
            close_time: millis_to_utc(self.6)?,
            open_price: Self::parse_decimal("open", &self.1)?,
            high_price: Self::parse_decimal("high", &self.2)?,
            low_price: Self::parse_decimal("low", &self.3)?,
            close_price: Self::parse_decimal("close", &self.4)?,
            volume: Self::parse_decimal("volume", &self.5)?,
            no_of_trades: self.8,
        })
    }
}

fn millis_to_utc(millis: i64) -> Result<DateTime<Utc>, MarketError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| MarketError::Decode(format!("timestamp out of range: {}", millis)))
}
