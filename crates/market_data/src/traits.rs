use async_trait::async_trait;

use common::MarketError;
use common::models::{DayStats, Kline, KlineInterval, PriceTicker, Symbol, SymbolInfo};

/// Upstream payloads convert into domain models through this trait.
pub trait RemoteResponse<T> {
    fn to_model(&self) -> Result<T, MarketError>;

    fn parse_decimal(field: &str, value: &str) -> Result<f64, MarketError>
    where
        Self: Sized,
    {
        value
            .parse::<f64>()
            .map_err(|_| MarketError::Decode(format!("{} is not a number: '{}'", field, value)))
    }
}

/// Read-only market data operations consumed by the API layer and the
/// signal service. Implementations hold no local cache and never retry.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait MarketDataClient: Send + Sync {
    async fn ticker_price(&self, symbol: &Symbol) -> Result<PriceTicker, MarketError>;

    async fn day_stats(&self, symbol: &Symbol) -> Result<DayStats, MarketError>;

    /// Candles ordered oldest first.
    async fn klines(
        &self,
        symbol: &Symbol,
        interval: KlineInterval,
        limit: u16,
    ) -> Result<Vec<Kline>, MarketError>;

    async fn all_tickers(&self) -> Result<Vec<PriceTicker>, MarketError>;

    async fn exchange_symbols(&self) -> Result<Vec<SymbolInfo>, MarketError>;
}
