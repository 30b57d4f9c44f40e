use common::MarketError;
use common::models::{KlineInterval, SignalReport, Symbol};
use market_data::MarketDataClient;
use tracing::debug;

use crate::engine::SignalEngine;

/// Fetches a fresh candle window and runs the engine over its closes.
#[derive(Debug, Clone)]
pub struct SignalService {
    engine: SignalEngine,
    interval: KlineInterval,
    limit: u16,
}

impl SignalService {
    pub fn new(engine: SignalEngine, interval: KlineInterval, limit: u16) -> Self {
        Self {
            engine,
            interval,
            limit,
        }
    }

    pub async fn signal_for(
        &self,
        client: &dyn MarketDataClient,
        symbol: &Symbol,
    ) -> Result<SignalReport, MarketError> {
        let klines = client.klines(symbol, self.interval, self.limit).await?;
        let closes: Vec<f64> = klines.iter().map(|k| k.close_price).collect();

        let metrics = self.engine.evaluate(&closes)?;
        debug!(
            "Signal for {}: {} (RSI={:.2} short={:.4} long={:.4} gain={:.4} loss={:.4} n={})",
            symbol,
            metrics.signal,
            metrics.rsi,
            metrics.short_ma,
            metrics.long_ma,
            metrics.avg_gain,
            metrics.avg_loss,
            closes.len()
        );

        Ok(metrics.to_report(symbol))
    }
}

impl Default for SignalService {
    fn default() -> Self {
        Self::new(SignalEngine::default(), KlineInterval::OneMinute, 50)
    }
}
