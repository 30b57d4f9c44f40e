use common::MarketError;
use common::models::{Signal, SignalReport, Symbol};
use thiserror::Error;

use crate::indicators::{relative_strength, round_to, trailing_mean};

#[derive(Error, Debug, PartialEq)]
pub enum ParamsError {
    #[error("moving average periods must be at least 1 (short={short}, long={long})")]
    ZeroPeriod { short: usize, long: usize },
    #[error("oversold threshold {oversold} must be below overbought threshold {overbought}")]
    InvertedThresholds { oversold: f64, overbought: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignalParams {
    pub short_period: usize,
    pub long_period: usize,
    pub overbought: f64,
    pub oversold: f64,
    /// Windows shorter than this are rejected. The default of 1 accepts
    /// partial windows and averages whatever history is available.
    pub min_history: usize,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            short_period: 5,
            long_period: 20,
            overbought: 70.0,
            oversold: 30.0,
            min_history: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignalMetrics {
    pub signal: Signal,
    pub short_ma: f64,
    pub long_ma: f64,
    pub rsi: f64,
    pub avg_gain: f64,
    pub avg_loss: f64,
    pub last_price: f64,
}

impl SignalMetrics {
    pub fn to_report(&self, symbol: &Symbol) -> SignalReport {
        SignalReport {
            symbol: symbol.to_string(),
            signal: self.signal,
            rsi: round_to(self.rsi, 2),
            short_ma: round_to(self.short_ma, 4),
            long_ma: round_to(self.long_ma, 4),
            last_price: self.last_price,
        }
    }
}

/// Moving-average crossover filtered by RSI.
#[derive(Debug, Clone, Default)]
pub struct SignalEngine {
    params: SignalParams,
}

impl SignalEngine {
    pub fn new(params: SignalParams) -> Result<Self, ParamsError> {
        if params.short_period == 0 || params.long_period == 0 {
            return Err(ParamsError::ZeroPeriod {
                short: params.short_period,
                long: params.long_period,
            });
        }
        if params.oversold >= params.overbought {
            return Err(ParamsError::InvertedThresholds {
                oversold: params.oversold,
                overbought: params.overbought,
            });
        }
        Ok(Self { params })
    }

    pub fn params(&self) -> &SignalParams {
        &self.params
    }

    /// `closes` are ordered oldest to newest.
    pub fn evaluate(&self, closes: &[f64]) -> Result<SignalMetrics, MarketError> {
        let required = self.params.min_history.max(1);
        let insufficient = || MarketError::InsufficientData {
            required,
            available: closes.len(),
        };

        if closes.len() < required {
            return Err(insufficient());
        }
        if let Some(bad) = closes.iter().find(|p| !p.is_finite()) {
            return Err(MarketError::Decode(format!("non-finite close price {}", bad)));
        }

        let short_ma = trailing_mean(closes, self.params.short_period).ok_or_else(insufficient)?;
        let long_ma = trailing_mean(closes, self.params.long_period).ok_or_else(insufficient)?;
        let last_price = *closes.last().ok_or_else(insufficient)?;
        let momentum = relative_strength(closes);

        Ok(SignalMetrics {
            signal: self.decide(short_ma, long_ma, momentum.rsi),
            short_ma,
            long_ma,
            rsi: momentum.rsi,
            avg_gain: momentum.avg_gain,
            avg_loss: momentum.avg_loss,
            last_price,
        })
    }

    fn decide(&self, short_ma: f64, long_ma: f64, rsi: f64) -> Signal {
        if short_ma > long_ma && rsi < self.params.overbought {
            Signal::Buy
        } else if short_ma < long_ma && rsi > self.params.oversold {
            Signal::Sell
        } else {
            Signal::Hold
        }
    }
}
