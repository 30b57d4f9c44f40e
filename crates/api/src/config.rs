use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::Parser;
use common::models::KlineInterval;
use market_data::BinanceConfig;
use market_data::factory::DEFAULT_BASE_URL;
use strategy::{ParamsError, SignalEngine, SignalParams, SignalService};

use crate::error::ErrorStatusPolicy;

#[derive(Parser, Debug)]
#[command(name = "crypto-api", author, version, about = "Read-only crypto market data API", long_about = None)]
pub struct Args {
    /// Bind address
    #[arg(long, env = "API_BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind_address: IpAddr,

    /// Port
    #[arg(short, long, env = "API_PORT", default_value_t = 8000)]
    pub port: u16,

    #[arg(long, env = "BINANCE_API_KEY", hide_env_values = true)]
    pub binance_api_key: Option<String>,

    #[arg(long, env = "BINANCE_SECRET_KEY", hide_env_values = true)]
    pub binance_secret_key: Option<String>,

    #[arg(long, env = "BINANCE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub binance_base_url: String,

    /// Timeout applied to every upstream request
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
    pub upstream_timeout_secs: u64,

    /// Candle width used for signals
    #[arg(long, env = "KLINE_INTERVAL", default_value = "1m")]
    pub kline_interval: KlineInterval,

    /// Number of candles fetched per signal
    #[arg(long, env = "KLINE_LIMIT", default_value_t = 50,
        value_parser = clap::value_parser!(u16).range(1..=1000))]
    pub kline_limit: u16,

    /// Reject signal requests with fewer closes than this
    #[arg(long, env = "SIGNAL_MIN_HISTORY", default_value_t = 1)]
    pub min_history: usize,

    /// Status code policy for error bodies
    #[arg(long, env = "API_ERROR_STATUS", value_enum, default_value_t = ErrorStatusPolicy::Compatible)]
    pub error_status: ErrorStatusPolicy,
}

impl Args {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    pub fn binance_config(&self) -> BinanceConfig {
        BinanceConfig {
            api_key: self.binance_api_key.clone(),
            secret_key: self.binance_secret_key.clone(),
            base_url: self.binance_base_url.clone(),
            timeout: Duration::from_secs(self.upstream_timeout_secs),
        }
    }

    pub fn signal_service(&self) -> Result<SignalService, ParamsError> {
        let engine = SignalEngine::new(SignalParams {
            min_history: self.min_history,
            ..SignalParams::default()
        })?;
        Ok(SignalService::new(engine, self.kline_interval, self.kline_limit))
    }
}
