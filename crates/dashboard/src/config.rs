use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dashboard", author, version, about = "Browser dashboard for the crypto market API", long_about = None)]
pub struct Args {
    /// Bind address
    #[arg(long, env = "DASHBOARD_BIND_ADDRESS", default_value = "127.0.0.1")]
    pub bind_address: IpAddr,

    /// Port
    #[arg(short, long, env = "DASHBOARD_PORT", default_value_t = 8501)]
    pub port: u16,

    /// Base URL of the market data API
    #[arg(long, env = "DASHBOARD_API_URL", default_value = "http://127.0.0.1:8000")]
    pub api_url: String,

    /// Only pairs quoted in this currency are listed
    #[arg(long, env = "DASHBOARD_QUOTE_SUFFIX", default_value = "USDT")]
    pub quote_suffix: String,

    /// Page auto-refresh interval, 0 disables
    #[arg(long, env = "DASHBOARD_REFRESH_SECS", default_value_t = 30)]
    pub refresh_secs: u64,

    #[arg(long, env = "DASHBOARD_API_TIMEOUT_SECS", default_value_t = 15)]
    pub api_timeout_secs: u64,
}

impl Args {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_secs)
    }
}
