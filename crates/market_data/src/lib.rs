pub mod factory;
pub mod remote;
pub mod traits;

pub use factory::{BinanceClientFactory, BinanceConfig, ClientFactory};
pub use traits::MarketDataClient;
