pub mod binance_client;
pub mod error_response;
pub mod exchange_info_response;
pub mod kline_response;
pub mod ticker_response;

pub use binance_client::BinanceClient;
