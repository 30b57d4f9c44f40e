pub mod kline;
pub mod signal;
pub mod symbol;
pub mod ticker;

pub use kline::{Kline, KlineInterval, ParseIntervalError};
pub use signal::{Signal, SignalReport};
pub use symbol::Symbol;
pub use ticker::{DayStats, PriceTicker, SymbolInfo};
