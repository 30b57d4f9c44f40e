pub mod coins;
pub mod prices;
pub mod signal;

pub use coins::{all_coins, home, search_coin};
pub use prices::{all_live_prices, coin_full_info, live_price};
pub use signal::trading_signal;

#[cfg(test)]
pub(crate) mod testing;
