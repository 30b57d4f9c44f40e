use serde::{Deserialize, Serialize};

/// Last traded price as reported by the exchange. The price keeps the
/// exchange's decimal text so responses echo upstream exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTicker {
    pub symbol: String,
    pub price: String,
}

impl PriceTicker {
    pub fn price_value(&self) -> Option<f64> {
        self.price.parse::<f64>().ok()
    }
}

/// Rolling 24 hour window statistics for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayStats {
    pub symbol: String,
    pub price_change_percent: String,
    pub high_price: String,
    pub low_price: String,
    pub volume: String,
    pub open_price: String,
    pub last_price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolInfo {
    pub symbol: String,
    pub status: String,
    pub base_asset: String,
    pub quote_asset: String,
}
