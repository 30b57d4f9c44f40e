use common::MarketError;
use common::models::SymbolInfo;
use serde::Deserialize;

use crate::traits::RemoteResponse;

#[derive(Debug, Deserialize)]
pub struct ExchangeInfoResponse {
    pub symbols: Vec<SymbolEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolEntry {
    pub symbol: String,
    pub status: String,
    pub base_asset: String,
    pub quote_asset: String,
}

impl RemoteResponse<Vec<SymbolInfo>> for ExchangeInfoResponse {
    fn to_model(&self) -> Result<Vec<SymbolInfo>, MarketError> {
        Ok(self
            .symbols
            .iter()
            .map(|s| SymbolInfo {
                symbol: s.symbol.clone(),
                status: s.status.clone(),
                base_asset: s.base_asset.clone(),
                quote_asset: s.quote_asset.clone(),
            })
            .collect())
    }
}
