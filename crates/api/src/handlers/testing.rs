use std::sync::Arc;

use common::MarketError;
use market_data::traits::MockMarketDataClient;
use market_data::{ClientFactory, MarketDataClient};
use strategy::SignalService;

use crate::state::AppState;

/// Factory returning a prepared mock, or failing like a factory without credentials.
pub struct StaticFactory(Option<Arc<MockMarketDataClient>>);

impl ClientFactory for StaticFactory {
    fn connect(&self) -> Result<Arc<dyn MarketDataClient>, MarketError> {
        match &self.0 {
            Some(client) => Ok(client.clone()),
            None => Err(MarketError::UpstreamUnavailable(
                "exchange credentials are not configured".into(),
            )),
        }
    }
}

pub fn connected(exchange: MockMarketDataClient) -> AppState {
    AppState::new(
        Arc::new(StaticFactory(Some(Arc::new(exchange)))),
        SignalService::default(),
    )
}

pub fn disconnected() -> AppState {
    AppState::new(Arc::new(StaticFactory(None)), SignalService::default())
}
