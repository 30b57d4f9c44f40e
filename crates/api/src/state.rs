use std::sync::Arc;

use common::MarketError;
use market_data::{ClientFactory, MarketDataClient};
use strategy::SignalService;

#[derive(Clone)]
pub struct AppState {
    factory: Arc<dyn ClientFactory>,
    signals: Arc<SignalService>,
}

impl AppState {
    pub fn new(factory: Arc<dyn ClientFactory>, signals: SignalService) -> Self {
        Self {
            factory,
            signals: Arc::new(signals),
        }
    }

    /// A fresh client for the current request.
    pub fn connect(&self) -> Result<Arc<dyn MarketDataClient>, MarketError> {
        self.factory.connect()
    }

    pub fn signals(&self) -> &SignalService {
        &self.signals
    }
}
