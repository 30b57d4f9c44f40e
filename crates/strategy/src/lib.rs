pub mod engine;
pub mod indicators;
pub mod services;

pub use engine::{ParamsError, SignalEngine, SignalMetrics, SignalParams};
pub use services::SignalService;
