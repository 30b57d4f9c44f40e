use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{debug, info};

use common::logger;
use market_data::BinanceClientFactory;

use crate::config::Args;
use crate::routes::router;
use crate::state::AppState;

mod config;
mod error;
mod handlers;
mod routes;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logger::setup_logger("info");

    let args = Args::parse();
    debug!("Error status policy: {:?}", args.error_status);

    let factory = BinanceClientFactory::new(args.binance_config())?;
    let signals = args.signal_service()?;
    info!(
        "Signals use {} candles of {}",
        args.kline_limit, args.kline_interval
    );

    let state = AppState::new(Arc::new(factory), signals);
    let app = router(state, args.error_status);

    let addr = args.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Crypto API listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
