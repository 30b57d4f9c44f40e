use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;

use common::logger;

use crate::api_client::ApiClient;
use crate::config::Args;
use crate::server::{DashboardState, router};

mod api_client;
mod config;
mod error;
mod listing;
mod render;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logger::setup_logger("info");

    let args = Args::parse();
    let api = ApiClient::new(&args.api_url, args.api_timeout())?;
    info!("Dashboard reading from {}", args.api_url);

    let app = router(DashboardState {
        api,
        quote_suffix: args.quote_suffix.to_uppercase(),
        refresh_secs: args.refresh_secs,
    });

    let addr = args.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Dashboard running at http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
