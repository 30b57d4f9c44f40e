use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use chrono::Utc;
use common::models::Symbol;
use serde::Deserialize;
use tracing::warn;

use crate::api_client::ApiClient;
use crate::error::DashboardError;
use crate::listing::{SortOrder, build_listing, count_quoted};
use crate::render::{self, FormState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Price,
    Info,
    Signal,
    All,
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub view: Option<View>,
    pub coin: Option<String>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort: SortOrder,
}

pub struct DashboardState {
    pub api: ApiClient,
    pub quote_suffix: String,
    pub refresh_secs: u64,
}

pub fn router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(index))
        .with_state(Arc::new(state))
}

pub async fn index(
    State(state): State<Arc<DashboardState>>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let coin = query.coin.as_deref().unwrap_or("").trim();
    let search = query.search.as_deref().unwrap_or("");

    let panel = match query.view {
        Some(View::All) => all_prices_panel(&state, search, query.sort).await,
        Some(view) => coin_panel(&state, view, coin).await,
        None => String::new(),
    };

    let form = FormState {
        coin,
        search,
        sort: query.sort,
    };
    Html(render::page(
        &form,
        &state.quote_suffix,
        &panel,
        state.refresh_secs,
        Utc::now(),
    ))
}

async fn coin_panel(state: &DashboardState, view: View, coin: &str) -> String {
    if coin.is_empty() {
        return render::error_banner("Enter a coin first (example: BTCUSDT)");
    }

    let symbol = match Symbol::parse(coin) {
        Ok(symbol) => symbol,
        Err(e) => return render::error_banner(&e.to_string()),
    };

    let rendered = match view {
        View::Price => state.api.live_price(&symbol).await.map(|p| render::live_price(&p)),
        View::Info => state.api.coin_info(&symbol).await.map(|i| render::coin_info(&i)),
        View::Signal => state.api.signal(&symbol).await.map(|s| render::signal(&s)),
        View::All => Ok(String::new()),
    };

    rendered.unwrap_or_else(|e| failure(&e))
}

async fn all_prices_panel(state: &DashboardState, search: &str, sort: SortOrder) -> String {
    match state.api.all_prices().await {
        Ok(tickers) => {
            let quoted = count_quoted(&tickers, &state.quote_suffix);
            let rows = build_listing(tickers, &state.quote_suffix, Some(search), sort);
            render::price_table(&rows, quoted, &state.quote_suffix)
        }
        Err(e) => failure(&e),
    }
}

fn failure(error: &DashboardError) -> String {
    match error {
        DashboardError::Api {
            kind: Some(kind), ..
        } => warn!("API returned {} error: {}", kind, error),
        _ => warn!("Dashboard request failed: {}", error),
    }
    render::error_banner(&error.to_string())
}
