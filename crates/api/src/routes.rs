use std::time::Instant;

use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::error::{ErrorStatusPolicy, apply_error_status};
use crate::handlers;
use crate::state::AppState;

pub fn router(state: AppState, policy: ErrorStatusPolicy) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/all-coins", get(handlers::all_coins))
        .route("/search/{coin_name}", get(handlers::search_coin))
        .route("/coin/{symbol}", get(handlers::coin_full_info))
        .route("/live-price/{symbol}", get(handlers::live_price))
        .route("/all-live-prices", get(handlers::all_live_prices))
        .route("/signal/{symbol}", get(handlers::trading_signal))
        .layer(middleware::map_response_with_state(policy, apply_error_status))
        .layer(middleware::from_fn(trace_request))
        .with_state(state)
}

async fn trace_request(request: Request, next: Next) -> Response {
    let span = info_span!(
        "request",
        id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    async move {
        let started = Instant::now();
        let response = next.run(request).await;
        info!(
            "{} in {}ms",
            response.status(),
            started.elapsed().as_millis()
        );
        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{connected, disconnected};
    use common::MarketError;
    use market_data::traits::MockMarketDataClient;
    use reqwest::StatusCode;
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    async fn serve(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn rejecting_exchange() -> MockMarketDataClient {
        let mut exchange = MockMarketDataClient::new();
        exchange
            .expect_ticker_price()
            .returning(|_| Err(MarketError::UnknownSymbol("NOPEUSDT: Invalid symbol.".into())));
        exchange
    }

    #[tokio::test]
    async fn compatible_policy_returns_errors_with_200() {
        let base = serve(router(connected(rejecting_exchange()), ErrorStatusPolicy::Compatible)).await;

        let resp = reqwest::get(format!("{}/live-price/nopeusdt", base)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(
            body,
            json!({
                "error": "Unknown symbol: NOPEUSDT: Invalid symbol.",
                "kind": "unknown_symbol"
            })
        );
    }

    #[tokio::test]
    async fn strict_policy_maps_kinds_to_statuses() {
        let base = serve(router(connected(rejecting_exchange()), ErrorStatusPolicy::Strict)).await;
        let resp = reqwest::get(format!("{}/live-price/nopeusdt", base)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let base = serve(router(disconnected(), ErrorStatusPolicy::Strict)).await;
        let resp = reqwest::get(format!("{}/signal/btcusdt", base)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["kind"], "upstream_unavailable");
    }

    #[tokio::test]
    async fn home_route_is_served() {
        let base = serve(router(disconnected(), ErrorStatusPolicy::Strict)).await;
        let body: Value = reqwest::get(&base).await.unwrap().json().await.unwrap();
        assert_eq!(body, json!({"message": "Crypto Search API Running"}));
    }
}
