use axum::Json;
use axum::extract::{Path, State};
use common::models::{SignalReport, Symbol};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn trading_signal(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<SignalReport>, ApiError> {
    let symbol = Symbol::parse(&raw)?;
    let client = state.connect()?;
    let report = state.signals().signal_for(client.as_ref(), &symbol).await?;

    Ok(Json(report))
}
