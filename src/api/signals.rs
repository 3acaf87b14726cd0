//! Signal API endpoints.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info};

use crate::error::{AppError, Result};
use crate::types::TradingSignal;
use crate::AppState;

/// Create the signals router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_signals))
        .route("/:symbol", get(get_signal))
        .route("/:symbol/update", post(update_signal))
}

/// Get all current signals.
async fn get_signals(State(state): State<AppState>) -> Json<Vec<TradingSignal>> {
    Json(state.signal_store.get_signals())
}

/// Get the current signal for a symbol.
async fn get_signal(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<TradingSignal>> {
    state
        .signal_store
        .get_signal(&symbol)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Signal not found".to_string()))
}

/// Generate, store and return a fresh signal for a symbol.
async fn update_signal(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<TradingSignal>> {
    let signal = state.engine.generate_signal(&symbol).await.map_err(|e| {
        error!("Error updating signal for {}: {}", symbol, e);
        e
    })?;

    info!(
        "Updated {} signal: {} ({}%)",
        signal.symbol, signal.signal_type, signal.strength
    );

    Ok(Json(state.signal_store.update_signal(signal)))
}
