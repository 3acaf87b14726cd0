//! Market overview endpoint.

use axum::{extract::State, routing::get, Json, Router};

use crate::types::MarketOverview;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/market-overview", get(get_market_overview))
}

async fn get_market_overview(State(state): State<AppState>) -> Json<MarketOverview> {
    Json(state.market_store.get_or_init().await)
}
