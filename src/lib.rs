//! cryptosignal - crypto trading signals from technical indicators and sentiment

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

use axum::Router;
use config::Config;
use services::{MarketOverviewStore, SignalEngine, SignalStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub engine: Arc<SignalEngine>,
    pub signal_store: Arc<SignalStore>,
    pub market_store: Arc<MarketOverviewStore>,
}

impl AppState {
    pub fn new(config: Arc<Config>, engine: Arc<SignalEngine>) -> Self {
        Self {
            config,
            engine,
            signal_store: SignalStore::new(),
            market_store: MarketOverviewStore::new(),
        }
    }
}

/// Build the HTTP application with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use error::{AppError, Result};
pub use types::*;
