//! Integration tests for API endpoints, driven through the router with stub collaborators

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use cryptosignal::config::Config;
use cryptosignal::services::signals::FixedSentiment;
use cryptosignal::services::SignalEngine;
use cryptosignal::sources::{AssetDataProvider, PriceHistoryProvider};
use cryptosignal::types::{CryptoAsset, SentimentBundle};
use cryptosignal::{app, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

struct StubMarket;

#[async_trait]
impl AssetDataProvider for StubMarket {
    async fn get_asset(&self, symbol: &str) -> Option<CryptoAsset> {
        let name = match symbol.to_lowercase().as_str() {
            "btc" => "Bitcoin",
            "eth" => "Ethereum",
            _ => return None,
        };
        Some(CryptoAsset {
            symbol: symbol.to_uppercase(),
            name: name.to_string(),
            price: 100.0,
            change_24h: 1.5,
            market_cap: Some(1.0e9),
            volume_24h: Some(1.0e7),
            last_updated: chrono::Utc::now().to_rfc3339(),
        })
    }
}

#[async_trait]
impl PriceHistoryProvider for StubMarket {
    async fn get_history(&self, _symbol: &str, days: u32) -> Vec<f64> {
        (0..days).map(|i| 100.0 + i as f64).collect()
    }
}

fn test_app() -> Router {
    let market = Arc::new(StubMarket);
    let engine = SignalEngine::with_seed(
        market.clone(),
        market,
        Arc::new(FixedSentiment(SentimentBundle::neutral())),
        Some(1),
    );
    app(AppState::new(Arc::new(Config::default()), Arc::new(engine)))
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["trackedSymbols"], serde_json::json!(["BTC", "ETH"]));
    assert_eq!(body["signalCount"], 0);

    send(&app, "POST", "/api/signals/btc/update").await;
    let (_, body) = send(&app, "GET", "/api/health").await;
    assert_eq!(body["signalCount"], 1);
}

#[tokio::test]
async fn test_signals_initially_empty() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/api/signals").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(vec![]));
}

#[tokio::test]
async fn test_missing_signal_is_404() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/api/signals/btc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Signal not found");
}

#[tokio::test]
async fn test_update_then_get() {
    let app = test_app();

    let (status, created) = send(&app, "POST", "/api/signals/btc/update").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["symbol"], "BTC");
    assert_eq!(created["asset"]["name"], "Bitcoin");
    assert!(created["technicalIndicators"]["rsi"].is_number());
    assert!(created["sentimentData"]["fearGreedIndex"].is_number());
    assert!(!created["explanation"]["summary"].as_str().unwrap().is_empty());

    // Rising prices: RSI 100 plus MACD/MA ties => bearish 4 => SELL.
    assert_eq!(created["signalType"], "SELL");

    let (status, fetched) = send(&app, "GET", "/api/signals/BTC").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);

    let (_, all) = send(&app, "GET", "/api/signals").await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_replaces_signal() {
    let app = test_app();
    let (_, first) = send(&app, "POST", "/api/signals/eth/update").await;
    let (_, second) = send(&app, "POST", "/api/signals/eth/update").await;
    assert_ne!(first["id"], second["id"]);

    let (_, all) = send(&app, "GET", "/api/signals").await;
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["id"], second["id"]);
}

#[tokio::test]
async fn test_padded_symbol_is_stored_under_trimmed_key() {
    let app = test_app();
    let (status, created) = send(&app, "POST", "/api/signals/%20btc/update").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["symbol"], "BTC");

    let (status, fetched) = send(&app, "GET", "/api/signals/btc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);
}

#[tokio::test]
async fn test_update_unknown_symbol_is_404() {
    let app = test_app();
    let (status, body) = send(&app, "POST", "/api/signals/doge/update").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unknown symbol: doge");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_market_overview_default() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/api/market-overview").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["btcDominance"], 52.3);
    assert_eq!(body["recentUpdates"].as_array().unwrap().len(), 3);
}
