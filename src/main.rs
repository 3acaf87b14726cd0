use cryptosignal::config::Config;
use cryptosignal::services::signals::SimulatedSentiment;
use cryptosignal::services::{SignalEngine, SignalStore};
use cryptosignal::sources::CoinGeckoClient;
use cryptosignal::{app, AppState};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cryptosignal=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env());
    info!("Starting cryptosignal server on {}:{}", config.host, config.port);

    // Wire collaborators into the engine
    let coingecko = Arc::new(CoinGeckoClient::new(
        config.coingecko_api_key.clone(),
        Duration::from_secs(config.request_timeout_secs),
    ));
    let sentiment = Arc::new(SimulatedSentiment::new(config.sentiment_seed));
    let engine = Arc::new(
        SignalEngine::with_seed(
            coingecko.clone(),
            coingecko,
            sentiment,
            config.sentiment_seed.map(|seed| seed.wrapping_add(1)),
        )
        .with_history_days(config.history_days),
    );

    let state = AppState::new(config.clone(), engine.clone());

    // Initial generation after a short delay, then periodic refresh
    {
        let engine = engine.clone();
        let store = state.signal_store.clone();
        let config = config.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(config.startup_delay_ms)).await;
            info!("Initializing signals for {}", config.tracked_symbols.join(", ").to_uppercase());

            let mut interval =
                tokio::time::interval(Duration::from_secs(config.refresh_interval_secs));
            loop {
                interval.tick().await;
                refresh_signals(&engine, &store, &config.tracked_symbols).await;
            }
        });
    }

    let app = app(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("cryptosignal server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Regenerate and store signals for every tracked symbol.
async fn refresh_signals(engine: &SignalEngine, store: &SignalStore, symbols: &[String]) {
    let results = engine.generate_signals(symbols).await;
    let mut updated = 0usize;

    for (symbol, result) in results {
        match result {
            Ok(signal) => {
                store.update_signal(signal);
                updated += 1;
            }
            Err(e) => error!("Error updating signal for {}: {}", symbol, e),
        }
    }

    info!("Refreshed {}/{} signals", updated, symbols.len());
}
