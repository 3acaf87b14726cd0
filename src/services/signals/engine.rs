//! Signal engine: composes market data, indicators, sentiment and
//! classification into a [`TradingSignal`].

use futures_util::future::join_all;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};
use tracing::debug;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::services::signals::classifier::{determine_signal_type, signal_strength};
use crate::services::signals::explanation::generate_explanation;
use crate::services::signals::indicators::calculate_indicators;
use crate::services::signals::sentiment::SentimentProvider;
use crate::sources::{AssetDataProvider, PriceHistoryProvider};
use crate::types::TradingSignal;

/// Default length of the price history window, in days.
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Generates trading signals from injected collaborators.
///
/// Holds no per-symbol state, so concurrent calls are independent. The only
/// shared value is the RNG used for NEUTRAL strength, locked per draw.
pub struct SignalEngine {
    assets: Arc<dyn AssetDataProvider>,
    history: Arc<dyn PriceHistoryProvider>,
    sentiment: Arc<dyn SentimentProvider>,
    rng: Mutex<StdRng>,
    history_days: u32,
}

impl SignalEngine {
    /// Create a new signal engine.
    pub fn new(
        assets: Arc<dyn AssetDataProvider>,
        history: Arc<dyn PriceHistoryProvider>,
        sentiment: Arc<dyn SentimentProvider>,
        rng: StdRng,
    ) -> Self {
        Self {
            assets,
            history,
            sentiment,
            rng: Mutex::new(rng),
            history_days: DEFAULT_HISTORY_DAYS,
        }
    }

    /// Create an engine whose RNG is seeded from `seed`, or from OS entropy.
    pub fn with_seed(
        assets: Arc<dyn AssetDataProvider>,
        history: Arc<dyn PriceHistoryProvider>,
        sentiment: Arc<dyn SentimentProvider>,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(assets, history, sentiment, rng)
    }

    /// Set the price history window.
    pub fn with_history_days(mut self, days: u32) -> Self {
        self.history_days = days;
        self
    }

    /// Generate a fresh signal for `symbol`.
    ///
    /// Fails only with [`AppError::UnknownSymbol`]; thin or synthetic market
    /// data still produces a signal.
    pub async fn generate_signal(&self, symbol: &str) -> Result<TradingSignal> {
        let symbol = symbol.trim();
        let asset = self
            .assets
            .get_asset(symbol)
            .await
            .ok_or_else(|| AppError::UnknownSymbol(symbol.to_string()))?;

        let prices = self.history.get_history(symbol, self.history_days).await;
        let indicators = calculate_indicators(&prices);
        let sentiment = self.sentiment.get_sentiment(symbol).await;

        let signal_type = determine_signal_type(&indicators, &sentiment);
        let strength = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            signal_strength(&indicators, &sentiment, signal_type, &mut *rng)
        };
        let explanation = generate_explanation(signal_type, &indicators, &sentiment);

        debug!(
            "Generated {} signal for {} (strength {}, {} prices, rsi {:.1})",
            signal_type,
            symbol.to_uppercase(),
            strength,
            prices.len(),
            indicators.rsi
        );

        Ok(TradingSignal {
            id: Uuid::new_v4().to_string(),
            symbol: symbol.to_uppercase(),
            signal_type,
            strength,
            timestamp: chrono::Utc::now().to_rfc3339(),
            asset,
            indicators,
            sentiment,
            explanation,
        })
    }

    /// Generate signals for several symbols concurrently.
    ///
    /// Results are returned in input order, one per symbol.
    pub async fn generate_signals<S: AsRef<str>>(
        &self,
        symbols: &[S],
    ) -> Vec<(String, Result<TradingSignal>)> {
        let results = join_all(symbols.iter().map(|s| self.generate_signal(s.as_ref()))).await;

        symbols
            .iter()
            .map(|s| s.as_ref().trim().to_uppercase())
            .zip(results)
            .collect()
    }
}
