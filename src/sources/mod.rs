//! Market data collaborators consumed by the signal engine.

pub mod coingecko;

pub use coingecko::{lookup_asset, CoinGeckoClient, KNOWN_ASSETS};

use crate::types::CryptoAsset;
use async_trait::async_trait;

/// Current market snapshot for a symbol.
#[async_trait]
pub trait AssetDataProvider: Send + Sync {
    /// Returns `None` only when the symbol maps to no known asset.
    /// Upstream failures yield a best-effort fallback snapshot.
    async fn get_asset(&self, symbol: &str) -> Option<CryptoAsset>;
}

/// Daily close history for a symbol, oldest first.
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// At most `days` prices. Upstream failures yield a synthetic series
    /// of length `days` so indicator math always has input.
    async fn get_history(&self, symbol: &str, days: u32) -> Vec<f64>;
}
