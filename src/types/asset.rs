use serde::{Deserialize, Serialize};

/// Point-in-time market snapshot for a tracked crypto asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoAsset {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    #[serde(rename = "change24h")]
    pub change_24h: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(rename = "volume24h", skip_serializing_if = "Option::is_none")]
    pub volume_24h: Option<f64>,
    /// RFC 3339 timestamp of when the snapshot was taken.
    pub last_updated: String,
}

/// Static description of an asset the service knows how to price.
///
/// The fallback fields are used when the upstream API is unreachable so
/// that signal generation always has a plausible snapshot to work with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownAsset {
    /// Lowercase ticker, e.g. "btc".
    pub symbol: &'static str,
    /// CoinGecko coin id, e.g. "bitcoin".
    pub coingecko_id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Last-known price used when the price endpoint fails.
    pub fallback_price: f64,
    /// Last-known 24h change (percent) used when the price endpoint fails.
    pub fallback_change_24h: f64,
    /// Lower bound of the synthetic history band.
    pub history_floor: f64,
    /// Width of the synthetic history band.
    pub history_span: f64,
}

impl KnownAsset {
    /// Build the fallback snapshot for this asset.
    pub fn fallback_snapshot(&self) -> CryptoAsset {
        CryptoAsset {
            symbol: self.symbol.to_uppercase(),
            name: self.name.to_string(),
            price: self.fallback_price,
            change_24h: self.fallback_change_24h,
            market_cap: None,
            volume_24h: None,
            last_updated: chrono::Utc::now().to_rfc3339(),
        }
    }
}
