use crate::sources::{AssetDataProvider, PriceHistoryProvider};
use crate::types::{CryptoAsset, KnownAsset};
use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";
const COINGECKO_PRO_API_URL: &str = "https://pro-api.coingecko.com/api/v3";

/// Assets the service can price, keyed by lowercase ticker.
pub const KNOWN_ASSETS: &[KnownAsset] = &[
    KnownAsset {
        symbol: "btc",
        coingecko_id: "bitcoin",
        name: "Bitcoin",
        fallback_price: 42847.32,
        fallback_change_24h: 2.34,
        history_floor: 42000.0,
        history_span: 5000.0,
    },
    KnownAsset {
        symbol: "eth",
        coingecko_id: "ethereum",
        name: "Ethereum",
        fallback_price: 2641.89,
        fallback_change_24h: -1.12,
        history_floor: 2500.0,
        history_span: 500.0,
    },
    KnownAsset {
        symbol: "sol",
        coingecko_id: "solana",
        name: "Solana",
        fallback_price: 98.45,
        fallback_change_24h: 3.87,
        history_floor: 90.0,
        history_span: 20.0,
    },
    KnownAsset {
        symbol: "bnb",
        coingecko_id: "binancecoin",
        name: "BNB",
        fallback_price: 312.6,
        fallback_change_24h: 0.42,
        history_floor: 295.0,
        history_span: 35.0,
    },
    KnownAsset {
        symbol: "xrp",
        coingecko_id: "ripple",
        name: "XRP",
        fallback_price: 0.62,
        fallback_change_24h: -0.85,
        history_floor: 0.55,
        history_span: 0.12,
    },
];

/// Look up a known asset by ticker (case-insensitive).
pub fn lookup_asset(symbol: &str) -> Option<&'static KnownAsset> {
    let symbol = symbol.trim().to_lowercase();
    KNOWN_ASSETS.iter().find(|a| a.symbol == symbol)
}

/// `/simple/price` entry.
#[derive(Debug, Deserialize)]
struct CoinGeckoPrice {
    usd: Option<f64>,
    usd_market_cap: Option<f64>,
    usd_24h_vol: Option<f64>,
    usd_24h_change: Option<f64>,
}

/// `/coins/{id}/market_chart` response.
#[derive(Debug, Deserialize)]
struct CoinGeckoMarketChart {
    prices: Vec<[f64; 2]>, // [[timestamp, price], ...]
}

/// CoinGecko REST client.
///
/// Upstream failures never reach the caller: snapshots fall back to the
/// asset's last-known values and history falls back to a synthetic series.
#[derive(Clone)]
pub struct CoinGeckoClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl CoinGeckoClient {
    /// Create a new CoinGecko client.
    pub fn new(api_key: Option<String>, timeout: Duration) -> Self {
        let base_url = if api_key.is_some() {
            COINGECKO_PRO_API_URL
        } else {
            COINGECKO_API_URL
        };
        Self::with_base_url(base_url, api_key, timeout)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: &str, api_key: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent("cryptosignal/0.1 (Trading Signal Engine)")
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn with_key(&self, mut url: String) -> String {
        if let Some(ref key) = self.api_key {
            url.push_str(&format!("&x_cg_pro_api_key={}", key));
        }
        url
    }

    async fn fetch_snapshot(&self, asset: &KnownAsset) -> anyhow::Result<CryptoAsset> {
        let url = self.with_key(format!(
            "{}/simple/price?ids={}&vs_currencies=usd&include_24hr_change=true&include_market_cap=true&include_24hr_vol=true",
            self.base_url, asset.coingecko_id
        ));

        let response = self.client.get(&url).header("Accept", "application/json").send().await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!("CoinGecko API error: {}", response.status()));
        }

        let mut prices: HashMap<String, CoinGeckoPrice> = response.json().await?;
        let data = prices
            .remove(asset.coingecko_id)
            .ok_or_else(|| anyhow::anyhow!("No data found for {}", asset.symbol))?;
        let price = data
            .usd
            .ok_or_else(|| anyhow::anyhow!("No USD price for {}", asset.symbol))?;

        Ok(CryptoAsset {
            symbol: asset.symbol.to_uppercase(),
            name: asset.name.to_string(),
            price,
            change_24h: data.usd_24h_change.unwrap_or(0.0),
            market_cap: data.usd_market_cap,
            volume_24h: data.usd_24h_vol,
            last_updated: chrono::Utc::now().to_rfc3339(),
        })
    }

    async fn fetch_history(&self, asset: &KnownAsset, days: u32) -> anyhow::Result<Vec<f64>> {
        let url = self.with_key(format!(
            "{}/coins/{}/market_chart?vs_currency=usd&days={}&interval=daily",
            self.base_url, asset.coingecko_id, days
        ));

        let response = self.client.get(&url).header("Accept", "application/json").send().await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!("CoinGecko API error: {}", response.status()));
        }

        // Daily charts include the current partial day, so `days + 1` points come back.
        let chart: CoinGeckoMarketChart = response.json().await?;
        Ok(most_recent(chart.prices, days))
    }
}

/// Closing prices of the last `days` chart points, oldest first.
fn most_recent(points: Vec<[f64; 2]>, days: u32) -> Vec<f64> {
    let skip = points.len().saturating_sub(days as usize);
    points.into_iter().skip(skip).map(|[_, price]| price).collect()
}

/// Plausible stand-in history: `days` uniform draws from the asset's band.
pub fn synthetic_history<R: Rng + ?Sized>(asset: &KnownAsset, days: u32, rng: &mut R) -> Vec<f64> {
    (0..days)
        .map(|_| asset.history_floor + rng.gen::<f64>() * asset.history_span)
        .collect()
}

#[async_trait]
impl AssetDataProvider for CoinGeckoClient {
    async fn get_asset(&self, symbol: &str) -> Option<CryptoAsset> {
        let asset = lookup_asset(symbol)?;

        match self.fetch_snapshot(asset).await {
            Ok(snapshot) => {
                debug!("CoinGecko price for {}: ${}", asset.symbol, snapshot.price);
                Some(snapshot)
            }
            Err(e) => {
                warn!("Failed to fetch {} price from CoinGecko, using fallback: {}", asset.symbol, e);
                Some(asset.fallback_snapshot())
            }
        }
    }
}

#[async_trait]
impl PriceHistoryProvider for CoinGeckoClient {
    async fn get_history(&self, symbol: &str, days: u32) -> Vec<f64> {
        let Some(asset) = lookup_asset(symbol) else {
            return Vec::new();
        };

        match self.fetch_history(asset, days).await {
            Ok(prices) => {
                debug!("Fetched {} daily prices for {}", prices.len(), asset.symbol);
                prices
            }
            Err(e) => {
                warn!(
                    "Failed to fetch {} history from CoinGecko, using synthetic series: {}",
                    asset.symbol, e
                );
                synthetic_history(asset, days, &mut rand::thread_rng())
            }
        }
    }
}
