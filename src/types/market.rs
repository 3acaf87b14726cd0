use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Recent activity entry shown alongside the market overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketUpdate {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub timestamp: String,
}

/// Global market snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOverview {
    pub total_market_cap: f64,
    #[serde(rename = "total24hVolume")]
    pub total_24h_volume: f64,
    pub btc_dominance: f64,
    pub fear_greed_index: u8,
    pub trending_keywords: Vec<String>,
    pub recent_updates: Vec<MarketUpdate>,
}

impl MarketOverview {
    /// Overview served before any real market data has been stored.
    pub fn initial() -> Self {
        let now = Utc::now();
        let ago = |minutes: i64| (now - Duration::minutes(minutes)).to_rfc3339();

        Self {
            total_market_cap: 2_450_000_000_000.0,
            total_24h_volume: 89_000_000_000.0,
            btc_dominance: 52.3,
            fear_greed_index: 47,
            trending_keywords: ["ETF approval", "halving", "institutional", "adoption", "bullish"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            recent_updates: vec![
                MarketUpdate {
                    kind: "signal".to_string(),
                    message: "BTC signal updated".to_string(),
                    timestamp: ago(3),
                },
                MarketUpdate {
                    kind: "sentiment".to_string(),
                    message: "Sentiment analysis processed".to_string(),
                    timestamp: ago(5),
                },
                MarketUpdate {
                    kind: "technical".to_string(),
                    message: "Technical indicators calculated".to_string(),
                    timestamp: ago(7),
                },
            ],
        }
    }
}
