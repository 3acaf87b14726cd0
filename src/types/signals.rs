use serde::{Deserialize, Serialize};
use std::fmt;

use super::CryptoAsset;

/// Directional classification of a trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalType {
    Buy,
    Sell,
    Neutral,
}

impl SignalType {
    /// Get display label for this signal type.
    pub fn label(&self) -> &'static str {
        match self {
            SignalType::Buy => "BUY",
            SignalType::Sell => "SELL",
            SignalType::Neutral => "NEUTRAL",
        }
    }

    /// Classify a net bullish-minus-bearish point score.
    pub fn from_net_score(net: i32) -> Self {
        match net {
            n if n >= 2 => SignalType::Buy,
            n if n <= -2 => SignalType::Sell,
            _ => SignalType::Neutral,
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Technical indicator values derived from a price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorBundle {
    /// RSI (14), 0-100.
    pub rsi: f64,
    /// EMA(12) - EMA(26).
    pub macd: f64,
    /// Signal line; equal to `macd` (single-value EMA).
    pub macd_signal: f64,
    #[serde(rename = "ma50")]
    pub ma_50: f64,
    #[serde(rename = "ma200")]
    pub ma_200: f64,
    pub bollinger_upper: f64,
    pub bollinger_middle: f64,
    pub bollinger_lower: f64,
}

/// Per-source sentiment reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSource {
    pub name: String,
    pub score: f64,
}

/// Normalized market sentiment for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentBundle {
    /// Overall sentiment, -1 (bearish) to +1 (bullish).
    pub overall: f64,
    pub news_score: f64,
    pub social_score: f64,
    /// Fear & Greed index, 0 (extreme fear) to 100 (extreme greed).
    pub fear_greed_index: u8,
    pub keywords: Vec<String>,
    pub sources: Vec<SentimentSource>,
}

impl SentimentBundle {
    /// A flat reading: zero scores, mid-range fear & greed.
    pub fn neutral() -> Self {
        Self {
            overall: 0.0,
            news_score: 0.0,
            social_score: 0.0,
            fear_greed_index: 50,
            keywords: Vec::new(),
            sources: Vec::new(),
        }
    }
}

/// Human-readable rationale for a signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub summary: String,
    pub technical_reason: String,
    pub sentiment_reason: String,
}

/// A fully composed trading signal for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingSignal {
    /// Fresh UUID per computation.
    pub id: String,
    /// Uppercase ticker.
    pub symbol: String,
    pub signal_type: SignalType,
    /// Confidence 0-100.
    pub strength: u8,
    /// RFC 3339 timestamp.
    pub timestamp: String,
    pub asset: CryptoAsset,
    #[serde(rename = "technicalIndicators")]
    pub indicators: IndicatorBundle,
    #[serde(rename = "sentimentData")]
    pub sentiment: SentimentBundle,
    pub explanation: Explanation,
}
