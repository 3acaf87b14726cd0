//! Sentiment providers.
//!
//! The engine only depends on [`SentimentProvider`]. The shipped
//! implementation is a simulation; a real news/social NLP backend plugs in
//! behind the same trait.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::types::{SentimentBundle, SentimentSource};

/// Supplies a normalized sentiment reading for a symbol.
///
/// Implementations must not fail: on upstream trouble they return a
/// best-effort reading (e.g. [`SentimentBundle::neutral`]).
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    async fn get_sentiment(&self, symbol: &str) -> SentimentBundle;
}

/// Keyword pool the simulation draws a prefix from.
const KEYWORD_POOL: [&str; 6] = [
    "halving",
    "ETF approval",
    "institutional adoption",
    "regulation clarity",
    "market fear",
    "bullish",
];

/// Sources reported by the simulation.
const SOURCE_NAMES: [&str; 3] = ["CoinDesk, CoinTelegraph", "Twitter/X Crypto", "Reddit r/Bitcoin"];

/// Randomized placeholder sentiment.
///
/// Seed it for reproducible output; unseeded instances draw from OS entropy.
pub struct SimulatedSentiment {
    rng: Mutex<StdRng>,
}

impl SimulatedSentiment {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng: Mutex::new(rng) }
    }

    /// Draw one reading from the given RNG.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> SentimentBundle {
        let base: f64 = rng.gen_range(-1.0..1.0);
        let jitter = |rng: &mut R| (base + rng.gen_range(-0.2..0.2)).clamp(-1.0, 1.0);

        let news_score = jitter(rng);
        let social_score = jitter(rng);
        let fear_greed_index = rng.gen_range(0..100u8);
        let keyword_count = rng.gen_range(2..=5);

        SentimentBundle {
            overall: base.clamp(-1.0, 1.0),
            news_score,
            social_score,
            fear_greed_index,
            keywords: KEYWORD_POOL[..keyword_count]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            sources: SOURCE_NAMES
                .iter()
                .map(|name| SentimentSource {
                    name: name.to_string(),
                    score: rng.gen_range(-1.0..1.0),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl SentimentProvider for SimulatedSentiment {
    async fn get_sentiment(&self, _symbol: &str) -> SentimentBundle {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        Self::sample(&mut *rng)
    }
}

/// Provider that always returns the same reading.
pub struct FixedSentiment(pub SentimentBundle);

#[async_trait]
impl SentimentProvider for FixedSentiment {
    async fn get_sentiment(&self, _symbol: &str) -> SentimentBundle {
        self.0.clone()
    }
}
