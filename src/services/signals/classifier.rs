//! Rule-based fusion of technical indicators and sentiment.
//!
//! Classification is additive point scoring over a fixed rule set. Each rule
//! awards points to the bullish or bearish side; the net score decides the
//! signal type.

use rand::Rng;

use crate::types::{IndicatorBundle, SentimentBundle, SignalType};

/// RSI below this is oversold.
pub const RSI_OVERSOLD: f64 = 30.0;
/// RSI above this is overbought.
pub const RSI_OVERBOUGHT: f64 = 70.0;
/// |overall sentiment| beyond this counts as directional.
pub const SENTIMENT_THRESHOLD: f64 = 0.3;
/// Fear & Greed above this is extreme greed (contrarian bearish).
pub const EXTREME_GREED: u8 = 70;
/// Fear & Greed below this is extreme fear (contrarian bullish).
pub const EXTREME_FEAR: u8 = 30;

/// Range of strengths reported for NEUTRAL signals.
pub const NEUTRAL_STRENGTH: std::ops::Range<u8> = 35..65;

const BASE_STRENGTH: f64 = 50.0;

/// Point breakdown behind a classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignalScore {
    pub bullish: i32,
    pub bearish: i32,
}

impl SignalScore {
    /// Score indicators and sentiment.
    ///
    /// MACD and moving-average ties fall into the bearish branch.
    pub fn compute(technical: &IndicatorBundle, sentiment: &SentimentBundle) -> Self {
        let mut score = Self::default();

        if technical.rsi < RSI_OVERSOLD {
            score.bullish += 2;
        }
        if technical.rsi > RSI_OVERBOUGHT {
            score.bearish += 2;
        }

        if technical.macd > technical.macd_signal {
            score.bullish += 1;
        } else {
            score.bearish += 1;
        }

        if technical.ma_50 > technical.ma_200 {
            score.bullish += 1;
        } else {
            score.bearish += 1;
        }

        if sentiment.overall > SENTIMENT_THRESHOLD {
            score.bullish += 2;
        } else if sentiment.overall < -SENTIMENT_THRESHOLD {
            score.bearish += 2;
        }

        if sentiment.fear_greed_index > EXTREME_GREED {
            score.bearish += 1;
        } else if sentiment.fear_greed_index < EXTREME_FEAR {
            score.bullish += 1;
        }

        score
    }

    pub fn net(&self) -> i32 {
        self.bullish - self.bearish
    }

    pub fn signal_type(&self) -> SignalType {
        SignalType::from_net_score(self.net())
    }
}

/// Classify indicators and sentiment into a signal type.
pub fn determine_signal_type(technical: &IndicatorBundle, sentiment: &SentimentBundle) -> SignalType {
    SignalScore::compute(technical, sentiment).signal_type()
}

/// Confidence for a classified signal, 0-100.
///
/// NEUTRAL signals carry no directional information, so their strength is a
/// fuzzy mid-range draw from `rng`. BUY/SELL strength is deterministic.
pub fn signal_strength<R: Rng + ?Sized>(
    technical: &IndicatorBundle,
    sentiment: &SentimentBundle,
    signal_type: SignalType,
    rng: &mut R,
) -> u8 {
    let mut strength = BASE_STRENGTH;

    match signal_type {
        SignalType::Neutral => return rng.gen_range(NEUTRAL_STRENGTH),
        SignalType::Buy => {
            if technical.rsi < RSI_OVERSOLD {
                strength += 20.0;
            }
            if technical.macd > technical.macd_signal {
                strength += 15.0;
            }
            if technical.ma_50 > technical.ma_200 {
                strength += 10.0;
            }
        }
        SignalType::Sell => {
            if technical.rsi > RSI_OVERBOUGHT {
                strength += 20.0;
            }
            if technical.macd < technical.macd_signal {
                strength += 15.0;
            }
            if technical.ma_50 < technical.ma_200 {
                strength += 10.0;
            }
        }
    }

    strength += sentiment.overall.abs() * 20.0;

    strength.clamp(0.0, 100.0).floor() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn indicators(rsi: f64, macd: f64, macd_signal: f64, ma_50: f64, ma_200: f64) -> IndicatorBundle {
        IndicatorBundle {
            rsi,
            macd,
            macd_signal,
            ma_50,
            ma_200,
            bollinger_upper: 110.0,
            bollinger_middle: 100.0,
            bollinger_lower: 90.0,
        }
    }

    fn sentiment(overall: f64, fear_greed_index: u8) -> SentimentBundle {
        SentimentBundle {
            overall,
            fear_greed_index,
            ..SentimentBundle::neutral()
        }
    }

    #[test]
    fn test_strong_buy_scenario() {
        let tech = indicators(25.0, 1.0, 0.0, 110.0, 100.0);
        let sent = sentiment(0.5, 50);

        let score = SignalScore::compute(&tech, &sent);
        assert_eq!(score, SignalScore { bullish: 6, bearish: 0 });
        assert_eq!(score.signal_type(), SignalType::Buy);

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(signal_strength(&tech, &sent, SignalType::Buy, &mut rng), 100);
    }

    #[test]
    fn test_ties_are_bearish() {
        let tech = indicators(50.0, 0.0, 0.0, 100.0, 100.0);
        let sent = sentiment(0.0, 50);

        let score = SignalScore::compute(&tech, &sent);
        assert_eq!(score, SignalScore { bullish: 0, bearish: 2 });
        assert_eq!(determine_signal_type(&tech, &sent), SignalType::Sell);
    }

    #[test]
    fn test_net_thresholds() {
        // net = +2: macd + ma bullish, neutral sentiment
        let tech = indicators(50.0, 1.0, 0.0, 110.0, 100.0);
        assert_eq!(determine_signal_type(&tech, &sentiment(0.0, 50)), SignalType::Buy);

        // net = +1: add contrarian greed
        assert_eq!(determine_signal_type(&tech, &sentiment(0.0, 80)), SignalType::Neutral);

        // net = 0: macd bullish, ma bearish
        let mixed = indicators(50.0, 1.0, 0.0, 90.0, 100.0);
        assert_eq!(determine_signal_type(&mixed, &sentiment(0.0, 50)), SignalType::Neutral);

        // net = -1: ties bearish (-2) offset by extreme fear (+1)
        let ties = indicators(50.0, 0.0, 0.0, 100.0, 100.0);
        assert_eq!(determine_signal_type(&ties, &sentiment(0.0, 10)), SignalType::Neutral);

        // net = -2
        assert_eq!(determine_signal_type(&ties, &sentiment(0.0, 50)), SignalType::Sell);
    }

    #[test]
    fn test_sentiment_threshold_is_exclusive() {
        let mixed = indicators(50.0, 1.0, 0.0, 90.0, 100.0);
        assert_eq!(SignalScore::compute(&mixed, &sentiment(0.3, 50)).net(), 0);
        assert_eq!(SignalScore::compute(&mixed, &sentiment(-0.3, 50)).net(), 0);
        assert_eq!(SignalScore::compute(&mixed, &sentiment(0.31, 50)).net(), 2);
        assert_eq!(SignalScore::compute(&mixed, &sentiment(-0.31, 50)).net(), -2);
    }

    #[test]
    fn test_fear_greed_boundaries() {
        let mixed = indicators(50.0, 1.0, 0.0, 90.0, 100.0);
        assert_eq!(SignalScore::compute(&mixed, &sentiment(0.0, 70)).net(), 0);
        assert_eq!(SignalScore::compute(&mixed, &sentiment(0.0, 71)).net(), -1);
        assert_eq!(SignalScore::compute(&mixed, &sentiment(0.0, 30)).net(), 0);
        assert_eq!(SignalScore::compute(&mixed, &sentiment(0.0, 29)).net(), 1);
    }

    #[test]
    fn test_overbought_sell() {
        let tech = indicators(80.0, 0.0, 0.0, 90.0, 100.0);
        let sent = sentiment(-0.5, 75);

        let score = SignalScore::compute(&tech, &sent);
        assert_eq!(score, SignalScore { bullish: 0, bearish: 7 });

        // 50 + 20 (rsi) + 0 (macd tie) + 10 (ma) + 10 (sentiment)
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(signal_strength(&tech, &sent, SignalType::Sell, &mut rng), 90);
    }

    #[test]
    fn test_strength_truncates() {
        let tech = indicators(50.0, 1.0, 0.0, 110.0, 100.0);
        let sent = sentiment(0.33, 50);
        // 50 + 15 + 10 + 6.6 = 81.6
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(signal_strength(&tech, &sent, SignalType::Buy, &mut rng), 81);
    }

    #[test]
    fn test_directional_strength_ignores_rng() {
        let tech = indicators(25.0, 0.0, 0.0, 90.0, 100.0);
        let sent = sentiment(0.9, 20);
        let a = signal_strength(&tech, &sent, SignalType::Buy, &mut StdRng::seed_from_u64(1));
        let b = signal_strength(&tech, &sent, SignalType::Buy, &mut StdRng::seed_from_u64(999));
        assert_eq!(a, b);
    }

    #[test]
    fn test_neutral_strength_range_and_reproducible() {
        let tech = indicators(50.0, 1.0, 0.0, 90.0, 100.0);
        let sent = sentiment(0.0, 50);

        let mut rng = StdRng::seed_from_u64(42);
        let draws: Vec<u8> = (0..200)
            .map(|_| signal_strength(&tech, &sent, SignalType::Neutral, &mut rng))
            .collect();
        assert!(draws.iter().all(|s| NEUTRAL_STRENGTH.contains(s)));

        let mut replay = StdRng::seed_from_u64(42);
        let again: Vec<u8> = (0..200)
            .map(|_| signal_strength(&tech, &sent, SignalType::Neutral, &mut replay))
            .collect();
        assert_eq!(draws, again);
    }

    #[test]
    fn test_classification_is_pure() {
        let tech = indicators(28.0, 0.5, 0.5, 101.0, 100.0);
        let sent = sentiment(-0.4, 65);
        let first = determine_signal_type(&tech, &sent);
        for _ in 0..10 {
            assert_eq!(determine_signal_type(&tech, &sent), first);
        }
    }
}
