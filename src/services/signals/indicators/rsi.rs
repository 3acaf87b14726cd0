//! Relative Strength Index (RSI) indicator.

/// RSI returned when there are not enough prices to measure momentum.
pub const NEUTRAL_RSI: f64 = 50.0;

/// RSI (Relative Strength Index) indicator.
///
/// Measures momentum by comparing the magnitude of recent gains to recent losses.
/// Values range from 0-100:
/// - Below 30: Oversold (potential buy signal)
/// - Above 70: Overbought (potential sell signal)
///
/// Only the most recent `period` price transitions are used, averaged
/// without smoothing.
#[derive(Debug, Clone, Copy)]
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Minimum number of prices required for a real reading.
    pub fn min_periods(&self) -> usize {
        self.period + 1
    }

    /// Calculate RSI over the last `period` transitions.
    ///
    /// Returns [`NEUTRAL_RSI`] when fewer than `period + 1` prices exist.
    pub fn calculate(&self, prices: &[f64]) -> f64 {
        let n = prices.len();
        if self.period == 0 || n < self.min_periods() {
            return NEUTRAL_RSI;
        }

        let mut gains = 0.0;
        let mut losses = 0.0;

        for i in 1..=self.period {
            let change = prices[n - i] - prices[n - i - 1];
            if change > 0.0 {
                gains += change;
            } else {
                losses -= change;
            }
        }

        let avg_gain = gains / self.period as f64;
        let avg_loss = losses / self.period as f64;

        if avg_loss == 0.0 {
            return 100.0;
        }

        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}
