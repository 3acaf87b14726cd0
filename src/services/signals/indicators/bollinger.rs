//! Bollinger Bands indicator.

use super::sma::{mean, recent, std_dev};

/// Upper, middle and lower band values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Bollinger Bands indicator.
///
/// Consists of:
/// - Middle band: SMA(20)
/// - Upper band: SMA + 2 * StdDev
/// - Lower band: SMA - 2 * StdDev
///
/// StdDev is the population deviation of the same window, so
/// `lower <= middle <= upper` always holds.
#[derive(Debug, Clone, Copy)]
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

impl BollingerBands {
    pub fn calculate(&self, prices: &[f64]) -> Bands {
        let window = recent(prices, self.period);
        let middle = mean(window);
        let offset = self.std_dev_multiplier * std_dev(window);

        Bands {
            upper: middle + offset,
            middle,
            lower: middle - offset,
        }
    }
}
