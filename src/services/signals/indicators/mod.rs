//! Technical indicator implementations.
//!
//! Every calculation here is pure and total: short or empty price series
//! produce well-defined default values instead of errors.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use bollinger::{Bands, BollingerBands};
pub use ema::Ema;
pub use macd::{Macd, MacdValue};
pub use rsi::Rsi;
pub use sma::{mean, std_dev, Sma};

use crate::types::IndicatorBundle;

/// Calculate the full indicator bundle from a chronological price series.
pub fn calculate_indicators(prices: &[f64]) -> IndicatorBundle {
    let rsi = Rsi::default().calculate(prices);
    let MacdValue { macd, signal } = Macd::default().calculate(prices);
    let bands = BollingerBands::default().calculate(prices);

    IndicatorBundle {
        rsi,
        macd,
        macd_signal: signal,
        ma_50: Sma::new(50).calculate(prices),
        ma_200: Sma::new(200).calculate(prices),
        bollinger_upper: bands.upper,
        bollinger_middle: bands.middle,
        bollinger_lower: bands.lower,
    }
}
