//! MACD (Moving Average Convergence Divergence) indicator.

use super::Ema;

/// MACD line and its signal line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdValue {
    pub macd: f64,
    pub signal: f64,
}

/// MACD indicator.
///
/// - MACD Line = EMA(12) - EMA(26)
/// - Signal Line = EMA(9) over the one-element series `[macd]`
///
/// No MACD history is kept, so the signal line always equals the MACD line
/// and their difference is always zero. Downstream scoring relies on this: a
/// strict `macd > signal` comparison never fires, and ties count as bearish.
#[derive(Debug, Clone, Copy)]
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    pub fn calculate(&self, prices: &[f64]) -> MacdValue {
        let fast = Ema::new(self.fast_period).calculate(prices);
        let slow = Ema::new(self.slow_period).calculate(prices);
        let macd = fast - slow;
        let signal = Ema::new(self.signal_period).calculate(&[macd]);

        MacdValue { macd, signal }
    }
}
