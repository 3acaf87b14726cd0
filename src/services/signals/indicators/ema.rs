//! Exponential Moving Average (EMA) indicator.

/// EMA (Exponential Moving Average) indicator.
///
/// Like SMA but gives more weight to recent prices. The average is seeded
/// with the first value of the series rather than an SMA of the first
/// `period` values, so it is defined for series of any length.
#[derive(Debug, Clone, Copy)]
pub struct Ema {
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Smoothing factor `2 / (period + 1)`.
    pub fn multiplier(&self) -> f64 {
        2.0 / (self.period as f64 + 1.0)
    }

    /// Calculate the EMA of the whole series.
    ///
    /// An empty series yields 0 and a single value yields that value.
    pub fn calculate(&self, values: &[f64]) -> f64 {
        let Some((&first, rest)) = values.split_first() else {
            return 0.0;
        };

        let multiplier = self.multiplier();
        rest.iter()
            .fold(first, |ema, &value| value * multiplier + ema * (1.0 - multiplier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ema_empty_is_zero() {
        assert_eq!(Ema::new(12).calculate(&[]), 0.0);
    }

    #[test]
    fn test_ema_single_value() {
        assert_eq!(Ema::new(9).calculate(&[42.5]), 42.5);
    }

    #[test]
    fn test_ema_multiplier() {
        assert!((Ema::new(9).multiplier() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_ema_seeded_with_first_value() {
        // period 3 => multiplier 0.5
        // seed 10, then 0.5*20 + 0.5*10 = 15, then 0.5*30 + 0.5*15 = 22.5
        let ema = Ema::new(3).calculate(&[10.0, 20.0, 30.0]);
        assert!((ema - 22.5).abs() < 1e-12, "got {}", ema);
    }

    #[test]
    fn test_ema_flat_series() {
        let prices = vec![100.0; 40];
        assert!((Ema::new(26).calculate(&prices) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_ema_shorter_period_tracks_faster() {
        let prices: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let fast = Ema::new(12).calculate(&prices);
        let slow = Ema::new(26).calculate(&prices);
        assert!(fast > slow);
        assert!(fast < *prices.last().unwrap());
    }
}
