//! Simple Moving Average (SMA) indicator.

/// SMA (Simple Moving Average) indicator.
///
/// Averages the most recent `period` prices. When fewer prices exist the
/// window shrinks to whatever is available.
#[derive(Debug, Clone, Copy)]
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn calculate(&self, prices: &[f64]) -> f64 {
        mean(recent(prices, self.period))
    }
}

/// The last `count` values of a series (or all of them if shorter).
pub fn recent(values: &[f64], count: usize) -> &[f64] {
    &values[values.len().saturating_sub(count)..]
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; 0 for an empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_uses_last_period() {
        let prices = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(Sma::new(2).calculate(&prices), 4.5);
        assert_eq!(Sma::new(5).calculate(&prices), 3.0);
    }

    #[test]
    fn test_sma_window_shrinks() {
        let prices = [10.0, 20.0, 30.0];
        assert_eq!(Sma::new(50).calculate(&prices), 20.0);
        assert_eq!(Sma::new(200).calculate(&prices), 20.0);
    }

    #[test]
    fn test_sma_empty() {
        assert_eq!(Sma::new(20).calculate(&[]), 0.0);
    }

    #[test]
    fn test_recent() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(recent(&values, 2), &[2.0, 3.0]);
        assert_eq!(recent(&values, 10), &values);
        assert!(recent(&values, 0).is_empty());
    }

    #[test]
    fn test_std_dev_population() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev(&values) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_degenerate() {
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(std_dev(&[5.0]), 0.0);
        assert_eq!(std_dev(&[3.0; 10]), 0.0);
    }
}
