/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sums a slice of counts. Returns 0 for empty input.
pub fn total(values: &[u64]) -> u64 {
    values.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_and_total() {
        assert_eq!(mean(&[10.0, 20.0]), 15.0);
        assert_eq!(total(&[50, 30]), 80);
        assert_eq!(total(&[]), 0);
    }
}
