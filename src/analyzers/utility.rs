use std::collections::BTreeMap;

/// Counts occurrences of each value, most frequent first.
///
/// Values with equal counts are ordered ascending.
pub fn value_counts<T: Ord>(values: impl IntoIterator<Item = T>) -> Vec<(T, usize)> {
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut counts: Vec<_> = counts.into_iter().collect();
    // Stable sort keeps the ascending value order within a count.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value; the lowest value wins a tie. `None` for empty input.
pub fn mode<T: Ord>(values: impl IntoIterator<Item = T>) -> Option<T> {
    value_counts(values).into_iter().next().map(|(value, _)| value)
}

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_counts_orders_by_count_then_value() {
        let counts = value_counts(["b", "a", "c", "b", "c", "d"]);
        assert_eq!(counts, vec![("b", 2), ("c", 2), ("a", 1), ("d", 1)]);
    }

    #[test]
    fn test_mode_tie_picks_lowest() {
        assert_eq!(mode([3, 1, 3, 1, 2]), Some(1));
        assert_eq!(mode(["tuesday", "monday", "tuesday", "monday"]), Some("monday"));
    }

    #[test]
    fn test_mode_single_and_empty() {
        assert_eq!(mode([42]), Some(42));
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
    }
}
