use crate::analyzers::types::TimeStats;
use crate::analyzers::utility::mode;
use crate::dataset::Dataset;
use crate::error::StatsError;

/// Most common start month, day of week, and hour.
pub fn time_stats(dataset: &Dataset) -> Result<TimeStats, StatsError> {
    let trips = &dataset.trips;

    let month = mode(trips.iter().map(|t| t.month)).ok_or(StatsError::EmptyResultSet)?;
    let day_of_week = mode(trips.iter().map(|t| t.day_name())).ok_or(StatsError::EmptyResultSet)?;
    let hour = mode(trips.iter().map(|t| t.hour)).ok_or(StatsError::EmptyResultSet)?;

    Ok(TimeStats {
        month,
        day_of_week,
        hour,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn test_time_stats_sample() {
        let stats = time_stats(&test_utils::sample()).unwrap();
        assert_eq!(
            stats,
            TimeStats {
                month: 1,
                day_of_week: "monday",
                hour: 8,
            }
        );
    }

    #[test]
    fn test_time_stats_single_row_is_that_row() {
        let ds = test_utils::single_row(6);
        let stats = time_stats(&ds).unwrap();
        assert_eq!(stats.month, 3);
        assert_eq!(stats.day_of_week, "saturday");
        assert_eq!(stats.hour, 14);
    }

    #[test]
    fn test_time_stats_tie_uses_lowest_value() {
        // Rows 6 (March, Saturday, 14h) and 4 (February, Tuesday, 12h).
        let mut ds = test_utils::sample();
        ds.trips = vec![ds.trips[4].clone(), ds.trips[6].clone()];

        let stats = time_stats(&ds).unwrap();
        assert_eq!(stats.month, 2);
        assert_eq!(stats.hour, 12);
        // Day names tie-break by name, not by position in the week.
        assert_eq!(stats.day_of_week, "saturday");
    }

    #[test]
    fn test_time_stats_empty() {
        assert_eq!(
            time_stats(&test_utils::empty()),
            Err(StatsError::EmptyResultSet)
        );
    }
}
