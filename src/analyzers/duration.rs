use crate::analyzers::types::DurationStats;
use crate::analyzers::utility::mean;
use crate::dataset::Dataset;
use crate::error::StatsError;

/// Sum and mean of trip duration over the filtered rows. Rows without a
/// duration are skipped.
pub fn duration_stats(dataset: &Dataset) -> Result<DurationStats, StatsError> {
    if dataset.is_empty() {
        return Err(StatsError::EmptyResultSet);
    }

    let durations: Vec<f64> = dataset
        .trips
        .iter()
        .filter_map(|t| t.record.trip_duration)
        .collect();

    Ok(DurationStats {
        trips: durations.len(),
        total_seconds: durations.iter().sum(),
        mean_seconds: (!durations.is_empty()).then(|| mean(&durations)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::time::time_stats;
    use crate::filters::{DAYS, DayFilter, MonthFilter};
    use crate::registry::City;
    use crate::test_utils;

    #[test]
    fn test_duration_stats_sample() {
        let stats = duration_stats(&test_utils::sample()).unwrap();
        assert_eq!(stats.trips, 12);
        assert_eq!(stats.total_seconds, 6240.0);
        assert_eq!(stats.mean_seconds, Some(520.0));
    }

    #[test]
    fn test_duration_stats_fractional_seconds() {
        let stats = duration_stats(&test_utils::washington()).unwrap();
        assert_eq!(stats.total_seconds, 1800.75);
        assert_eq!(stats.mean_seconds, Some(600.25));
    }

    #[test]
    fn test_total_is_additive_over_weekdays() {
        let total = duration_stats(&test_utils::sample()).unwrap().total_seconds;

        let by_day: f64 = DAYS
            .iter()
            .map(|day| {
                let ds = test_utils::sample()
                    .filter(MonthFilter::All, DayFilter::parse(day).unwrap());
                duration_stats(&ds).map(|s| s.total_seconds).unwrap_or(0.0)
            })
            .sum();

        assert_eq!(by_day, total);
    }

    #[test]
    fn test_missing_durations_are_skipped() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-03-04 09:00:00,,X,P,Subscriber
2017-03-04 10:00:00,,X,P,Subscriber
2017-01-02 11:00:00,60,Y,Q,Customer
2017-01-09 12:00:00,30,Y,Q,Customer
2017-03-06 12:00:00,abc,Y,Q,Customer
";
        let ds = test_utils::dataset(City::Chicago, csv);
        assert_eq!(ds.len(), 5);

        let stats = duration_stats(&ds).unwrap();
        assert_eq!(stats.trips, 2);
        assert_eq!(stats.total_seconds, 90.0);
        assert_eq!(stats.mean_seconds, Some(45.0));

        // The rows without a duration still count everywhere else.
        let time = time_stats(&ds).unwrap();
        assert_eq!(time.month, 3);
        assert_eq!(time.day_of_week, "monday");
    }

    #[test]
    fn test_no_durations_has_no_mean() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-03-04 09:00:00,,X,P,Subscriber
";
        let stats = duration_stats(&test_utils::dataset(City::Chicago, csv)).unwrap();
        assert_eq!(stats.trips, 0);
        assert_eq!(stats.total_seconds, 0.0);
        assert_eq!(stats.mean_seconds, None);
    }

    #[test]
    fn test_duration_stats_empty() {
        assert_eq!(
            duration_stats(&test_utils::empty()),
            Err(StatsError::EmptyResultSet)
        );
    }
}
