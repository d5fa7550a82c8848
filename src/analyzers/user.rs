use crate::analyzers::types::{BirthYearStats, Frequency, UserStats};
use crate::analyzers::utility::{mode, value_counts};
use crate::dataset::{Dataset, present};
use crate::error::StatsError;

fn frequencies<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<Frequency> {
    value_counts(values)
        .into_iter()
        .map(|(value, count)| Frequency {
            value: value.to_string(),
            count,
        })
        .collect()
}

/// Earliest, most recent, and most common year. `None` when `years` is empty.
pub fn birth_year_stats(years: &[i32]) -> Option<BirthYearStats> {
    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        most_recent: *years.iter().max()?,
        most_common: mode(years.iter().copied())?,
    })
}

/// User-type counts plus gender and birth-year breakdowns where the city
/// records them. Empty cells are left out of every table.
pub fn user_stats(dataset: &Dataset) -> Result<UserStats, StatsError> {
    if dataset.is_empty() {
        return Err(StatsError::EmptyResultSet);
    }
    let trips = &dataset.trips;

    let user_types = frequencies(trips.iter().filter_map(|t| present(&t.record.user_type)));

    let gender = dataset
        .columns
        .gender
        .then(|| frequencies(trips.iter().filter_map(|t| present(&t.record.gender))));

    let birth_year = if dataset.columns.birth_year {
        let years: Vec<i32> = trips
            .iter()
            .filter_map(|t| t.record.birth_year)
            .map(|y| y as i32)
            .collect();
        birth_year_stats(&years)
    } else {
        None
    };

    Ok(UserStats {
        user_types,
        gender,
        birth_year,
    })
}
