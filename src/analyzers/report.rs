use std::time::{Duration, Instant};

use tracing::debug;

use crate::analyzers::duration::duration_stats;
use crate::analyzers::station::station_stats;
use crate::analyzers::time::time_stats;
use crate::analyzers::types::{Report, SectionTimings};
use crate::analyzers::user::user_stats;
use crate::dataset::Dataset;
use crate::error::StatsError;
use crate::filters::FilterCriteria;

fn timed<T>(f: impl FnOnce() -> Result<T, StatsError>) -> Result<(T, Duration), StatsError> {
    let started = Instant::now();
    let value = f()?;
    Ok((value, started.elapsed()))
}

/// Runs the time, station, duration, and user aggregators, in that order.
///
/// Fails with [`StatsError::EmptyResultSet`] before running anything if the
/// dataset has no rows.
pub fn build_report(criteria: &FilterCriteria, dataset: &Dataset) -> Result<Report, StatsError> {
    if dataset.is_empty() {
        return Err(StatsError::EmptyResultSet);
    }

    let (time, time_elapsed) = timed(|| time_stats(dataset))?;
    let (station, station_elapsed) = timed(|| station_stats(dataset))?;
    let (duration, duration_elapsed) = timed(|| duration_stats(dataset))?;
    let (user, user_elapsed) = timed(|| user_stats(dataset))?;

    let elapsed = SectionTimings {
        time: time_elapsed,
        station: station_elapsed,
        duration: duration_elapsed,
        user: user_elapsed,
    };
    debug!(rows = dataset.len(), ?elapsed, "Report built");

    Ok(Report {
        city: criteria.city,
        month: criteria.month.label(),
        day: criteria.day.label(),
        rows: dataset.len(),
        time,
        station,
        duration,
        user,
        elapsed,
    })
}
