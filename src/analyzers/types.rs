//! Result types produced by the aggregators.

use std::time::Duration;

use serde::Serialize;

use crate::registry::City;

/// Most common travel times.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    pub month: u32,
    pub day_of_week: &'static str,
    pub hour: u32,
}

/// Most popular stations and start/end combination. `None` when no row
/// records the station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub trip: Option<String>,
}

/// Total and mean trip duration, in seconds, over the rows that record one.
///
/// `mean_seconds` is `None` when no filtered row has a duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub trips: usize,
    pub total_seconds: f64,
    pub mean_seconds: Option<f64>,
}

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frequency {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// User-type and demographic breakdown.
///
/// `gender` is `None` when the city has no gender column; `birth_year` is
/// `None` when the column is missing or has no values in the filtered rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub user_types: Vec<Frequency>,
    pub gender: Option<Vec<Frequency>>,
    pub birth_year: Option<BirthYearStats>,
}

/// Wall-clock time spent in each aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SectionTimings {
    pub time: Duration,
    pub station: Duration,
    pub duration: Duration,
    pub user: Duration,
}

/// Complete statistics for one filtered dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub city: City,
    pub month: &'static str,
    pub day: &'static str,
    pub rows: usize,
    pub time: TimeStats,
    pub station: StationStats,
    pub duration: DurationStats,
    pub user: UserStats,
    #[serde(skip)]
    pub elapsed: SectionTimings,
}
