use crate::analyzers::types::StationStats;
use crate::analyzers::utility::mode;
use crate::dataset::{Dataset, Trip, present};
use crate::error::StatsError;

/// The "start -> end" label of a trip, if both stations are recorded.
pub fn route(trip: &Trip) -> Option<String> {
    let start = present(&trip.record.start_station)?;
    let end = present(&trip.record.end_station)?;
    Some(format!("{start} -> {end}"))
}

/// Route labels for every row, in row order. Leaves the dataset untouched.
pub fn routes(dataset: &Dataset) -> impl Iterator<Item = Option<String>> + '_ {
    dataset.trips.iter().map(route)
}

/// Most common start station, end station, and route.
///
/// Blank station cells are skipped, so each field is `None` only when no
/// filtered row records it. The route is the mode of the combined label,
/// computed independently of the two station modes.
pub fn station_stats(dataset: &Dataset) -> Result<StationStats, StatsError> {
    if dataset.is_empty() {
        return Err(StatsError::EmptyResultSet);
    }
    let trips = &dataset.trips;

    let start_station =
        mode(trips.iter().filter_map(|t| present(&t.record.start_station))).map(str::to_string);
    let end_station =
        mode(trips.iter().filter_map(|t| present(&t.record.end_station))).map(str::to_string);
    let trip = mode(routes(dataset).flatten());

    Ok(StationStats {
        start_station,
        end_station,
        trip,
    })
}
