//! Loading a city's trip CSV into memory and narrowing it by month and day.
//!
//! ```text
//!  chicago.csv / new_york_city.csv / washington.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │   load    │  deserialize rows, parse start time, derive month/day/hour
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  keep rows matching the month and day filters, in order
//!   └──────────┘
//! ```

use std::fs::File;
use std::io::Read;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::DataError;
use crate::filters::{DayFilter, FilterCriteria, MonthFilter, weekday_name};
use crate::registry::{City, DatasetRegistry};

/// Columns every city file must have.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

const GENDER_COLUMN: &str = "Gender";
const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// Accepted start-time layouts.
const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// One CSV row as stored on disk.
///
/// Gender and birth year are absent from some cities' files; empty cells
/// deserialize to `None`. Only the start time can get a row rejected: a
/// duration or birth year that is not a number reads as `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: Option<String>,
    #[serde(rename = "Trip Duration", deserialize_with = "csv::invalid_option")]
    pub trip_duration: Option<f64>,
    #[serde(rename = "Start Station")]
    pub start_station: Option<String>,
    #[serde(rename = "End Station")]
    pub end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(
        rename = "Birth Year",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub birth_year: Option<f64>,
}

/// A text cell with something in it other than whitespace.
pub fn present(cell: &Option<String>) -> Option<&str> {
    cell.as_deref().filter(|s| !s.trim().is_empty())
}

/// A loaded row with its derived time columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Zero-based position of the row in the source file.
    pub line: usize,
    pub record: TripRecord,
    pub start: NaiveDateTime,
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

impl Trip {
    pub fn from_record(line: usize, record: TripRecord) -> Result<Self, RowError> {
        let start = parse_timestamp(&record.start_time).ok_or_else(|| RowError {
            line,
            message: format!("unparseable start time {:?}", record.start_time),
        })?;

        Ok(Trip {
            line,
            month: start.month(),
            weekday: start.weekday(),
            hour: start.hour(),
            start,
            record,
        })
    }

    pub fn day_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// A row that was rejected while loading.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Which optional columns the source file carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Columns {
    pub gender: bool,
    pub birth_year: bool,
}

/// All usable rows of one city, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub city: City,
    pub columns: Columns,
    pub trips: Vec<Trip>,
    pub row_errors: Vec<RowError>,
}

impl Dataset {
    /// Reads the city's file from the registry.
    pub fn load(registry: &DatasetRegistry, city: City) -> Result<Self, DataError> {
        let path = registry.path_for(city);
        debug!(path = %path.display(), "Opening city data");

        let file = File::open(path).map_err(|source| DataError::Unavailable {
            city,
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader(city, file)
    }

    /// Parses CSV from any reader. Rows that fail to deserialize or whose
    /// start time does not parse are collected in `row_errors`.
    pub fn from_reader<R: Read>(city: City, reader: R) -> Result<Self, DataError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|source| DataError::Header { city, source })?
            .clone();

        let has = |column: &str| headers.iter().any(|h| h == column);

        if let Some(column) = REQUIRED_COLUMNS.iter().copied().find(|c| !has(*c)) {
            return Err(DataError::MissingColumn { city, column });
        }

        let columns = Columns {
            gender: has(GENDER_COLUMN),
            birth_year: has(BIRTH_YEAR_COLUMN),
        };

        let mut trips = Vec::new();
        let mut row_errors = Vec::new();

        for (line, result) in rdr.deserialize::<TripRecord>().enumerate() {
            let parsed = result
                .map_err(|e| RowError {
                    line,
                    message: e.to_string(),
                })
                .and_then(|record| Trip::from_record(line, record));

            match parsed {
                Ok(trip) => trips.push(trip),
                Err(err) => {
                    warn!(line = err.line, reason = %err.message, "Rejected row");
                    row_errors.push(err);
                }
            }
        }

        info!(
            %city,
            rows = trips.len(),
            rejected = row_errors.len(),
            "Dataset loaded"
        );

        Ok(Dataset {
            city,
            columns,
            trips,
            row_errors,
        })
    }

    /// Keeps only rows matching both filters, preserving order.
    pub fn filter(mut self, month: MonthFilter, day: DayFilter) -> Self {
        self.trips
            .retain(|t| month.matches(t.month) && day.matches(t.weekday));
        self
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

/// Loads the city named in `criteria` and applies its month and day filters.
#[tracing::instrument(
    skip(registry),
    fields(city = %criteria.city, month = criteria.month.label(), day = criteria.day.label())
)]
pub fn load_data(
    registry: &DatasetRegistry,
    criteria: &FilterCriteria,
) -> Result<Dataset, DataError> {
    let dataset = Dataset::load(registry, criteria.city)?;
    let total = dataset.len();

    let dataset = dataset.filter(criteria.month, criteria.day);
    debug!(total, kept = dataset.len(), "Filter applied");

    Ok(dataset)
}
