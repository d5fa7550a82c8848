//! Console rendering for reports and raw-row pages.
//!
//! Supports a sectioned text layout and pretty-printed JSON.

use std::io::Write;

use clap::ValueEnum;
use tracing::debug;

use crate::analyzers::types::{Frequency, Report};
use crate::dataset::{Columns, Trip};
use crate::error::SessionError;
use crate::filters::title_case;

/// How reports are written to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Sectioned, human-readable text
    #[default]
    Text,
    /// One pretty-printed JSON document per report
    Json,
}

pub fn rule(width: usize) -> String {
    "-".repeat(width)
}

/// Renders seconds as e.g. `1h 44m 0s`.
pub fn humanize_seconds(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{h}h {m}m {s}s")
    } else if m > 0 {
        format!("{m}m {s}s")
    } else {
        format!("{s}s")
    }
}

/// Writes the report as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &Report) -> Result<(), SessionError> {
    writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
    Ok(())
}

/// One block of the text report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Time,
    Station,
    Duration,
    User,
}

impl Section {
    /// Sections in the order they are printed.
    pub const ALL: [Section; 4] = [
        Section::Time,
        Section::Station,
        Section::Duration,
        Section::User,
    ];

    fn title(self) -> &'static str {
        match self {
            Section::Time => "The Most Frequent Times of Travel",
            Section::Station => "The Most Popular Stations and Trip",
            Section::Duration => "Trip Duration",
            Section::User => "User Stats",
        }
    }
}

fn write_table<W: Write>(out: &mut W, rows: &[Frequency]) -> std::io::Result<()> {
    for row in rows {
        writeln!(out, "  {}: {}", row.value, row.count)?;
    }
    Ok(())
}

fn or_unavailable(value: Option<&str>) -> &str {
    value.unwrap_or("unavailable")
}

/// Writes one section: heading, statistics, then its timing and a 40-dash rule.
pub fn write_section<W: Write>(out: &mut W, report: &Report, section: Section) -> std::io::Result<()> {
    debug!(?section, rows = report.rows, "Writing report section");
    writeln!(out, "\nCalculating {}...\n", section.title())?;

    let elapsed = match section {
        Section::Time => {
            writeln!(out, "Most common month: {}", report.time.month)?;
            writeln!(
                out,
                "Most common day of week: {}",
                title_case(report.time.day_of_week)
            )?;
            writeln!(out, "Most common start hour: {}", report.time.hour)?;
            report.elapsed.time
        }
        Section::Station => {
            let station = &report.station;
            writeln!(
                out,
                "Most common start station: {}",
                or_unavailable(station.start_station.as_deref())
            )?;
            writeln!(
                out,
                "Most common end station: {}",
                or_unavailable(station.end_station.as_deref())
            )?;
            writeln!(out, "Most frequent trip: {}", or_unavailable(station.trip.as_deref()))?;
            report.elapsed.station
        }
        Section::Duration => {
            let duration = &report.duration;
            writeln!(
                out,
                "Total travel time: {} seconds ({})",
                duration.total_seconds,
                humanize_seconds(duration.total_seconds)
            )?;
            match duration.mean_seconds {
                Some(mean) => writeln!(
                    out,
                    "Average travel time: {mean} seconds ({})",
                    humanize_seconds(mean)
                )?,
                None => writeln!(out, "Average travel time: unavailable")?,
            }
            report.elapsed.duration
        }
        Section::User => {
            let user = &report.user;
            writeln!(out, "User Types:")?;
            write_table(out, &user.user_types)?;
            writeln!(out)?;

            match &user.gender {
                Some(rows) => {
                    writeln!(out, "Gender breakdown:")?;
                    write_table(out, rows)?;
                    writeln!(out)?;
                }
                None => writeln!(out, "Gender information is not available for this dataset.\n")?,
            }

            match &user.birth_year {
                Some(years) => {
                    writeln!(out, "Earliest birth year: {}", years.earliest)?;
                    writeln!(out, "Most recent birth year: {}", years.most_recent)?;
                    writeln!(out, "Most common birth year: {}", years.most_common)?;
                }
                None => writeln!(out, "Birth year data unavailable for this city.")?,
            }
            report.elapsed.user
        }
    };

    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", rule(40))
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Writes raw rows with their original file positions. Gender and birth
/// year are included only when the city records them.
pub fn write_rows<W: Write>(out: &mut W, trips: &[Trip], columns: Columns) -> std::io::Result<()> {
    let mut header = vec![
        "index",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if columns.gender {
        header.push("Gender");
    }
    if columns.birth_year {
        header.push("Birth Year");
    }
    writeln!(out, "{}", header.join(" | "))?;

    for trip in trips {
        let r = &trip.record;
        let mut fields = vec![
            trip.line.to_string(),
            r.start_time.clone(),
            cell(r.end_time.as_deref()),
            cell(r.trip_duration),
            cell(r.start_station.as_deref()),
            cell(r.end_station.as_deref()),
            cell(r.user_type.as_deref()),
        ];
        if columns.gender {
            fields.push(cell(r.gender.as_deref()));
        }
        if columns.birth_year {
            fields.push(cell(r.birth_year.map(|y| y as i32)));
        }
        writeln!(out, "{}", fields.join(" | "))?;
    }
    Ok(())
}
