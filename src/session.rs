//! The interactive prompt → load → report → paginate → restart loop.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::analyzers::report::build_report;
use crate::analyzers::types::Report;
use crate::dataset::{Dataset, load_data};
use crate::error::SessionError;
use crate::filters::FilterCriteria;
use crate::output::{OutputFormat, Section, rule, write_json, write_rows, write_section};
use crate::prompt::{Console, get_filters};
use crate::registry::DatasetRegistry;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Width of the separator printed after each text report section.
const SEPARATOR_WIDTH: usize = 60;

/// Session options taken from the command line.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub page_size: usize,
    pub format: OutputFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            format: OutputFormat::Text,
        }
    }
}

/// Zero-based cursor over the filtered rows, advanced one page at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    cursor: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            cursor: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the next page and advances the cursor past it.
    pub fn next_page<'a, T>(&mut self, rows: &'a [T]) -> &'a [T] {
        let start = self.cursor.min(rows.len());
        let end = (start + self.page_size).min(rows.len());
        self.cursor = start + self.page_size;
        &rows[start..end]
    }

    pub fn is_exhausted(&self, len: usize) -> bool {
        self.cursor >= len
    }
}

enum State {
    Prompt,
    Load(FilterCriteria),
    Report(FilterCriteria, Dataset),
    Paginate(Dataset),
    RestartQuery,
    Done,
}

/// Drives one user through any number of report cycles.
pub struct Session<R, W> {
    console: Console<R, W>,
    registry: DatasetRegistry,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, registry: DatasetRegistry, config: SessionConfig) -> Self {
        Self {
            console,
            registry,
            config,
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs until the user declines to restart or input ends.
    pub fn run(&mut self) -> Result<(), SessionError> {
        let mut state = State::Prompt;
        loop {
            state = match self.step(state) {
                Ok(State::Done) => return Ok(()),
                Ok(next) => next,
                Err(SessionError::InputClosed) => {
                    info!("Input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };
        }
    }

    fn step(&mut self, state: State) -> Result<State, SessionError> {
        match state {
            State::Prompt => Ok(State::Load(get_filters(&mut self.console)?)),
            State::Load(criteria) => self.load(criteria),
            State::Report(criteria, dataset) => self.report(&criteria, dataset),
            State::Paginate(dataset) => {
                self.paginate(&dataset)?;
                Ok(State::RestartQuery)
            }
            State::RestartQuery => {
                if self.console.confirm("\nWould you like to restart? (yes/no): ")? {
                    Ok(State::Prompt)
                } else {
                    info!("Restart declined, ending session");
                    Ok(State::Done)
                }
            }
            State::Done => Ok(State::Done),
        }
    }

    fn load(&mut self, criteria: FilterCriteria) -> Result<State, SessionError> {
        match load_data(&self.registry, &criteria) {
            Ok(dataset) => {
                if !dataset.row_errors.is_empty() {
                    writeln!(
                        self.console.output(),
                        "Skipped {} row(s) that could not be read.",
                        dataset.row_errors.len()
                    )?;
                }
                Ok(State::Report(criteria, dataset))
            }
            Err(e) => {
                warn!(error = %e, "Data unavailable");
                writeln!(self.console.output(), "{e}")?;
                Ok(State::RestartQuery)
            }
        }
    }

    fn report(&mut self, criteria: &FilterCriteria, dataset: Dataset) -> Result<State, SessionError> {
        match build_report(criteria, &dataset) {
            Ok(report) => {
                self.write_report(&report)?;
                Ok(State::Paginate(dataset))
            }
            Err(e) => {
                info!(error = %e, "Nothing to report");
                writeln!(
                    self.console.output(),
                    "{e} (city: {}, month: {}, day: {}).",
                    criteria.city,
                    criteria.month.label(),
                    criteria.day.label()
                )?;
                Ok(State::RestartQuery)
            }
        }
    }

    fn write_report(&mut self, report: &Report) -> Result<(), SessionError> {
        let out = self.console.output();
        match self.config.format {
            OutputFormat::Text => {
                for section in Section::ALL {
                    write_section(out, report, section)?;
                    writeln!(out, "{}", rule(SEPARATOR_WIDTH))?;
                }
            }
            OutputFormat::Json => write_json(out, report)?,
        }
        Ok(())
    }

    fn paginate(&mut self, dataset: &Dataset) -> Result<(), SessionError> {
        let mut pager = Pager::new(self.config.page_size);
        let question = format!(
            "\nWould you like to see {} rows of raw data? (yes/no): ",
            self.config.page_size.max(1)
        );

        while self.console.confirm(&question)? {
            let page = pager.next_page(&dataset.trips);
            write_rows(self.console.output(), page, dataset.columns)?;

            if pager.is_exhausted(dataset.len()) {
                writeln!(self.console.output(), "No more data to display.")?;
                break;
            }
        }
        Ok(())
    }
}
