//! Line-oriented console prompts with validation.
//!
//! Every question goes through [`Console::prompt_until`]: print the question,
//! read one line, normalize it, and ask again until the answer is accepted.

use std::io::{BufRead, Write};

use crate::error::SessionError;
use crate::filters::{DayFilter, FilterCriteria, MonthFilter};
use crate::registry::City;

/// Trims surrounding whitespace and lowercases.
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Blocking reader/writer pair used for the interactive session.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `question` and returns the normalized answer.
    ///
    /// Returns [`SessionError::InputClosed`] once the input reaches EOF.
    pub fn ask(&mut self, question: &str) -> Result<String, SessionError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(normalize(&line))
    }

    /// Asks `question` until `accept` maps the answer to a value, printing
    /// `retry` after each rejected answer.
    pub fn prompt_until<T>(
        &mut self,
        question: &str,
        retry: &str,
        accept: impl Fn(&str) -> Option<T>,
    ) -> Result<T, SessionError> {
        loop {
            let answer = self.ask(question)?;
            if let Some(value) = accept(&answer) {
                return Ok(value);
            }
            tracing::debug!(answer = %answer, "Rejected answer");
            writeln!(self.output, "{retry}")?;
        }
    }

    /// `true` only for an answer of exactly "yes" (after normalization).
    pub fn confirm(&mut self, question: &str) -> Result<bool, SessionError> {
        Ok(self.ask(question)? == "yes")
    }
}

/// Asks for city, month, and day until each is valid.
pub fn get_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<FilterCriteria, SessionError> {
    writeln!(console.output(), "Hello! Let's explore some US bikeshare data!")?;

    let city = console.prompt_until(
        "Please choose a city (Chicago, New York City, Washington): ",
        "That doesn't look right. Please try again.",
        City::from_name,
    )?;

    let month = console.prompt_until(
        "Enter a month (January-June) or 'all': ",
        "Invalid month. Try again.",
        MonthFilter::parse,
    )?;

    let day = console.prompt_until(
        "Enter a day of the week or 'all': ",
        "Invalid day. Please enter a proper weekday name.",
        DayFilter::parse,
    )?;

    writeln!(console.output(), "{}", "-".repeat(40))?;

    Ok(FilterCriteria { city, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  New York City \r\n"), "new york city");
        assert_eq!(normalize("MONDAY"), "monday");
    }

    #[test]
    fn test_prompt_until_retries_until_valid() {
        let mut c = console("someday\n\nMonday\n");
        let day = c
            .prompt_until("Day? ", "Invalid day.", DayFilter::parse)
            .unwrap();
        assert_eq!(day, DayFilter::Only(Weekday::Mon));

        let out = output_of(c);
        assert_eq!(out.matches("Day? ").count(), 3);
        assert_eq!(out.matches("Invalid day.").count(), 2);
    }

    #[test]
    fn test_ask_reports_closed_input() {
        let mut c = console("");
        assert!(matches!(c.ask("City? "), Err(SessionError::InputClosed)));
    }

    #[test]
    fn test_prompt_until_stops_on_closed_input() {
        let mut c = console("nope\n");
        let result = c.prompt_until("Q? ", "again", |_| None::<()>);
        assert!(matches!(result, Err(SessionError::InputClosed)));
    }

    #[test]
    fn test_confirm_only_accepts_yes() {
        let mut c = console(" YES \ny\nno\n");
        assert!(c.confirm("? ").unwrap());
        assert!(!c.confirm("? ").unwrap());
        assert!(!c.confirm("? ").unwrap());
    }

    #[test]
    fn test_get_filters() {
        let mut c = console("Boston\n  Chicago \nJuly\nMarch\nsomeday\nMonday\n");
        let criteria = get_filters(&mut c).unwrap();

        assert_eq!(
            criteria,
            FilterCriteria {
                city: City::Chicago,
                month: MonthFilter::Only(3),
                day: DayFilter::Only(Weekday::Mon),
            }
        );

        let out = output_of(c);
        assert!(out.contains("That doesn't look right. Please try again."));
        assert!(out.contains("Invalid month. Try again."));
        assert!(out.contains("Invalid day. Please enter a proper weekday name."));
    }
}
