//! Validated filter criteria: city, month, and day of week.

use chrono::Weekday;

use crate::registry::City;

/// Answer that disables a month or day filter.
pub const ALL: &str = "all";

/// Months covered by the datasets, January = 1.
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

pub const DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Lowercase English name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    DAYS[day.num_days_from_monday() as usize]
}

/// Capitalizes the first letter of each word.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// Month number, 1..=6.
    Only(u32),
}

impl MonthFilter {
    /// Parses a normalized answer: a month name from [`MONTHS`] or `"all"`.
    pub fn parse(answer: &str) -> Option<Self> {
        if answer == ALL {
            return Some(MonthFilter::All);
        }
        MONTHS
            .iter()
            .position(|m| *m == answer)
            .map(|i| MonthFilter::Only(i as u32 + 1))
    }

    pub fn matches(self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m == month,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MonthFilter::All => ALL,
            MonthFilter::Only(m) => MONTHS[(m - 1) as usize],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Parses a normalized answer: a day name from [`DAYS`] or `"all"`.
    pub fn parse(answer: &str) -> Option<Self> {
        if answer == ALL {
            return Some(DayFilter::All);
        }
        DAYS.iter()
            .position(|d| *d == answer)
            .map(|i| DayFilter::Only(WEEKDAYS[i]))
    }

    pub fn matches(self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => d == day,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayFilter::All => ALL,
            DayFilter::Only(d) => weekday_name(d),
        }
    }
}

/// The validated (city, month, day) triple controlling which rows are analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_parse() {
        assert_eq!(MonthFilter::parse("all"), Some(MonthFilter::All));
        assert_eq!(MonthFilter::parse("january"), Some(MonthFilter::Only(1)));
        assert_eq!(MonthFilter::parse("june"), Some(MonthFilter::Only(6)));
        assert_eq!(MonthFilter::parse("july"), None);
        assert_eq!(MonthFilter::parse("jan"), None);
    }

    #[test]
    fn test_day_parse() {
        assert_eq!(DayFilter::parse("all"), Some(DayFilter::All));
        assert_eq!(DayFilter::parse("monday"), Some(DayFilter::Only(Weekday::Mon)));
        assert_eq!(DayFilter::parse("sunday"), Some(DayFilter::Only(Weekday::Sun)));
        assert_eq!(DayFilter::parse("someday"), None);
    }

    #[test]
    fn test_matches() {
        assert!(MonthFilter::All.matches(11));
        assert!(MonthFilter::Only(3).matches(3));
        assert!(!MonthFilter::Only(3).matches(4));
        assert!(DayFilter::All.matches(Weekday::Sat));
        assert!(!DayFilter::Only(Weekday::Fri).matches(Weekday::Sat));
    }

    #[test]
    fn test_labels_round_trip_through_parse() {
        for name in MONTHS.iter().chain(std::iter::once(&ALL)) {
            assert_eq!(MonthFilter::parse(name).unwrap().label(), *name);
        }
        for name in DAYS.iter().chain(std::iter::once(&ALL)) {
            assert_eq!(DayFilter::parse(name).unwrap().label(), *name);
        }
    }

    #[test]
    fn test_weekday_name_and_title_case() {
        assert_eq!(weekday_name(Weekday::Wed), "wednesday");
        assert_eq!(title_case("wednesday"), "Wednesday");
        assert_eq!(title_case("new york city"), "New York City");
        assert_eq!(title_case(""), "");
    }
}
