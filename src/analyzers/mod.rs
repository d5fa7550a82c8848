//! Descriptive statistics over a filtered [`Dataset`](crate::dataset::Dataset).
//!
//! Four independent aggregators (travel times, stations, durations, users)
//! read the dataset without modifying it. [`report::build_report`] runs them
//! in that fixed order and times each one.

pub mod duration;
pub mod report;
pub mod station;
pub mod time;
pub mod types;
pub mod user;
pub mod utility;
