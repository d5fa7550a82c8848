//! Test utilities: small in-memory datasets.

use crate::dataset::Dataset;
use crate::registry::City;

/// Twelve Chicago-style rows spread over January to June 2017.
pub const SAMPLE_CSV: &str = include_str!("../tests/fixtures/chicago.csv");

pub const WASHINGTON_CSV: &str = include_str!("../tests/fixtures/washington.csv");

pub fn dataset(city: City, csv: &str) -> Dataset {
    Dataset::from_reader(city, csv.as_bytes()).expect("test CSV should load")
}

pub fn sample() -> Dataset {
    dataset(City::Chicago, SAMPLE_CSV)
}

pub fn washington() -> Dataset {
    dataset(City::Washington, WASHINGTON_CSV)
}

/// Sample narrowed to its `n`-th row.
pub fn single_row(n: usize) -> Dataset {
    let mut ds = sample();
    ds.trips = vec![ds.trips[n].clone()];
    ds
}

/// Sample with every row filtered out.
pub fn empty() -> Dataset {
    let mut ds = sample();
    ds.trips.clear();
    ds
}
