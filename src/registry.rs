//! Fixed mapping from a city to the CSV file that backs it.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Cities with a bikeshare dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

/// City, name typed at the prompt, and backing file name.
static CITY_DATA: &[(City, &str, &str)] = &[
    (City::Chicago, "chicago", "chicago.csv"),
    (City::NewYorkCity, "new york city", "new_york_city.csv"),
    (City::Washington, "washington", "washington.csv"),
];

impl City {
    /// Lowercase names accepted at the city prompt.
    pub const NAMES: [&'static str; 3] = ["chicago", "new york city", "washington"];

    /// Looks up a city by its normalized (trimmed, lowercase) name.
    pub fn from_name(name: &str) -> Option<Self> {
        CITY_DATA
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(city, _, _)| *city)
    }

    pub fn name(self) -> &'static str {
        CITY_DATA
            .iter()
            .find(|(city, _, _)| *city == self)
            .map(|(_, name, _)| *name)
            .unwrap_or_default()
    }

    pub fn file_name(self) -> &'static str {
        CITY_DATA
            .iter()
            .find(|(city, _, _)| *city == self)
            .map(|(_, _, file)| *file)
            .unwrap_or_default()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves each city to a file under one data directory.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct DatasetRegistry {
    files: HashMap<City, PathBuf>,
}

impl DatasetRegistry {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        let files = CITY_DATA
            .iter()
            .map(|(city, _, file)| (*city, data_dir.join(file)))
            .collect();
        Self { files }
    }

    /// Returns the backing file for `city`.
    pub fn path_for(&self, city: City) -> &Path {
        // Every city is inserted by `new`.
        self.files[&city].as_path()
    }
}
