pub mod analyzers;
pub mod dataset;
pub mod error;
pub mod filters;
pub mod output;
pub mod prompt;
pub mod registry;
pub mod session;

#[cfg(test)]
mod test_utils;
