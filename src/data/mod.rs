//! Data reading and representation.
//!
//! This module handles reading comma-delimited simulation output and
//! holding it as a table of numeric series.

mod dataset;
mod reader;

pub use dataset::Dataset;
pub use reader::DataReader;
