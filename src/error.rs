//! Error types for stepplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stepplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while loading or plotting a dataset.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Input file does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Failed to open a file.
    #[error("Failed to open file: {}", path.display())]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A field could not be parsed as a number.
    #[error("{}:{line}: column {column}: '{value}' is not a number", path.display())]
    Parse {
        /// Source file.
        path: PathBuf,
        /// 1-based line number.
        line: u64,
        /// 1-based column number.
        column: usize,
        /// Offending field text.
        value: String,
    },

    /// A line has a different number of fields than the first data line.
    #[error("{}:{line}: expected {expected} columns, found {found}", path.display())]
    RaggedRow {
        /// Source file.
        path: PathBuf,
        /// 1-based line number.
        line: u64,
        /// Column count of the first data line.
        expected: usize,
        /// Column count of this line.
        found: usize,
    },

    /// The file holds no data lines.
    #[error("No data in {}", path.display())]
    EmptyDataset {
        /// Source file.
        path: PathBuf,
    },

    /// Dataset has too few series for the requested plot.
    #[error("{dataset} requires at least {required} columns, found {found}")]
    Shape {
        /// Dataset name.
        dataset: String,
        /// Minimum number of series.
        required: usize,
        /// Actual number of series.
        found: usize,
    },

    /// Per-curve labels or styles do not match the curve count.
    #[error("{curves} curves but {labels} labels and {styles} styles")]
    LabelMismatch {
        /// Number of curves.
        curves: usize,
        /// Number of labels.
        labels: usize,
        /// Number of styles.
        styles: usize,
    },

    /// Delimited-text reader error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Drawing the chart failed.
    #[error("Failed to render {}: {message}", path.display())]
    Render {
        /// Output path.
        path: PathBuf,
        /// Backend error text.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Shape error.
    pub fn shape(dataset: impl Into<String>, required: usize, found: usize) -> Self {
        Self::Shape {
            dataset: dataset.into(),
            required,
            found,
        }
    }

    /// Create a Render error.
    pub fn render(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Render {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
