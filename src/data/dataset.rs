//! Dataset of numeric series.

use crate::error::{PlotError, Result};
use ndarray::{Array2, ArrayView1};
use std::path::{Path, PathBuf};

/// A loaded table of series sharing one sample axis.
///
/// Series 0 is the independent variable; the remaining series are the
/// dependent variables plotted against it.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Path to the source file.
    pub file_path: PathBuf,
    /// Samples laid out as `(series, samples)`.
    data: Array2<f64>,
}

impl Dataset {
    /// Build a dataset from row-major samples, one inner `Vec` per line.
    ///
    /// Every row must have the same length; the row length becomes the
    /// series count.
    pub fn from_rows(file_path: PathBuf, rows: Vec<Vec<f64>>) -> Result<Self> {
        let samples = rows.len();
        if samples == 0 {
            return Err(PlotError::EmptyDataset { path: file_path });
        }

        let series = rows[0].len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != series) {
            return Err(PlotError::RaggedRow {
                path: file_path,
                line: i as u64 + 1,
                expected: series,
                found: row.len(),
            });
        }

        let table = Array2::from_shape_fn((samples, series), |(i, j)| rows[i][j]);

        Ok(Self {
            file_path,
            data: table.reversed_axes(),
        })
    }

    /// Number of series (columns in the source file).
    pub fn series_count(&self) -> usize {
        self.data.nrows()
    }

    /// Number of samples per series.
    pub fn sample_count(&self) -> usize {
        self.data.ncols()
    }

    /// Get one series by index.
    pub fn series(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.series_count()).then(|| self.data.row(index))
    }

    /// The independent variable (series 0).
    pub fn independent(&self) -> Option<ArrayView1<'_, f64>> {
        self.series(0)
    }

    /// Iterate over the dependent series (1..N).
    pub fn dependent(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> {
        self.data.outer_iter().skip(1)
    }

    /// File name used in messages.
    pub fn name(&self) -> String {
        display_name(&self.file_path)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
