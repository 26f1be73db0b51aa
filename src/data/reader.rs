//! Delimited numeric text reader.

use super::Dataset;
use crate::error::{PlotError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Comma-delimited dataset reader.
///
/// Each line holds one sample; each comma-separated field is one series.
/// Lines starting with `#` and blank lines are skipped.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a dataset from a file.
    pub fn read_file(path: &Path) -> Result<Dataset> {
        if !path.is_file() {
            return Err(PlotError::file_not_found(path));
        }

        let file = File::open(path).map_err(|e| PlotError::file_open(path.to_path_buf(), e))?;
        let dataset = Self::read_from(path, file)?;

        tracing::debug!(
            "Loaded {}: {} series x {} samples",
            dataset.name(),
            dataset.series_count(),
            dataset.sample_count()
        );

        Ok(dataset)
    }

    /// Read a dataset from any reader; `path` is only used for messages.
    pub fn read_from<R: Read>(path: &Path, input: R) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .flexible(true)
            .from_reader(input);

        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut expected: Option<usize> = None;

        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            // Whitespace-only line
            if record.len() == 1 && record.get(0).is_some_and(str::is_empty) {
                continue;
            }

            let width = *expected.get_or_insert(record.len());
            if record.len() != width {
                return Err(PlotError::RaggedRow {
                    path: path.to_path_buf(),
                    line,
                    expected: width,
                    found: record.len(),
                });
            }

            let row = record
                .iter()
                .enumerate()
                .map(|(j, field)| {
                    field.parse::<f64>().map_err(|_| PlotError::Parse {
                        path: path.to_path_buf(),
                        line,
                        column: j + 1,
                        value: field.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            rows.push(row);
        }

        Dataset::from_rows(path.to_path_buf(), rows)
    }
}
