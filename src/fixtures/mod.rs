//! # Fixture Loading
//!
//! Reads booking fixture rows from a CSV file. The first record is a header
//! and is skipped; reading stops at the first row with an empty first field
//! or after [`MAX_FIXTURE_ROWS`] rows, whichever comes first.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Maximum number of fixture rows consumed from one file.
pub const MAX_FIXTURE_ROWS: usize = 10;

/// One line of booking test input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FixtureRow {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: u32,
    pub depositpaid: bool,
    pub checkin: String,
    pub checkout: String,
    pub additionalneeds: String,
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file `{path}`: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed fixture row at line {line}: {source}")]
    Malformed { line: u64, source: csv::Error },
}

/// Load fixture rows from the CSV file at `path`.
pub fn load_fixtures(path: &Path) -> Result<Vec<FixtureRow>, FixtureError> {
    let file = File::open(path).map_err(|source| FixtureError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_fixtures(file)
}

fn read_fixtures<R: Read>(reader: R) -> Result<Vec<FixtureRow>, FixtureError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut rows = Vec::with_capacity(MAX_FIXTURE_ROWS);
    for result in csv_reader.records() {
        if rows.len() == MAX_FIXTURE_ROWS {
            break;
        }

        let record = result.map_err(|source| FixtureError::Malformed {
            line: source.position().map_or(0, |p| p.line()),
            source,
        })?;

        // An empty first field is the end-of-data sentinel.
        if record.get(0).is_none_or(|f| f.trim().is_empty()) {
            break;
        }

        let line = record.position().map_or(0, |p| p.line());
        let row: FixtureRow = record
            .deserialize(None)
            .map_err(|source| FixtureError::Malformed { line, source })?;
        rows.push(row);
    }

    Ok(rows)
}
