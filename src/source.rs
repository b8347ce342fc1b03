// Spreadsheet source — reads the supervisors sheet (CSV export) into records.
//
// Columns are matched by header name; extra columns are ignored and missing
// ones read as empty strings. The only failures are "file not there" and
// "file not parseable as CSV", both of which make the whole directory
// unavailable.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::classify::SupervisorRecord;

/// Default file name of the supervisors sheet export.
pub const DEFAULT_SOURCE_FILE: &str = "HLT - Supervisors.csv";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("The file '{}' was not found", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read or process '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl SourceError {
    pub fn path(&self) -> &Path {
        match self {
            SourceError::NotFound(path) => path,
            SourceError::Unreadable { path, .. } => path,
        }
    }
}

/// Cell values the sheet export uses for "no value". A cell equal to one of
/// these (after trimming) reads as empty rather than as a literal tag.
pub const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn blank_na(cell: &mut String) {
    if NA_TOKENS.contains(&cell.trim()) {
        cell.clear();
    }
}

fn blank_na_cells(record: &mut SupervisorRecord) {
    for cell in [
        &mut record.name,
        &mut record.discipline,
        &mut record.methods,
        &mut record.research_focus,
        &mut record.hlt_methods,
        &mut record.hlt_topics,
    ] {
        blank_na(cell);
    }
}

/// Read every supervisor row from the CSV at `path`.
pub fn read_records(path: &Path) -> Result<Vec<SupervisorRecord>, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }

    let unreadable = |source: csv::Error| SourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(unreadable)?;

    let mut records = Vec::new();
    for row in reader.deserialize::<SupervisorRecord>() {
        let mut record = row.map_err(unreadable)?;
        blank_na_cells(&mut record);
        records.push(record);
    }

    debug!(path = %path.display(), rows = records.len(), "Read supervisors sheet");
    Ok(records)
}
