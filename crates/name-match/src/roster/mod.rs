mod dedupe;
mod parser;

use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

pub use dedupe::{cluster_entries, dedupe, find_duplicate_pairs, DedupeReport, DuplicatePair};

/// Column read when the caller does not name one.
pub const DEFAULT_NAME_COLUMN: &str = "Name";

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("roster export has no '{column}' column")]
    MissingColumn { column: String },
}

/// A person name pulled from a roster, tagged with its 1-based data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub row: usize,
    pub name: String,
}

/// Builds entries from an in-memory list, numbering rows by position and
/// dropping blank names.
pub fn entries_from_names<I, S>(names: I) -> Vec<RosterEntry>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .enumerate()
        .filter_map(|(index, name)| {
            let name = name.into();
            if name.trim().is_empty() {
                None
            } else {
                Some(RosterEntry {
                    row: index + 1,
                    name,
                })
            }
        })
        .collect()
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        column: &str,
    ) -> Result<Vec<RosterEntry>, RosterImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let entries = Self::from_reader(file, column)?;
        info!(path = %path.display(), entries = entries.len(), "roster imported");
        Ok(entries)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        column: &str,
    ) -> Result<Vec<RosterEntry>, RosterImportError> {
        parser::parse_roster(reader, column)
    }
}
