//! Record model and the lazy sequences that drive a run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn filename(number: u64) -> String {
    format!("data-{}.json", number)
}

/// One unit of generated test data, persisted as JSON in its own file.
///
/// `filename` is embedded in the content and mirrors the on-disk name, so a
/// parsed record can be checked against the path it was read from. Field
/// order matters: serializing must reproduce the generated file bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub number: u64,
    pub filename: String,
}

impl Record {
    pub fn new(number: u64) -> Self {
        Self {
            number,
            filename: filename(number),
        }
    }
}

/// Lazy sequence of the records 1..=count. Restartable by calling again.
pub fn records(count: usize) -> impl Iterator<Item = Record> {
    (1..=count as u64).map(Record::new)
}

/// Lazy sequence of the on-disk paths for records 1..=count, in numeric order.
pub fn file_paths(dir: &Path, count: usize) -> impl Iterator<Item = PathBuf> + '_ {
    (1..=count as u64).map(move |k| dir.join(filename(k)))
}
