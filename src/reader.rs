//! Reading and parsing a single record file.

use crate::logger::BufferedLogger;
use crate::record::Record;
use crate::{ReadraceError, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

/// Reads one record off disk.
///
/// The trait seam lets tests substitute a reader with skewed completion
/// timing; everything stays on one thread, hence `?Send`.
#[async_trait(?Send)]
pub trait RecordReader {
    /// Read and parse the file at `path`, logging the read window.
    async fn read_record(&self, path: &Path, logger: &BufferedLogger) -> Result<Record>;
}

/// Production reader: whole-file read followed by a JSON parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileReader;

#[async_trait(?Send)]
impl RecordReader for JsonFileReader {
    async fn read_record(&self, path: &Path, logger: &BufferedLogger) -> Result<Record> {
        logger.log(format!("start read file {}", path.display()));
        let bytes = fs::read(path)
            .await
            .map_err(|source| ReadraceError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        logger.log(format!("end read file {}", path.display()));
        serde_json::from_slice(&bytes).map_err(|source| ReadraceError::JsonParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReadraceError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_and_logs_around_the_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data-1.json");
        std::fs::write(&path, r#"{"number":1,"filename":"data-1.json"}"#).unwrap();

        let logger = BufferedLogger::new();
        let record = JsonFileReader.read_record(&path, &logger).await.unwrap();

        assert_eq!(record, Record::new(1));
        let contents = logger.contents();
        let start = contents.find("start read file").unwrap();
        let end = contents.find("end read file").unwrap();
        assert!(start < end);
    }

    #[tokio::test]
    async fn test_missing_file_is_wrapped_with_its_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data-404.json");

        let logger = BufferedLogger::new();
        let err = JsonFileReader.read_record(&path, &logger).await.unwrap_err();

        assert!(matches!(err, ReadraceError::FileRead { .. }));
        assert!(err.to_string().contains("data-404.json"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_wrapped_with_its_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data-1.json");
        std::fs::write(&path, "not json at all").unwrap();

        let logger = BufferedLogger::new();
        let err = JsonFileReader.read_record(&path, &logger).await.unwrap_err();

        assert!(matches!(err, ReadraceError::JsonParse { .. }));
        assert!(err.to_string().contains("data-1.json"));
        // The read itself succeeded, so both read markers were logged.
        assert!(logger.contents().contains("end read file"));
    }
}
