//! Concurrent fan-out read-back.

use crate::logger::BufferedLogger;
use crate::reader::{JsonFileReader, RecordReader};
use crate::{ReadraceError, Result};
use futures::future;
use std::path::PathBuf;

/// Launches a read for every file at once and awaits the combined set.
///
/// Results are collected in launch-index order no matter when each read
/// completes; `try_join_all` pins a slot per future. A single failure
/// cancels the remaining reads and fails the pass.
#[derive(Debug)]
pub struct ParallelRunner<R = JsonFileReader> {
    reader: R,
    dump_log: bool,
}

impl ParallelRunner {
    pub fn new() -> Self {
        Self {
            reader: JsonFileReader,
            dump_log: false,
        }
    }
}

impl Default for ParallelRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RecordReader> ParallelRunner<R> {
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader,
            dump_log: false,
        }
    }

    pub fn with_log_dump(mut self, enabled: bool) -> Self {
        self.dump_log = enabled;
        self
    }

    /// Read every file concurrently, collecting the numbers in launch order.
    pub async fn run(&self, files: &[PathBuf]) -> Result<Vec<u64>> {
        let logger = BufferedLogger::new();

        let reads = files.iter().map(|path| {
            let logger = &logger;
            let reader = &self.reader;
            async move {
                logger.log(format!("start process for file {}", path.display()));
                let record = reader.read_record(path, logger).await?;
                logger.log(format!(
                    "end process for file {} result = {:?}",
                    path.display(),
                    record
                ));
                Ok::<u64, ReadraceError>(record.number)
            }
        });

        let numbers = future::try_join_all(reads).await?;

        logger.log(format!("numbers={:?}", numbers));
        if self.dump_log {
            logger.print();
        }
        tracing::debug!("parallel pass finished over {} files", files.len());
        Ok(numbers)
    }
}
