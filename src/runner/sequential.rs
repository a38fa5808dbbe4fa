//! Ordered one-at-a-time read-back.

use crate::logger::BufferedLogger;
use crate::reader::{JsonFileReader, RecordReader};
use crate::Result;
use std::path::PathBuf;

/// Reads every file in order, awaiting each read before starting the next.
///
/// The collected numbers trivially match input order because no read
/// overlaps another.
#[derive(Debug)]
pub struct SequentialRunner<R = JsonFileReader> {
    reader: R,
    dump_log: bool,
}

impl SequentialRunner {
    pub fn new() -> Self {
        Self {
            reader: JsonFileReader,
            dump_log: false,
        }
    }
}

impl Default for SequentialRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RecordReader> SequentialRunner<R> {
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

    /// Read every file, collecting each record's number in input order.
    /// The first failure aborts the pass.
    pub async fn run(&self, files: &[PathBuf]) -> Result<Vec<u64>> {
        let logger = BufferedLogger::new();
        let mut numbers = Vec::with_capacity(files.len());

        for path in files {
            logger.log(format!("start process for file {}", path.display()));
            let record = self.reader.read_record(path, &logger).await?;
            logger.log(format!(
                "end process for file {} result = {:?}",
                path.display(),
                record
            ));
            numbers.push(record.number);
        }

        logger.log(format!("numbers={:?}", numbers));
        if self.dump_log {
            logger.print();
        }
        tracing::debug!("sequential pass finished over {} files", files.len());
        Ok(numbers)
    }
}
