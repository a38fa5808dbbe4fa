pub mod config;
pub mod generate;
pub mod harness;
pub mod logger;
pub mod reader;
pub mod record;
pub mod runner;

pub use crate::config::RunConfig;
pub use crate::logger::BufferedLogger;
pub use crate::reader::{JsonFileReader, RecordReader};
pub use crate::record::Record;
pub use crate::runner::{ParallelRunner, SequentialRunner};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadraceError {
    #[error("failed to create directory {}: {source}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write file {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse JSON from {}: {source}", .path.display())]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReadraceError>;
