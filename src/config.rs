use std::path::{Path, PathBuf};

/// Directory the generated files live in when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = "/var/tmp/data";

/// Number of files generated and read back per run.
pub const DEFAULT_FILE_COUNT: usize = 2000;

/// Settings for one generate-and-read-back run.
///
/// The binary always runs with `RunConfig::default()`; tests point the run
/// at a scratch directory with a smaller file count.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Base directory holding `data-<k>.json` files
    pub data_dir: PathBuf,
    /// How many records to generate and read back
    pub file_count: usize,
    /// Flush each runner's buffered log to stdout after its final line
    pub dump_logs: bool,
}

impl RunConfig {
    pub fn new(data_dir: impl Into<PathBuf>, file_count: usize) -> Self {
        Self {
            data_dir: data_dir.into(),
            file_count,
            dump_logs: false,
        }
    }

    pub fn with_file_count(mut self, file_count: usize) -> Self {
        self.file_count = file_count;
        self
    }

    pub fn with_dump_logs(mut self, enabled: bool) -> Self {
        self.dump_logs = enabled;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            file_count: DEFAULT_FILE_COUNT,
            dump_logs: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("/var/tmp/data"));
        assert_eq!(config.file_count, 2000);
        assert!(!config.dump_logs);
    }

    #[test]
    fn test_builder_overrides() {
        let config = RunConfig::new("/tmp/elsewhere", 8)
            .with_file_count(12)
            .with_dump_logs(true);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/elsewhere"));
        assert_eq!(config.file_count, 12);
        assert!(config.dump_logs);
    }
}
