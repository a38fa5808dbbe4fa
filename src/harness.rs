//! Wall-clock comparison of the two read strategies.

use crate::config::RunConfig;
use crate::record::file_paths;
use crate::runner::{ParallelRunner, SequentialRunner};
use crate::Result;
use std::future::Future;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Outcome of one timed strategy pass.
#[derive(Debug, Clone)]
pub struct StrategyReport {
    pub label: &'static str,
    pub file_count: usize,
    pub elapsed: Duration,
    pub numbers: Vec<u64>,
}

impl StrategyReport {
    /// The one-line summary written to stdout.
    pub fn summary(&self) -> String {
        format!(
            "elapsed time for {} read of {} files = {}ms",
            self.label,
            self.file_count,
            self.elapsed.as_millis()
        )
    }
}

async fn timed<F, T>(fut: F) -> Result<(T, Duration)>
where
    F: Future<Output = Result<T>>,
{
    let start = Instant::now();
    let value = fut.await?;
    Ok((value, start.elapsed()))
}

/// Run the sequential pass, then the parallel pass, printing one
/// elapsed-time line as each strategy completes. Returns both reports in
/// run order so callers can inspect the collected numbers.
pub async fn run(config: &RunConfig) -> Result<Vec<StrategyReport>> {
    let files: Vec<PathBuf> = file_paths(&config.data_dir, config.file_count).collect();
    let mut reports = Vec::with_capacity(2);

    let sequential = SequentialRunner::new().with_log_dump(config.dump_logs);
    let (numbers, elapsed) = timed(sequential.run(&files)).await?;
    let report = StrategyReport {
        label: "sequential",
        file_count: files.len(),
        elapsed,
        numbers,
    };
    println!("{}", report.summary());
    reports.push(report);

    let parallel = ParallelRunner::new().with_log_dump(config.dump_logs);
    let (numbers, elapsed) = timed(parallel.run(&files)).await?;
    let report = StrategyReport {
        label: "parallel",
        file_count: files.len(),
        elapsed,
        numbers,
    };
    println!("{}", report.summary());
    reports.push(report);

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line_shape() {
        let report = StrategyReport {
            label: "sequential",
            file_count: 3,
            elapsed: Duration::from_millis(12),
            numbers: vec![1, 2, 3],
        };
        assert_eq!(
            report.summary(),
            "elapsed time for sequential read of 3 files = 12ms"
        );
    }
}
