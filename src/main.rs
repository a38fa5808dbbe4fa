use colored::*;
use readrace::{generate, harness, ReadraceError, RunConfig};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so stdout stays exactly the two report lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<ReadraceError>() {
            Some(ReadraceError::DirectoryCreate { .. }) => 2,
            Some(ReadraceError::FileWrite { .. }) => 3,
            Some(ReadraceError::FileRead { .. }) => 4,
            Some(ReadraceError::JsonParse { .. }) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run() -> anyhow::Result<()> {
    let config = RunConfig::default();

    // One logical thread of execution; concurrency is interleaved awaits only
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        generate::generate_data(&config).await?;
        harness::run(&config).await?;
        Ok(())
    })
}
