pub mod benchmark;
pub mod commands;
pub mod error;
pub mod generator;
pub mod models;

use anyhow::{Result, bail};
use clap::error::ErrorKind;

use std::{path::Path, process::ExitCode};

use commands::{Args, Commands};

/// Executes one parsed invocation.
pub async fn execute(args: Args) -> Result<()> {
    let path = Path::new(&args.path);
    match args.command {
        Some(Commands::Generate { count, seed }) => {
            generator::create_samples(path, count, seed).await?;
        }
        Some(Commands::Run) => {
            let timings = benchmark::run_benchmark(path).await?;
            tracing::debug!("{:?}", timings);
        }
        None => bail!("no command given, run with --help to see instructions"),
    }
    Ok(())
}

/// Reports a command line parse failure and picks the exit status for it.
pub fn usage_exit(err: &clap::Error) -> ExitCode {
    if let Err(io_err) = err.print() {
        tracing::warn!("Could not print usage message: {}", io_err);
    }
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

/// Runs one parsed invocation and maps its outcome to a process exit status.
pub async fn run(args: Args) -> ExitCode {
    match execute(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("Run failed: {:?}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse_exit(argv: &[&str]) -> ExitCode {
        usage_exit(&Args::try_parse_from(argv).unwrap_err())
    }

    #[test]
    fn bad_arguments_exit_with_failure() {
        assert_eq!(parse_exit(&["benchrs", "generate"]), ExitCode::FAILURE);
        assert_eq!(parse_exit(&["benchrs", "generate", "ten"]), ExitCode::FAILURE);
        assert_eq!(parse_exit(&["benchrs", "generate", "1", "2"]), ExitCode::FAILURE);
        assert_eq!(parse_exit(&["benchrs", "frobnicate"]), ExitCode::FAILURE);
    }

    #[test]
    fn help_and_version_exit_with_success() {
        assert_eq!(parse_exit(&["benchrs", "--help"]), ExitCode::SUCCESS);
        assert_eq!(parse_exit(&["benchrs", "generate", "--help"]), ExitCode::SUCCESS);
        assert_eq!(parse_exit(&["benchrs", "--version"]), ExitCode::SUCCESS);
    }

    #[tokio::test]
    async fn run_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.json");
        let path = path.to_str().unwrap();

        let generate = Args::parse_from(["benchrs", "generate", "12", "--path", path]);
        assert_eq!(run(generate).await, ExitCode::SUCCESS);

        let bench = Args::parse_from(["benchrs", "run", "--path", path]);
        assert_eq!(run(bench).await, ExitCode::SUCCESS);

        let missing = dir.path().join("missing.json");
        let bench = Args::parse_from(["benchrs", "run", "--path", missing.to_str().unwrap()]);
        assert_eq!(run(bench).await, ExitCode::FAILURE);

        let empty = Args::parse_from(["benchrs", "generate", "0", "--path", path]);
        assert_eq!(run(empty).await, ExitCode::SUCCESS);
        let bench = Args::parse_from(["benchrs", "run", "--path", path]);
        assert_eq!(run(bench).await, ExitCode::FAILURE);

        assert_eq!(run(Args::parse_from(["benchrs"])).await, ExitCode::FAILURE);
    }
}
