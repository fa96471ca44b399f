use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::process::ExitCode;

use person_bench::commands::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Args::try_parse() {
        Ok(args) => person_bench::run(args).await,
        Err(err) => person_bench::usage_exit(&err),
    }
}
