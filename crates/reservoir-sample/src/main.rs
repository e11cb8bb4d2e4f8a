use std::error::Error;
use std::io;

use clap::Parser;
use reservoir_sample::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let job = Cli::parse().into_job()?;
    job.run(io::stdout().lock())
}
