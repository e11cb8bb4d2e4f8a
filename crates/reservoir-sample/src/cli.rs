//! Command-line surface of the `reservoir-sample` binary.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use reservoir_core::Capacity;

use crate::config::HarnessConfig;
use crate::job::SampleJob;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "reservoir-sample",
    allow_negative_numbers = true,
    version,
    about = "Uniformly sample a fixed number of lines from stdin or files",
    after_help = "EXAMPLE:\n    cat files* | reservoir-sample 10"
)]
pub struct Cli {
    /// Number of lines to keep.
    #[arg(
        value_name = "NUMBER-OF-LINES",
        value_parser = parse_capacity,
        allow_hyphen_values = true
    )]
    pub count: Capacity,
    /// Files to sample independently. Reads stdin when none are given.
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,
    /// Master seed for reproducible samples.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Lines folded into the reservoir per update.
    #[arg(long)]
    pub batch_lines: Option<usize>,
    /// Output rendering.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// YAML file providing defaults for the flags above.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Loads `--config` if given, then lets the flags win.
    pub fn resolve_config(&self) -> Result<HarnessConfig, Box<dyn Error>> {
        let config = match &self.config {
            Some(path) => HarnessConfig::load(path)?,
            None => HarnessConfig::default(),
        };
        Ok(config.merge_overrides(self.seed, self.batch_lines, self.format))
    }

    /// Builds the validated job. No input is opened here.
    pub fn into_job(self) -> Result<SampleJob, Box<dyn Error>> {
        let config = self.resolve_config()?;
        SampleJob::new(self.count, self.inputs, config)
    }
}

/// Parses `NUMBER-OF-LINES`, rendering the config error for clap.
pub fn parse_capacity(raw: &str) -> Result<Capacity, String> {
    raw.parse::<Capacity>().map_err(|err| err.to_string())
}
