//! Rendering finished reservoirs.

use std::io::{self, Write};

use clap::ValueEnum;
use reservoir_core::SamplerState;
use serde::{Deserialize, Serialize};

/// How the final sample is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One sampled line per output line. With several inputs each sample is
    /// preceded by a `==> source <==` header, as `head` does.
    #[default]
    Text,
    /// A JSON array with one report per input.
    Json,
}

/// Final reservoir for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleReport {
    /// `-` for stdin, otherwise the file path.
    pub source: String,
    /// Requested sample size.
    pub capacity: usize,
    /// Number of lines read.
    pub seen: u64,
    /// Sampled lines in slot order.
    pub sample: Vec<String>,
}

impl SampleReport {
    /// Builds a report from a finished state.
    pub fn new(source: impl Into<String>, state: SamplerState<String>) -> Self {
        Self {
            source: source.into(),
            capacity: state.capacity().get(),
            seen: state.seen_count(),
            sample: state.into_sample(),
        }
    }
}

/// Writes every report in `format`, in input order.
pub fn write_reports<W: Write>(
    mut out: W,
    reports: &[SampleReport],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            let headed = reports.len() > 1;
            for (index, report) in reports.iter().enumerate() {
                if headed {
                    if index > 0 {
                        writeln!(out)?;
                    }
                    writeln!(out, "==> {} <==", report.source)?;
                }
                for line in &report.sample {
                    writeln!(out, "{line}")?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, reports)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
