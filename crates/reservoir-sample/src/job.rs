//! One invocation: sample each input independently and print the results.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use reservoir_core::{Capacity, RngHandle, Sampler};
use tracing::info;

use crate::config::HarnessConfig;
use crate::lines::sample_reader;
use crate::output::{write_reports, SampleReport};

/// Fully validated sampling run.
#[derive(Debug, Clone)]
pub struct SampleJob {
    /// Lines to keep per input.
    pub capacity: Capacity,
    /// Files to read; stdin when empty.
    pub inputs: Vec<PathBuf>,
    /// Seed, batching and output settings.
    pub config: HarnessConfig,
}

impl SampleJob {
    /// Checks the config and builds a job. Fails before any input is opened.
    pub fn new(
        capacity: Capacity,
        inputs: Vec<PathBuf>,
        config: HarnessConfig,
    ) -> Result<Self, Box<dyn Error>> {
        config.validate()?;
        Ok(Self {
            capacity,
            inputs,
            config,
        })
    }

    /// Samples every input and returns one report per input, in order.
    pub fn collect(&self) -> Result<Vec<SampleReport>, Box<dyn Error>> {
        if self.inputs.is_empty() {
            let stdin = io::stdin();
            let state = sample_reader(
                stdin.lock(),
                self.capacity,
                self.config.batch_lines,
                &mut self.sampler_for(0),
            )?;
            info!(seen = state.seen_count(), "sampled stdin");
            return Ok(vec![SampleReport::new("-", state)]);
        }

        let mut reports = Vec::with_capacity(self.inputs.len());
        for (index, path) in self.inputs.iter().enumerate() {
            let file = File::open(path)
                .map_err(|err| format!("failed to open {}: {err}", path.display()))?;
            let state = sample_reader(
                BufReader::new(file),
                self.capacity,
                self.config.batch_lines,
                &mut self.sampler_for(index as u64),
            )?;
            info!(
                input = %path.display(),
                seen = state.seen_count(),
                "sampled file"
            );
            reports.push(SampleReport::new(path.display().to_string(), state));
        }
        Ok(reports)
    }

    /// Samples every input and writes the rendered reports to `out`.
    pub fn run<W: Write>(&self, out: W) -> Result<(), Box<dyn Error>> {
        let reports = self.collect()?;
        write_reports(out, &reports, self.config.format)?;
        Ok(())
    }

    fn sampler_for(&self, index: u64) -> Sampler {
        match self.config.seed {
            Some(seed) => Sampler::new(RngHandle::substream(seed, index)),
            None => Sampler::from_entropy(),
        }
    }
}
