//! Harness settings loaded from YAML and overridden by command-line flags.

use std::error::Error;
use std::fs;
use std::path::Path;

use reservoir_core::errors::{ErrorInfo, SampleError, CODE_SETTING_INVALID};
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// YAML-configurable harness settings. Command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Master seed. Entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Maximum number of lines folded into the reservoir per update.
    #[serde(default = "default_batch_lines")]
    pub batch_lines: usize,
    /// Output rendering.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_batch_lines() -> usize {
    4096
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seed: None,
            batch_lines: default_batch_lines(),
            format: OutputFormat::default(),
        }
    }
}

impl HarnessConfig {
    /// Reads a YAML config file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let contents = fs::read_to_string(path)?;
        let config: HarnessConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Applies command-line values on top of the loaded settings. `None`
    /// keeps whatever the file (or the default) provided.
    pub fn merge_overrides(
        mut self,
        seed: Option<u64>,
        batch_lines: Option<usize>,
        format: Option<OutputFormat>,
    ) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(batch_lines) = batch_lines {
            self.batch_lines = batch_lines;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// Rejects settings that would stall the read loop.
    pub fn validate(&self) -> Result<(), SampleError> {
        if self.batch_lines == 0 {
            return Err(SampleError::Config(
                ErrorInfo::new(CODE_SETTING_INVALID, "batch_lines must be positive")
                    .with_context("batch_lines", "0"),
            ));
        }
        Ok(())
    }
}
