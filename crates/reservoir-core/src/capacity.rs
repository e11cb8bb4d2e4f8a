//! Validated reservoir capacity.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SampleError, CODE_CAPACITY_INVALID, CODE_CAPACITY_ZERO};

/// Maximum number of items a reservoir keeps.
///
/// A `Capacity` is always positive. Constructing one is the only place a
/// configuration error can arise; once a [`SamplerState`](crate::SamplerState)
/// exists, sampling cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    /// Validates `k` as a reservoir size.
    pub fn new(k: usize) -> Result<Self, SampleError> {
        NonZeroUsize::new(k).map(Self).ok_or_else(|| {
            SampleError::Config(
                ErrorInfo::new(CODE_CAPACITY_ZERO, "capacity must be positive")
                    .with_context("capacity", "0")
                    .with_hint("pass the number of lines to keep, e.g. 10"),
            )
        })
    }

    /// Returns the capacity as a plain integer.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl FromStr for Capacity {
    type Err = SampleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let parsed = trimmed.parse::<usize>().map_err(|err| {
            SampleError::Config(
                ErrorInfo::new(
                    CODE_CAPACITY_INVALID,
                    "capacity must be a positive integer",
                )
                .with_context("input", raw)
                .with_context("reason", err.to_string()),
            )
        })?;
        Self::new(parsed)
    }
}

impl TryFrom<usize> for Capacity {
    type Error = SampleError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Capacity> for usize {
    fn from(value: Capacity) -> Self {
        value.get()
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
