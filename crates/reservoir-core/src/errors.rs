//! Structured error types shared by the sampler core and its harness.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capacity was zero.
pub const CODE_CAPACITY_ZERO: &str = "CFG001";
/// Capacity text did not parse as a positive integer.
pub const CODE_CAPACITY_INVALID: &str = "CFG002";
/// A harness setting was out of range.
pub const CODE_SETTING_INVALID: &str = "CFG003";
/// A decoded state violated the sample length invariant.
pub const CODE_STATE_INVARIANT: &str = "SER001";

/// Structured payload attached to every [`SampleError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (offending input, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for reservoir sampling.
///
/// Sampling itself never fails; errors only arise while building a
/// configuration or decoding a previously serialized state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SampleError {
    /// Invalid capacity or harness setting, detected before any input is read.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and state validation errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl SampleError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SampleError::Config(info) | SampleError::Serde(info) => info,
        }
    }

    /// Returns `true` for configuration failures.
    pub fn is_config(&self) -> bool {
        matches!(self, SampleError::Config(_))
    }
}
