//! Command-line harness around `reservoir-core`: reads stdin or files, splits
//! them into line batches, folds each batch into a reservoir and prints it.

pub mod cli;
pub mod config;
pub mod job;
pub mod lines;
pub mod output;

pub use config::HarnessConfig;
pub use job::SampleJob;
pub use lines::{sample_reader, LineBatches};
pub use output::{write_reports, OutputFormat, SampleReport};
