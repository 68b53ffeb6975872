//! Fixed run configuration
//!
//! The binary has no flags: the input path, batch size and worker count are
//! constants. Library callers may build their own `ParallelConfig`.

use std::path::PathBuf;

use crate::parallel::ParallelConfig;

/// Input file read by the binary, relative to the working directory
pub const DEFAULT_INPUT_PATH: &str = "file.log";

/// Lines per batch handed to a worker
pub const BATCH_SIZE: usize = 5;

/// Size of the worker pool
pub const NUM_WORKERS: usize = 5;

#[derive(Debug, Clone)]
pub struct TallyConfig {
    pub input_path: PathBuf,
    pub parallel: ParallelConfig,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            parallel: ParallelConfig::default(),
        }
    }
}

/// Format an error for stderr with the program prefix
pub fn format_error_message(message: &str) -> String {
    format!("logtally: Error: {}", message)
}
