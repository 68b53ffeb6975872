// Core library for the logtally level counter

pub mod config;
pub mod formatters;
pub mod level;
pub mod parallel;
pub mod platform;
pub mod readers;
pub mod stats;

pub use config::TallyConfig;
pub use parallel::{LevelCounts, ParallelConfig, ParallelProcessor, TallyReport};

use anyhow::Result;

/// Tally the configured input file with the configured worker pool
pub fn run(config: &TallyConfig) -> Result<TallyReport> {
    ParallelProcessor::new(config.parallel.clone()).process_file(&config.input_path)
}
