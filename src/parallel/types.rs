//! Type definitions for parallel processing
//!
//! Contains the data moved between the batcher, workers and collector, plus
//! the pool configuration.

use anyhow::{bail, Result};
use bstr::BString;
use std::collections::HashMap;

use crate::config::{BATCH_SIZE, NUM_WORKERS};
use crate::stats::ProcessingStats;

/// Occurrences per level-token, keyed on the token's raw bytes
pub type LevelCounts = HashMap<BString, usize>;

/// Configuration for parallel processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelConfig {
    pub num_workers: usize,
    pub batch_size: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: NUM_WORKERS,
            batch_size: BATCH_SIZE,
        }
    }
}

impl ParallelConfig {
    pub fn validate(&self) -> Result<()> {
        if self.num_workers == 0 {
            bail!("worker pool needs at least one worker");
        }
        if self.batch_size == 0 {
            bail!("batch size must be at least 1");
        }
        Ok(())
    }
}

/// A batch of lines to be processed together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub id: u64,
    pub lines: Vec<Vec<u8>>,
    pub start_line_num: usize,
}

/// Per-batch tally produced by one worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialCount {
    pub batch_id: u64,
    pub worker_id: usize,
    pub counts: LevelCounts,
    pub lines_without_level: usize,
}

/// What the batcher did before closing the dispatch channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatcherSummary {
    pub lines_read: usize,
    pub batches_sent: usize,
}

/// What one worker did before the dispatch channel ran dry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerSummary {
    pub worker_id: usize,
    pub batches_processed: usize,
    pub lines_processed: usize,
    pub lines_without_level: usize,
}

/// Collector output: the merged counts and how many partials went into them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectorOutput {
    pub counts: LevelCounts,
    pub partials_merged: usize,
}

/// Final result of a pipeline run
#[derive(Debug, Clone, Default)]
pub struct TallyReport {
    pub counts: LevelCounts,
    pub stats: ProcessingStats,
}

impl TallyReport {
    /// Sum of all level counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}
