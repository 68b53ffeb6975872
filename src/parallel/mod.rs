//! Parallel processing module for logtally
//!
//! Splits the tally across a fixed pool of worker threads.
//!
//! # Module Structure
//!
//! - `types`: Batches, partial counts, summaries and configuration
//! - `batching`: Line batching on the producer side
//! - `worker`: Worker thread turning batches into partial counts
//! - `sink`: Collector thread owning the final counts
//! - `processor`: Main ParallelProcessor orchestration

mod batching;
mod processor;
mod sink;
mod types;
mod worker;

// Re-export public types
pub use processor::ParallelProcessor;
pub use types::{LevelCounts, ParallelConfig, TallyReport};
