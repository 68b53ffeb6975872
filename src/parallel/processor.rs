//! Main parallel processor
//!
//! Contains the ParallelProcessor struct that orchestrates the pipeline:
//! batcher on the calling thread, a fixed worker pool, one collector.

use anyhow::{anyhow, Result};
use crossbeam_channel::bounded;
use std::io;
use std::path::Path;
use std::thread;

use crate::readers::LineSource;
use crate::stats::ProcessingStats;

use super::batching::batcher;
use super::sink::collector_thread;
use super::types::{Batch, ParallelConfig, PartialCount, TallyReport};
use super::worker::worker_thread;

/// Main parallel processor
pub struct ParallelProcessor {
    config: ParallelConfig,
}

impl ParallelProcessor {
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    /// Open `path` and tally it.
    ///
    /// An unopenable file fails here, before any thread is started.
    pub fn process_file<P: AsRef<Path>>(&self, path: P) -> Result<TallyReport> {
        let source = LineSource::open(path)?;
        self.process(source)
    }

    /// Run the pipeline over `lines` and return the merged counts.
    ///
    /// Shutdown order: the batcher drops its sender, every worker is joined,
    /// and only then is the last results sender dropped so the collector can
    /// finish. The counts are read after the collector is joined.
    pub fn process<I>(&self, lines: I) -> Result<TallyReport>
    where
        I: IntoIterator<Item = io::Result<Vec<u8>>>,
    {
        self.config.validate()?;

        let mut stats = ProcessingStats::new();
        stats.start_timer();

        // Rendezvous channels: a send completes only when a receiver takes it
        let (batch_sender, batch_receiver) = bounded::<Batch>(0);
        let (result_sender, result_receiver) = bounded::<PartialCount>(0);

        // Start worker threads
        let mut worker_handles = Vec::with_capacity(self.config.num_workers);
        for worker_id in 0..self.config.num_workers {
            let batch_receiver = batch_receiver.clone();
            let result_sender = result_sender.clone();

            let handle =
                thread::spawn(move || worker_thread(worker_id, batch_receiver, result_sender));
            worker_handles.push(handle);
        }
        // Workers hold the only receivers; if they all exit, the batcher sees a closed channel
        drop(batch_receiver);

        // Start collector thread
        let collector_handle = thread::spawn(move || collector_thread(result_receiver));

        // Batcher runs here and drops its sender on return
        let batcher_result = batcher(lines, batch_sender, self.config.batch_size);

        // Wait for every worker before closing the results channel
        let mut worker_error = None;
        for (idx, handle) in worker_handles.into_iter().enumerate() {
            match handle.join() {
                Ok(Ok(summary)) => stats.merge_worker(
                    summary.batches_processed,
                    summary.lines_without_level,
                ),
                Ok(Err(e)) => {
                    worker_error.get_or_insert(e);
                }
                Err(_) => {
                    worker_error.get_or_insert(anyhow!("worker thread {} panicked", idx));
                }
            }
        }

        drop(result_sender);

        let collected = collector_handle
            .join()
            .map_err(|_| anyhow!("collector thread panicked"))?;

        let batcher_summary = batcher_result?;
        if let Some(e) = worker_error {
            return Err(e);
        }

        stats.lines_read = batcher_summary.lines_read;
        stats.batches_dispatched = batcher_summary.batches_sent;
        stats.partials_merged = collected.partials_merged;
        stats.finish_processing();

        tracing::debug!("{}", stats.format_stats());

        Ok(TallyReport {
            counts: collected.counts,
            stats,
        })
    }
}
