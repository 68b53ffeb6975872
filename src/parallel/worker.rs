//! Worker thread for parallel processing
//!
//! Contains the worker loop that turns batches into partial level counts.

use anyhow::{anyhow, Result};
use bstr::BString;
use crossbeam_channel::{Receiver, Sender};

use crate::level::extract_level;

use super::types::{Batch, LevelCounts, PartialCount, WorkerSummary};

/// Worker thread: processes batches until the dispatch channel is closed and drained
pub(crate) fn worker_thread(
    worker_id: usize,
    batch_receiver: Receiver<Batch>,
    result_sender: Sender<PartialCount>,
) -> Result<WorkerSummary> {
    tracing::debug!(worker_id, "worker started");

    let mut summary = WorkerSummary {
        worker_id,
        ..Default::default()
    };

    while let Ok(batch) = batch_receiver.recv() {
        tracing::trace!(
            worker_id,
            batch_id = batch.id,
            lines = batch.lines.len(),
            "worker received batch"
        );

        let partial = count_batch(worker_id, &batch);
        summary.batches_processed += 1;
        summary.lines_processed += batch.lines.len();
        summary.lines_without_level += partial.lines_without_level;

        // The orchestrator keeps the collector alive until every worker has been joined
        result_sender
            .send(partial)
            .map_err(|_| anyhow!("results channel closed before worker {} finished", worker_id))?;
    }

    tracing::debug!(
        worker_id,
        batches = summary.batches_processed,
        lines = summary.lines_processed,
        "worker finished"
    );

    Ok(summary)
}

/// Tally the levels of one batch into a fresh local map
pub(crate) fn count_batch(worker_id: usize, batch: &Batch) -> PartialCount {
    let mut counts = LevelCounts::new();
    let mut lines_without_level = 0usize;

    for line in &batch.lines {
        match extract_level(line) {
            Some(level) => *counts.entry(BString::from(level)).or_insert(0) += 1,
            None => lines_without_level += 1,
        }
    }

    PartialCount {
        batch_id: batch.id,
        worker_id,
        counts,
        lines_without_level,
    }
}
