//! Collector thread for parallel processing
//!
//! Sole owner of the final counts: merges partial results from workers in
//! whatever order they arrive.

use crossbeam_channel::Receiver;

use super::types::{CollectorOutput, LevelCounts, PartialCount};

/// Collector thread: merges partials until the results channel is closed and drained
pub(crate) fn collector_thread(result_receiver: Receiver<PartialCount>) -> CollectorOutput {
    let mut output = CollectorOutput::default();

    while let Ok(partial) = result_receiver.recv() {
        tracing::trace!(
            batch_id = partial.batch_id,
            worker_id = partial.worker_id,
            levels = partial.counts.len(),
            "merging partial count"
        );
        merge_counts(&mut output.counts, partial.counts);
        output.partials_merged += 1;
    }

    tracing::debug!(
        partials = output.partials_merged,
        levels = output.counts.len(),
        "collector finished"
    );

    output
}

/// Add every count in `partial` to the running totals
pub(crate) fn merge_counts(totals: &mut LevelCounts, partial: LevelCounts) {
    for (level, count) in partial {
        *totals.entry(level).or_insert(0) += count;
    }
}
