//! Batcher logic for parallel processing
//!
//! Groups consecutive lines into fixed-size batches and hands them to the
//! worker pool.

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::Sender;
use std::io;

use super::types::{Batch, BatcherSummary};

/// Batch `lines` in order and send each batch to the worker pool.
///
/// Blank lines occupy a slot like any other line. The sender is consumed:
/// returning drops it, which closes the dispatch channel once no other
/// sender exists. A read error stops batching and is returned.
pub(crate) fn batcher<I>(
    lines: I,
    batch_sender: Sender<Batch>,
    batch_size: usize,
) -> Result<BatcherSummary>
where
    I: IntoIterator<Item = io::Result<Vec<u8>>>,
{
    let mut batch_id = 0u64;
    let mut current_batch = Vec::with_capacity(batch_size);
    let mut line_num = 0usize;
    let mut batch_start_line = 1usize;

    for line in lines {
        let line =
            line.with_context(|| format!("input unavailable: read failed after line {}", line_num))?;
        line_num += 1;
        current_batch.push(line);

        if current_batch.len() >= batch_size {
            send_batch(&batch_sender, &mut current_batch, batch_id, batch_start_line)?;
            batch_id += 1;
            batch_start_line = line_num + 1;
        }
    }

    if !current_batch.is_empty() {
        send_batch(&batch_sender, &mut current_batch, batch_id, batch_start_line)?;
        batch_id += 1;
    }

    Ok(BatcherSummary {
        lines_read: line_num,
        batches_sent: batch_id as usize,
    })
}

/// Send the current batch, blocking until a worker takes it
fn send_batch(
    batch_sender: &Sender<Batch>,
    current_batch: &mut Vec<Vec<u8>>,
    batch_id: u64,
    batch_start_line: usize,
) -> Result<()> {
    let capacity = current_batch.capacity();
    let batch = Batch {
        id: batch_id,
        lines: std::mem::replace(current_batch, Vec::with_capacity(capacity)),
        start_line_num: batch_start_line,
    };

    tracing::trace!(
        batch_id,
        start_line = batch_start_line,
        lines = batch.lines.len(),
        "dispatching batch"
    );

    batch_sender
        .send(batch)
        .map_err(|_| anyhow!("dispatch channel closed: no worker left to take batch {}", batch_id))
}
