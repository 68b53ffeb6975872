use std::time::{Duration, Instant};

/// Statistics collected during a tally run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    pub lines_read: usize,
    pub batches_dispatched: usize,
    pub batches_processed: usize,
    /// Lines without level: blank once surrounding whitespace is trimmed
    pub lines_without_level: usize,
    pub partials_merged: usize,
    pub workers: usize,
    pub processing_time: Duration,
    pub start_time: Option<Instant>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish_processing(&mut self) {
        if let Some(start) = self.start_time {
            self.processing_time = start.elapsed();
        }
    }

    /// Fold one worker's totals into the run totals
    pub fn merge_worker(&mut self, batches: usize, lines_without_level: usize) {
        self.workers += 1;
        self.batches_processed += batches;
        self.lines_without_level += lines_without_level;
    }

    pub fn format_stats(&self) -> String {
        let mut output = format!(
            "Lines processed: {} total, {} without level; Batches: {} dispatched, {} processed by {} workers",
            self.lines_read,
            self.lines_without_level,
            self.batches_dispatched,
            self.batches_processed,
            self.workers
        );

        let processing_time_ms = self.processing_time.as_millis();
        output.push_str(&format!(" in {}ms", processing_time_ms));

        if processing_time_ms > 0 && self.lines_read > 0 {
            let lines_per_sec = (self.lines_read as f64 * 1000.0) / processing_time_ms as f64;
            output.push_str(&format!(" ({:.0} lines/s)", lines_per_sec));
        }

        output
    }
}
