//! Rendering of the final level counts

use anyhow::Result;
use std::io::Write;

use crate::parallel::LevelCounts;

pub const REPORT_HEADER: &str = "Log Level Counts:";

/// Write the header and one `<level>: <count>` line per level.
///
/// Levels are written as the exact bytes found in the input. They come out
/// in the map's own iteration order, which is unspecified.
pub fn write_counts<W: Write>(output: &mut W, counts: &LevelCounts) -> Result<()> {
    writeln!(output, "{}", REPORT_HEADER)?;
    for (level, count) in counts {
        output.write_all(level)?;
        writeln!(output, ": {}", count)?;
    }
    output.flush()?;
    Ok(())
}
