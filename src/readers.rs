use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Lazy line iterator over a buffered reader.
///
/// Each item is one newline-delimited record with its `\n` / `\r\n`
/// terminator removed. Lines stay raw bytes; no UTF-8 decoding happens, so
/// the only errors surfaced are genuine I/O failures. Not restartable.
pub struct LineSource<R> {
    reader: R,
    done: bool,
}

impl LineSource<BufReader<File>> {
    /// Open a file for line-by-line reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("input unavailable: cannot open {}", path.display()))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                strip_line_terminator(&mut line);
                Some(Ok(line))
            }
            Err(e) => {
                // A failed read ends the sequence
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

fn strip_line_terminator(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}
