use std::io::{self, Write};
use std::process;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    GeneralError = 1,
    SignalPipe = 141, // 128 + SIGPIPE (13)
}

impl ExitCode {
    pub fn exit(self) -> ! {
        process::exit(self as i32)
    }
}

/// Install the stderr `tracing` subscriber.
///
/// Defaults to `warn`; `RUST_LOG` overrides it when debugging the pipeline.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    // A subscriber may already be installed (tests); keep the first one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Safe wrapper for writing to stdout that handles broken pipes
pub struct SafeStdout {
    stdout: io::Stdout,
}

impl SafeStdout {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for SafeStdout {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for SafeStdout {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.stdout.write(buf) {
            // Broken pipe is normal in pipelines - exit quietly
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SignalPipe.exit(),
            other => other,
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.stdout.flush() {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SignalPipe.exit(),
            other => other,
        }
    }
}
