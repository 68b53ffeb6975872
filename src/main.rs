use logtally::config::{format_error_message, TallyConfig};
use logtally::formatters::write_counts;
use logtally::platform::{init_logging, ExitCode, SafeStdout};

fn main() {
    init_logging();

    let config = TallyConfig::default();

    // Nothing reaches stdout unless the whole run succeeded
    let report = match logtally::run(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", format_error_message(&format!("{:#}", e)));
            ExitCode::GeneralError.exit();
        }
    };

    let mut stdout = SafeStdout::new();
    if let Err(e) = write_counts(&mut stdout, &report.counts) {
        eprintln!("{}", format_error_message(&format!("{:#}", e)));
        ExitCode::GeneralError.exit();
    }
}
