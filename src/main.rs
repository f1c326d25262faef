//! Prints the same kinds of log lines in all three formats.
//!
//! Run with: cargo run

use log_line_formats::prelude::*;
use log_line_formats::warning;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

fn run(logger: &Logger) -> Result<()> {
    logger.with_format(OutputFormat::Klog).warning("klog test")?;
    logger.plain("plaintext messages")?;

    logger.info("hello world")?;
    // distinguishable timestamps
    thread::sleep(Duration::from_secs(1));
    warning!(logger, "this message has some metadata"; foo = "bar")?;

    logger
        .with_format(OutputFormat::Logrus)
        .error("this is a logrus-like message")?;

    Ok(())
}

fn main() -> ExitCode {
    let logger = Logger::new();

    match run(&logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[LOGGER ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}
