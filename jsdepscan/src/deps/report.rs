use colored::Colorize;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A recoverable error for one malformed declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanError {
    /// File the declaration was found in.
    pub file: PathBuf,
    /// 1-based line of the declaration head.
    pub line: usize,
    /// Description of what was malformed.
    pub message: String,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file.display(), self.line, self.message)
    }
}

/// Sink for recoverable scan errors.
///
/// Injected into [`DepsScanner::scan`](super::DepsScanner::scan); the caller
/// queries it for totals after the scan. Each malformed declaration is
/// reported exactly once.
pub trait ErrorSink {
    /// Records one error.
    fn report_error(&mut self, error: ScanError);
    /// Number of errors reported so far.
    fn error_count(&self) -> usize;
}

/// Sink that keeps every reported error for programmatic inspection.
#[derive(Debug, Default)]
pub struct CollectedErrors {
    /// Errors in report order.
    pub errors: Vec<ScanError>,
}

impl ErrorSink for CollectedErrors {
    fn report_error(&mut self, error: ScanError) {
        self.errors.push(error);
    }

    fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Sink that prints each error to stderr and keeps only the count.
#[derive(Debug, Default)]
pub struct StderrReporter {
    errors: usize,
}

impl ErrorSink for StderrReporter {
    fn report_error(&mut self, error: ScanError) {
        eprintln!("{} - {error}", "ERROR".red().bold());
        self.errors += 1;
    }

    fn error_count(&self) -> usize {
        self.errors
    }
}
