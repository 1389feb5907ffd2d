//! Declaration extraction.
//!
//! Locates `goog.addDependency(...)` calls embedded in otherwise-unparsed
//! source text and decodes them into [`DependencyRecord`]s. Malformed
//! declarations are reported through an [`ErrorSink`] and skipped; the scan
//! never aborts on a single bad declaration.

mod args;
mod record;
mod report;
mod scanner;
mod tests;

pub use record::DependencyRecord;
pub use report::{CollectedErrors, ErrorSink, ScanError, StderrReporter};
pub use scanner::DepsScanner;
