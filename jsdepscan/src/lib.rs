//! Dependency-declaration tooling for Closure-style JavaScript.
//!
//! Two independent components:
//!
//! - [`deps::DepsScanner`] locates `goog.addDependency(...)` declarations in
//!   raw source text (comment- and quote-aware, no full JS parse) and decodes
//!   them into [`deps::DependencyRecord`]s, reporting malformed declarations
//!   through an [`deps::ErrorSink`] without aborting the scan.
//! - [`lint::SortedDeclarationsCheck`] walks a parsed script's top-level
//!   statements and warns when `goog.provide()` / `goog.require()` calls are
//!   not alphabetically sorted, or when provides appear after requires.
//!
//! The host JavaScript parser is not part of this crate; [`ast`] defines the
//! minimal tree shapes the checker consumes, and [`render::RenderCall`] is the
//! injected capability that turns a call back into canonical source text.

/// Minimal parsed-tree boundary types consumed by the ordering check.
pub mod ast;
/// Recognized qualified call names.
pub mod constants;
/// Declaration scanning: records, error sinks, the scanner itself.
pub mod deps;
/// Ordering lint: diagnostics and the sorted-declarations check.
pub mod lint;
/// Source regeneration for diagnostic corrections.
pub mod render;
/// Shared helpers.
pub mod utils;

pub use deps::{CollectedErrors, DependencyRecord, DepsScanner, ErrorSink, ScanError};
pub use lint::{check_script, Diagnostic, DiagnosticKind, DiagnosticSink, SortedDeclarationsCheck};
pub use render::{RenderCall, SingleQuotePrinter};
