//! Ordering lint for provide/require declarations.
//!
//! Advisory warnings only: the tree is never rewritten, and a violation
//! never blocks downstream processing.

use serde::Serialize;

mod sorted;

pub use sorted::{check_script, SortedDeclarationsCheck};

/// Stable kind tag of an ordering diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// `goog.require()` statements are not alphabetically sorted.
    RequiresUnsorted,
    /// `goog.provide()` statements are not alphabetically sorted.
    ProvidesUnsorted,
    /// A provide-family statement appears after a require statement.
    ProvidesAfterRequires,
}

impl DiagnosticKind {
    /// The serialized tag as a static string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RequiresUnsorted => "requires-unsorted",
            Self::ProvidesUnsorted => "provides-unsorted",
            Self::ProvidesAfterRequires => "provides-after-requires",
        }
    }
}

/// One ordering warning, anchored at the first offending call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Kind tag.
    pub kind: DiagnosticKind,
    /// 1-based line of the anchor call.
    pub line: usize,
    /// Human-readable warning text.
    pub message: String,
    /// For the unsorted kinds: the statements in corrected order, one
    /// `<call>;` per line, joined by newlines. `None` otherwise.
    pub correction: Option<String>,
}

/// Sink for ordering diagnostics.
pub trait DiagnosticSink {
    /// Records one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
