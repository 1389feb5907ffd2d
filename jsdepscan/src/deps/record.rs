use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::path::PathBuf;

/// One well-formed dependency declaration.
///
/// A record exists only for a syntactically well-formed declaration;
/// malformed declarations produce an error, never a partial record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyRecord {
    /// Declared module identifier; never empty.
    pub namespace: CompactString,
    /// Identity of the originating file, supplied by the caller.
    pub source_path: PathBuf,
    /// Namespaces this file depends on, in declaration order. Duplicates
    /// are kept as written.
    pub requires: Vec<CompactString>,
    /// Namespaces this file provides, in declaration order.
    pub provides: Vec<CompactString>,
    /// True when declared as a module-style unit (fourth-argument boolean
    /// form). Always false for the object form.
    pub is_module: bool,
    /// Optional load metadata (fourth-argument object form), e.g. language
    /// level or module kind. Empty for the boolean form.
    pub load_flags: FxHashMap<String, String>,
}

impl DependencyRecord {
    /// A record with the given namespace and source path and no dependency
    /// or flag payload.
    #[must_use]
    pub fn new(namespace: impl Into<CompactString>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            namespace: namespace.into(),
            source_path: source_path.into(),
            requires: Vec::new(),
            provides: Vec::new(),
            is_module: false,
            load_flags: FxHashMap::default(),
        }
    }
}
