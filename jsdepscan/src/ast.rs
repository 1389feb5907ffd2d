//! Minimal parsed-tree shapes handed over by the host parser.
//!
//! The real JavaScript parser lives outside this crate; the ordering check
//! only needs top-level statement structure, dotted callee names, and string
//! literal arguments, so that is all these types carry.

use compact_str::CompactString;
use serde::Serialize;

/// An expression, restricted to the shapes the ordering check inspects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expr {
    /// A call expression with a dotted callee name.
    Call(CallExpr),
    /// A string literal.
    Str(CompactString),
    /// A bare identifier reference.
    Ident(String),
}

/// A call expression, e.g. `goog.require('a.b')`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallExpr {
    /// Fully qualified callee name, dot-joined (`goog.require`).
    pub callee: String,
    /// Call arguments in source order.
    pub args: Vec<Expr>,
    /// 1-based source line of the call.
    pub line: usize,
}

impl CallExpr {
    /// Whether the callee matches the given qualified name exactly.
    #[must_use]
    pub fn callee_is(&self, name: &str) -> bool {
        self.callee == name
    }

    /// The final argument, if it is a string literal.
    ///
    /// Declaration calls carry their namespace as the last string argument;
    /// calls without one are ignored by the ordering check.
    #[must_use]
    pub fn last_string_arg(&self) -> Option<&str> {
        match self.args.last() {
            Some(Expr::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// A top-level statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Stmt {
    /// A bare expression statement (`goog.provide('a');`).
    Expr(Expr),
    /// A single-binding variable declaration (`var x = goog.require('a');`).
    Var {
        /// Bound name.
        name: String,
        /// Initializer expression, if any.
        init: Option<Expr>,
    },
    /// Any other statement; its contents are opaque to the check.
    Other,
}

/// One script unit: the sequence of its top-level statements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Script {
    /// Top-level statements in source order.
    pub body: Vec<Stmt>,
}

impl Script {
    /// Builds a script from top-level statements.
    #[must_use]
    pub fn new(body: Vec<Stmt>) -> Self {
        Self { body }
    }
}
