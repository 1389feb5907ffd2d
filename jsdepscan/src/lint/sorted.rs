use smallvec::SmallVec;

use crate::ast::{CallExpr, Expr, Script, Stmt};
use crate::constants::{MODULE, PROVIDE, REQUIRE};
use crate::render::RenderCall;

use super::{Diagnostic, DiagnosticKind, DiagnosticSink};

/// Checks that `goog.require()` and `goog.provide()` calls are sorted
/// alphabetically, and that provides come before requires.
///
/// Explicit per-script state machine: the traversal contract is
/// [`begin_script`](Self::begin_script), any number of
/// [`visit_stmt`](Self::visit_stmt) calls with that script's top-level
/// statements, then [`end_script`](Self::end_script). State is cleared
/// unconditionally at the end of each script, so one instance can check
/// sequential scripts; concurrent traversals need one instance each.
pub struct SortedDeclarationsCheck<'a, 'r> {
    /// Top-level require calls in source order.
    requires: SmallVec<[&'a CallExpr; 8]>,
    /// Top-level provide calls in source order.
    provides: SmallVec<[&'a CallExpr; 8]>,
    /// A `var x = goog.require(...)` binding was seen; reordering is then
    /// ambiguous, so the require-sortedness check is skipped.
    has_shorthand_require: bool,
    renderer: &'r dyn RenderCall,
}

impl<'a, 'r> SortedDeclarationsCheck<'a, 'r> {
    /// A check rendering corrections through the given printer.
    #[must_use]
    pub fn new(renderer: &'r dyn RenderCall) -> Self {
        Self {
            requires: SmallVec::new(),
            provides: SmallVec::new(),
            has_shorthand_require: false,
            renderer,
        }
    }

    /// Marks a script boundary entry.
    pub fn begin_script(&mut self) {
        self.clear();
    }

    /// Visits one top-level statement of the current script.
    pub fn visit_stmt(&mut self, stmt: &'a Stmt, sink: &mut dyn DiagnosticSink) {
        match stmt {
            Stmt::Expr(Expr::Call(call)) => self.visit_top_level_call(call, sink),
            Stmt::Var {
                init: Some(Expr::Call(call)),
                ..
            } => {
                if call.callee_is(REQUIRE) {
                    self.has_shorthand_require = true;
                }
            }
            _ => {}
        }
    }

    /// Marks the end of the current script: runs the sortedness checks and
    /// clears all per-script state.
    pub fn end_script(&mut self, sink: &mut dyn DiagnosticSink) {
        if !self.has_shorthand_require {
            self.report_if_out_of_order(&self.requires, DiagnosticKind::RequiresUnsorted, sink);
        }
        self.report_if_out_of_order(&self.provides, DiagnosticKind::ProvidesUnsorted, sink);
        self.clear();
    }

    fn clear(&mut self) {
        self.requires.clear();
        self.provides.clear();
        self.has_shorthand_require = false;
    }

    fn visit_top_level_call(&mut self, call: &'a CallExpr, sink: &mut dyn DiagnosticSink) {
        if !call.callee_is(REQUIRE) && !call.callee_is(PROVIDE) && !call.callee_is(MODULE) {
            return;
        }
        if call.last_string_arg().is_none() {
            return;
        }
        if call.callee_is(REQUIRE) {
            self.requires.push(call);
        } else {
            // Provide-family call (goog.provide / goog.module). Reported per
            // occurrence, not deduplicated.
            if !self.requires.is_empty() {
                sink.report(Diagnostic {
                    kind: DiagnosticKind::ProvidesAfterRequires,
                    line: call.line,
                    message: format!(
                        "{PROVIDE}() statements should be before {REQUIRE}() statements."
                    ),
                    correction: None,
                });
            }
            if call.callee_is(PROVIDE) {
                self.provides.push(call);
            }
        }
    }

    fn report_if_out_of_order(
        &self,
        calls: &[&'a CallExpr],
        kind: DiagnosticKind,
        sink: &mut dyn DiagnosticSink,
    ) {
        // Plain code-point comparison on the declared namespace: no locale,
        // no case folding.
        if calls.windows(2).all(|w| namespace(w[0]) <= namespace(w[1])) {
            return;
        }
        let Some(first) = calls.first() else {
            return;
        };

        let mut ordered: Vec<&CallExpr> = calls.to_vec();
        ordered.sort_by(|a, b| namespace(a).cmp(namespace(b)));
        let correction = ordered
            .iter()
            .map(|call| format!("{};", self.renderer.render(call)))
            .collect::<Vec<_>>()
            .join("\n");

        let what = match kind {
            DiagnosticKind::RequiresUnsorted => REQUIRE,
            _ => PROVIDE,
        };
        sink.report(Diagnostic {
            kind,
            line: first.line,
            message: format!(
                "{what}() statements are not sorted. The correct order is:\n\n{correction}\n\n"
            ),
            correction: Some(correction),
        });
    }
}

/// The declared namespace of a collected call. Calls are only collected when
/// their final argument is a string literal.
fn namespace(call: &CallExpr) -> &str {
    call.last_string_arg().unwrap_or("")
}

/// Runs the check over one script, enforcing the begin/visit/end pairing.
pub fn check_script(script: &Script, renderer: &dyn RenderCall, sink: &mut dyn DiagnosticSink) {
    let mut check = SortedDeclarationsCheck::new(renderer);
    check.begin_script();
    for stmt in &script.body {
        check.visit_stmt(stmt, sink);
    }
    check.end_script(sink);
}
