//! Rendering a call expression back to canonical source text.

use crate::ast::{CallExpr, Expr};

/// Injected source-regeneration capability.
///
/// Diagnostic corrections re-render whole call expressions; the ordering
/// check only decides *which* calls to render and in what order. A host
/// toolchain with its own pretty-printer supplies that printer here.
pub trait RenderCall {
    /// Renders one call expression as canonical source text, without a
    /// trailing statement terminator.
    fn render(&self, call: &CallExpr) -> String;
}

/// Canonical renderer with single-quote preference.
///
/// Produces `callee(arg, arg)` with string literals single-quoted and
/// embedded single quotes escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleQuotePrinter;

impl RenderCall for SingleQuotePrinter {
    fn render(&self, call: &CallExpr) -> String {
        let mut out = String::with_capacity(call.callee.len() + 16);
        out.push_str(&call.callee);
        out.push('(');
        for (i, arg) in call.args.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.render_expr(arg, &mut out);
        }
        out.push(')');
        out
    }
}

impl SingleQuotePrinter {
    fn render_expr(&self, expr: &Expr, out: &mut String) {
        match expr {
            Expr::Call(call) => out.push_str(&self.render(call)),
            Expr::Str(s) => {
                out.push('\'');
                for c in s.chars() {
                    if c == '\'' {
                        out.push('\\');
                    }
                    out.push(c);
                }
                out.push('\'');
            }
            Expr::Ident(name) => out.push_str(name),
        }
    }
}
