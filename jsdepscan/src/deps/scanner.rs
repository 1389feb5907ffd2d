use std::path::Path;

use crate::constants::ADD_DEPENDENCY;
use crate::utils::LineIndex;

use super::args::{is_ident_byte, parse_arguments, Cursor};
use super::record::DependencyRecord;
use super::report::{ErrorSink, ScanError};

/// Comment- and quote-aware scanner for dependency declarations.
///
/// Matches the narrow `goog.addDependency(...)` call pattern in raw source
/// text; nothing else is parsed. The scanner holds no per-file state, so one
/// instance may scan different files, including from different threads.
#[derive(Debug, Clone, Default)]
pub struct DepsScanner {
    shortcut_mode: bool,
}

impl DepsScanner {
    /// A scanner with shortcut mode disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets shortcut mode. When enabled, scanning stops permanently at the
    /// first top-level content that is not a declaration call, comment,
    /// whitespace, or statement terminator. Dependency files list their
    /// declarations first, so this skips the bulk of ordinary source files.
    #[must_use]
    pub fn with_shortcut_mode(mut self, enabled: bool) -> Self {
        self.shortcut_mode = enabled;
        self
    }

    /// Scans one file's text and returns its declarations in source order.
    ///
    /// Malformed declarations are reported to `sink` (exactly one error
    /// each) and skipped; the scan continues past them. Never fails: an
    /// unterminated comment or string simply ends the scan early. Scanning
    /// is pure, so identical text always yields identical records.
    pub fn scan(
        &self,
        source_path: &Path,
        text: &str,
        sink: &mut dyn ErrorSink,
    ) -> Vec<DependencyRecord> {
        let line_index = LineIndex::new(text);
        let mut cur = Cursor::new(text);
        let mut records = Vec::new();

        while let Some(b) = cur.peek() {
            if b.is_ascii_whitespace() || b == b';' {
                cur.bump();
            } else if cur.starts_with("//") {
                skip_line_comment(&mut cur);
            } else if cur.starts_with("/*") {
                skip_block_comment(&mut cur);
            } else if at_declaration_head(&cur) {
                let decl_start = cur.pos();
                cur.advance(ADD_DEPENDENCY.len() + 1);
                match parse_arguments(&mut cur) {
                    Ok(decl) => records.push(decl.into_record(source_path)),
                    Err(err) => {
                        sink.report_error(ScanError {
                            file: source_path.to_path_buf(),
                            line: line_index.line_index(decl_start),
                            message: format!("malformed {ADD_DEPENDENCY} declaration: {err}"),
                        });
                        skip_to_close_paren(&mut cur);
                    }
                }
            } else if self.shortcut_mode {
                break;
            } else if b == b'\'' || b == b'"' {
                skip_string(&mut cur, b);
            } else {
                cur.bump_char();
            }
        }

        records
    }
}

/// The exact qualified name, not preceded by an identifier character and
/// immediately followed by an open parenthesis.
fn at_declaration_head(cur: &Cursor) -> bool {
    if !cur.starts_with(ADD_DEPENDENCY) {
        return false;
    }
    if cur.prev_byte().is_some_and(is_ident_byte) {
        return false;
    }
    cur.rest().as_bytes().get(ADD_DEPENDENCY.len()) == Some(&b'(')
}

fn skip_line_comment(cur: &mut Cursor) {
    while let Some(b) = cur.peek() {
        if b == b'\n' {
            cur.bump();
            return;
        }
        cur.bump_char();
    }
}

fn skip_block_comment(cur: &mut Cursor) {
    cur.advance(2);
    while cur.peek().is_some() {
        if cur.starts_with("*/") {
            cur.advance(2);
            return;
        }
        cur.bump_char();
    }
    // Unterminated comment at end of text: nothing further to scan.
}

/// Skips a string literal in code mode. Stops after the closing quote, or at
/// a raw newline / end of text for an unterminated literal.
fn skip_string(cur: &mut Cursor, quote: u8) {
    cur.bump();
    while let Some(b) = cur.peek() {
        match b {
            b'\\' => {
                cur.bump();
                cur.bump_char();
            }
            b'\n' => return,
            _ if b == quote => {
                cur.bump();
                return;
            }
            _ => cur.bump_char(),
        }
    }
}

/// Error recovery: skips the remainder of a rejected declaration, through
/// its closing parenthesis, so the scan resumes on following content.
fn skip_to_close_paren(cur: &mut Cursor) {
    let mut depth = 1usize;
    while let Some(b) = cur.peek() {
        match b {
            b'\'' | b'"' => skip_string(cur, b),
            b'(' => {
                depth += 1;
                cur.bump();
            }
            b')' => {
                cur.bump();
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
            _ => cur.bump_char(),
        }
    }
}
