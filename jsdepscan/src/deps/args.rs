//! Restricted argument-list grammar for declaration calls.
//!
//! Not an expression parser: the only accepted shapes are string literals,
//! arrays of string literals, boolean literals, and flat objects mapping
//! string literals to string literals.

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use std::fmt;
use std::path::Path;

use super::record::DependencyRecord;

/// Why an argument list was rejected. One error per declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ArgError {
    /// Missing or non-string first argument, or an empty namespace.
    BadNamespace,
    /// Second or third argument is not an array of string literals.
    BadStringArray,
    /// Fourth argument is neither a boolean nor an object literal.
    BadOptionalArg,
    /// Object entry whose key or value is not a string literal.
    BadLoadFlagEntry,
    /// Missing list arguments or trailing arguments past the fourth.
    WrongArgCount,
    /// String literal not closed before end of line or end of text.
    UnterminatedString,
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::BadNamespace => "expected a non-empty string literal as the first argument",
            Self::BadStringArray => "expected an array of string literals",
            Self::BadOptionalArg => "expected a boolean or an object literal as the fourth argument",
            Self::BadLoadFlagEntry => "load flags must map string literals to string literals",
            Self::WrongArgCount => "wrong number of arguments",
            Self::UnterminatedString => "unterminated string literal",
        };
        f.write_str(msg)
    }
}

/// Byte cursor over the source text. Advances stay on char boundaries: all
/// single-byte bumps happen at ASCII delimiters, everything else goes
/// through [`Cursor::bump_char`].
pub(super) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(super) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub(super) fn pos(&self) -> usize {
        self.pos
    }

    pub(super) fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    pub(super) fn prev_byte(&self) -> Option<u8> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.text.as_bytes().get(i).copied())
    }

    pub(super) fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub(super) fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Advances one byte; callers only do this at ASCII positions.
    pub(super) fn bump(&mut self) {
        self.pos += 1;
    }

    /// Advances one full character.
    pub(super) fn bump_char(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.pos += c.len_utf8();
        }
    }

    pub(super) fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Consumes `b` if it is next.
    pub(super) fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn skip_ws(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }
}

/// Decoded argument list of one well-formed declaration.
#[derive(Debug)]
pub(super) struct ParsedDeclaration {
    pub(super) namespace: CompactString,
    pub(super) requires: Vec<CompactString>,
    pub(super) provides: Vec<CompactString>,
    pub(super) is_module: bool,
    pub(super) load_flags: FxHashMap<String, String>,
}

impl ParsedDeclaration {
    pub(super) fn into_record(self, source_path: &Path) -> DependencyRecord {
        DependencyRecord {
            namespace: self.namespace,
            source_path: source_path.to_path_buf(),
            requires: self.requires,
            provides: self.provides,
            is_module: self.is_module,
            load_flags: self.load_flags,
        }
    }
}

/// Parses the argument list of a declaration call. The cursor starts just
/// past the opening parenthesis and, on success, ends just past the closing
/// one. On failure the cursor is left at the rejected input; recovery is the
/// caller's concern.
///
/// Accepted argument lists: `(string, array, array)` and
/// `(string, array, array, bool-or-object)`.
pub(super) fn parse_arguments(cur: &mut Cursor) -> Result<ParsedDeclaration, ArgError> {
    cur.skip_ws();
    if !at_quote(cur) {
        return Err(ArgError::BadNamespace);
    }
    let namespace = parse_string(cur)?;
    if namespace.is_empty() {
        return Err(ArgError::BadNamespace);
    }

    cur.skip_ws();
    if !cur.eat(b',') {
        return Err(ArgError::WrongArgCount);
    }
    cur.skip_ws();
    let requires = parse_string_array(cur)?;

    cur.skip_ws();
    if !cur.eat(b',') {
        return Err(ArgError::WrongArgCount);
    }
    cur.skip_ws();
    let provides = parse_string_array(cur)?;

    cur.skip_ws();
    let mut is_module = false;
    let mut load_flags = FxHashMap::default();
    if cur.eat(b',') {
        cur.skip_ws();
        match cur.peek() {
            Some(b't' | b'f') => is_module = parse_bool(cur)?,
            Some(b'{') => load_flags = parse_load_flags(cur)?,
            _ => return Err(ArgError::BadOptionalArg),
        }
        cur.skip_ws();
    }

    if !cur.eat(b')') {
        return Err(ArgError::WrongArgCount);
    }

    Ok(ParsedDeclaration {
        namespace,
        requires,
        provides,
        is_module,
        load_flags,
    })
}

fn at_quote(cur: &Cursor) -> bool {
    matches!(cur.peek(), Some(b'\'' | b'"'))
}

/// Parses a string literal delimited by either quote style. The only escape
/// interpretation is a backslash making the next character literal. A raw
/// newline before the closing quote is rejected.
fn parse_string(cur: &mut Cursor) -> Result<CompactString, ArgError> {
    let Some(quote) = cur.peek() else {
        return Err(ArgError::UnterminatedString);
    };
    cur.bump();
    let mut value = CompactString::default();
    loop {
        match cur.peek() {
            None | Some(b'\n') => return Err(ArgError::UnterminatedString),
            Some(b'\\') => {
                cur.bump();
                match cur.rest().chars().next() {
                    Some(c) => {
                        value.push(c);
                        cur.bump_char();
                    }
                    None => return Err(ArgError::UnterminatedString),
                }
            }
            Some(b) if b == quote => {
                cur.bump();
                return Ok(value);
            }
            Some(_) => {
                if let Some(c) = cur.rest().chars().next() {
                    value.push(c);
                    cur.bump_char();
                }
            }
        }
    }
}

/// Parses `[ 'a', "b", ... ]`, possibly empty, with interior whitespace.
fn parse_string_array(cur: &mut Cursor) -> Result<Vec<CompactString>, ArgError> {
    if !cur.eat(b'[') {
        return Err(ArgError::BadStringArray);
    }
    let mut items = Vec::new();
    cur.skip_ws();
    if cur.eat(b']') {
        return Ok(items);
    }
    loop {
        if !at_quote(cur) {
            return Err(ArgError::BadStringArray);
        }
        items.push(parse_string(cur)?);
        cur.skip_ws();
        if cur.eat(b',') {
            cur.skip_ws();
        } else {
            break;
        }
    }
    if cur.eat(b']') {
        Ok(items)
    } else {
        Err(ArgError::BadStringArray)
    }
}

/// Parses a `true` / `false` keyword with a word boundary after it.
fn parse_bool(cur: &mut Cursor) -> Result<bool, ArgError> {
    for (keyword, value) in [("true", true), ("false", false)] {
        if cur.starts_with(keyword) {
            let next = cur.rest().as_bytes().get(keyword.len()).copied();
            if next.is_none_or(|b| !is_ident_byte(b)) {
                cur.advance(keyword.len());
                return Ok(value);
            }
        }
    }
    Err(ArgError::BadOptionalArg)
}

/// Parses `{ 'key': 'value', ... }`. An empty object is valid and yields an
/// empty mapping.
fn parse_load_flags(cur: &mut Cursor) -> Result<FxHashMap<String, String>, ArgError> {
    if !cur.eat(b'{') {
        return Err(ArgError::BadOptionalArg);
    }
    let mut flags = FxHashMap::default();
    cur.skip_ws();
    if cur.eat(b'}') {
        return Ok(flags);
    }
    loop {
        if !at_quote(cur) {
            return Err(ArgError::BadLoadFlagEntry);
        }
        let key = parse_string(cur)?;
        cur.skip_ws();
        if !cur.eat(b':') {
            return Err(ArgError::BadLoadFlagEntry);
        }
        cur.skip_ws();
        if !at_quote(cur) {
            return Err(ArgError::BadLoadFlagEntry);
        }
        let value = parse_string(cur)?;
        flags.insert(key.into_string(), value.into_string());
        cur.skip_ws();
        if cur.eat(b',') {
            cur.skip_ws();
        } else {
            break;
        }
    }
    if cur.eat(b'}') {
        Ok(flags)
    } else {
        Err(ArgError::BadLoadFlagEntry)
    }
}

pub(super) fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b == b'.'
}
