//! Low-level scanning and splicing over the document buffer.
//!
//! Every token this tool recognizes is ASCII, so searching and brace
//! matching work on bytes; all splice points land on ASCII characters and
//! therefore on UTF-8 boundaries.

use std::ops::Range;

/// The document text plus the scan/splice primitives shared by the rewrite
/// passes.
///
/// Brace matching counts nesting depth and takes the `}` that returns the
/// count to zero as the terminator. Token search tolerates a start offset
/// past the end of the buffer (a splice may have shrunk the text), but the
/// brace and byte scanners do not bound-check: running past the end on
/// malformed (unbalanced) input is a fatal index panic, which is the
/// intended failure mode.
pub struct Buffer {
    text: String,
}

impl Buffer {
    pub fn new(text: String) -> Self {
        Buffer { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_inner(self) -> String {
        self.text
    }

    /// Offset of the next occurrence of `token` at or after `from`, if any.
    ///
    /// `from` may lie past the end of the buffer: a splice can shrink the
    /// text below an already-advanced resume offset, and that just means
    /// there is nothing left to find.
    pub fn find_from(&self, token: &str, from: usize) -> Option<usize> {
        let from = from.min(self.text.len());
        self.text[from..].find(token).map(|off| from + off)
    }

    /// Like [`find_from`](Self::find_from), but for structure that must be
    /// present; a miss means the input is malformed and aborts the run.
    pub fn must_find(&self, token: &str, from: usize) -> usize {
        match self.find_from(token, from) {
            Some(pos) => pos,
            None => panic!("no `{}` found after offset {}", token, from),
        }
    }

    /// Byte at `pos`. Panics past the end of the buffer.
    pub fn byte(&self, pos: usize) -> u8 {
        self.text.as_bytes()[pos]
    }

    pub fn starts_with_at(&self, pos: usize, prefix: &str) -> bool {
        self.text.as_bytes()[pos..].starts_with(prefix.as_bytes())
    }

    pub fn slice(&self, range: Range<usize>) -> &str {
        &self.text[range]
    }

    /// Offset of the first non-whitespace byte at or after `from`; the
    /// buffer length if only whitespace remains.
    pub fn skip_whitespace(&self, from: usize) -> usize {
        let bytes = self.text.as_bytes();
        let mut pos = from;
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        pos
    }

    /// Walks forward from `from` counting brace nesting and returns the
    /// offset of the `}` that brings the count back to zero.
    ///
    /// The count starts at zero, so `from` may point before the opening `{`
    /// (e.g. at the command token itself) and the first `{` encountered
    /// opens the group. A stray `}` before any `{` drives the count
    /// negative and the scan runs to the end of the buffer and panics.
    pub fn matching_close(&self, from: usize) -> usize {
        let bytes = self.text.as_bytes();
        let mut depth = 0i32;
        let mut pos = from;
        loop {
            match bytes[pos] {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return pos;
                    }
                }
                _ => {}
            }
            pos += 1;
        }
    }

    pub fn insert(&mut self, at: usize, s: &str) {
        self.text.insert_str(at, s);
    }

    pub fn remove(&mut self, range: Range<usize>) {
        self.text.replace_range(range, "");
    }

    pub fn replace(&mut self, range: Range<usize>, s: &str) {
        self.text.replace_range(range, s);
    }
}

impl From<String> for Buffer {
    fn from(text: String) -> Self {
        Buffer::new(text)
    }
}
