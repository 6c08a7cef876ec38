//! Scanner state: the cursor the recognizers move over a source buffer.

use crate::source::SourceBuffer;
use crate::token::{Position, Token, TokenKind};

/// Bytes that end an identifier, keyword, or number run.
pub const DELIMITERS: &[u8] = b" \t.,:;()[]{}<>^'\"|/!?&%*-+=\r\n";

/// Returns true if `b` ends a delimiter-bounded run.
pub fn is_delimiter(b: u8) -> bool {
    DELIMITERS.contains(&b)
}

/// Saved scanner state for backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerState {
    offset: usize,
    prev_offset: usize,
    line_offset: usize,
    line: usize,
    column: usize,
}

/// Mutable cursor over one source buffer.
///
/// `prev_offset` marks the start of the token being recognized and
/// `offset` the next unread byte; `prev_offset <= offset <= source.len()`
/// always holds.
#[derive(Debug)]
pub struct Scanner<'src> {
    source: &'src SourceBuffer,
    offset: usize,
    prev_offset: usize,
    line_offset: usize,
    line: usize,
    column: usize,
    error: bool,
}

impl<'src> Scanner<'src> {
    /// Create a scanner at the start of `source`.
    pub fn new(source: &'src SourceBuffer) -> Self {
        Self {
            source,
            offset: 0,
            prev_offset: 0,
            line_offset: 0,
            line: 1,
            column: 1,
            error: false,
        }
    }

    pub fn source(&self) -> &'src SourceBuffer {
        self.source
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn prev_offset(&self) -> usize {
        self.prev_offset
    }

    /// Position of the token being recognized.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, self.line_offset)
    }

    /// Save the current scanner state for backtracking.
    pub fn save(&self) -> ScannerState {
        ScannerState {
            offset: self.offset,
            prev_offset: self.prev_offset,
            line_offset: self.line_offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Restore a previously saved scanner state.
    pub fn restore(&mut self, state: ScannerState) {
        self.offset = state.offset;
        self.prev_offset = state.prev_offset;
        self.line_offset = state.line_offset;
        self.line = state.line;
        self.column = state.column;
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn set_error(&mut self) {
        self.error = true;
    }

    /// Returns true if at least `n` more bytes can be read.
    pub fn arity(&self, n: usize) -> bool {
        self.offset + n <= self.source.len()
    }

    pub fn at_end(&self) -> bool {
        !self.arity(1)
    }

    /// Everything from the cursor to the end of the buffer.
    pub fn rest(&self) -> &'src [u8] {
        self.source.view_from(self.offset)
    }

    /// The next unread byte.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// The byte `n` positions past the cursor.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.rest().get(n).copied()
    }

    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// The bytes consumed since the last commit.
    pub fn pending(&self) -> &'src [u8] {
        &self.source.as_bytes()[self.prev_offset..self.offset]
    }

    /// Consume `n` bytes, clamped to the end of the buffer.
    pub fn advance(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.source.len());
    }

    /// Length of the run of bytes from the cursor that satisfy `pred`.
    pub fn count_while(&self, pred: impl Fn(u8) -> bool) -> usize {
        self.rest().iter().take_while(|&&b| pred(b)).count()
    }

    /// Length of the run from the cursor up to the next delimiter.
    pub fn run_len(&self) -> usize {
        self.count_while(|b| !is_delimiter(b))
    }

    /// Skip blanks and line terminators. Whitespace never starts a token,
    /// so `prev_offset` moves up to the cursor.
    pub fn skip_insignificant(&mut self) {
        loop {
            let blanks = self.count_while(|b| b == b' ' || b == b'\t');
            if blanks > 0 {
                self.offset += blanks;
                self.column += blanks;
                continue;
            }

            let newlines = self.count_while(|b| b == b'\r' || b == b'\n');
            if newlines > 0 {
                self.line += count_line_breaks(&self.rest()[..newlines]);
                self.offset += newlines;
                self.line_offset = self.offset;
                self.column = 1;
                continue;
            }

            break;
        }
        self.prev_offset = self.offset;
    }

    /// Turn the pending bytes into a token of `kind`.
    ///
    /// The token takes the column from before the advance, so it always
    /// points at the token's first byte. Line breaks inside the token
    /// (raw newlines in a string) move the line bookkeeping to the line the
    /// token ends on.
    pub fn commit(&mut self, kind: TokenKind) -> Token {
        let token = Token {
            kind,
            start: self.prev_offset,
            line_offset: self.line_offset,
            length: self.offset - self.prev_offset,
            line: self.line,
            column: self.column,
        };

        let text = self.pending();
        match text.iter().rposition(|&b| b == b'\r' || b == b'\n') {
            Some(last) => {
                self.line += count_line_breaks(text);
                self.line_offset = self.prev_offset + last + 1;
                self.column = 1 + self.offset - self.line_offset;
            }
            None => self.column += token.length,
        }

        self.prev_offset = self.offset;
        token
    }
}

/// Number of line terminators in `bytes`, counting `\r\n` once.
fn count_line_breaks(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut iter = bytes.iter().peekable();
    while let Some(&b) = iter.next() {
        match b {
            b'\n' => count += 1,
            b'\r' => {
                count += 1;
                iter.next_if_eq(&&b'\n');
            }
            _ => {}
        }
    }
    count
}
