//! The public pull-based lexer.
//!
//! A [`Lexer`] drives the raw scanner, skips trivia (whitespace and, by
//! default, `//` line comments), cooks every remaining span, and stamps
//! each token with the coordinates of its first byte. Once the sentinel is
//! reached, every further call returns the same `Eof` token.
//!
//! Coordinates are 0-based. Advancing over `\n` increments the line and
//! resets the column to zero; every other byte increments the column.

use c99_lexer_core::{RawScanner, RawTag, SourceBuffer};

use crate::cooker;
use crate::token::{Token, TokenKind};

/// Pull-based lexer over a [`SourceBuffer`].
///
/// Tokens borrow from the buffer, not from the lexer: collecting them
/// while continuing to scan is fine, but they must not outlive the buffer.
pub struct Lexer<'src> {
    scanner: RawScanner<'src>,
    source: &'src [u8],
    line: u32,
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Create a lexer with `//` line-comment skipping enabled (the
    /// preprocessor normally strips comments; this default suits lexing
    /// plain source directly).
    pub fn new(buffer: &'src SourceBuffer) -> Self {
        Self::with_line_comments(buffer, true)
    }

    /// Create a lexer, choosing whether `//` comments are skipped or scan
    /// as two `/` punctuators.
    pub fn with_line_comments(buffer: &'src SourceBuffer, line_comments: bool) -> Self {
        Self {
            scanner: RawScanner::with_line_comments(buffer.cursor(), line_comments),
            source: buffer.as_bytes(),
            line: 0,
            column: 0,
        }
    }

    /// Consume and return the next token.
    ///
    /// Returns an `Eof` token at end of input, repeatedly and at stable
    /// coordinates.
    pub fn next_token(&mut self) -> Token<'src> {
        loop {
            let start = self.scanner.pos() as usize;
            let raw = self.scanner.next_token();
            let end = self.scanner.pos() as usize;

            if raw.tag.is_trivia() {
                self.advance_coords(start, end);
                continue;
            }
            if raw.tag == RawTag::Eof {
                return Token {
                    kind: TokenKind::Eof,
                    lexeme: &self.source[end..end],
                    line: self.line,
                    column: self.column,
                };
            }

            let (line, column) = (self.line, self.column);
            let lexeme = &self.source[start..end];
            self.advance_coords(start, end);
            return Token {
                kind: cooker::cook(raw.tag, lexeme),
                lexeme,
                line,
                column,
            };
        }
    }

    /// Account for consumed bytes: `\n` starts a new line at column zero,
    /// anything else widens the current line by one column.
    fn advance_coords(&mut self, start: usize, end: usize) {
        for &b in &self.source[start..end] {
            if b == b'\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Tokenize an entire buffer, excluding the final `Eof`.
pub fn tokenize(buffer: &SourceBuffer) -> Vec<Token<'_>> {
    Lexer::new(buffer).collect()
}
