//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords, validate escapes, or parse numeric values — those are deferred
//! to the cooking layer. Its one job is to fix token boundaries:
//!
//! - identifiers: maximal run of identifier bytes;
//! - numbers: maximal munch over alnum, `.`, and exponent-adjacent signs;
//! - char/string literals: span to the closing quote, backslash-aware;
//! - punctuators: the C99 §6.4.6 maximal-munch DFA, nested at most three
//!   deep (`<<=`, `>>=`, `...`).
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused
//! method that advances the cursor and returns `RawToken { tag, len }`.
//! The sentinel byte (`0x00`) yields a zero-length `Eof` token.

use crate::classify::{is_ident_continue, is_ident_start};
use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    /// When `true`, `//` starts a line comment; when `false`, the two
    /// slashes scan as ordinary punctuators (comment stripping is the
    /// preprocessor's job in that configuration).
    line_comments: bool,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor, with line-comment scanning
    /// enabled.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self::with_line_comments(cursor, true)
    }

    /// Create a new scanner, choosing whether `//` comments are recognized.
    pub fn with_line_comments(cursor: Cursor<'a>, line_comments: bool) -> Self {
        Self {
            cursor,
            line_comments,
        }
    }

    /// Current byte offset of the scanner.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => RawToken {
                tag: RawTag::Eof,
                len: 0,
            },
            b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r' => self.whitespace(start),
            // 'L' may prefix a wide character or string constant; checked
            // before the generic identifier arm.
            b'L' => match self.cursor.peek() {
                b'\'' => self.char_literal(start),
                b'"' => self.string_literal(start),
                _ => self.identifier(start),
            },
            b if is_ident_start(b) => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'.' => {
                if self.cursor.peek().is_ascii_digit() {
                    self.number(start)
                } else {
                    self.dot(start)
                }
            }
            b'\'' => self.char_literal(start),
            b'"' => self.string_literal(start),
            b'/' => self.slash_or_comment(start),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b':' => self.single(start, RawTag::Colon),
            b';' => self.single(start, RawTag::Semicolon),
            b'?' => self.single(start, RawTag::Question),
            b'~' => self.single(start, RawTag::Tilde),
            b'!' => self.bang(start),
            b'#' => self.hash(start),
            b'%' => self.percent(start),
            b'&' => self.ampersand(start),
            b'*' => self.star(start),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'<' => self.less(start),
            b'=' => self.equal(start),
            b'>' => self.greater(start),
            b'^' => self.caret(start),
            b'|' => self.pipe(start),
            _ => self.invalid_byte(start),
        }
    }

    // ─── Trivia ────────────────────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        RawToken {
            tag: RawTag::Whitespace,
            len: self.cursor.pos() - start,
        }
    }

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        if self.line_comments && self.cursor.peek() == b'/' {
            self.cursor.advance_n(2);
            // SIMD-accelerated scan to end of line; the newline itself is
            // left for the whitespace scanner.
            self.cursor.eat_line();
            return RawToken {
                tag: RawTag::LineComment,
                len: self.cursor.pos() - start,
            };
        }
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            RawToken {
                tag: RawTag::SlashEqual,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::Slash,
                len: self.cursor.pos() - start,
            }
        }
    }

    // ─── Identifiers ───────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first byte (already validated)
        self.cursor.eat_while(is_ident_continue);
        RawToken {
            tag: RawTag::Ident,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Numeric constants ─────────────────────────────────────────

    /// Maximal munch over a numeric constant span.
    ///
    /// Consumes alnum bytes and dots, plus a `+`/`-` immediately following
    /// an exponent marker (`e`/`E` for decimal constants, `p`/`P` for hex).
    /// Everything else — radix validation, suffix grammar, the promotion
    /// ladder — happens in the cooking layer over this span.
    #[inline]
    fn number(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();

        // A hex prefix decides which letter introduces a binary exponent.
        let hex = first == b'0' && matches!(self.cursor.current(), b'x' | b'X');

        loop {
            let b = self.cursor.current();
            if !(b.is_ascii_alphanumeric() || b == b'.') {
                break;
            }
            let exponent_marker = if hex {
                matches!(b, b'p' | b'P')
            } else {
                matches!(b, b'e' | b'E')
            };
            self.cursor.advance();
            if exponent_marker && matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
        }

        RawToken {
            tag: RawTag::Number,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Character & string constants ──────────────────────────────

    /// Span a character constant: optional `L`, opening `'`, body with
    /// backslash escapes, up to the closing `'` or end of input.
    fn char_literal(&mut self, start: u32) -> RawToken {
        if self.cursor.current() == b'L' {
            self.cursor.advance();
        }
        self.cursor.advance(); // consume opening '\''
        loop {
            match self.cursor.skip_to_char_delim() {
                b'\'' => {
                    self.cursor.advance(); // consume closing '\''
                    break;
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    self.cursor.advance(); // skip escaped byte
                }
                _ => break, // end of input: unterminated, cooker reports
            }
        }
        RawToken {
            tag: RawTag::CharLit,
            len: self.cursor.pos() - start,
        }
    }

    /// Span a string literal: optional `L`, opening `"`, body with
    /// backslash escapes, up to the closing `"`. A raw newline or end of
    /// input ends the span without a terminator.
    fn string_literal(&mut self, start: u32) -> RawToken {
        if self.cursor.current() == b'L' {
            self.cursor.advance();
        }
        self.cursor.advance(); // consume opening '"'
        loop {
            // SIMD-accelerated skip past ordinary body bytes
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance(); // consume closing '"'
                    break;
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    self.cursor.advance(); // skip escaped byte
                }
                _ => break, // newline or end of input: unterminated
            }
        }
        RawToken {
            tag: RawTag::StringLit,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Punctuators ───────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// Two-byte maximal munch: if the byte after the introducer matches a
    /// branch, emit the longer tag, else the one-byte tag.
    fn either(&mut self, start: u32, branches: &[(u8, RawTag)], fallback: RawTag) -> RawToken {
        self.cursor.advance(); // consume introducer
        for &(next, tag) in branches {
            if self.cursor.current() == next {
                self.cursor.advance();
                return RawToken {
                    tag,
                    len: self.cursor.pos() - start,
                };
            }
        }
        RawToken {
            tag: fallback,
            len: self.cursor.pos() - start,
        }
    }

    fn bang(&mut self, start: u32) -> RawToken {
        self.either(start, &[(b'=', RawTag::BangEqual)], RawTag::Bang)
    }

    fn hash(&mut self, start: u32) -> RawToken {
        self.either(start, &[(b'#', RawTag::HashHash)], RawTag::Hash)
    }

    fn percent(&mut self, start: u32) -> RawToken {
        self.either(start, &[(b'=', RawTag::PercentEqual)], RawTag::Percent)
    }

    fn ampersand(&mut self, start: u32) -> RawToken {
        self.either(
            start,
            &[
                (b'&', RawTag::AmpersandAmpersand),
                (b'=', RawTag::AmpersandEqual),
            ],
            RawTag::Ampersand,
        )
    }

    fn star(&mut self, start: u32) -> RawToken {
        self.either(start, &[(b'=', RawTag::StarEqual)], RawTag::Star)
    }

    fn plus(&mut self, start: u32) -> RawToken {
        self.either(
            start,
            &[(b'+', RawTag::PlusPlus), (b'=', RawTag::PlusEqual)],
            RawTag::Plus,
        )
    }

    fn minus(&mut self, start: u32) -> RawToken {
        self.either(
            start,
            &[
                (b'-', RawTag::MinusMinus),
                (b'=', RawTag::MinusEqual),
                (b'>', RawTag::Arrow),
            ],
            RawTag::Minus,
        )
    }

    fn dot(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '.'
        if self.cursor.current() == b'.' && self.cursor.peek() == b'.' {
            self.cursor.advance_n(2);
            RawToken {
                tag: RawTag::Ellipsis,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::Dot,
                len: self.cursor.pos() - start,
            }
        }
    }

    fn less(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '<'
        match self.cursor.current() {
            b'<' => {
                self.cursor.advance();
                if self.cursor.current() == b'=' {
                    self.cursor.advance();
                    RawToken {
                        tag: RawTag::ShlEqual,
                        len: self.cursor.pos() - start,
                    }
                } else {
                    RawToken {
                        tag: RawTag::Shl,
                        len: self.cursor.pos() - start,
                    }
                }
            }
            b'=' => {
                self.cursor.advance();
                RawToken {
                    tag: RawTag::LessEqual,
                    len: self.cursor.pos() - start,
                }
            }
            _ => RawToken {
                tag: RawTag::Less,
                len: self.cursor.pos() - start,
            },
        }
    }

    fn equal(&mut self, start: u32) -> RawToken {
        self.either(start, &[(b'=', RawTag::EqualEqual)], RawTag::Equal)
    }

    fn greater(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '>'
        match self.cursor.current() {
            b'>' => {
                self.cursor.advance();
                if self.cursor.current() == b'=' {
                    self.cursor.advance();
                    RawToken {
                        tag: RawTag::ShrEqual,
                        len: self.cursor.pos() - start,
                    }
                } else {
                    RawToken {
                        tag: RawTag::Shr,
                        len: self.cursor.pos() - start,
                    }
                }
            }
            b'=' => {
                self.cursor.advance();
                RawToken {
                    tag: RawTag::GreaterEqual,
                    len: self.cursor.pos() - start,
                }
            }
            _ => RawToken {
                tag: RawTag::Greater,
                len: self.cursor.pos() - start,
            },
        }
    }

    fn caret(&mut self, start: u32) -> RawToken {
        self.either(start, &[(b'=', RawTag::CaretEqual)], RawTag::Caret)
    }

    fn pipe(&mut self, start: u32) -> RawToken {
        self.either(
            start,
            &[(b'|', RawTag::PipePipe), (b'=', RawTag::PipeEqual)],
            RawTag::Pipe,
        )
    }

    // ─── Error tokens ──────────────────────────────────────────────

    fn invalid_byte(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag: RawTag::InvalidByte,
            len: self.cursor.pos() - start,
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Convenience function: tokenize source bytes and collect all raw tokens.
///
/// Returns a `Vec<RawToken>` containing all tokens except the final `Eof`.
/// For streaming access, construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &[u8]) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
