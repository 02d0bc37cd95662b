//! Token cooking: turning raw spans into classified, valued tokens.
//!
//! The cooker sits between the raw scanner (`c99_lexer_core`) and the
//! public [`Lexer`](crate::Lexer):
//!
//! ```text
//! source → RawScanner → (RawTag, lexeme) → cook() → TokenKind
//! ```
//!
//! Each `RawTag` category has a dedicated cooking path:
//! - **Punctuators**: direct 1:1 mapping (no data)
//! - **Identifiers**: keyword table lookup, else a borrowed payload
//! - **Numbers**: the scan/parse pipeline in [`crate::number`]
//! - **Chars/strings**: escape decoding per literal kind
//! - **Errors**: a static message inside `TokenKind::Invalid`
//!
//! Cooking never fails outward — malformed input becomes an `Invalid`
//! token and the caller keeps scanning.

use std::borrow::Cow;

use c99_lexer_core::RawTag;

use crate::escape::decode_escape;
use crate::keywords;
use crate::number::cook_number;
use crate::token::{Constant, Punctuator, StringLiteral, TokenKind};

pub(crate) const MSG_BAD_CHAR_IN_CHAR: &str = "invalid character in character literal";
pub(crate) const MSG_UNTERMINATED_CHAR: &str = "unterminated character literal";
pub(crate) const MSG_UNTERMINATED_STRING: &str = "unterminated string literal";
pub(crate) const MSG_BAD_SEQUENCE: &str = "invalid character sequence";

/// Cook a single raw token into a `TokenKind`.
///
/// `lexeme` is the exact span the raw scanner consumed. Trivia and EOF are
/// the driver loop's business and never reach this function.
pub(crate) fn cook(tag: RawTag, lexeme: &[u8]) -> TokenKind<'_> {
    if let Some(punct) = Punctuator::from_raw(tag) {
        return TokenKind::Punctuator(punct);
    }
    match tag {
        RawTag::Ident => match keywords::lookup(lexeme) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Identifier(lexeme),
        },
        RawTag::Number => match cook_number(lexeme) {
            Ok(constant) => TokenKind::Constant(constant),
            Err(msg) => TokenKind::Invalid(msg),
        },
        RawTag::CharLit => cook_char(lexeme),
        RawTag::StringLit => cook_string(lexeme),
        RawTag::InvalidByte => TokenKind::Invalid(MSG_BAD_SEQUENCE),
        // Punctuators were mapped above; trivia and EOF never reach cook().
        _ => {
            debug_assert!(false, "tag {tag:?} is the driver loop's business");
            TokenKind::Invalid(MSG_BAD_SEQUENCE)
        }
    }
}

/// Decode a character constant span per C99 §6.4.4.4.
///
/// One codepoint between the quotes: an escape sequence or a printable
/// ASCII byte. Anything after the codepoint other than the closing quote
/// (including nothing) leaves the literal unterminated.
fn cook_char(lexeme: &[u8]) -> TokenKind<'_> {
    let mut i = 0;
    let wide = lexeme[i] == b'L';
    if wide {
        i += 1;
    }
    i += 1; // opening quote, guaranteed by the scanner

    let value = match lexeme.get(i) {
        None => return TokenKind::Invalid(MSG_UNTERMINATED_CHAR),
        Some(&b'\\') => match decode_escape(lexeme, i) {
            Ok((value, consumed)) => {
                i += consumed;
                value
            }
            Err(msg) => return TokenKind::Invalid(msg),
        },
        Some(&b) if b >= 32 && b != 127 => {
            i += 1;
            u32::from(b)
        }
        Some(_) => return TokenKind::Invalid(MSG_BAD_CHAR_IN_CHAR),
    };

    if lexeme.get(i) != Some(&b'\'') {
        return TokenKind::Invalid(MSG_UNTERMINATED_CHAR);
    }

    TokenKind::Constant(if wide {
        Constant::WideChar(value)
    } else {
        // Narrow value truncates to the narrow-char range.
        Constant::Char(value as u8)
    })
}

/// Decode a string literal span: the character-constant rules applied
/// across the body.
///
/// Body bytes other than `"` and `\` are taken verbatim (C string bodies
/// admit raw tabs and the like); escapes go through the shared decoder.
/// Narrow values borrow from the source when no escape changed anything.
fn cook_string(lexeme: &[u8]) -> TokenKind<'_> {
    let mut i = 0;
    let wide = lexeme[i] == b'L';
    if wide {
        i += 1;
    }
    i += 1; // opening quote
    let body_start = i;

    let mut values: Vec<u32> = Vec::new();
    let mut had_escape = false;
    loop {
        match lexeme.get(i) {
            None => return TokenKind::Invalid(MSG_UNTERMINATED_STRING),
            Some(&b'"') => break,
            Some(&b'\\') => match decode_escape(lexeme, i) {
                Ok((value, consumed)) => {
                    had_escape = true;
                    values.push(value);
                    i += consumed;
                }
                Err(msg) => return TokenKind::Invalid(msg),
            },
            Some(&b) => {
                values.push(u32::from(b));
                i += 1;
            }
        }
    }

    let literal = if wide {
        StringLiteral::Wide(values)
    } else if had_escape {
        StringLiteral::Narrow(Cow::Owned(
            values.into_iter().map(|v| v as u8).collect(),
        ))
    } else {
        // Escape-free body: the decoded value IS the source bytes.
        StringLiteral::Narrow(Cow::Borrowed(&lexeme[body_start..i]))
    };
    TokenKind::StringLiteral(literal)
}
