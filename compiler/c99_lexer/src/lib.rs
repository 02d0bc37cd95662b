//! Lexer for C99 translation units.
//!
//! This crate is the "cooking" half of the two-layer lexer. The raw half
//! (`c99_lexer_core`) fixes token boundaries; this crate gives the spans
//! meaning:
//!
//! - identifier runs resolve against the 37-entry C99 keyword table;
//! - numeric constant spans pass through the radix/suffix state machine and
//!   the C99 §6.4.4.1 integer promotion ladder;
//! - character and string constants have their escape sequences decoded;
//! - punctuator tags map to the public [`Punctuator`] set;
//! - malformed input becomes [`TokenKind::Invalid`] with a static message.
//!
//! # Usage
//!
//! ```
//! use c99_lexer::{Lexer, SourceBuffer, TokenKind};
//!
//! let buf = SourceBuffer::new(b"return 0;");
//! let mut lexer = Lexer::new(&buf);
//!
//! let tok = lexer.next_token();
//! assert!(matches!(tok.kind, TokenKind::Keyword(_)));
//! assert_eq!(tok.lexeme, b"return");
//! assert_eq!((tok.line, tok.column), (0, 0));
//! ```
//!
//! # Lifetimes
//!
//! Every token borrows from the [`SourceBuffer`] it was lexed from: lexeme
//! slices, identifier payloads, and escape-free string-literal values all
//! point into the buffer's owned copy of the source. Copy out anything that
//! must outlive the buffer.

mod cooker;
mod escape;
mod keywords;
mod lexer;
mod number;
mod suffix;
mod token;

pub use c99_lexer_core::SourceBuffer;
pub use lexer::{tokenize, Lexer};
pub use token::{Constant, Keyword, Punctuator, StringLiteral, Token, TokenKind};

#[cfg(test)]
mod tests;
