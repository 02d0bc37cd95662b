//! Low-level tokenizer for C99 translation units.
//!
//! This crate provides a standalone, pure tokenizer with **zero `c99_*`
//! dependencies**. It is designed to be reusable by external tools
//! (formatters, syntax highlighters) without pulling in the rest of the
//! front end.
//!
//! # Architecture
//!
//! `c99_lexer_core` is the "raw" half of a two-layer lexer architecture
//! (modeled after Rust's `rustc_lexer` / `rustc_parse::lexer` separation):
//!
//! - **`c99_lexer_core`** (this crate): Produces `(RawTag, len)` pairs from
//!   raw bytes. No coordinates, no decoded values, no diagnostics. The raw
//!   scanner fixes token *spans* only — it knows that `'\x41'` is a
//!   character literal five bytes long, not what character it denotes.
//! - **`c99_lexer`**: "Cooks" raw tokens into compiler-ready form with
//!   keyword resolution, constant parsing, escape decoding, and
//!   line/column coordinates.
//!
//! # Usage
//!
//! ```
//! use c99_lexer_core::{RawScanner, RawTag, SourceBuffer};
//!
//! let buf = SourceBuffer::new(b"int x = 42;");
//! let mut scanner = RawScanner::new(buf.cursor());
//!
//! let tok = scanner.next_token();
//! assert_eq!(tok.tag, RawTag::Ident); // "int" — keywords resolve later
//! assert_eq!(tok.len, 3);
//! ```

mod classify;
mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use classify::{is_ident_continue, is_ident_start, is_octal_digit};
pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
