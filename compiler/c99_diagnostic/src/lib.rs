//! Diagnostic records and rendering for the C99 front end.
//!
//! A [`Diagnostic`] pins down one defect: where it is, the source line it
//! sits on, how wide the offending lexeme is, and a short explanation.
//! Rendering produces the fixed four-line layout the driver prints for
//! every invalid token:
//!
//! ```text
//! error: main.c:3:8
//! > int x = 08;
//!           ^~
//!           non-octal digit in octal constant
//! ```
//!
//! The caret sits under the first offending byte, tildes span the rest of
//! the lexeme, and the explanation is indented to line up with the caret.
//! Colors (bold red header, bold source line, magenta explanation) are
//! optional and off by default — the caller decides based on where the
//! output goes.

use std::fmt::Write as _;

pub mod span_utils;

const ANSI_NONE: &str = "\x1b[0m";
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RED: &str = "\x1b[31m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_MAGENTA: &str = "\x1b[35m";

/// How bad it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// The header label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Self::Error => ANSI_RED,
            Self::Warning => ANSI_YELLOW,
        }
    }
}

/// One renderable diagnostic.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic<'a> {
    pub severity: Severity,
    /// Path of the offending file, as the user named it.
    pub path: &'a str,
    /// 0-based line of the offending lexeme's first byte.
    pub line: u32,
    /// 0-based column of the offending lexeme's first byte.
    pub column: u32,
    /// The full source line containing the defect (no trailing newline).
    pub line_text: &'a [u8],
    /// Width of the caret+tilde underline; clamped to at least one column.
    pub underline_len: usize,
    /// Static explanation of the defect.
    pub message: &'a str,
}

impl<'a> Diagnostic<'a> {
    /// Convenience constructor for an error diagnostic.
    #[must_use]
    pub fn error(
        path: &'a str,
        line: u32,
        column: u32,
        line_text: &'a [u8],
        underline_len: usize,
        message: &'a str,
    ) -> Self {
        Self {
            severity: Severity::Error,
            path,
            line,
            column,
            line_text,
            underline_len,
            message,
        }
    }

    /// Render the four-line diagnostic, with or without ANSI color.
    #[must_use]
    pub fn render(&self, color: bool) -> String {
        let (c_sev, c_bold, c_magenta, c_none) = if color {
            (self.severity.color(), ANSI_BOLD, ANSI_MAGENTA, ANSI_NONE)
        } else {
            ("", "", "", "")
        };

        let mut out = String::new();
        // Header: severity, then file:line:column.
        let _ = writeln!(
            out,
            "{c_sev}{c_bold}{}: {c_none}{}:{}:{}",
            self.severity.label(),
            self.path,
            self.line,
            self.column
        );

        // The offending source line.
        let _ = writeln!(
            out,
            "> {c_bold}{}{c_none}",
            String::from_utf8_lossy(self.line_text)
        );

        // Caret and tilde underline beneath the lexeme.
        let pad = " ".repeat(self.column as usize);
        let tildes = "~".repeat(self.underline_len.saturating_sub(1));
        let _ = writeln!(out, "  {pad}^{tildes}");

        // Explanation, indented to the caret.
        let _ = writeln!(out, "  {pad}{c_magenta}{c_bold}{}{c_none}", self.message);

        out
    }
}
