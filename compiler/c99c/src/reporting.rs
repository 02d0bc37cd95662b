//! Invalid-token reporting: map lexer output onto renderable diagnostics.

use c99_diagnostic::{span_utils, Diagnostic};
use c99_lexer::Token;

/// Build the diagnostic for an invalid token.
///
/// The offending line is pulled back out of the source so the renderer can
/// show it with the lexeme underlined. Multi-line lexemes (an unterminated
/// character constant can span lines) underline only what fits on the
/// first line.
pub fn diagnostic_for<'a>(path: &'a str, source: &'a [u8], token: &Token<'a>) -> Diagnostic<'a> {
    let line_text = span_utils::line_at(source, token.line);
    let on_line = line_text.len().saturating_sub(token.column as usize);
    let underline = token.lexeme.len().clamp(1, on_line.max(1));
    Diagnostic::error(
        path,
        token.line,
        token.column,
        line_text,
        underline,
        token.invalid_message().unwrap_or("malformed token"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use c99_lexer::{Lexer, SourceBuffer};
    use pretty_assertions::assert_eq;

    #[test]
    fn diagnostic_points_at_the_lexeme() {
        let source: &[u8] = b"int x = 08;\n";
        let buf = SourceBuffer::new(source);
        let bad = Lexer::new(&buf)
            .find(|t| t.invalid_message().is_some())
            .expect("source contains an invalid constant");

        let diag = diagnostic_for("main.c", source, &bad);
        assert_eq!(diag.line, 0);
        assert_eq!(diag.column, 8);
        assert_eq!(diag.line_text, b"int x = 08;");
        assert_eq!(diag.underline_len, 2);
        assert_eq!(diag.message, "non-octal digit in octal constant");

        assert_eq!(
            diag.render(false),
            "error: main.c:0:8\n\
             > int x = 08;\n\
             \x20         ^~\n\
             \x20         non-octal digit in octal constant\n"
        );
    }

    #[test]
    fn underline_never_escapes_the_line() {
        let source: &[u8] = b"'a\nrest";
        let buf = SourceBuffer::new(source);
        let bad = Lexer::new(&buf)
            .find(|t| t.invalid_message().is_some())
            .expect("unterminated char constant");
        let diag = diagnostic_for("t.c", source, &bad);
        assert!(diag.underline_len <= diag.line_text.len());
    }
}
