//! End-to-end lexer tests: full-source scenarios and the lexer-wide
//! invariants (coordinates, EOF behavior, round-tripping, idempotence).

use pretty_assertions::assert_eq;

use crate::{Constant, Keyword, Lexer, Punctuator, SourceBuffer, StringLiteral, TokenKind};

// ─── Whole-program scenarios ───────────────────────────────────

#[test]
fn scenario_int_main() {
    let buf = SourceBuffer::new(b"int main(void) { return 0; }");
    let mut lexer = Lexer::new(&buf);
    let expect: &[TokenKind] = &[
        TokenKind::Keyword(Keyword::Int),
        TokenKind::Identifier(b"main"),
        TokenKind::Punctuator(Punctuator::LeftParen),
        TokenKind::Keyword(Keyword::Void),
        TokenKind::Punctuator(Punctuator::RightParen),
        TokenKind::Punctuator(Punctuator::LeftBrace),
        TokenKind::Keyword(Keyword::Return),
        TokenKind::Constant(Constant::Int(0)),
        TokenKind::Punctuator(Punctuator::Semicolon),
        TokenKind::Punctuator(Punctuator::RightBrace),
        TokenKind::Eof,
    ];
    for want in expect {
        let got = lexer.next_token();
        assert_eq!(&got.kind, want);
    }
}

#[test]
fn scenario_hex_max_is_unsigned_long_long() {
    let buf = SourceBuffer::new(b"0xFFFFFFFFFFFFFFFF");
    let tok = Lexer::new(&buf).next_token();
    assert_eq!(
        tok.kind,
        TokenKind::Constant(Constant::UnsignedLongLongInt(0xFFFF_FFFF_FFFF_FFFF))
    );
}

#[test]
fn scenario_decimal_past_int_promotes() {
    // 32-bit long: the decimal ladder promotes past `long` to `long long`.
    let buf = SourceBuffer::new(b"2147483648");
    let tok = Lexer::new(&buf).next_token();
    assert_eq!(
        tok.kind,
        TokenKind::Constant(Constant::LongLongInt(2_147_483_648))
    );
}

#[test]
fn scenario_hex_promotes_through_unsigned() {
    let buf = SourceBuffer::new(b"0x80000000");
    let tok = Lexer::new(&buf).next_token();
    assert_eq!(
        tok.kind,
        TokenKind::Constant(Constant::UnsignedInt(0x8000_0000))
    );
}

#[test]
fn scenario_leading_dot_float() {
    let buf = SourceBuffer::new(b".5e-3f");
    let tok = Lexer::new(&buf).next_token();
    assert_eq!(tok.kind, TokenKind::Constant(Constant::Float(0.5e-3)));
    assert_eq!(tok.lexeme, b".5e-3f");
}

#[test]
fn scenario_char_constants() {
    let buf = SourceBuffer::new(br"'\x41'");
    assert_eq!(
        Lexer::new(&buf).next_token().kind,
        TokenKind::Constant(Constant::Char(0x41))
    );
    let buf = SourceBuffer::new(br"L'\n'");
    assert_eq!(
        Lexer::new(&buf).next_token().kind,
        TokenKind::Constant(Constant::WideChar(10))
    );
}

#[test]
fn scenario_punctuator_run() {
    let buf = SourceBuffer::new(b">>= <<= ... -> ++");
    let kinds: Vec<_> = Lexer::new(&buf).map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Punctuator(Punctuator::ShrEqual),
            TokenKind::Punctuator(Punctuator::ShlEqual),
            TokenKind::Punctuator(Punctuator::Ellipsis),
            TokenKind::Punctuator(Punctuator::Arrow),
            TokenKind::Punctuator(Punctuator::PlusPlus),
        ]
    );
}

#[test]
fn scenario_bad_octal() {
    let buf = SourceBuffer::new(b"08");
    let tok = Lexer::new(&buf).next_token();
    assert_eq!(
        tok.kind,
        TokenKind::Invalid("non-octal digit in octal constant")
    );
    assert_eq!(tok.lexeme, b"08");
}

#[test]
fn scenario_multiple_dots() {
    let buf = SourceBuffer::new(b"1.2.3");
    let tok = Lexer::new(&buf).next_token();
    assert_eq!(
        tok.kind,
        TokenKind::Invalid("multiple decimal points in number")
    );
    assert_eq!(tok.lexeme, b"1.2.3");
}

#[test]
fn scenario_hex_float_without_exponent() {
    let buf = SourceBuffer::new(b"0x1.5");
    let tok = Lexer::new(&buf).next_token();
    assert_eq!(
        tok.kind,
        TokenKind::Invalid("hexadecimal floating point requires binary exponent")
    );
}

#[test]
fn unterminated_string_is_invalid() {
    let buf = SourceBuffer::new(b"\"abc");
    let tok = Lexer::new(&buf).next_token();
    assert_eq!(tok.kind, TokenKind::Invalid("unterminated string literal"));
    assert_eq!(tok.lexeme, b"\"abc");
}

// ─── Coordinates ───────────────────────────────────────────────

#[test]
fn line_and_column_tracking() {
    let buf = SourceBuffer::new(b"int x;\n  y = 2;");
    let coords: Vec<(u32, u32)> = Lexer::new(&buf).map(|t| (t.line, t.column)).collect();
    assert_eq!(
        coords,
        vec![(0, 0), (0, 4), (0, 5), (1, 2), (1, 4), (1, 6), (1, 7)]
    );
}

#[test]
fn token_coordinates_point_past_trivia() {
    let buf = SourceBuffer::new(b"\n\n   x");
    let tok = Lexer::new(&buf).next_token();
    assert_eq!((tok.line, tok.column), (2, 3));
}

#[test]
fn comment_skipping_and_coordinates() {
    let buf = SourceBuffer::new(b"x // comment\ny");
    let mut lexer = Lexer::new(&buf);
    let x = lexer.next_token();
    let y = lexer.next_token();
    assert_eq!((x.line, x.column), (0, 0));
    assert_eq!(y.kind, TokenKind::Identifier(&b"y"[..]));
    assert_eq!((y.line, y.column), (1, 0));
}

#[test]
fn comments_disabled_yields_slashes() {
    let buf = SourceBuffer::new(b"//x");
    let mut lexer = Lexer::with_line_comments(&buf, false);
    assert_eq!(
        lexer.next_token().kind,
        TokenKind::Punctuator(Punctuator::Slash)
    );
    assert_eq!(
        lexer.next_token().kind,
        TokenKind::Punctuator(Punctuator::Slash)
    );
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier(&b"x"[..]));
}

#[test]
fn position_monotonicity() {
    let buf = SourceBuffer::new(b"a b\nc 1.5 'x' \"s\"\n\n  @ d");
    let mut lexer = Lexer::new(&buf);
    let mut prev = (0u32, 0u32);
    loop {
        let tok = lexer.next_token();
        assert!(
            (tok.line, tok.column) >= prev,
            "coordinates went backwards: {prev:?} -> {:?}",
            (tok.line, tok.column)
        );
        prev = (tok.line, tok.column);
        if tok.is_eof() {
            break;
        }
    }
}

// ─── EOF behavior ──────────────────────────────────────────────

#[test]
fn eof_is_a_sink_with_stable_coordinates() {
    let buf = SourceBuffer::new(b"x\n  ");
    let mut lexer = Lexer::new(&buf);
    let _ = lexer.next_token();
    let first_eof = lexer.next_token();
    assert!(first_eof.is_eof());
    for _ in 0..3 {
        let again = lexer.next_token();
        assert!(again.is_eof());
        assert_eq!(
            (again.line, again.column),
            (first_eof.line, first_eof.column)
        );
    }
}

#[test]
fn empty_source_is_immediately_eof() {
    let buf = SourceBuffer::new(b"");
    let mut lexer = Lexer::new(&buf);
    let tok = lexer.next_token();
    assert!(tok.is_eof());
    assert_eq!((tok.line, tok.column), (0, 0));
    assert_eq!(tok.lexeme, b"");
}

// ─── Lexeme containment & round-trip ───────────────────────────

#[test]
fn lexemes_are_views_into_the_source() {
    let source: &[u8] = b"int x = 0x41; // end";
    let buf = SourceBuffer::new(source);
    let range = buf.as_bytes().as_ptr_range();
    for tok in Lexer::new(&buf) {
        assert!(range.contains(&tok.lexeme.as_ptr()));
        assert!(tok.lexeme.len() <= source.len());
    }
}

#[test]
fn relexing_a_lexeme_reproduces_the_token() {
    let source: &[u8] = b"int main2(void) { return 0x1F + 'a' - \"str\" * 1.5e3f; }";
    let buf = SourceBuffer::new(source);
    for tok in Lexer::new(&buf) {
        let isolated = SourceBuffer::new(tok.lexeme);
        let mut again = Lexer::new(&isolated);
        let relexed = again.next_token();
        assert_eq!(relexed.kind, tok.kind);
        assert_eq!(relexed.lexeme, tok.lexeme);
        assert!(again.next_token().is_eof());
    }
}

#[test]
fn identical_inputs_lex_identically() {
    let source: &[u8] = b"while (i <= 10) { a[i] <<= 2, i++; }";
    let buf_a = SourceBuffer::new(source);
    let buf_b = SourceBuffer::new(source);
    let first: Vec<_> = Lexer::new(&buf_a).collect();
    let second: Vec<_> = Lexer::new(&buf_b).collect();
    assert_eq!(first, second);
}

// ─── Recovery ──────────────────────────────────────────────────

#[test]
fn lexing_continues_after_invalid_tokens() {
    let buf = SourceBuffer::new(b"x @ 08 $ y");
    let kinds: Vec<_> = Lexer::new(&buf).map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier(&b"x"[..]),
            TokenKind::Invalid("invalid character sequence"),
            TokenKind::Invalid("non-octal digit in octal constant"),
            TokenKind::Invalid("invalid character sequence"),
            TokenKind::Identifier(&b"y"[..]),
        ]
    );
}

#[test]
fn invalid_tokens_carry_their_lexeme() {
    let buf = SourceBuffer::new(b"1.2.3 rest");
    let toks: Vec<_> = Lexer::new(&buf).collect();
    assert_eq!(toks[0].lexeme, b"1.2.3");
    assert_eq!(toks[1].lexeme, b"rest");
}

// ─── Wide literals through the full pipeline ───────────────────

#[test]
fn wide_string_and_identifier_ambiguity() {
    let buf = SourceBuffer::new(b"L \"s\" L\"s\" Lx");
    let kinds: Vec<_> = Lexer::new(&buf).map(|t| t.kind).collect();
    assert!(matches!(kinds[0], TokenKind::Identifier(b"L")));
    assert!(matches!(
        kinds[1],
        TokenKind::StringLiteral(StringLiteral::Narrow(_))
    ));
    assert!(matches!(
        kinds[2],
        TokenKind::StringLiteral(StringLiteral::Wide(_))
    ));
    assert!(matches!(kinds[3], TokenKind::Identifier(b"Lx")));
}
