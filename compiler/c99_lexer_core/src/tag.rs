//! Raw token tag and token type for the low-level tokenizer.
//!
//! `RawTag` is the standalone token kind produced by the raw scanner. The
//! cooking layer (`c99_lexer`) maps it to the public token model.
//!
//! # Discriminant Layout
//!
//! Variants are organized into semantic ranges with gaps for future
//! expansion:
//!
//! | Range   | Category     |
//! |---------|--------------|
//! | 0-15    | Literals     |
//! | 32-95   | Punctuators  |
//! | 112-114 | Trivia       |
//! | 240-245 | Errors       |
//! | 255     | EOF          |

/// Raw token kind produced by the low-level tokenizer.
///
/// Wide character and string literals carry the `L` prefix inside their
/// lexeme; the cooking layer inspects the first byte to distinguish them,
/// so there are no separate wide tags.
///
/// # Representation
///
/// `#[repr(u8)]` ensures each variant is a single byte, enabling compact
/// storage and efficient tag-based dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Literals (0-15) ===
    /// Identifier run (not yet classified as keyword — resolution happens
    /// in the cooking layer).
    Ident = 0,
    /// Numeric constant span: the maximal munch over digits, letters, dots,
    /// and exponent signs. Validation and value parsing happen in the
    /// cooking layer.
    Number = 1,
    /// Character constant span (`'…'` or `L'…'`), closing quote included
    /// when present.
    CharLit = 2,
    /// String literal span (`"…"` or `L"…"`), closing quote included when
    /// present.
    StringLit = 3,

    // === Punctuators (32-95, C99 §6.4.6 order) ===
    /// `[`
    LeftBracket = 32,
    /// `]`
    RightBracket = 33,
    /// `(`
    LeftParen = 34,
    /// `)`
    RightParen = 35,
    /// `{`
    LeftBrace = 36,
    /// `}`
    RightBrace = 37,
    /// `.`
    Dot = 38,
    /// `->`
    Arrow = 39,
    /// `++`
    PlusPlus = 40,
    /// `--`
    MinusMinus = 41,
    /// `&`
    Ampersand = 42,
    /// `*`
    Star = 43,
    /// `+`
    Plus = 44,
    /// `-`
    Minus = 45,
    /// `~`
    Tilde = 46,
    /// `!`
    Bang = 47,
    /// `/`
    Slash = 48,
    /// `%`
    Percent = 49,
    /// `<<`
    Shl = 50,
    /// `>>`
    Shr = 51,
    /// `<`
    Less = 52,
    /// `>`
    Greater = 53,
    /// `<=`
    LessEqual = 54,
    /// `>=`
    GreaterEqual = 55,
    /// `==`
    EqualEqual = 56,
    /// `!=`
    BangEqual = 57,
    /// `^`
    Caret = 58,
    /// `|`
    Pipe = 59,
    /// `&&`
    AmpersandAmpersand = 60,
    /// `||`
    PipePipe = 61,
    /// `?`
    Question = 62,
    /// `:`
    Colon = 63,
    /// `;`
    Semicolon = 64,
    /// `...`
    Ellipsis = 65,
    /// `=`
    Equal = 66,
    /// `*=`
    StarEqual = 67,
    /// `/=`
    SlashEqual = 68,
    /// `%=`
    PercentEqual = 69,
    /// `+=`
    PlusEqual = 70,
    /// `-=`
    MinusEqual = 71,
    /// `<<=`
    ShlEqual = 72,
    /// `>>=`
    ShrEqual = 73,
    /// `&=`
    AmpersandEqual = 74,
    /// `^=`
    CaretEqual = 75,
    /// `|=`
    PipeEqual = 76,
    /// `,`
    Comma = 77,
    /// `#`
    Hash = 78,
    /// `##`
    HashHash = 79,

    // === Trivia (112-114) ===
    /// Whitespace run (space, tab, newline, vertical tab, form feed, CR).
    Whitespace = 112,
    /// Line comment (`//` to end of line), emitted only when line-comment
    /// scanning is enabled.
    LineComment = 113,

    // === Errors (240-245) ===
    /// Byte outside the recognized alphabet at token start.
    InvalidByte = 240,

    // === Control (255) ===
    /// End of input (sentinel reached).
    Eof = 255,
}

impl RawTag {
    /// Returns the fixed lexeme for this tag, if it has one.
    ///
    /// Punctuators have fixed lexemes. Identifiers, literals, trivia, and
    /// error tokens return `None` (their text varies).
    #[must_use]
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::LeftBracket => Some("["),
            Self::RightBracket => Some("]"),
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::LeftBrace => Some("{"),
            Self::RightBrace => Some("}"),
            Self::Dot => Some("."),
            Self::Arrow => Some("->"),
            Self::PlusPlus => Some("++"),
            Self::MinusMinus => Some("--"),
            Self::Ampersand => Some("&"),
            Self::Star => Some("*"),
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Tilde => Some("~"),
            Self::Bang => Some("!"),
            Self::Slash => Some("/"),
            Self::Percent => Some("%"),
            Self::Shl => Some("<<"),
            Self::Shr => Some(">>"),
            Self::Less => Some("<"),
            Self::Greater => Some(">"),
            Self::LessEqual => Some("<="),
            Self::GreaterEqual => Some(">="),
            Self::EqualEqual => Some("=="),
            Self::BangEqual => Some("!="),
            Self::Caret => Some("^"),
            Self::Pipe => Some("|"),
            Self::AmpersandAmpersand => Some("&&"),
            Self::PipePipe => Some("||"),
            Self::Question => Some("?"),
            Self::Colon => Some(":"),
            Self::Semicolon => Some(";"),
            Self::Ellipsis => Some("..."),
            Self::Equal => Some("="),
            Self::StarEqual => Some("*="),
            Self::SlashEqual => Some("/="),
            Self::PercentEqual => Some("%="),
            Self::PlusEqual => Some("+="),
            Self::MinusEqual => Some("-="),
            Self::ShlEqual => Some("<<="),
            Self::ShrEqual => Some(">>="),
            Self::AmpersandEqual => Some("&="),
            Self::CaretEqual => Some("^="),
            Self::PipeEqual => Some("|="),
            Self::Comma => Some(","),
            Self::Hash => Some("#"),
            Self::HashHash => Some("##"),
            _ => None,
        }
    }

    /// Returns a human-readable name for this tag.
    ///
    /// Used in debugging output and token dumps.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Number => "numeric constant",
            Self::CharLit => "character constant",
            Self::StringLit => "string literal",
            Self::Whitespace => "whitespace",
            Self::LineComment => "line comment",
            Self::InvalidByte => "invalid byte",
            Self::Eof => "end of file",
            punct => punct.lexeme().unwrap_or("punctuator"),
        }
    }

    /// Returns `true` if this tag represents trivia the lexer discards
    /// (whitespace, comments).
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::LineComment)
    }

    /// Returns `true` if this tag is a C99 §6.4.6 punctuator.
    #[must_use]
    pub fn is_punctuator(self) -> bool {
        (self as u8) >= Self::LeftBracket as u8 && (self as u8) <= Self::HashHash as u8
    }
}

/// Raw token produced by the low-level tokenizer.
///
/// A lightweight pair of tag and byte length. The cooking layer uses the
/// length to compute lexeme slices and coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    /// What kind of token this is.
    pub tag: RawTag,
    /// Length of the token in bytes.
    pub len: u32,
}

/// Size assertions: `RawTag` is 1 byte, `RawToken` is 8 bytes.
const _: () = assert!(std::mem::size_of::<RawTag>() == 1);
const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
