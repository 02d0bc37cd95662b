//! Keyword resolution.
//!
//! Exact-match lookup over the 37 C99 keywords. The identifier's length is
//! the first-pass filter (keywords are 2-10 bytes), then a per-length match
//! settles it. ASCII case-sensitive: `Int` and `INT` are identifiers.

use crate::token::Keyword;

/// Look up a keyword by its exact source spelling.
///
/// Returns `None` for anything that is not one of the 37 keywords, however
/// close (`integer` is not `int`).
#[inline]
pub(crate) fn lookup(text: &[u8]) -> Option<Keyword> {
    match text.len() {
        2 => match text {
            b"do" => Some(Keyword::Do),
            b"if" => Some(Keyword::If),
            _ => None,
        },
        3 => match text {
            b"for" => Some(Keyword::For),
            b"int" => Some(Keyword::Int),
            _ => None,
        },
        4 => match text {
            b"auto" => Some(Keyword::Auto),
            b"case" => Some(Keyword::Case),
            b"char" => Some(Keyword::Char),
            b"else" => Some(Keyword::Else),
            b"enum" => Some(Keyword::Enum),
            b"goto" => Some(Keyword::Goto),
            b"long" => Some(Keyword::Long),
            b"void" => Some(Keyword::Void),
            _ => None,
        },
        5 => match text {
            b"break" => Some(Keyword::Break),
            b"const" => Some(Keyword::Const),
            b"float" => Some(Keyword::Float),
            b"short" => Some(Keyword::Short),
            b"union" => Some(Keyword::Union),
            b"while" => Some(Keyword::While),
            b"_Bool" => Some(Keyword::Bool),
            _ => None,
        },
        6 => match text {
            b"double" => Some(Keyword::Double),
            b"extern" => Some(Keyword::Extern),
            b"inline" => Some(Keyword::Inline),
            b"return" => Some(Keyword::Return),
            b"signed" => Some(Keyword::Signed),
            b"sizeof" => Some(Keyword::Sizeof),
            b"static" => Some(Keyword::Static),
            b"struct" => Some(Keyword::Struct),
            b"switch" => Some(Keyword::Switch),
            _ => None,
        },
        7 => match text {
            b"default" => Some(Keyword::Default),
            b"typedef" => Some(Keyword::Typedef),
            _ => None,
        },
        8 => match text {
            b"continue" => Some(Keyword::Continue),
            b"register" => Some(Keyword::Register),
            b"restrict" => Some(Keyword::Restrict),
            b"unsigned" => Some(Keyword::Unsigned),
            b"volatile" => Some(Keyword::Volatile),
            b"_Complex" => Some(Keyword::Complex),
            _ => None,
        },
        10 => match text {
            b"_Imaginary" => Some(Keyword::Imaginary),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The full keyword set, as spelled in C99 §6.4.1.
    const ALL: [(&[u8], Keyword); 37] = [
        (b"auto", Keyword::Auto),
        (b"break", Keyword::Break),
        (b"case", Keyword::Case),
        (b"char", Keyword::Char),
        (b"const", Keyword::Const),
        (b"continue", Keyword::Continue),
        (b"default", Keyword::Default),
        (b"do", Keyword::Do),
        (b"double", Keyword::Double),
        (b"else", Keyword::Else),
        (b"enum", Keyword::Enum),
        (b"extern", Keyword::Extern),
        (b"float", Keyword::Float),
        (b"for", Keyword::For),
        (b"goto", Keyword::Goto),
        (b"if", Keyword::If),
        (b"inline", Keyword::Inline),
        (b"int", Keyword::Int),
        (b"long", Keyword::Long),
        (b"register", Keyword::Register),
        (b"restrict", Keyword::Restrict),
        (b"return", Keyword::Return),
        (b"short", Keyword::Short),
        (b"signed", Keyword::Signed),
        (b"sizeof", Keyword::Sizeof),
        (b"static", Keyword::Static),
        (b"struct", Keyword::Struct),
        (b"switch", Keyword::Switch),
        (b"typedef", Keyword::Typedef),
        (b"union", Keyword::Union),
        (b"unsigned", Keyword::Unsigned),
        (b"void", Keyword::Void),
        (b"volatile", Keyword::Volatile),
        (b"while", Keyword::While),
        (b"_Bool", Keyword::Bool),
        (b"_Complex", Keyword::Complex),
        (b"_Imaginary", Keyword::Imaginary),
    ];

    #[test]
    fn all_37_keywords_resolve() {
        for (text, kw) in ALL {
            assert_eq!(lookup(text), Some(kw), "{}", String::from_utf8_lossy(text));
        }
    }

    #[test]
    fn lookup_agrees_with_spelling() {
        for (text, kw) in ALL {
            assert_eq!(kw.as_str().as_bytes(), text);
        }
    }

    #[test]
    fn near_misses_are_identifiers() {
        for text in [
            &b"integer"[..],
            b"in",
            b"Int",
            b"INT",
            b"_bool",
            b"_Imaginar",
            b"_Imaginaryy",
            b"whilee",
            b"",
            b"x",
        ] {
            assert_eq!(lookup(text), None, "{}", String::from_utf8_lossy(text));
        }
    }
}
