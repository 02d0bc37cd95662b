//! Integer and float suffix tables.
//!
//! Suffixes are matched case-insensitively: the candidate is
//! uppercase-normalized into a small stack buffer, then compared against
//! the table. Integer suffixes are at most 3 bytes, float suffixes 1.

/// Normalized integer suffix. `LU`/`UL` and `LLU`/`ULL` collapse to one
/// entry each; case permutations collapse during normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IntSuffix {
    /// `u` / `U`
    U,
    /// `l` / `L`
    L,
    /// `ul`, `lu`, and case permutations
    Ul,
    /// `ll` / `LL` / `lL` / `Ll`
    Ll,
    /// `ull`, `llu`, and case permutations
    Ull,
}

/// Normalized float suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FloatSuffix {
    /// `f` / `F`
    F,
    /// `l` / `L`
    L,
}

/// Look up an integer-constant suffix, case-insensitively.
///
/// Returns `None` for the empty suffix (callers treat "no suffix"
/// separately) and for any alphanumeric tail outside the grammar
/// `U L UL LU LL ULL LLU`.
pub(crate) fn integer_suffix_lookup(text: &[u8]) -> Option<IntSuffix> {
    if text.is_empty() || text.len() > 3 {
        return None; // no valid suffix is longer than 3 characters
    }

    let mut upper = [0u8; 3];
    for (dst, src) in upper.iter_mut().zip(text) {
        *dst = src.to_ascii_uppercase();
    }

    match &upper[..text.len()] {
        b"U" => Some(IntSuffix::U),
        b"L" => Some(IntSuffix::L),
        b"UL" | b"LU" => Some(IntSuffix::Ul),
        b"LL" => Some(IntSuffix::Ll),
        b"ULL" | b"LLU" => Some(IntSuffix::Ull),
        _ => None,
    }
}

/// Look up a floating-constant suffix, case-insensitively.
///
/// Returns `None` for the empty suffix and for anything outside `F L`.
pub(crate) fn float_suffix_lookup(text: &[u8]) -> Option<FloatSuffix> {
    if text.len() != 1 {
        return None; // no valid suffix is longer than 1 character
    }
    match text[0].to_ascii_uppercase() {
        b'F' => Some(FloatSuffix::F),
        b'L' => Some(FloatSuffix::L),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_suffixes_all_case_permutations() {
        for s in [&b"u"[..], b"U"] {
            assert_eq!(integer_suffix_lookup(s), Some(IntSuffix::U));
        }
        for s in [&b"l"[..], b"L"] {
            assert_eq!(integer_suffix_lookup(s), Some(IntSuffix::L));
        }
        for s in [&b"ul"[..], b"uL", b"Ul", b"UL", b"lu", b"lU", b"Lu", b"LU"] {
            assert_eq!(integer_suffix_lookup(s), Some(IntSuffix::Ul), "{s:?}");
        }
        for s in [&b"ll"[..], b"lL", b"Ll", b"LL"] {
            assert_eq!(integer_suffix_lookup(s), Some(IntSuffix::Ll), "{s:?}");
        }
        for s in [&b"ull"[..], b"ULL", b"uLL", b"llu", b"LLU", b"llU"] {
            assert_eq!(integer_suffix_lookup(s), Some(IntSuffix::Ull), "{s:?}");
        }
    }

    #[test]
    fn invalid_integer_suffixes_rejected() {
        for s in [
            &b""[..],
            b"x",
            b"f",
            b"lul",
            b"ulu",
            b"uu",
            b"lll",
            b"ulll",
            b"u8",
            b"z",
        ] {
            assert_eq!(integer_suffix_lookup(s), None, "{s:?}");
        }
    }

    #[test]
    fn float_suffixes() {
        assert_eq!(float_suffix_lookup(b"f"), Some(FloatSuffix::F));
        assert_eq!(float_suffix_lookup(b"F"), Some(FloatSuffix::F));
        assert_eq!(float_suffix_lookup(b"l"), Some(FloatSuffix::L));
        assert_eq!(float_suffix_lookup(b"L"), Some(FloatSuffix::L));
    }

    #[test]
    fn invalid_float_suffixes_rejected() {
        for s in [&b""[..], b"ff", b"fl", b"u", b"d", b"x"] {
            assert_eq!(float_suffix_lookup(s), None, "{s:?}");
        }
    }
}
