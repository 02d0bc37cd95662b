//! Numeric constant validation and parsing.
//!
//! Two halves, run back to back over a raw `Number` span:
//!
//! 1. **Scan**: a single-pass state machine validates the span — radix
//!    detection, decimal points, exponents, octal digit checks, suffix
//!    grammar — and records where the digits end and the suffix begins.
//!    The whole state lives in one [`NumberScan`] record.
//! 2. **Parse**: converts the digit span to a value. Integers accumulate
//!    into a `u128` (one adapter, uniform overflow reporting) and then walk
//!    the C99 §6.4.4.1 promotion ladder from the suffix-declared tier until
//!    the value fits. Floats go through `str::parse` (decimal) or a
//!    mantissa-times-power-of-two conversion (hex).
//!
//! Integer tier widths follow the ILP32LL64 model declared on
//! [`Constant`]: `int` and `long` are 32-bit, `long long` 64-bit.

use crate::suffix::{float_suffix_lookup, integer_suffix_lookup, FloatSuffix, IntSuffix};
use crate::token::Constant;
use c99_lexer_core::is_octal_digit;

pub(crate) const MSG_BAD_SEQUENCE: &str = "invalid character sequence in number";
pub(crate) const MSG_MULTIPLE_DOTS: &str = "multiple decimal points in number";
pub(crate) const MSG_DOT_IN_EXPONENT: &str = "decimal point in exponent";
pub(crate) const MSG_BAD_EXPONENT: &str = "invalid exponent";
pub(crate) const MSG_BAD_INT_SUFFIX: &str = "invalid integer literal suffix";
pub(crate) const MSG_BAD_FLOAT_SUFFIX: &str = "invalid float literal suffix";
pub(crate) const MSG_HEX_FLOAT_NEEDS_EXPONENT: &str =
    "hexadecimal floating point requires binary exponent";
pub(crate) const MSG_NON_OCTAL_DIGIT: &str = "non-octal digit in octal constant";
pub(crate) const MSG_INT_OVERFLOW: &str = "integer overflow/underflow";
pub(crate) const MSG_FLOAT_OVERFLOW: &str = "floating point overflow/underflow";

/// Validate and parse a numeric constant span.
///
/// `lexeme` is the exact maximal-munch span produced by the raw scanner.
/// Returns the typed constant, or the static message for the first
/// diagnosable defect.
pub(crate) fn cook_number(lexeme: &[u8]) -> Result<Constant, &'static str> {
    let scan = scan(lexeme);
    if let Some(msg) = scan.error {
        return Err(msg);
    }
    if scan.is_float {
        parse_float(lexeme, &scan)
    } else {
        parse_integer(lexeme, &scan)
    }
}

/// Scan state for one numeric constant. One record, one linear pass.
struct NumberScan {
    /// 8, 10, or 16. Octal is decided only after the pass: a leading zero
    /// may still turn out to introduce a decimal float (`0.5`, `0e1`).
    radix: u32,
    is_float: bool,
    /// Offset of the first value digit (2 for `0x` constants, else 0).
    digits_start: usize,
    /// Offset where the suffix begins; `lexeme.len()` if none.
    suffix_start: usize,
    int_suffix: Option<IntSuffix>,
    float_suffix: Option<FloatSuffix>,
    error: Option<&'static str>,
}

/// Is `b` a value digit at this point of the scan?
///
/// Exponent digits are always decimal, hex bodies accept hex digits, and
/// everything else accepts decimal digits. (`e`/`E` in a decimal body and
/// `p`/`P` in a hex body are handled as exponent markers before this
/// check.)
fn digit_in_context(b: u8, radix: u32, seen_exp: bool) -> bool {
    if seen_exp || radix != 16 {
        b.is_ascii_digit()
    } else {
        b.is_ascii_hexdigit()
    }
}

fn scan(lexeme: &[u8]) -> NumberScan {
    let len = lexeme.len();
    let mut s = NumberScan {
        radix: 10,
        is_float: false,
        digits_start: 0,
        suffix_start: len,
        int_suffix: None,
        float_suffix: None,
        error: None,
    };
    let mut seen_dot = false;
    let mut seen_exp = false;
    let mut maybe_octal = false;
    let mut invalid_octal = false;

    let mut i = 0;
    if lexeme.first() == Some(&b'0') {
        if matches!(lexeme.get(1), Some(&(b'x' | b'X'))) {
            s.radix = 16;
            s.digits_start = 2;
            i = 2;
            if !lexeme.get(2).is_some_and(|b| b.is_ascii_hexdigit()) {
                s.error = Some(MSG_BAD_SEQUENCE);
            }
        } else {
            // Could be octal (01) or a decimal float (0.1); settled below.
            maybe_octal = true;
            i = 1;
        }
    }

    while i < len {
        let b = lexeme[i];
        if b == b'.' {
            if seen_dot {
                s.error = Some(MSG_MULTIPLE_DOTS);
            } else if seen_exp {
                s.error = Some(MSG_DOT_IN_EXPONENT);
            }
            s.is_float = true;
            seen_dot = true;
            i += 1;
        } else if (s.radix != 16 && matches!(b, b'e' | b'E'))
            || (s.radix == 16 && matches!(b, b'p' | b'P'))
        {
            if seen_exp {
                s.error = Some(MSG_BAD_SEQUENCE);
            }
            s.is_float = true;
            seen_exp = true;
            i += 1;
            if i < len && matches!(lexeme[i], b'+' | b'-') {
                i += 1;
            }
            // The byte after the marker (and optional sign) must be a digit.
            if !lexeme.get(i).is_some_and(|d| d.is_ascii_digit()) {
                s.error = Some(MSG_BAD_EXPONENT);
            }
        } else if digit_in_context(b, s.radix, seen_exp) {
            if maybe_octal && !is_octal_digit(b) {
                // Remember the defect but keep scanning: a later `.` or `e`
                // turns the whole constant into a valid decimal float.
                invalid_octal = true;
            }
            i += 1;
        } else {
            // First byte that is no digit in context: the suffix. The rest
            // of the span is the suffix by construction (the raw scanner
            // already munched the full alnum+dot run).
            s.suffix_start = i;
            let tail = &lexeme[i..];
            if s.is_float {
                s.float_suffix = float_suffix_lookup(tail);
                if s.float_suffix.is_none() {
                    s.error = Some(MSG_BAD_FLOAT_SUFFIX);
                }
            } else {
                s.int_suffix = integer_suffix_lookup(tail);
                if s.int_suffix.is_none() {
                    s.error = Some(MSG_BAD_INT_SUFFIX);
                }
            }
            break;
        }
    }

    if s.radix == 16 && seen_dot && !seen_exp {
        s.error = Some(MSG_HEX_FLOAT_NEEDS_EXPONENT);
    } else if maybe_octal && !s.is_float {
        s.radix = 8;
        if invalid_octal {
            s.error = Some(MSG_NON_OCTAL_DIGIT);
        }
    }

    s
}

// ─── Integer parsing & the promotion ladder ────────────────────

/// The six integer tiers of C99 §6.4.4.1, in rank order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum IntTier {
    Int,
    UnsignedInt,
    LongInt,
    UnsignedLongInt,
    LongLongInt,
    UnsignedLongLongInt,
}

/// Does `value` fit the tier's range? (ILP32LL64 widths.)
fn fits(tier: IntTier, value: u128) -> bool {
    let max: u128 = match tier {
        IntTier::Int | IntTier::LongInt => i32::MAX as u128,
        IntTier::UnsignedInt | IntTier::UnsignedLongInt => u32::MAX as u128,
        IntTier::LongLongInt => i64::MAX as u128,
        IntTier::UnsignedLongLongInt => u64::MAX as u128,
    };
    value <= max
}

/// The promotion ladder as a transition function:
/// `(tier, had-U-suffix, decimal) → next tier`, `None` at the top.
///
/// Decimal constants without a `U` suffix never acquire unsignedness;
/// octal/hex constants promote through each tier's unsigned peer.
fn next_tier(tier: IntTier, unsigned_suffix: bool, decimal: bool) -> Option<IntTier> {
    use IntTier::*;
    match (tier, unsigned_suffix, decimal) {
        // decimal without U: signed tiers only
        (Int, false, true) => Some(LongInt),
        (LongInt, false, true) => Some(LongLongInt),
        (LongLongInt, false, true) => None,
        // any radix with U: unsigned tiers only
        (UnsignedInt, true, _) => Some(UnsignedLongInt),
        (UnsignedLongInt, true, _) => Some(UnsignedLongLongInt),
        (UnsignedLongLongInt, true, _) => None,
        // octal/hex without U: each tier promotes through its unsigned peer
        (Int, false, false) => Some(UnsignedInt),
        (UnsignedInt, false, false) => Some(LongInt),
        (LongInt, false, false) => Some(UnsignedLongInt),
        (UnsignedLongInt, false, false) => Some(LongLongInt),
        (LongLongInt, false, false) => Some(UnsignedLongLongInt),
        (UnsignedLongLongInt, false, false) => None,
        // off-ladder combinations cannot arise from start_tier
        (UnsignedInt | UnsignedLongInt | UnsignedLongLongInt, false, true) => None,
        (Int | LongInt | LongLongInt, true, _) => None,
    }
}

/// The tier an explicit suffix enters the ladder at, plus whether the
/// suffix carried `U`. No suffix starts at plain `int`.
fn start_tier(suffix: Option<IntSuffix>) -> (IntTier, bool) {
    match suffix {
        None => (IntTier::Int, false),
        Some(IntSuffix::U) => (IntTier::UnsignedInt, true),
        Some(IntSuffix::L) => (IntTier::LongInt, false),
        Some(IntSuffix::Ul) => (IntTier::UnsignedLongInt, true),
        Some(IntSuffix::Ll) => (IntTier::LongLongInt, false),
        Some(IntSuffix::Ull) => (IntTier::UnsignedLongLongInt, true),
    }
}

/// Accumulate a digit span into a `u128`.
///
/// The single string-to-integer adapter: every radix goes through the same
/// checked arithmetic, so overflow is reported uniformly regardless of how
/// the platform primitives behave.
fn digits_to_u128(digits: &[u8], radix: u32) -> Result<u128, &'static str> {
    let mut value: u128 = 0;
    for &b in digits {
        let d = (b as char).to_digit(radix).ok_or(MSG_BAD_SEQUENCE)?;
        value = value
            .checked_mul(u128::from(radix))
            .and_then(|v| v.checked_add(u128::from(d)))
            .ok_or(MSG_INT_OVERFLOW)?;
    }
    Ok(value)
}

fn parse_integer(lexeme: &[u8], scan: &NumberScan) -> Result<Constant, &'static str> {
    let digits = &lexeme[scan.digits_start..scan.suffix_start];
    let value = digits_to_u128(digits, scan.radix)?;

    let (mut tier, unsigned_suffix) = start_tier(scan.int_suffix);
    let decimal = scan.radix == 10;
    while !fits(tier, value) {
        tier = next_tier(tier, unsigned_suffix, decimal).ok_or(MSG_INT_OVERFLOW)?;
    }

    Ok(match tier {
        IntTier::Int => Constant::Int(value as i32),
        IntTier::LongInt => Constant::LongInt(value as i32),
        IntTier::LongLongInt => Constant::LongLongInt(value as i64),
        IntTier::UnsignedInt => Constant::UnsignedInt(value as u32),
        IntTier::UnsignedLongInt => Constant::UnsignedLongInt(value as u32),
        IntTier::UnsignedLongLongInt => Constant::UnsignedLongLongInt(value as u64),
    })
}

// ─── Float parsing ─────────────────────────────────────────────

fn parse_float(lexeme: &[u8], scan: &NumberScan) -> Result<Constant, &'static str> {
    let text = &lexeme[..scan.suffix_start];

    if scan.float_suffix == Some(FloatSuffix::F) && scan.radix != 16 {
        // Parse at float width directly for correctly-rounded decimals.
        let v = parse_str::<f32>(text)?;
        return if v.is_infinite() {
            Err(MSG_FLOAT_OVERFLOW)
        } else {
            Ok(Constant::Float(v))
        };
    }

    let value = if scan.radix == 16 {
        parse_hex_float(text)?
    } else {
        parse_str::<f64>(text)?
    };
    if value.is_infinite() {
        return Err(MSG_FLOAT_OVERFLOW);
    }

    Ok(match scan.float_suffix {
        None => Constant::Double(value),
        Some(FloatSuffix::L) => Constant::LongDouble(value),
        Some(FloatSuffix::F) => {
            let narrow = value as f32;
            if narrow.is_infinite() {
                return Err(MSG_FLOAT_OVERFLOW);
            }
            Constant::Float(narrow)
        }
    })
}

/// Parse a validated decimal float span with the standard library.
///
/// The span is ASCII digits, dots, exponent markers and signs, so the
/// UTF-8 view cannot fail and `FromStr` accepts it; both error arms exist
/// only as defense against scanner bugs.
fn parse_str<T: std::str::FromStr>(text: &[u8]) -> Result<T, &'static str> {
    let s = std::str::from_utf8(text).map_err(|_| MSG_BAD_SEQUENCE)?;
    s.parse::<T>().map_err(|_| MSG_BAD_SEQUENCE)
}

/// Convert a validated hex float (`0x h+ [. h*] p±d+` over the full span,
/// `0x` included) to `f64` as mantissa × 2^exponent.
fn parse_hex_float(text: &[u8]) -> Result<f64, &'static str> {
    let mut mantissa = 0f64;
    let mut frac_digits: i32 = 0;
    let mut seen_dot = false;

    let mut i = 2; // skip "0x"
    while i < text.len() {
        match text[i] {
            b'.' => seen_dot = true,
            b'p' | b'P' => break,
            b => {
                let d = (b as char).to_digit(16).ok_or(MSG_BAD_SEQUENCE)?;
                mantissa = mantissa * 16.0 + f64::from(d);
                if seen_dot {
                    frac_digits += 1;
                }
            }
        }
        i += 1;
    }

    i += 1; // skip the exponent marker
    let mut negative = false;
    if matches!(text.get(i), Some(&(b'+' | b'-'))) {
        negative = text[i] == b'-';
        i += 1;
    }
    let mut exp: i64 = 0;
    while i < text.len() {
        let d = (text[i] as char).to_digit(10).ok_or(MSG_BAD_SEQUENCE)?;
        // Clamp: anything this large is already ±inf or 0 after scaling.
        exp = (exp * 10 + i64::from(d)).min(100_000);
        i += 1;
    }
    if negative {
        exp = -exp;
    }

    // Each fractional hex digit shifts the mantissa four bits too far left.
    let scale = exp - 4 * i64::from(frac_digits);
    Ok(mantissa * 2f64.powi(scale.clamp(-100_000, 100_000) as i32))
}
