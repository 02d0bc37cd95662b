//! Source-line extraction helpers.

/// Return the `line`-th (0-based) source line, without its newline.
///
/// Lines are `\n`-delimited; a trailing `\r` is kept (the lexer treats it
/// as ordinary whitespace, and renderers strip nothing that was written).
/// Asking for a line past the end returns an empty slice.
#[must_use]
pub fn line_at(source: &[u8], line: u32) -> &[u8] {
    let mut start = 0usize;
    let mut remaining = line;
    while remaining > 0 {
        match memchr::memchr(b'\n', &source[start..]) {
            Some(off) => start += off + 1,
            None => return &source[source.len()..],
        }
        remaining -= 1;
    }
    match memchr::memchr(b'\n', &source[start..]) {
        Some(off) => &source[start..start + off],
        None => &source[start..],
    }
}
