use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new(b"");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    // Sentinel present at index 0
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new(b"hello");
    assert_eq!(buf.len(), 5);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"hello");
    // Sentinel after source bytes
    assert_eq!(buf.as_sentinel_bytes()[5], 0);
}

#[test]
fn bytes_are_copied() {
    let mut owned = b"int x;".to_vec();
    let buf = SourceBuffer::new(&owned);
    owned[0] = b'X';
    assert_eq!(buf.as_bytes(), b"int x;");
}

// === Cache-Line Alignment ===

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 63, 64, 65, 127, 128, 1000] {
        let source = vec![b'x'; len];
        let buf = SourceBuffer::new(&source);
        assert_eq!(
            buf.as_sentinel_bytes().len() % CACHE_LINE,
            0,
            "buffer length {} is not cache-line aligned for source length {}",
            buf.as_sentinel_bytes().len(),
            len
        );
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new(b"abc");
    let sentinel_bytes = buf.as_sentinel_bytes();
    for &b in &sentinel_bytes[3..] {
        assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
    }
}

#[test]
fn exact_boundary_still_has_sentinel() {
    // 63 bytes + sentinel fills one cache line exactly
    let source = vec![b'y'; 63];
    let buf = SourceBuffer::new(&source);
    assert_eq!(buf.as_sentinel_bytes().len(), 64);
    assert_eq!(buf.as_sentinel_bytes()[63], 0);

    // 64 bytes forces a second cache line for the sentinel
    let source = vec![b'y'; 64];
    let buf = SourceBuffer::new(&source);
    assert_eq!(buf.as_sentinel_bytes().len(), 128);
    assert_eq!(buf.as_sentinel_bytes()[64], 0);
}

// === Cursor handoff ===

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new(b"abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'a');
}
