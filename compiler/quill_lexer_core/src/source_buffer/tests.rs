use crate::SourceBuffer;
use pretty_assertions::assert_eq;

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.as_bytes(), b"");
    assert_eq!(buf.buf[0], 0);
}

#[test]
fn sentinel_follows_content() {
    let buf = SourceBuffer::new("let x");
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.as_bytes(), b"let x");
    assert_eq!(buf.buf[5], 0);
}

#[test]
fn padded_to_cache_line() {
    for len in [0, 1, 62, 63, 64, 65, 200] {
        let source = "a".repeat(len);
        let buf = SourceBuffer::new(&source);
        let total = buf.buf.len();
        assert_eq!(total % 64, 0, "len {len}");
        assert!(total > len, "len {len} leaves no room for the sentinel");
        assert!(buf.buf[len..].iter().all(|&b| b == 0));
    }
}

#[test]
fn interior_nul_is_content() {
    let buf = SourceBuffer::new("'\0'");
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_bytes(), b"'\0'");
}

#[test]
fn multibyte_length_is_in_bytes() {
    let buf = SourceBuffer::new("π");
    assert_eq!(buf.len(), 2);
}
