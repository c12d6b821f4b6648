use super::LiteralBuffer;
use pretty_assertions::assert_eq;

#[test]
fn starts_empty_and_one_byte() {
    let buf = LiteralBuffer::new();
    assert!(buf.is_empty());
    assert!(buf.is_one_byte());
    assert_eq!(buf.as_str(), "");
}

#[test]
fn latin1_stays_one_byte() {
    let mut buf = LiteralBuffer::new();
    for c in "café ÿ".chars() {
        buf.add_char(c);
    }
    assert!(buf.is_one_byte());
    assert_eq!(buf.as_str(), "café ÿ");
}

#[test]
fn wide_char_clears_one_byte() {
    let mut buf = LiteralBuffer::new();
    buf.add_char('a');
    buf.add_char('π');
    assert!(!buf.is_one_byte());
    assert_eq!(buf.len(), 3);
}

#[test]
fn start_resets_text_and_mode() {
    let mut buf = LiteralBuffer::new();
    buf.add_char('日');
    buf.start();
    assert!(buf.is_empty());
    assert!(buf.is_one_byte());
    buf.add_char('x');
    assert_eq!(buf.as_ref(), "x");
}
