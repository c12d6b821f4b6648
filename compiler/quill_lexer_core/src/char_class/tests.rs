use super::*;

// === Line terminators and whitespace ===

#[test]
fn line_terminators() {
    for c in ['\n', '\r', '\u{2028}', '\u{2029}'] {
        assert!(is_line_terminator(c), "{c:?}");
        assert!(!is_white_space(c), "{c:?}");
        assert!(is_white_space_or_line_terminator(c), "{c:?}");
    }
    assert!(!is_line_terminator('\u{85}'));
}

#[test]
fn white_space_set() {
    for c in [
        '\t', '\u{0B}', '\u{0C}', ' ', '\u{A0}', '\u{FEFF}', '\u{1680}', '\u{2000}', '\u{200A}',
        '\u{202F}', '\u{205F}', '\u{3000}',
    ] {
        assert!(is_white_space(c), "{c:?}");
    }
    for c in ['a', '\u{200B}', '\u{85}', '\0'] {
        assert!(!is_white_space(c), "{c:?}");
    }
}

// === Digits ===

#[test]
fn digit_classes() {
    assert!(is_decimal_digit('7'));
    assert!(!is_decimal_digit('a'));
    assert!(is_hex_digit('f') && is_hex_digit('F') && is_hex_digit('9'));
    assert!(!is_hex_digit('g'));
    assert!(is_octal_digit('7') && !is_octal_digit('8'));
    assert!(is_binary_digit('1') && !is_binary_digit('2'));
    assert!(is_non_octal_decimal_digit('8') && is_non_octal_decimal_digit('9'));
    assert!(!is_non_octal_decimal_digit('7'));
}

// === Identifiers ===

#[test]
fn ascii_identifier_start() {
    for c in ['a', 'Z', '$', '_', '\\'] {
        assert!(is_identifier_start(c), "{c:?}");
    }
    for c in ['0', '#', '-', ' ', '\0'] {
        assert!(!is_identifier_start(c), "{c:?}");
    }
}

#[test]
fn ascii_identifier_part() {
    for c in ['a', 'Z', '0', '9', '$', '_'] {
        assert!(is_identifier_part(c), "{c:?}");
        assert!(is_ascii_identifier(c), "{c:?}");
    }
    assert!(!is_identifier_part('-'));
    assert!(!is_ascii_identifier('\\'));
}

#[test]
fn unicode_identifiers() {
    assert!(is_identifier_start('π'));
    assert!(is_identifier_start('変'));
    assert!(!is_identifier_start('\u{0301}'));
    assert!(is_identifier_part('\u{0301}'));
    assert!(is_identifier_part(ZWNJ));
    assert!(is_identifier_part(ZWJ));
    assert!(!is_identifier_start(ZWJ));
    assert!(!is_identifier_part('\u{2028}'));
}
