use super::*;
use pretty_assertions::assert_eq;

#[test]
fn keyword_letters_can_be_keyword() {
    for c in ['a', 'f', 'y', 'w'] {
        assert!(character_scan_flags(c).can_be_keyword(), "{c}");
        assert!(char_can_be_keyword(c), "{c}");
    }
}

#[test]
fn non_keyword_identifier_chars_cannot_be_keyword() {
    for c in ['j', 'q', 'z', 'A', 'Z', '$', '_', '0', '9'] {
        assert!(!character_scan_flags(c).can_be_keyword(), "{c}");
        assert!(!char_can_be_keyword(c), "{c}");
    }
}

#[test]
fn keyword_starts() {
    let seeded = character_scan_flags('f').for_identifier_start();
    assert!(seeded.can_be_keyword());
    assert!(!seeded.terminates_literal());

    // `h` appears in keywords (`this`, `switch`) but starts none
    let seeded = character_scan_flags('h').for_identifier_start();
    assert!(!seeded.can_be_keyword());
    assert!(character_scan_flags('h').can_be_keyword());
}

#[test]
fn punctuation_terminates_literal() {
    for c in [' ', '(', '.', '+', '\n', '\\', '"', '#', '@'] {
        assert!(character_scan_flags(c).terminates_literal(), "{c:?}");
    }
    for c in ['a', 'Z', '0', '$', '_'] {
        assert!(!character_scan_flags(c).terminates_literal(), "{c:?}");
    }
}

#[test]
fn string_terminators() {
    let terminators: Vec<char> = (0u8..128)
        .map(char::from)
        .filter(|&c| character_scan_flags(c).may_terminate_string())
        .collect();
    assert_eq!(terminators, vec!['\n', '\r', '"', '\'', '\\']);
}

#[test]
fn slow_path_characters() {
    assert!(character_scan_flags('\\').identifier_needs_slow_path());
    assert!(character_scan_flags('é').identifier_needs_slow_path());
    assert!(!character_scan_flags('a').identifier_needs_slow_path());
}

#[test]
fn non_ascii_flags() {
    let flags = character_scan_flags('\u{3042}');
    assert!(flags.terminates_literal());
    assert!(!flags.can_be_keyword());
    assert!(!flags.may_terminate_string());
    // LINE SEPARATOR is legal inside string literals
    assert!(!character_scan_flags('\u{2028}').may_terminate_string());
}
