use super::*;
use pretty_assertions::assert_eq;

// === Keyword table ===

#[test]
fn every_keyword_classifies_to_its_own_kind() {
    for &word in KEYWORDS {
        let kind = classify(word);
        assert_ne!(kind, TokenKind::Identifier, "{word}");
        assert_eq!(kind.lexeme(), Some(word));
    }
}

#[test]
fn keyword_list_matches_token_kinds() {
    let mut seen = Vec::new();
    for &word in KEYWORDS {
        let kind = classify(word);
        assert!(!TokenKind::PUNCTUATORS.contains(&kind), "{word}");
        assert!(!seen.contains(&kind), "{word}");
        seen.push(kind);
    }
    assert_eq!(seen.len(), 49);
}

// === Identifiers ===

#[test]
fn near_misses_are_identifiers() {
    for text in [
        "If", "iff", "i", "", "functions", "instanceOf", "awaits", "nul", "$if", "_do", "of",
        "undefined", "let1",
    ] {
        assert_eq!(classify(text), TokenKind::Identifier, "{text}");
    }
}

#[test]
fn long_text_is_identifier() {
    assert_eq!(classify("implementsx"), TokenKind::Identifier);
    assert_eq!(classify(&"a".repeat(100)), TokenKind::Identifier);
}

#[test]
fn contextual_keywords_have_kinds() {
    assert_eq!(classify("async"), TokenKind::Async);
    assert_eq!(classify("get"), TokenKind::Get);
    assert_eq!(classify("set"), TokenKind::Set);
    assert_eq!(classify("yield"), TokenKind::Yield);
}
