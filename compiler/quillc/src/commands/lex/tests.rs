use pretty_assertions::assert_eq;
use quill_ir::{Location, TokenKind};
use quill_lexer::{tokenize, MessageKind, ScanError, ScannerConfig, SourceMode};

use super::{label_range, parse_lex_options, render_errors, render_strict_warnings, render_tokens};

fn args(flags: &[&str]) -> Vec<String> {
    flags.iter().map(|flag| (*flag).to_owned()).collect()
}

// === Options ===

#[test]
fn no_flags_is_default() {
    let options = parse_lex_options(&[]).unwrap_or_default();
    assert_eq!(options.config, ScannerConfig::default());
    assert!(!options.show_raw);
}

#[test]
fn flags_map_onto_config() {
    let options = parse_lex_options(&args(&["--module", "--raw", "--no-separators"]));
    let Ok(options) = options else {
        panic!("flags should parse");
    };
    assert_eq!(options.config.mode, SourceMode::Module);
    assert!(!options.config.numeric_separators);
    assert!(options.config.hashbang);
    assert!(options.show_raw);
}

#[test]
fn unknown_flag_is_rejected() {
    assert_eq!(
        parse_lex_options(&args(&["--strict"])),
        Err("unknown option '--strict'".to_owned())
    );
}

// === Token Dump ===

#[test]
fn token_dump_lists_every_token() {
    let output = tokenize("let x = 1_0;", ScannerConfig::default());
    assert_eq!(
        render_tokens("a.js", &output, true),
        "Tokens for 'a.js' (6 tokens):\n\
         \x20 Let @ 0..3  \"let\"\n\
         \x20 Identifier @ 4..5  \"x\"\n\
         \x20 Assign @ 6..7\n\
         \x20 Smi @ 8..11  = 10  raw \"1_0\"\n\
         \x20 Semicolon @ 11..12\n\
         \x20 EndOfInput @ 12..12\n"
    );
}

#[test]
fn raw_text_only_on_request() {
    let output = tokenize("`a\r\nb` 0x1_0", ScannerConfig::default());
    assert_eq!(output.kinds()[1], TokenKind::Number);
    let dump = render_tokens("t.js", &output, false);
    assert!(!dump.contains("raw"), "{dump}");
    let dump = render_tokens("t.js", &output, true);
    assert!(dump.contains("raw \"0x1_0\""), "{dump}");
}

#[test]
fn html_comment_is_noted() {
    let output = tokenize("<!-- old\nx", ScannerConfig::default());
    let dump = render_tokens("old.js", &output, false);
    assert!(dump.ends_with("(contains HTML-like comments)\n"), "{dump}");
}

// === Reports ===

#[test]
fn errors_render_with_message_and_path() {
    let source = "let s = 'open\n";
    let output = tokenize(source, ScannerConfig::default());
    assert_eq!(
        output.errors,
        vec![ScanError::new(
            Location::new(8, 9),
            MessageKind::UnterminatedString
        )]
    );
    let report = render_errors("s.js", source, &output.errors, false);
    assert!(report.contains("Error"), "{report}");
    assert!(report.contains(MessageKind::UnterminatedString.message()), "{report}");
    assert!(report.contains("s.js"), "{report}");
    assert!(!report.contains("strict mode"), "{report}");
}

#[test]
fn strict_diagnostics_render_as_warnings() {
    let source = "x = 017";
    let output = tokenize(source, ScannerConfig::default());
    let report = render_strict_warnings("o.js", source, &output.strict_diagnostics, false);
    assert!(report.contains("Warning"), "{report}");
    assert!(report.contains("strict mode"), "{report}");
    assert_eq!(render_strict_warnings("o.js", source, &[], false), "");
}

#[test]
fn label_range_is_clamped() {
    assert_eq!(label_range(Location::new(2, 4), 10), 2..4);
    assert_eq!(label_range(Location::new(8, 12), 10), 8..10);
    assert_eq!(label_range(Location::new(12, 14), 10), 10..10);
}
