//! `quill lex`: dump the token stream of a JavaScript file.

use std::ops::Range;

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};
use quill_ir::Location;
use quill_lexer::{tokenize, LexOutput, ScanError, ScannerConfig, SourceMode, Token};
use tracing::debug;

use super::read_file;

/// Options for `quill lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub config: ScannerConfig,
    /// Print the raw literal next to the cooked one.
    pub show_raw: bool,
}

/// Parse the flags following `quill lex <file>`.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, String> {
    let mut options = LexOptions::default();
    for arg in args {
        match arg.as_str() {
            "--module" => options.config.mode = SourceMode::Module,
            "--raw" => options.show_raw = true,
            "--no-separators" => options.config.numeric_separators = false,
            "--no-hashbang" => options.config.hashbang = false,
            other => return Err(format!("unknown option '{other}'")),
        }
    }
    Ok(options)
}

/// Scan `path` and print its tokens, then its diagnostics.
///
/// Exits with status 1 if any token is `Illegal`.
pub fn lex_file(path: &str, options: &LexOptions) {
    let content = read_file(path);
    let output = tokenize(&content, options.config.clone());
    debug!(
        path,
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed file"
    );

    print!("{}", render_tokens(path, &output, options.show_raw));
    eprint!(
        "{}",
        render_strict_warnings(path, &content, &output.strict_diagnostics, true)
    );
    if output.has_errors() {
        eprint!("{}", render_errors(path, &content, &output.errors, true));
        std::process::exit(1);
    }
}

/// One header line, then one line per token.
pub fn render_tokens(path: &str, output: &LexOutput, show_raw: bool) -> String {
    let mut out = format!("Tokens for '{}' ({} tokens):\n", path, output.tokens.len());
    for token in &output.tokens {
        out.push_str(&token_line(token, show_raw));
        out.push('\n');
    }
    if output.found_html_comment {
        out.push_str("(contains HTML-like comments)\n");
    }
    out
}

fn token_line(token: &Token, show_raw: bool) -> String {
    let mut line = format!("  {:?} @ {}", token.kind, token.location);
    if let Some(value) = token.smi_value {
        line.push_str(&format!("  = {value}"));
    } else if !token.literal.is_empty() {
        line.push_str(&format!("  {:?}", token.literal));
    }
    if show_raw && !token.raw_literal.is_empty() && token.raw_literal != token.literal {
        line.push_str(&format!("  raw {:?}", token.raw_literal));
    }
    line
}

/// Render scan errors as ariadne reports.
pub fn render_errors(path: &str, source: &str, errors: &[ScanError], color: bool) -> String {
    render_reports(path, source, errors, ReportKind::Error, color)
}

/// Render deferred legacy-octal diagnostics as warnings.
pub fn render_strict_warnings(
    path: &str,
    source: &str,
    diagnostics: &[ScanError],
    color: bool,
) -> String {
    render_reports(path, source, diagnostics, ReportKind::Warning, color)
}

fn render_reports(
    path: &str,
    source: &str,
    errors: &[ScanError],
    kind: ReportKind<'_>,
    color: bool,
) -> String {
    let config = Config::default()
        .with_color(color)
        .with_index_type(IndexType::Byte);
    let mut buf = Vec::new();
    for error in errors {
        let range = label_range(error.location, source.len());
        let mut label = Label::new((path, range.clone()));
        if error.kind.is_strict_only() {
            label = label.with_message("an error in strict mode code");
        }
        let report = Report::build(kind, path, range.start)
            .with_config(config)
            .with_message(error.kind.message())
            .with_label(label)
            .finish();
        if let Err(e) = report.write((path, Source::from(source)), &mut buf) {
            debug!(error = %e, "failed to render report");
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// `location` as a byte range clamped to the source.
fn label_range(location: Location, len: usize) -> Range<usize> {
    let range = location.to_range();
    let start = range.start.min(len);
    start..range.end.clamp(start, len)
}

#[cfg(test)]
mod tests;
