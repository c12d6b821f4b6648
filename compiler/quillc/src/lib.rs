//! Quill command-line driver.
//!
//! The `quill` binary is a thin shell over [`commands`]. Tracing setup
//! lives here so the binary and benchmarks share it.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=quill_lexer=trace`. `QUILL_LOG_FORMAT=tree`
/// switches from flat lines to an indented tree. Output goes to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var("QUILL_LOG_FORMAT")
            .is_ok_and(|format| format.eq_ignore_ascii_case("tree"));

        if tree {
            let layer = tracing_tree::HierarchicalLayer::new(2)
                .with_indent_lines(true)
                .with_targets(true);
            Registry::default().with(filter).with(layer).init();
        } else {
            let layer = fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
    });
}
