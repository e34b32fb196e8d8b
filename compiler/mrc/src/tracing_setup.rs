//! Tracing subscriber setup for the driver.
//!
//! Library crates only emit events; the binary decides whether anything is
//! collected. Nothing is installed unless `RUST_LOG` is set.
//!
//! ```text
//! RUST_LOG=mr_lexer=debug mrc lex file.mr
//! RUST_LOG=trace MR_LOG_TREE=1 mrc lex file.mr   # indented span tree
//! ```

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("MR_LOG_TREE").is_some_and(|v| v == "1") {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
