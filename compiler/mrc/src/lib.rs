//! MetaReal compiler driver.
//!
//! Library half of the `mrc` binary: command implementations, error
//! rendering and the interactive prompt live here so they can be tested
//! without spawning a process.

pub mod commands;
pub mod reporting;
pub mod repl;
mod tracing_setup;

pub use tracing_setup::init_tracing;

/// Compiler version shown by `mrc --version` and the REPL banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
