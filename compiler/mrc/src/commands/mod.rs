//! Command handlers for the `mrc` CLI.
//!
//! Each submodule implements one command. Shared utilities like
//! `read_source` live here in the module root.

mod lex;

pub use lex::{lex_file, lex_to_string};

use mr_lexer_core::MAX_SOURCE_LEN;

/// Read a source file, mapping I/O failures to user-facing messages.
///
/// Files longer than the lexer's addressable range are rejected here so the
/// lexer never sees them.
pub fn read_source(path: &str) -> Result<String, String> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })?;
    if content.len() > MAX_SOURCE_LEN as usize {
        return Err(format!(
            "'{path}' is too large ({} bytes, limit is {MAX_SOURCE_LEN})",
            content.len()
        ));
    }
    Ok(content)
}

#[cfg(test)]
mod tests;
