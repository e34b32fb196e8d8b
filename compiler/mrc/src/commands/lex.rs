//! `mrc lex <file>`: print the token stream of a source file.

use mr_lexer::{lex, LexConfig};

use super::read_source;
use crate::reporting::render_lex_error;

/// Lex `source` and render either the token dump or the error report.
pub fn lex_to_string(name: &str, source: &str, config: &LexConfig) -> Result<String, String> {
    match lex(source, config) {
        Ok(tokens) => Ok(tokens.to_string()),
        Err(error) => Err(render_lex_error(name, source, &error)),
    }
}

/// Print the tokens of `path`, or the first lexical error and exit with 1.
pub fn lex_file(path: &str) {
    let result = read_source(path)
        .and_then(|source| lex_to_string(path, &source, &LexConfig::default()));
    match result {
        Ok(dump) => print!("{dump}"),
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
