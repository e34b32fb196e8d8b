//! Interactive read-lex-print loop.

use std::io::{self, BufRead, Write};

use mr_lexer::LexConfig;

use crate::commands::lex_to_string;

/// Printed before every line read.
pub const PROMPT: &str = ">>> ";

/// Source name used in error reports.
pub const STDIN_NAME: &str = "<stdin>";

/// Lex `input` one line at a time until end of input.
///
/// Blank lines print nothing. A lexical error is reported and the loop
/// moves on to the next line.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W, config: &LexConfig) -> io::Result<()> {
    let mut line = String::new();
    loop {
        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }
        let code = line.trim_end_matches(['\n', '\r']);
        if code.trim().is_empty() {
            continue;
        }

        tracing::debug!(len = code.len(), "repl line");
        match lex_to_string(STDIN_NAME, code, config) {
            Ok(dump) | Err(dump) => output.write_all(dump.as_bytes())?,
        }
    }
}

#[cfg(test)]
mod tests;
