use crate::RunError;
use std::io::{self, Write};

/// Pretty-print a structured [`RunError`] with caret positioning into the
/// offending program text. Messages are prefixed with the program name for
/// CLI use, e.g. "bfrun: ...".
pub fn print_run_error(program: &str, code: &str, err: &RunError) {
    match err {
        RunError::TapeOutOfBounds { ip, cursor, op } => {
            let msg =
                format!("{program}: Runtime error: tape cursor out of bounds (cursor={cursor}, op={op})");
            print_error_with_context(&msg, code, *ip);
        }
        RunError::UnbalancedBracket { ip, kind } => {
            let msg = format!("{program}: Runtime error: unbalanced bracket {kind}");
            print_error_with_context(&msg, code, *ip);
        }
        RunError::Io { ip, source } => {
            let msg = format!("{program}: I/O error: {source}");
            print_error_with_context(&msg, code, *ip);
        }
    }
}

/// Print a concise error with instruction index and a caret context window,
/// working with UTF-8 by slicing using char indices.
fn print_error_with_context(prefix: &str, code: &str, pos: usize) {
    eprintln!("{prefix} at instruction {pos}");

    // Show a short window around the position for context
    const WINDOW_CHARS: usize = 32;

    let total_chars = code.chars().count();
    let start_char = pos.saturating_sub(WINDOW_CHARS);
    let end_char = (pos + WINDOW_CHARS + 1).min(total_chars);

    let slice = &code[char_to_byte_index(code, start_char)..char_to_byte_index(code, end_char)];
    eprintln!("  {slice}");

    // Caret under the exact position
    let caret_offset = pos.saturating_sub(start_char);
    eprintln!("  {}^", " ".repeat(caret_offset));
    let _ = io::stderr().flush();
}

/// Convert a char index into a byte index in the given UTF-8 string.
/// Indices past the last char map to the end of the string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(s.len())
}
