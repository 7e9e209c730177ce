//! A tiny Brainfuck interpreter library.
//!
//! This crate provides a minimal Brainfuck interpreter that operates on a
//! fixed memory tape (2048 cells) with a single tape cursor, executing the
//! program text directly with no intermediate representation.
//!
//! Features and behaviors:
//! - Memory tape of 2048 eight-bit cells, initialized to 0; `+`/`-` wrap.
//! - Strict cursor bounds: moving left from cell 0 or right past the last
//!   cell returns an error.
//! - Output `.` writes the byte at the current cell to stdout (no newline).
//! - Nested loops `[]` are resolved by scanning the text for the matching
//!   bracket at each jump; a bracket whose partner does not exist is
//!   reported as an error when the jump is taken.
//! - Input `,` is not supported; like any other non-instruction character
//!   it is skipped.
//!
//! Quick start:
//!
//! ```no_run
//! use bfrun::Interpreter;
//!
//! // Classic "Hello World!" in Brainfuck
//! let code = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";
//! let mut bf = Interpreter::new(code.to_string());
//! bf.run().expect("program should run");
//! ```

use std::fmt;
use std::io::{self, Write};

pub mod cli_util;

/// Default tape length, in cells.
pub const TAPE_LEN: usize = 2048;

/// Errors that can occur while interpreting Brainfuck code.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The tape cursor attempted to move left of cell 0 or beyond the last cell.
    #[error("Tape cursor out of bounds at instruction {ip} (cursor={cursor}, op='{op}')")]
    TapeOutOfBounds { ip: usize, cursor: usize, op: char },

    /// A bracket jump scanned to the edge of the program without finding a partner.
    #[error("Unbalanced bracket {kind} at instruction {ip}")]
    UnbalancedBracket { ip: usize, kind: BracketKind },

    /// An underlying I/O error occurred while writing output.
    #[error("I/O error at instruction {ip}: {source}")]
    Io {
        ip: usize,
        #[source]
        source: io::Error,
    },
}

/// Which side of the loop was left without a partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Open,
    Close,
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketKind::Open => write!(f, "'['"),
            BracketKind::Close => write!(f, "']'"),
        }
    }
}

/// A simple Brainfuck interpreter.
///
/// The interpreter maintains:
/// - the program text as a `String`,
/// - a fixed-capacity memory tape initialized to zeros (2048 cells by default),
/// - a tape cursor indexing into that tape.
///
/// Each `Interpreter` owns its tape outright; running two programs against
/// the same starting state means constructing two interpreters.
pub struct Interpreter {
    program: String,
    tape: Vec<u8>,
    cursor: usize,
    // Optional hook: when set, '.' sends bytes here instead of stdout.
    output_sink: Option<Box<dyn Fn(&[u8]) + Send + Sync>>,
}

impl Interpreter {
    /// Create a new interpreter from Brainfuck `program` text.
    ///
    /// The memory tape is initialized to [`TAPE_LEN`] zeroed cells.
    pub fn new(program: String) -> Self {
        Self::with_tape_size(program, TAPE_LEN)
    }

    /// Create a new interpreter from Brainfuck `program` text with a custom
    /// tape length.
    pub fn with_tape_size(program: String, cells: usize) -> Self {
        Self {
            program,
            tape: vec![0; cells],
            cursor: 0,
            output_sink: None,
        }
    }

    /// Provide an output sink. When set, '.' sends bytes to this sink instead
    /// of stdout. The sink receives a single-byte slice per '.'.
    pub fn set_output_sink<F>(&mut self, sink: F)
    where
        F: Fn(&[u8]) + Send + Sync + 'static,
    {
        self.output_sink = Some(Box::new(sink));
    }

    /// Execute the Brainfuck program until completion.
    ///
    /// Returns `Ok(())` once the instruction cursor runs past the end of the
    /// program text, or a [`RunError`] on failure. Output bytes are written
    /// as a side effect, in program order.
    pub fn run(&mut self) -> Result<(), RunError> {
        let chars: Vec<char> = self.program.chars().collect();
        let len = chars.len();
        let mut ip = 0;

        while ip < len {
            match chars[ip] {
                '>' => {
                    if self.cursor + 1 >= self.tape.len() {
                        return Err(RunError::TapeOutOfBounds {
                            ip,
                            cursor: self.cursor,
                            op: '>',
                        });
                    }
                    self.cursor += 1;
                }
                '<' => {
                    if self.cursor == 0 {
                        return Err(RunError::TapeOutOfBounds {
                            ip,
                            cursor: self.cursor,
                            op: '<',
                        });
                    }
                    self.cursor -= 1;
                }
                '+' => {
                    self.tape[self.cursor] = self.tape[self.cursor].wrapping_add(1);
                }
                '-' => {
                    self.tape[self.cursor] = self.tape[self.cursor].wrapping_sub(1);
                }
                '.' => {
                    let byte = [self.tape[self.cursor]];
                    if let Some(sink) = self.output_sink.as_ref() {
                        (sink)(&byte);
                    } else {
                        io::stdout()
                            .write_all(&byte)
                            .map_err(|source| RunError::Io { ip, source })?;
                    }
                }
                '[' => {
                    // A zero cell skips the loop; find the matching ']'.
                    // The shared advance below then steps past it.
                    if self.tape[self.cursor] == 0 {
                        ip = seek_close(&chars, ip)?;
                    }
                }
                ']' => {
                    // A nonzero cell repeats the loop; find the matching '['.
                    // The shared advance below then re-enters the body.
                    if self.tape[self.cursor] != 0 {
                        ip = seek_open(&chars, ip)?;
                    }
                }
                // Everything else, ',' included, is a comment character.
                _ => {}
            }
            // Move to the next instruction
            ip += 1;
        }

        Ok(())
    }
}

/// Scan forward from the '[' at `from` to the position of its matching ']'.
///
/// The nesting counter starts at 1 and the scan stops exactly when it
/// returns to 0. Reaching the end of the text first means the bracket has
/// no partner.
fn seek_close(chars: &[char], from: usize) -> Result<usize, RunError> {
    let mut depth = 1;
    let mut ip = from;
    while depth != 0 {
        ip += 1;
        if ip >= chars.len() {
            return Err(RunError::UnbalancedBracket {
                ip: from,
                kind: BracketKind::Open,
            });
        }
        match chars[ip] {
            '[' => depth += 1,
            ']' => depth -= 1,
            _ => {}
        }
    }
    Ok(ip)
}

/// Scan backward from the ']' at `from` to the position of its matching '['.
///
/// Symmetric to [`seek_close`]; reaching the start of the text with the
/// counter still nonzero means the bracket has no partner.
fn seek_open(chars: &[char], from: usize) -> Result<usize, RunError> {
    let mut depth = 1;
    let mut ip = from;
    while depth != 0 {
        if ip == 0 {
            return Err(RunError::UnbalancedBracket {
                ip: from,
                kind: BracketKind::Close,
            });
        }
        ip -= 1;
        match chars[ip] {
            '[' => depth -= 1,
            ']' => depth += 1,
            _ => {}
        }
    }
    Ok(ip)
}
