use bfrun::cli_util::print_run_error;
use bfrun::Interpreter;
use clap::Parser;
use std::env;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(name = "bfrun", version, about = "Run Brainfuck programs supplied as command-line arguments")]
struct Cli {
    /// Brainfuck program texts; each is executed as an independent run
    /// against a fresh 2048-cell tape, in the order given.
    #[arg(value_name = "PROGRAM", trailing_var_arg = true, allow_hyphen_values = true)]
    programs: Vec<String>,
}

/// Executes a single Brainfuck program contained in `code`.
/// - Program output goes to stdout.
/// - Errors are printed concisely to stderr.
///
/// Returns whether the run completed without error.
fn execute_run(program: &str, code: &str) -> bool {
    let mut bf = Interpreter::new(code.to_string());
    if let Err(err) = bf.run() {
        print_run_error(program, code, &err);
        let _ = io::stderr().flush();
        return false;
    }
    true
}

fn main() {
    // We still pull the program name for error rendering consistency
    let program = env::args().next().unwrap_or_else(|| String::from("bfrun"));

    let cli = Cli::parse();

    // A failed run aborts only itself; the remaining programs still execute.
    let mut failed = false;
    for code in &cli.programs {
        if !execute_run(&program, code) {
            failed = true;
        }
    }

    let _ = io::stdout().flush();
    std::process::exit(if failed { 1 } else { 0 });
}
