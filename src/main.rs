//! tapcalc - a keypad-driven arithmetic calculator
//!
//! Usage:
//!   tapcalc             Start interactive REPL
//!   tapcalc -c "2+3*4"  Evaluate a single key line
//!   tapcalc calc.txt    Evaluate a file, one key line per line

mod cli;
mod repl;
mod terminal;

use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = cli::parse_args(&args);

    if cli.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    if let Some(keys) = cli.command {
        return cli::run_command(&keys);
    }

    if let Some(script) = cli.script {
        return cli::run_script(&script);
    }

    match repl::run_repl() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}
