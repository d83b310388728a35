use crate::terminal::execute_line;
use std::fs;
use std::process::ExitCode;
use tapcalc::{Keypad, ERROR_DISPLAY};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
pub(crate) struct CliArgs {
    pub(crate) command: Option<String>,
    pub(crate) script: Option<String>,
    pub(crate) help: bool,
    pub(crate) version: bool,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs {
        command: None,
        script: None,
        help: false,
        version: false,
    };

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "-c" => {
                // Everything after -c is the key line
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                    break;
                }
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            path => {
                // Assume it's a script file if not a flag
                if !path.starts_with('-') {
                    cli.script = Some(path.to_string());
                }
            }
        }
        i += 1;
    }

    cli
}

pub(crate) fn print_help() {
    println!(
        r#"tapcalc-{} A keypad-driven arithmetic calculator

USAGE:
    tapcalc                 Start interactive REPL
    tapcalc -c <keys>       Evaluate a single key line
    tapcalc <file>          Evaluate a file, one key line per line
    tapcalc --help          Show this help message
    tapcalc --version       Show version

KEYS:
    0-9                     Digit keys
    . or ,                  Decimal point
    + - * /                 Operators (* and / bind before + and -)
    =                       Evaluate (submitting a line also evaluates)
    c or C                  Clear
    anything else           Ignored

EXAMPLES:
    tapcalc -c "2+3*4"      Prints 14
    tapcalc -c "10-2-3"     Prints 5 (left to right)
    tapcalc -c "5/0"        Prints Error, exits nonzero"#,
        VERSION
    );
}

pub(crate) fn print_version() {
    println!("tapcalc {}", VERSION);
}

/// Evaluate a single key line and print the resulting display
pub(crate) fn run_command(keys: &str) -> ExitCode {
    let mut pad = Keypad::new();
    let display = execute_line(&mut pad, keys).unwrap_or_else(|| "0".to_string());
    println!("{}", display);
    if display == ERROR_DISPLAY {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Evaluate a script file, one key line per line
pub(crate) fn run_script(path: &str) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("tapcalc: {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    // One keypad for the whole script: results stay on the display
    // between lines, just like a desk calculator.
    let mut pad = Keypad::new();
    for line in content.lines() {
        if let Some(display) = execute_line(&mut pad, line) {
            println!("{}", display);
        }
    }
    ExitCode::SUCCESS
}
