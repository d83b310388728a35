use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tapcalc::{Key, Keypad};

use crate::cli::print_help;
use crate::terminal::execute_line;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the interactive REPL
///
/// Each submitted line is lexed into key events and pressed against one
/// long-lived keypad, so results stay on the display between lines.
/// Ctrl-C clears the current entry; Ctrl-D exits.
pub(crate) fn run_repl() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut pad = Keypad::new();

    println!("tapcalc {} - type keys and press enter, 'help' for help", VERSION);

    loop {
        match rl.readline("calc> ") {
            Ok(line) => {
                let trimmed = line.trim();
                match trimmed {
                    "" => continue,
                    "help" => {
                        print_help();
                        continue;
                    }
                    "quit" | "exit" => break,
                    _ => {}
                }

                rl.add_history_entry(trimmed)?;
                if let Some(display) = execute_line(&mut pad, trimmed) {
                    println!("{}", display);
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C wipes the current entry, like the clear key
                pad.press(Key::Clear);
                println!("(cleared)");
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
