//! Interactive read-eval-print loop

use calcr::display::format_number;
use calcr::evaluate;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_repl_help() {
    println!("Type an arithmetic expression and press Enter.");
    println!("  .help    Show this message");
    println!("  .exit    Leave the REPL (Ctrl-D also works)");
}

/// Run the interactive loop until EOF or `.exit`.
pub(crate) fn run_repl() -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("calcr: failed to start line editor: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("calcr {} - .help for help, Ctrl-D to exit", VERSION);

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                // Dot-commands are REPL controls, not expressions
                if let Some(cmd) = trimmed.strip_prefix('.') {
                    if cmd.chars().all(|c| c.is_ascii_alphabetic()) {
                        match cmd {
                            "exit" | "quit" => break,
                            "help" => print_repl_help(),
                            other => println!("Unknown command: .{}", other),
                        }
                        continue;
                    }
                    // Not alphabetic: a literal like .25, fall through
                }

                match evaluate(trimmed) {
                    Ok(value) => println!("{}", format_number(value)),
                    Err(e) => println!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C discards the current line, keeps the session
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("calcr: readline error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
