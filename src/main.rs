//! calcr - an infix arithmetic calculator
//!
//! Usage:
//!   calcr              Start interactive REPL
//!   calcr -c "expr"    Evaluate a single expression
//!   calcr file         Evaluate a script file, one expression per line
//!   calcr --json       Read a JSON request from stdin, print the response

use calcr::api::handle;
use calcr::display::format_number;
use calcr::evaluate;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

mod cli;
mod repl;

use cli::{parse_args, print_help};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args);

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        println!("calcr {}", VERSION);
        return ExitCode::SUCCESS;
    }

    if cli.json {
        return run_json();
    }

    if let Some(expression) = cli.command {
        return run_expression(&expression);
    }

    if let Some(path) = cli.script {
        return run_script(&path);
    }

    repl::run_repl()
}

/// Evaluate one expression and print the result (`-c`).
fn run_expression(expression: &str) -> ExitCode {
    match evaluate(expression) {
        Ok(value) => {
            println!("{}", format_number(value));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("calcr: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Evaluate a script file line by line, printing one result per line.
/// Blank lines and `#` comment lines are skipped; the first error aborts.
fn run_script(path: &str) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("calcr: {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match evaluate(trimmed) {
            Ok(value) => println!("{}", format_number(value)),
            Err(e) => {
                eprintln!("calcr: {}: {}", trimmed, e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Read one JSON request body from stdin and print the mapped response.
/// The exit code follows the status class: 0 for 200, 1 otherwise.
fn run_json() -> ExitCode {
    let mut body = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut body) {
        eprintln!("calcr: failed to read stdin: {}", e);
        return ExitCode::FAILURE;
    }

    let response = handle(&body);
    println!("{}", response.body);

    if response.status == 200 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
