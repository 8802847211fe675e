const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
pub(crate) struct CliArgs {
    pub(crate) command: Option<String>,
    pub(crate) script: Option<String>,
    pub(crate) json: bool,
    pub(crate) help: bool,
    pub(crate) version: bool,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs {
        command: None,
        script: None,
        json: false,
        help: false,
        version: false,
    };

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "-c" => {
                // Everything after -c is the expression
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                    break;
                }
            }
            "--json" | "-j" => {
                cli.json = true;
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
        r#"calcr-{} An infix arithmetic calculator

USAGE:
    calcr                   Start interactive REPL
    calcr -c <expression>   Evaluate a single expression and print the result
    calcr <file>            Evaluate a file, one expression per line
    calcr --json            Read a JSON request from stdin, print the response
    calcr --help            Show this help message
    calcr --version         Show version

SYNTAX:
    2, 3.5, .25             Decimal literals
    + - * /                 Usual precedence, left associative
    ( )                     Grouping
    whitespace              Ignored

SCRIPT FILES:
    One expression per line; blank lines and lines starting with # are
    skipped. Evaluation stops at the first error.

JSON MODE:
    Input:  {{"expression": "3 + 4 * 2"}}
    Output: {{"result":11.0}} and exit 0, or an error body and exit 1."#,
        VERSION
    );
}
