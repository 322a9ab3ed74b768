//! Command-line interface for redacted
//! This binary lexes and parses redacted report files and prints them in different formats.
//!
//! Usage:
//!   redacted execute `<path>` [--format `<format>`]  - Process a file and print the result
//!   redacted list-formats                          - List all available formats
//!
//! Set `RUST_LOG=redacted=debug` (or `trace`) to see what the lexer and grammar are doing.

use clap::{Arg, Command};
use redacted::redacted::processor::{available_formats, process_file, ProcessingSpec};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("redacted")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and processing redacted report files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("execute")
                .about("Lex or parse a file and print it in the chosen format")
                .arg(
                    Arg::new("path")
                        .help("Path to the redacted file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'token-simple', 'ast-treeviz')")
                        .default_value("ast-treeviz"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("execute", execute_matches)) => {
            let path = execute_matches.get_one::<String>("path").unwrap();
            let format = execute_matches.get_one::<String>("format").unwrap();
            handle_execute_command(path, format);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the execute command
fn handle_execute_command(path: &str, format: &str) {
    let output = ProcessingSpec::from_string(format)
        .and_then(|spec| process_file(path, &spec))
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
