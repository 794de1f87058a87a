//! CLI tool to inspect how Evy source files lex.

use std::fs;
use std::process::ExitCode;

use evy_editor_rs::{TokenKind, tokenize};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: evy-editor <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  tokens  Print the classified token stream of Evy file(s)");
        eprintln!("  check   Report characters the lexer cannot classify");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  evy-editor tokens draw.evy");
        eprintln!("  evy-editor check draw.evy");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "tokens" => print_tokens(&content),
            "check" => {
                had_error |= check(path, &content);
            }
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_error { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn print_tokens(content: &str) {
    for token in tokenize(content) {
        println!("{:<8} {:?}", token.kind, token.text);
    }
}

/// Report error tokens with their line numbers. Returns true if
/// any were found.
fn check(path: &str, content: &str) -> bool {
    let mut line = 1_usize;
    let mut found = false;

    for token in tokenize(content) {
        match token.kind {
            TokenKind::Newline => line += 1,
            TokenKind::Error => {
                eprintln!("{path}:{line}: unrecognized character {:?}", token.text);
                found = true;
            }
            _ => {}
        }
    }

    if !found {
        eprintln!("{path}: ok");
    }
    found
}
