//! C99 front-end driver.
//!
//! Commands:
//! - `c99c lex <file.c>`: dump one token per line, report invalid tokens.
//! - `c99c check <file.c>`: report invalid tokens only.
//!
//! Any invalid token makes the exit status non-zero.

use std::io::IsTerminal;
use std::process::ExitCode;

use c99_lexer::{Lexer, SourceBuffer};

mod input;
mod reporting;
mod tracing_setup;

fn main() -> ExitCode {
    tracing_setup::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    match args[1].as_str() {
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("usage: c99c lex <file.c>");
                return ExitCode::FAILURE;
            };
            scan_file(path, true)
        }
        "check" => {
            let Some(path) = args.get(2) else {
                eprintln!("usage: c99c check <file.c>");
                return ExitCode::FAILURE;
            };
            scan_file(path, false)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("c99c {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("unknown command: {other}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!("C99 front end");
    eprintln!();
    eprintln!("usage: c99c <command> [args]");
    eprintln!();
    eprintln!("commands:");
    eprintln!("  lex <file.c>      tokenize a file and dump the token stream");
    eprintln!("  check <file.c>    scan a file and report lexical errors");
    eprintln!("  help              show this help");
    eprintln!("  version           show the version");
}

/// Scan one file; dump tokens when asked; report every invalid token.
fn scan_file(path: &str, dump_tokens: bool) -> ExitCode {
    let source = match input::read_source(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let color = std::io::stderr().is_terminal();
    let buffer = SourceBuffer::new(&source);
    let mut lexer = Lexer::new(&buffer);

    let mut tokens = 0usize;
    let mut invalid = 0usize;
    loop {
        let token = lexer.next_token();
        if token.is_eof() {
            break;
        }
        tokens += 1;
        if token.invalid_message().is_some() {
            invalid += 1;
            let diag = reporting::diagnostic_for(path, &source, &token);
            eprint!("{}", diag.render(color));
        } else if dump_tokens {
            println!("{token}");
        }
    }

    tracing::debug!(path, tokens, invalid, "scanned file");

    if invalid > 0 {
        eprintln!(
            "{path}: {invalid} lexical error{} in {tokens} token{}",
            if invalid == 1 { "" } else { "s" },
            if tokens == 1 { "" } else { "s" },
        );
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
