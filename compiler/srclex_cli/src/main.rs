//! srclex CLI
//!
//! Lexes a file with a configuration given on the command line and prints
//! the token stream.

mod error;
mod logging;
mod options;

use std::io::Read;
use std::process::ExitCode;

use srclex::Lexer;

use crate::error::CliError;
use crate::options::parse_lex_options;

fn main() -> ExitCode {
    logging::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    match command.as_str() {
        "lex" => match lex_file(&args[2..]) {
            Ok(code) => code,
            Err(err) => {
                eprintln!("error: {err}");
                if matches!(err, CliError::MissingPath) {
                    eprintln!("Usage: srclex lex <file|-> [options]");
                }
                ExitCode::FAILURE
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

/// Lex a file and display the token stream.
///
/// Exits with failure if the scan recorded any issues.
fn lex_file(args: &[String]) -> Result<ExitCode, CliError> {
    let options = parse_lex_options(args)?;
    let source = read_source(&options.path)?;
    tracing::debug!(path = %options.path, bytes = source.len(), "read source");

    let mut lexer = Lexer::new(options.to_config());
    lexer.analyze(source);

    println!(
        "Tokens for '{}' ({} tokens):",
        options.path,
        lexer.remaining()
    );
    for token in lexer.by_ref() {
        println!(
            "  {} {:?} @ {}:{}",
            token.kind,
            token.text(),
            token.line(),
            token.column()
        );
    }

    if lexer.issues().is_empty() {
        return Ok(ExitCode::SUCCESS);
    }
    for issue in lexer.issues() {
        eprintln!("error: {issue}");
    }
    Ok(ExitCode::FAILURE)
}

fn read_source(path: &str) -> Result<String, CliError> {
    let read_err = |source: std::io::Error| CliError::Read {
        path: path.to_owned(),
        source,
    };
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(read_err)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).map_err(read_err)
    }
}

fn print_usage() {
    println!("srclex - configuration-driven lexical scanner");
    println!();
    println!("Usage: srclex <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file|->     Print the token stream of a file (or stdin)");
    println!("  help             Show this message");
    println!();
    println!("Lex options (lists are whitespace-separated):");
    println!("  --keywords=<words>        Reserved keywords, e.g. --keywords=\"if else\"");
    println!("  --symbols=<symbols>       Operators/punctuation, e.g. --symbols=\"== = ,\"");
    println!("  --string=<open close>     String delimiters, e.g. --string='\" \"'");
    println!("  --line-comment=<marker>   Line comment marker, e.g. --line-comment=//");
    println!("  --block-comment=<o c>     Block comment markers, e.g. --block-comment='/* */'");
    println!();
    println!("Set RUST_LOG=srclex=debug to trace the scan.");
}
