use std::{fs, process::ExitCode};

use clap::Parser;
use minipy::{check_source, error::Error, get_result, parse_source, tokenize_source};

/// minipy runs small indentation-sensitive scripts with integers, strings,
/// conditionals, loops and functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Only tokenize, parse and scope-check the script.
    #[arg(short, long)]
    check: bool,

    /// Print the token stream instead of running the script.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Print the syntax tree instead of running the script.
    #[arg(long)]
    ast: bool,

    /// Path of the script to run.
    path: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Ok(script) = fs::read_to_string(&args.path) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.path);
        return ExitCode::FAILURE;
    };

    let result = if args.tokens {
        tokenize_source(&script).map(|tokens| {
                                    for t in tokens {
                                        println!("{}\t{}", t.pos, t.token);
                                    }
                                })
    } else if args.ast {
        parse_source(&script).map(|program| println!("{program:#?}"))
    } else if args.check {
        check_source(&script).map(|_| ())
    } else {
        get_result(&script)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&args.path, &script, &e);
            ExitCode::FAILURE
        },
    }
}

/// Prints `e` with its location, the offending source line and, when the
/// column is known, a caret under it.
fn report(path: &str, script: &str, e: &Error) {
    let line = e.line();
    match e.column() {
        Some(column) => eprintln!("{path}:{line}:{column}: {e}"),
        None => eprintln!("{path}:{line}: {e}"),
    }

    let Some(text) = line.checked_sub(1).and_then(|i| script.lines().nth(i)) else {
        return;
    };
    eprintln!("    {text}");
    if let Some(column) = e.column() {
        let padding: String = text.chars()
                                  .take(column.saturating_sub(1))
                                  .map(|c| if c == '\t' { '\t' } else { ' ' })
                                  .collect();
        eprintln!("    {padding}^");
    }
}
