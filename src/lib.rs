//! # minipy
//!
//! minipy is an interpreter for a small indentation-sensitive scripting
//! language with integers, floats, strings, `if`/`elif`/`else`, `while`, and
//! functions with closures.
//!
//! Source text flows through four phases: the tokenizer produces a layout
//! aware token stream, the parser builds a [`ast::Program`], the scope checker
//! rejects reads of undeclared names, and the evaluator executes the tree.
//!
//! ```
//! let mut out = Vec::new();
//! minipy::run_source("def add(a, b):\n    return a + b\nprint(add(2, 3))\n", &mut out).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "5\n");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Program,
    error::Error,
    interpreter::{
        checker::check,
        evaluator::core::Context,
        parser::core::parse,
        tokenizer::{SpannedToken, tokenize_all},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Stmt` and `Expr` enums and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser, inspected by the scope checker and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source positions to every node for error reporting.
pub mod ast;
/// Provides unified error types for every phase.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, checking or evaluating code, each with the source location of the
/// failure.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Aggregates them in `Error` for callers running the whole pipeline.
pub mod error;
/// Orchestrates the phases of code execution.
///
/// This module ties together tokenizing, parsing, scope checking, evaluation
/// and the runtime value types.
pub mod interpreter;
/// General utilities for numeric formatting.
///
/// # Responsibilities
/// - Format floats the way programs print them.
pub mod util;

/// Tokenizes `source` into the complete token stream.
///
/// # Errors
/// Returns the first lexical error.
///
/// # Examples
/// ```
/// use minipy::{interpreter::lexer::Token, tokenize_source};
///
/// let tokens = tokenize_source("if x:\n    y = 1\n").unwrap();
///
/// assert!(tokens.iter().any(|t| t.token == Token::Indent));
/// assert_eq!(tokens.last().map(|t| &t.token), Some(&Token::Eof));
/// ```
pub fn tokenize_source(source: &str) -> Result<Vec<SpannedToken>, Error> {
    Ok(tokenize_all(source)?)
}

/// Tokenizes and parses `source`.
///
/// # Errors
/// Returns the first lexical or syntax error.
///
/// # Examples
/// ```
/// use minipy::parse_source;
///
/// let program = parse_source("x = 1\nprint(x)\n").unwrap();
/// assert_eq!(program.body.len(), 2);
///
/// assert!(parse_source("x = = 1\n").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize_all(source)?;
    Ok(parse(&tokens)?)
}

/// Tokenizes, parses and scope-checks `source`.
///
/// # Errors
/// Returns the first error of any of the three phases.
///
/// # Examples
/// ```
/// use minipy::{check_source, error::Error};
///
/// assert!(check_source("x = 1\nprint(x)\n").is_ok());
/// assert!(matches!(check_source("print(y)\n"), Err(Error::Scope(_))));
/// ```
pub fn check_source(source: &str) -> Result<Program, Error> {
    let program = parse_source(source)?;
    check(&program)?;
    Ok(program)
}

/// Runs `source` through every phase, writing program output to `output`.
///
/// Nothing is executed unless the program tokenizes, parses and passes the
/// scope checker. Output written before a runtime error is kept.
///
/// # Errors
/// Returns the first error of any phase.
///
/// # Examples
/// ```
/// use minipy::{error::Error, run_source};
///
/// let mut out = Vec::new();
/// run_source("i = 0\nwhile i < 3:\n    print(i)\n    i = i + 1\n", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "0\n1\n2\n");
///
/// let mut out = Vec::new();
/// let result = run_source("print(1 / 0)\n", &mut out);
/// assert!(matches!(result, Err(Error::Runtime(_))));
/// ```
pub fn run_source(source: &str, output: &mut dyn Write) -> Result<(), Error> {
    let program = check_source(source)?;
    Context::new(output).run(&program)?;
    Ok(())
}

/// Runs `source`, printing program output to standard output.
///
/// # Errors
/// Returns an error if any phase fails.
///
/// # Examples
/// ```
/// use minipy::get_result;
///
/// let source = "result = 2 + 2\n";
/// assert!(get_result(source).is_ok());
///
/// // 'x' is not defined
/// let source = "y = x + 1\n";
/// assert!(get_result(source).is_err());
/// ```
pub fn get_result(source: &str) -> Result<(), Error> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_source(source, &mut handle)
}
