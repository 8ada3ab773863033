/// Entry points and the expression root.
///
/// Defines the parser result type, the whole-program parser, and
/// `parse_expression`, the top of the precedence hierarchy.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the first token of a logical line to the parsers for `if`,
/// `while`, `def`, `return`, assignments and expression statements.
pub mod statement;

/// Indented block parsing.
///
/// Parses the `":" NEWLINE INDENT statement* DEDENT` suite shared by every
/// compound statement.
pub mod block;

/// Binary operator parsing.
///
/// Implements the comparison, additive and multiplicative precedence levels,
/// all left-associative.
pub mod binary;

/// Primary expression parsing.
///
/// Handles literals, identifiers, calls and parenthesized expressions.
pub mod primary;

/// Shared parsing helpers.
///
/// Token expectations, identifier parsing and comma-separated lists.
pub mod utils;
