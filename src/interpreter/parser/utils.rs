use std::iter::Peekable;

use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult, tokenizer::SpannedToken},
};

/// Builds the error for `found` appearing where `expected` was required.
pub(in crate::interpreter::parser) fn unexpected(found: &SpannedToken, expected: &str) -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found:    found.token.to_string(),
                                  line:     found.pos.line,
                                  column:   found.pos.column, }
}

/// Builds the error for a token stream that stopped before `Eof`.
///
/// [`parse`](crate::interpreter::parser::core::parse) rejects unterminated
/// streams at the position of their last token before descending, so the
/// sub-parsers only get here on crate-internal misuse. The start of input is
/// the only position known at that point.
pub(in crate::interpreter::parser) fn end_of_input(expected: &str) -> ParseError {
    let start = Position::new(1, 1);
    ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                       line:     start.line,
                                       column:   start.column, }
}

/// Consumes the next token, which must equal `token`.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// `UnexpectedToken` naming `expected` when a different token is found, or
/// `UnexpectedEndOfInput` when the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    token: &Token,
                                                    expected: &str)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a SpannedToken>
{
    match tokens.next() {
        Some(found) if found.token == *token => Ok(found.pos),
        Some(found) => Err(unexpected(found, expected)),
        None => Err(end_of_input(expected)),
    }
}

/// Skips any `NewLine` tokens at the current position.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a SpannedToken>
{
    while let Some(SpannedToken { token: Token::NewLine,
                                  .. }) = tokens.peek()
    {
        tokens.next();
    }
}

/// Requires the `NewLine` that terminates a simple statement.
pub(in crate::interpreter::parser) fn expect_statement_end<'a, I>(tokens: &mut Peekable<I>)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a SpannedToken>
{
    expect(tokens, &Token::NewLine, "end of line").map(|_| ())
}

/// Parses a plain identifier and returns its name and position.
///
/// # Errors
/// Returns a `ParseError` if the next token is not a name.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, Position)>
    where I: Iterator<Item = &'a SpannedToken>
{
    match tokens.next() {
        Some(SpannedToken { token: Token::Name(name),
                            pos, }) => Ok((name.clone(), *pos)),
        Some(found) => Err(unexpected(found, "identifier")),
        None => Err(end_of_input("identifier")),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by parameter lists and call arguments. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// closing token is consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let mut items = Vec::new();
    if let Some(next) = tokens.peek()
       && next.token == *closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(SpannedToken { token: Token::Comma,
                                .. }) => {},
            Some(next) if next.token == *closing => break,
            Some(found) => return Err(unexpected(found, &format!("',' or {closing}"))),
            None => return Err(end_of_input(&closing.to_string())),
        }
    }
    Ok(items)
}
