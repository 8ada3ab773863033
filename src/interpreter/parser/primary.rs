use std::iter::Peekable;

use crate::{
    ast::{Expr, Number, Position},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::check_depth,
            core::{ParseResult, parse_expression},
            utils::{end_of_input, expect, parse_comma_separated, unexpected},
        },
        tokenizer::SpannedToken,
    },
};

/// Parses a primary expression.
///
/// A factor is a number, a string, an identifier, a call, or a parenthesized
/// expression. A name is treated as a call only when it is immediately
/// followed by `(`.
///
/// Grammar: `factor := NUMBER | STRING | NAME ["(" args ")"] | "("
/// expression ")"`
///
/// # Errors
/// Returns a `ParseError` if the next token cannot start an expression, or if
/// a call or parenthesized expression is not closed.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let Some(next) = tokens.next() else {
        return Err(end_of_input("expression"));
    };
    let pos = next.pos;

    match &next.token {
        Token::Number(literal) => {
            Ok(Expr::Number { value: parse_number(literal, pos)?,
                              pos })
        },
        Token::Str(value) => Ok(Expr::Str { value: value.clone(),
                                            pos }),
        Token::Name(name) => {
            let identifier = Expr::Identifier { name: name.clone(),
                                                pos };
            if let Some(SpannedToken { token: Token::LParen,
                                       .. }) = tokens.peek()
            {
                tokens.next();
                return parse_call(tokens, identifier);
            }
            Ok(identifier)
        },
        Token::LParen => {
            let inner = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "')'")?;
            Ok(inner)
        },
        _ => Err(unexpected(next, "expression")),
    }
}

/// Parses the arguments of a call whose opening `(` was already consumed.
///
/// Grammar: `args := (expression ("," expression)*)? ")"`
fn parse_call<'a, I>(tokens: &mut Peekable<I>, callee: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let pos = callee.pos();
    let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
    check_depth(arguments.iter().map(Expr::depth).max().unwrap_or(1) + 1, &callee)?;

    Ok(Expr::Call { callee: Box::new(callee),
                    arguments,
                    pos })
}

/// Decides the numeric type of a literal.
///
/// Literals with a decimal point or an exponent are floats; all others are
/// integers.
///
/// # Errors
/// `LiteralTooLarge` if an integer literal does not fit in `i64`.
///
/// # Example
/// ```
/// use minipy::{
///     ast::{Number, Position},
///     interpreter::parser::primary::parse_number,
/// };
///
/// assert_eq!(parse_number("42", Position::new(1, 1)).unwrap(), Number::Int(42));
/// assert_eq!(parse_number("2.5", Position::new(1, 1)).unwrap(), Number::Float(2.5));
/// assert_eq!(parse_number("1e3", Position::new(1, 1)).unwrap(), Number::Float(1000.0));
/// assert!(parse_number("99999999999999999999", Position::new(1, 1)).is_err());
/// ```
pub fn parse_number(literal: &str, pos: Position) -> ParseResult<Number> {
    let too_large = || ParseError::LiteralTooLarge { literal: literal.to_string(),
                                                     line:    pos.line,
                                                     column:  pos.column, };

    if literal.contains(['.', 'e', 'E']) {
        literal.parse::<f64>().map(Number::Float).map_err(|_| too_large())
    } else {
        literal.parse::<i64>().map(Number::Int).map_err(|_| too_large())
    }
}
