use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{MAX_EXPRESSION_DEPTH, ParseResult},
            primary::parse_factor,
        },
        tokenizer::SpannedToken,
    },
};

/// Parses relational and equality operators.
///
/// This parser handles all comparison operators:
/// `==`, `!=`, `<`, `<=`, `>`, `>=`. Comparisons bind more loosely than
/// arithmetic and chain left-associatively, so `a < b == c` is
/// `(a < b) == c`.
///
/// The rule is: `comparison := arith (("==" | "!=" | "<" | "<=" | ">" |
/// ">=") arith)*`
pub(crate) fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let mut left = parse_arith(tokens)?;
    let mut depth = left.depth();

    while let Some(op) = peek_operator(tokens, BinaryOperator::is_comparison) {
        tokens.next();
        let right = parse_arith(tokens)?;
        depth = check_depth(depth.max(right.depth()) + 1, &right)?;
        left = binary(left, op, right);
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `arith := term (("+" | "-") term)*`
pub(crate) fn parse_arith<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let mut left = parse_term(tokens)?;
    let mut depth = left.depth();

    while let Some(op) =
        peek_operator(tokens, |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub))
    {
        tokens.next();
        let right = parse_term(tokens)?;
        depth = check_depth(depth.max(right.depth()) + 1, &right)?;
        left = binary(left, op, right);
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
pub(crate) fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let mut left = parse_factor(tokens)?;
    let mut depth = left.depth();

    while let Some(op) =
        peek_operator(tokens, |op| matches!(op, BinaryOperator::Mul | BinaryOperator::Div))
    {
        tokens.next();
        let right = parse_factor(tokens)?;
        depth = check_depth(depth.max(right.depth()) + 1, &right)?;
        left = binary(left, op, right);
    }

    Ok(left)
}

/// Returns the operator of the next token if it belongs to the current
/// precedence level. Does not consume anything.
fn peek_operator<'a, I>(tokens: &mut Peekable<I>,
                        accept: impl Fn(BinaryOperator) -> bool)
                        -> Option<BinaryOperator>
    where I: Iterator<Item = &'a SpannedToken>
{
    tokens.peek()
          .and_then(|next| token_to_binary_operator(&next.token))
          .filter(|op| accept(*op))
}

/// Fails with `NestingTooDeep` at `culprit` once `depth` exceeds
/// [`MAX_EXPRESSION_DEPTH`], so long operator chains stop growing the tree.
pub(in crate::interpreter::parser) fn check_depth(depth: usize,
                                                  culprit: &Expr)
                                                  -> ParseResult<usize> {
    if depth > MAX_EXPRESSION_DEPTH {
        let pos = culprit.pos();
        return Err(ParseError::NestingTooDeep { limit:  MAX_EXPRESSION_DEPTH,
                                                line:   pos.line,
                                                column: pos.column, });
    }
    Ok(depth)
}

/// Builds a binary node positioned at its left operand.
fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    let pos = left.pos();
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     pos }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// and `None` for all other tokens.
///
/// # Example
/// ```
/// use minipy::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus), Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LessEqual),
///            Some(BinaryOperator::LessEqual));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}
