use std::iter::Peekable;

use crate::{
    ast::{Expr, Position, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_comparison,
            statement::parse_statement,
            utils::{end_of_input, skip_newlines},
        },
        tokenizer::SpannedToken,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest allowed nesting of parentheses and of indented blocks.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Deepest allowed expression tree, counting every operator and call level.
pub const MAX_EXPRESSION_DEPTH: usize = 200;

/// Parses a complete token stream into a [`Program`].
///
/// The stream must end with `Token::Eof`, as produced by the tokenizer.
/// Parsing stops at the first grammar violation; no partial tree is
/// returned.
///
/// # Errors
/// - `UnexpectedEndOfInput` at the last token if the stream does not end
///   with `Eof`.
/// - `NestingTooDeep` if parentheses or blocks nest deeper than
///   [`MAX_NESTING_DEPTH`], or an expression is deeper than
///   [`MAX_EXPRESSION_DEPTH`].
/// - Otherwise a [`ParseError`] describing the expected and the found token.
///
/// # Example
/// ```
/// use minipy::interpreter::{parser::core::parse, tokenizer::tokenize_all};
///
/// let tokens = tokenize_all("x = 1\nprint(x)\n").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.body.len(), 2);
/// ```
pub fn parse(tokens: &[SpannedToken]) -> ParseResult<Program> {
    check_terminated(tokens)?;
    check_nesting(tokens)?;
    let mut iter = tokens.iter().peekable();
    parse_program(&mut iter)
}

/// Requires the stream to end with `Eof`. An empty stream is reported at
/// `1:1`.
fn check_terminated(tokens: &[SpannedToken]) -> ParseResult<()> {
    match tokens.last() {
        Some(SpannedToken { token: Token::Eof,
                            .. }) => Ok(()),
        last => {
            let pos = last.map_or(Position::new(1, 1), |token| token.pos);
            Err(ParseError::UnexpectedEndOfInput { expected: "end of input".to_string(),
                                                   line:     pos.line,
                                                   column:   pos.column, })
        },
    }
}

/// Rejects parenthesis and block nesting beyond [`MAX_NESTING_DEPTH`].
///
/// Runs over the flat token stream so the recursive descent never sees more
/// nesting than it can hold on the stack.
fn check_nesting(tokens: &[SpannedToken]) -> ParseResult<()> {
    let mut parens = 0usize;
    let mut blocks = 0usize;

    for token in tokens {
        let depth = match token.token {
            Token::LParen => {
                parens += 1;
                parens
            },
            Token::RParen => {
                parens = parens.saturating_sub(1);
                continue;
            },
            Token::Indent => {
                blocks += 1;
                blocks
            },
            Token::Dedent => {
                blocks = blocks.saturating_sub(1);
                continue;
            },
            _ => continue,
        };
        if depth > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                    line:   token.pos.line,
                                                    column: token.pos.column, });
        }
    }
    Ok(())
}

/// Parses statements until `Eof`.
///
/// Grammar: `program := statement* EOF`
///
/// Stray `NewLine` tokens between statements are skipped.
pub(crate) fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let mut body = Vec::new();

    loop {
        skip_newlines(tokens);
        match tokens.peek() {
            Some(SpannedToken { token: Token::Eof, .. }) => break,
            Some(_) => body.push(parse_statement(tokens)?),
            None => return Err(end_of_input("end of input")),
        }
    }

    Ok(Program { body })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, comparison, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := comparison`
pub(crate) fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    parse_comparison(tokens)
}
