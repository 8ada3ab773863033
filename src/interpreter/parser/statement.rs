use std::iter::Peekable;

use crate::{
    ast::{ElifClause, FunctionDef, Stmt},
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{
                end_of_input, expect, expect_statement_end, parse_comma_separated, parse_identifier,
            },
        },
        tokenizer::SpannedToken,
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an `if` statement with optional `elif`/`else` clauses,
/// - a `while` loop,
/// - a function definition,
/// - a `return` statement,
/// - an assignment,
/// - an expression used as a statement.
///
/// The choice is made from the first token; an assignment is recognised by
/// peeking one token past a leading name.
///
/// Grammar:
/// `statement := if_stmt | while_stmt | funcdef | return_stmt | assignment |
/// expr_stmt`
pub(crate) fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let Some(&first) = tokens.peek() else {
        return Err(end_of_input("statement"));
    };

    match &first.token {
        Token::If => parse_if(tokens),
        Token::While => parse_while(tokens),
        Token::Def => parse_function_definition(tokens),
        Token::Return => parse_return(tokens),
        _ => {
            if let Some(statement) = parse_assignment(tokens)? {
                return Ok(statement);
            }
            let expr = parse_expression(tokens)?;
            expect_statement_end(tokens)?;
            Ok(Stmt::Expression(expr))
        },
    }
}

/// Parses an assignment statement of the form `<identifier> = <expression>`.
///
/// The function performs a limited lookahead: only when the next token is a
/// name and the one after it is `=` is an assignment parsed. Otherwise it
/// returns `Ok(None)` and does not consume tokens.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Stmt>>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let mut lookahead = tokens.clone();
    let is_assignment = matches!(lookahead.next(),
                                 Some(SpannedToken { token: Token::Name(_),
                                                     .. }))
                        && matches!(lookahead.next(),
                                    Some(SpannedToken { token: Token::Equals,
                                                        .. }));
    if !is_assignment {
        return Ok(None);
    }

    let (name, pos) = parse_identifier(tokens)?;
    tokens.next();
    let value = parse_expression(tokens)?;
    expect_statement_end(tokens)?;

    Ok(Some(Stmt::Assignment { name, value, pos }))
}

/// Parses an `if` statement.
///
/// Syntax:
/// ```text
/// if <condition>:
///     <block>
/// elif <condition>:
///     <block>
/// else:
///     <block>
/// ```
/// Any number of `elif` clauses is accepted, kept in source order.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let pos = expect(tokens, &Token::If, "'if'")?;
    let condition = parse_expression(tokens)?;
    let then_body = parse_block(tokens)?;

    let mut elifs = Vec::new();
    while let Some(SpannedToken { token: Token::Elif,
                                  .. }) = tokens.peek()
    {
        tokens.next();
        let condition = parse_expression(tokens)?;
        let body = parse_block(tokens)?;
        elifs.push(ElifClause { condition, body });
    }

    let else_body = match tokens.peek() {
        Some(SpannedToken { token: Token::Else,
                            .. }) => {
            tokens.next();
            Some(parse_block(tokens)?)
        },
        _ => None,
    };

    Ok(Stmt::If { condition,
                  then_body,
                  elifs,
                  else_body,
                  pos })
}

/// Parses a `while` loop: `while <condition>: <block>`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let pos = expect(tokens, &Token::While, "'while'")?;
    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Stmt::While { condition, body, pos })
}

/// Parses a function definition of the form
/// `def <name>(<param>, ...): <block>`.
///
/// Parameters are plain identifiers; an empty list is allowed.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let pos = expect(tokens, &Token::Def, "'def'")?;
    let (name, _) = parse_identifier(tokens)?;
    expect(tokens, &Token::LParen, "'('")?;
    let params = parse_comma_separated(tokens,
                                       |t| parse_identifier(t).map(|(param, _)| param),
                                       &Token::RParen)?;
    let body = parse_block(tokens)?;

    Ok(Stmt::FunctionDef(FunctionDef { name,
                                       params,
                                       body,
                                       pos }))
}

/// Parses `return` with an optional value.
///
/// A `return` directly followed by the end of the line returns no value.
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    let pos = expect(tokens, &Token::Return, "'return'")?;

    let value = match tokens.peek() {
        Some(SpannedToken { token: Token::NewLine,
                            .. }) => None,
        _ => Some(parse_expression(tokens)?),
    };
    expect_statement_end(tokens)?;

    Ok(Stmt::Return { value, pos })
}
