use std::iter::Peekable;

use crate::{
    ast::Stmt,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, skip_newlines, unexpected},
        },
        tokenizer::SpannedToken,
    },
};

/// Parses the indented block that follows a compound statement header.
///
/// The header's colon is consumed here, followed by the line break and the
/// indentation that opens the block. Statements are then parsed until the
/// matching `Dedent`.
///
/// Grammar: `suite := ":" NEWLINE INDENT block` and
/// `block := statement* DEDENT`
///
/// # Returns
/// The statements of the block, in source order.
///
/// # Errors
/// Returns a `ParseError` if the colon, line break or indentation is missing,
/// if a statement fails to parse, or if input ends before the block closes.
pub(crate) fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a SpannedToken> + Clone
{
    expect(tokens, &Token::Colon, "':'")?;
    expect(tokens, &Token::NewLine, "end of line")?;
    expect(tokens, &Token::Indent, "indented block")?;

    let mut statements = Vec::new();

    loop {
        skip_newlines(tokens);
        match tokens.peek() {
            Some(SpannedToken { token: Token::Dedent,
                                .. }) => {
                tokens.next();
                break;
            },
            Some(found @ SpannedToken { token: Token::Eof,
                                        .. }) => return Err(unexpected(found, "dedent")),
            _ => statements.push(parse_statement(tokens)?),
        }
    }

    Ok(statements)
}
