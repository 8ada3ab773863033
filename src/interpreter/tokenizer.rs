use std::{collections::VecDeque, iter::FusedIterator};

use logos::Logos;

use crate::{
    ast::Position,
    error::LexError,
    interpreter::lexer::{LexerExtras, Token},
};

/// Width a tab advances the indentation to (the next multiple of this).
pub const TAB_WIDTH: usize = 8;

/// A token together with the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    /// The token.
    pub token: Token,
    /// Where the token starts.
    pub pos:   Position,
}

/// Lazily turns source text into the token stream consumed by the parser.
///
/// Wraps the raw logos lexer with a layout pass that produces logical
/// `NewLine` tokens and synthesizes `Indent`/`Dedent` from leading
/// whitespace. Blank and comment-only lines produce nothing, and line breaks
/// inside parentheses are ignored. The stream always ends with any pending
/// dedents followed by a single `Eof`. After the first error the iterator is
/// exhausted.
pub struct Tokenizer<'src> {
    source:      &'src str,
    lexer:       logos::Lexer<'src, Token>,
    indents:     Vec<usize>,
    pending:     VecDeque<SpannedToken>,
    paren_depth: usize,
    line_open:   bool,
    finished:    bool,
}

/// Starts tokenizing `source`.
///
/// # Example
/// ```
/// use minipy::interpreter::{lexer::Token, tokenizer::tokenize};
///
/// let tokens = tokenize("x = 1\n").map(|t| t.map(|t| t.token))
///                                 .collect::<Result<Vec<_>, _>>()
///                                 .unwrap();
///
/// assert_eq!(tokens,
///            vec![Token::Name("x".into()),
///                 Token::Equals,
///                 Token::Number("1".into()),
///                 Token::NewLine,
///                 Token::Eof]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Tokenizer<'_> {
    Tokenizer { source,
                lexer: Token::lexer_with_extras(source, LexerExtras::default()),
                indents: vec![0],
                pending: VecDeque::new(),
                paren_depth: 0,
                line_open: false,
                finished: false }
}

impl Tokenizer<'_> {
    /// Position of the raw token the lexer just produced.
    fn token_position(&self) -> Position {
        let LexerExtras { line, line_start } = self.lexer.extras;
        let start = self.lexer.span().start;
        Position::new(line, self.source[line_start..start].chars().count() + 1)
    }

    /// Position just past the last character of the source.
    fn end_position(&self) -> Position {
        let LexerExtras { line, line_start } = self.lexer.extras;
        Position::new(line, self.source[line_start..].chars().count() + 1)
    }

    /// Records that the lexer just consumed a line break.
    fn start_new_line(&mut self) {
        self.lexer.extras.line += 1;
        self.lexer.extras.line_start = self.lexer.span().end;
    }

    /// Compares the indentation of the line starting at the current token
    /// with the indent stack and queues the resulting `Indent`/`Dedent`s.
    fn layout(&mut self, pos: Position) -> Result<(), LexError> {
        let prefix = &self.source[self.lexer.extras.line_start..self.lexer.span().start];
        let width = indentation_width(prefix);
        let current = self.indents.last().copied().unwrap_or(0);

        if width > current {
            self.indents.push(width);
            self.pending.push_back(SpannedToken { token: Token::Indent,
                                                  pos });
        } else if width < current {
            while let Some(&top) = self.indents.last()
                  && top > width
            {
                self.indents.pop();
                self.pending.push_back(SpannedToken { token: Token::Dedent,
                                                      pos });
            }
            if self.indents.last() != Some(&width) {
                return Err(LexError::InconsistentDedent { line:   pos.line,
                                                          column: pos.column, });
            }
        }

        Ok(())
    }

    /// Queues the tokens that close the input: the last `NewLine`, one
    /// `Dedent` per open block and `Eof`.
    fn finish(&mut self) {
        let pos = self.end_position();
        if self.line_open {
            self.line_open = false;
            self.pending.push_back(SpannedToken { token: Token::NewLine,
                                                  pos });
        }
        while self.indents.len() > 1 {
            self.indents.pop();
            self.pending.push_back(SpannedToken { token: Token::Dedent,
                                                  pos });
        }
        self.pending.push_back(SpannedToken { token: Token::Eof,
                                              pos });
        self.finished = true;
    }

    /// Classifies the slice the raw lexer failed on.
    fn lex_error(&self, pos: Position) -> LexError {
        let slice = self.lexer.slice();
        match slice.chars().next() {
            Some('"' | '\'') => LexError::UnterminatedString { line:   pos.line,
                                                                column: pos.column, },
            character => LexError::UnrecognizedCharacter { character: character.unwrap_or('\0'),
                                                            line:      pos.line,
                                                            column:    pos.column, },
        }
    }

    fn fail(&mut self, error: LexError) -> Option<Result<SpannedToken, LexError>> {
        self.finished = true;
        self.pending.clear();
        Some(Err(error))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<SpannedToken, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            if self.finished {
                return None;
            }

            let Some(raw) = self.lexer.next() else {
                self.finish();
                continue;
            };
            let pos = self.token_position();

            match raw {
                Err(()) => {
                    let error = self.lex_error(pos);
                    return self.fail(error);
                },
                Ok(Token::NewLine) => {
                    self.start_new_line();
                    if self.line_open && self.paren_depth == 0 {
                        self.line_open = false;
                        return Some(Ok(SpannedToken { token: Token::NewLine,
                                                      pos }));
                    }
                },
                Ok(token) => {
                    if !self.line_open {
                        self.line_open = true;
                        if let Err(error) = self.layout(pos) {
                            return self.fail(error);
                        }
                    }
                    match token {
                        Token::LParen => self.paren_depth += 1,
                        Token::RParen => self.paren_depth = self.paren_depth.saturating_sub(1),
                        _ => {},
                    }
                    self.pending.push_back(SpannedToken { token, pos });
                },
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Computes the indentation width of a line's leading whitespace.
///
/// Spaces count one column, a tab advances to the next multiple of
/// [`TAB_WIDTH`] and a form feed resets the width.
///
/// # Example
/// ```
/// use minipy::interpreter::tokenizer::indentation_width;
///
/// assert_eq!(indentation_width("    "), 4);
/// assert_eq!(indentation_width("  \t"), 8);
/// ```
#[must_use]
pub fn indentation_width(prefix: &str) -> usize {
    prefix.chars().fold(0, |width, c| match c {
                      ' ' => width + 1,
                      '\t' => (width / TAB_WIDTH + 1) * TAB_WIDTH,
                      '\u{c}' => 0,
                      _ => width,
                  })
}

/// Tokenizes the entire source, stopping at the first lexical error.
///
/// # Errors
/// Returns the first [`LexError`] encountered.
pub fn tokenize_all(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    tokenize(source).collect()
}
