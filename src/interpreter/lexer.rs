use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
///
/// `Indent`, `Dedent` and `Eof` are never matched by the raw lexer; the
/// layout pass in [`crate::interpreter::tokenizer`] synthesizes them from
/// line indentation.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2e10`.
    /// The text is kept verbatim; the parser decides between integer and
    /// float.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),
    /// String literal tokens in single or double quotes, escapes decoded.
    #[token("\"", lex_string)]
    #[token("'", lex_string)]
    Str(String),
    /// `if`
    #[token("if")]
    If,
    /// `elif`
    #[token("elif")]
    Elif,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `def`
    #[token("def")]
    Def,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; variable or function names such as `x` or `add`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Name(String),
    /// `# Comments` running to the end of the line.
    #[token("#", |lex| {
        let rest = lex.remainder();
        let len  = rest.find(['\r', '\n']).unwrap_or(rest.len());
        lex.bump(len);
        logos::Skip
    })]
    Comment,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// End of a physical line. The layout pass turns these into logical
    /// `NEWLINE` tokens or drops them.
    #[regex(r"\r?\n")]
    NewLine,
    /// Spaces, tabs and feeds between tokens.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
    /// Indentation increased relative to the enclosing block.
    Indent,
    /// Indentation decreased; one token per closed block.
    Dedent,
    /// End of input.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so that
/// tokens can be given a line and a character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Scans a string literal whose opening quote is the current token slice.
///
/// The literal must close on the same line. Escapes are decoded once:
/// `\n`, `\t`, `\r`, `\0`, `\a`, `\b`, `\f`, `\v`, `\\`, `\'` and `\"`.
/// Unknown escapes keep their backslash.
///
/// # Returns
/// - `Some(String)`: The decoded contents; the lexer is advanced past the
///   closing quote.
/// - `None`: The literal is unterminated.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let quote = lex.slice().chars().next()?;
    let mut value = String::new();
    let mut end = None;
    let mut chars = lex.remainder().char_indices();

    while let Some((offset, c)) = chars.next() {
        match c {
            '\\' => {
                let (_, escaped) = chars.next()?;
                match escaped {
                    'n' => value.push('\n'),
                    't' => value.push('\t'),
                    'r' => value.push('\r'),
                    '0' => value.push('\0'),
                    'a' => value.push('\u{7}'),
                    'b' => value.push('\u{8}'),
                    'f' => value.push('\u{c}'),
                    'v' => value.push('\u{b}'),
                    '\\' | '\'' | '"' => value.push(escaped),
                    '\n' | '\r' => return None,
                    other => {
                        value.push('\\');
                        value.push(other);
                    },
                }
            },
            '\n' | '\r' => return None,
            c if c == quote => {
                end = Some(offset + c.len_utf8());
                break;
            },
            c => value.push(c),
        }
    }

    lex.bump(end?);
    Some(value)
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Str(s) => write!(f, "string {s:?}"),
            Self::Name(n) => write!(f, "name '{n}'"),
            Self::If => write!(f, "'if'"),
            Self::Elif => write!(f, "'elif'"),
            Self::Else => write!(f, "'else'"),
            Self::While => write!(f, "'while'"),
            Self::Def => write!(f, "'def'"),
            Self::Return => write!(f, "'return'"),
            Self::Comment => write!(f, "comment"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::LessEqual => write!(f, "'<='"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::Equals => write!(f, "'='"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Colon => write!(f, "':'"),
            Self::Comma => write!(f, "','"),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => write!(f, "whitespace"),
            Self::Indent => write!(f, "indent"),
            Self::Dedent => write!(f, "dedent"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}
