/// Lexing errors.
///
/// Raised by the tokenizer for malformed input such as an unterminated string
/// literal, a character outside the language, or a dedent that matches no
/// enclosing indentation level.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all grammar violations detected while building the syntax tree.
/// The parser performs no recovery, so the first violation is reported
/// together with what was expected and what was found.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// names, type mismatches, division by zero, calls of non-functions and
/// exhausted call depth.
pub mod runtime_error;
/// Scope checking errors.
///
/// Reported by the scope checker when an identifier is read without being
/// declared in any enclosing scope.
pub mod scope_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use scope_error::ScopeError;

/// Any failure of the source pipeline.
///
/// Each phase keeps its own error type; this enum lets callers run the whole
/// pipeline with `?` while still matching on the phase that failed.
#[derive(Debug)]
pub enum Error {
    /// The tokenizer rejected the input.
    Lex(LexError),
    /// The parser rejected the token stream.
    Parse(ParseError),
    /// The scope checker found an undeclared name.
    Scope(ScopeError),
    /// Execution failed.
    Runtime(RuntimeError),
}

impl Error {
    /// The 1-based source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line(),
            Self::Parse(e) => e.line(),
            Self::Scope(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }

    /// The 1-based column the error refers to, when the phase knows it.
    ///
    /// Runtime errors only carry a line.
    #[must_use]
    pub const fn column(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.column()),
            Self::Parse(e) => Some(e.column()),
            Self::Scope(e) => Some(e.column()),
            Self::Runtime(_) => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Scope(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Scope(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ScopeError> for Error {
    fn from(e: ScopeError) -> Self {
        Self::Scope(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
