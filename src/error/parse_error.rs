#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token the grammar does not allow at this point.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The column of the offending token.
        column:   usize,
    },
    /// The token stream ended without an end-of-input marker.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// Line of the last token in the stream.
        line:     usize,
        /// Column of the last token in the stream.
        column:   usize,
    },
    /// An integer literal does not fit in 64 bits.
    LiteralTooLarge {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The column of the literal.
        column:  usize,
    },
    /// Parentheses, blocks or operator chains are nested deeper than the
    /// parser allows.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:  usize,
        /// The source line where the limit was exceeded.
        line:   usize,
        /// The column of the token that exceeded the limit.
        column: usize,
    },
}

impl ParseError {
    /// The 1-based source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::LiteralTooLarge { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }

    /// The 1-based column of the error.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedToken { column, .. }
            | Self::UnexpectedEndOfInput { column, .. }
            | Self::LiteralTooLarge { column, .. }
            | Self::NestingTooDeep { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line,
                                    .. } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },
            Self::UnexpectedEndOfInput { expected, line, .. } => {
                write!(f, "Error on line {line}: Unexpected end of input, expected {expected}.")
            },
            Self::LiteralTooLarge { literal, line, .. } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
            Self::NestingTooDeep { limit, line, .. } => {
                write!(f, "Error on line {line}: Nesting exceeds the limit of {limit}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
