#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing.
pub enum LexError {
    /// A string literal was not closed before the end of its line.
    UnterminatedString {
        /// The source line where the literal starts.
        line:   usize,
        /// The column of the opening quote.
        column: usize,
    },
    /// A character that starts no token of the language.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The column of the character.
        column:    usize,
    },
    /// A line dedents to a width that matches no enclosing block.
    InconsistentDedent {
        /// The source line where the error occurred.
        line:   usize,
        /// The column of the first token on the line.
        column: usize,
    },
}

impl LexError {
    /// The 1-based source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line, .. }
            | Self::UnrecognizedCharacter { line, .. }
            | Self::InconsistentDedent { line, .. } => *line,
        }
    }

    /// The 1-based column of the error.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnterminatedString { column, .. }
            | Self::UnrecognizedCharacter { column, .. }
            | Self::InconsistentDedent { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { line, .. } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },
            Self::UnrecognizedCharacter { character, line, .. } => {
                write!(f, "Error on line {line}: Unrecognized character {character:?}.")
            },
            Self::InconsistentDedent { line, .. } => write!(f,
                                                            "Error on line {line}: Unindent does not match any outer indentation level."),
        }
    }
}

impl std::error::Error for LexError {}
