#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents errors reported by the scope checker.
pub enum ScopeError {
    /// An identifier is read but never declared in an enclosing scope.
    UndeclaredName {
        /// The undeclared name.
        name:   String,
        /// The source line of the read.
        line:   usize,
        /// The column of the read.
        column: usize,
    },
}

impl ScopeError {
    /// The 1-based source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndeclaredName { line, .. } => *line,
        }
    }

    /// The 1-based column of the error.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UndeclaredName { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for ScopeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndeclaredName { name, line, .. } => {
                write!(f, "Error on line {line}: Use of undeclared name '{name}'.")
            },
        }
    }
}

impl std::error::Error for ScopeError {}
