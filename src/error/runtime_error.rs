#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read a name that is bound in no live scope.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a name that is bound in no live scope.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operand types do not support the operator.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The call target is neither a user function nor a builtin.
    NotCallable {
        /// The type name of the value that was called.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A builtin received a number of arguments outside its arity.
    ArgumentCountMismatch {
        /// Name of the called function.
        name:     String,
        /// The number of parameters.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Integer `+`, `-` or `*` overflowed, or a string repeat was too large.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `return` was executed outside any function body.
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Calls nested deeper than the interpreter allows.
    RecursionLimit {
        /// The maximum call depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An expression tree is nested deeper than the evaluator allows.
    NestingTooDeep {
        /// The maximum expression depth.
        limit: usize,
        /// The line of the expression that exceeded it.
        line:  usize,
    },
    /// Writing program output failed.
    Output {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// The 1-based source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::UnknownFunction { line, .. }
            | Self::TypeError { line, .. }
            | Self::DivisionByZero { line }
            | Self::NotCallable { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::Overflow { line }
            | Self::ReturnOutsideFunction { line }
            | Self::RecursionLimit { line, .. }
            | Self::NestingTooDeep { line, .. }
            | Self::Output { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Name '{name}' is not defined.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Function '{name}' is not defined.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::NotCallable { type_name, line } => {
                write!(f, "Error on line {line}: Value of type '{type_name}' is not callable.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Function '{name}' takes {expected} argument(s) but {found} were given."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::ReturnOutsideFunction { line } => {
                write!(f, "Error on line {line}: 'return' outside function.")
            },
            Self::RecursionLimit { limit, line } => write!(f,
                                                           "Error on line {line}: Maximum call depth of {limit} exceeded."),
            Self::NestingTooDeep { limit, line } => {
                write!(f, "Error on line {line}: Expression nesting exceeds the limit of {limit}.")
            },
            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
