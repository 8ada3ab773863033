use std::rc::Rc;

use crate::{
    ast::Number,
    interpreter::{evaluator::function::core::BuiltinDef, value::function::FunctionValue},
    util::num::format_float,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditional evaluations.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit integer.
    Int(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A string.
    Str(String),
    /// A boolean value (`True` or `False`).
    /// Produced by comparison operators and used as conditions.
    Bool(bool),
    /// The absence of a value: the result of a call that returns nothing and
    /// the value of parameters that received no argument.
    None,
    /// A user-defined function.
    Function(Rc<FunctionValue>),
    /// A builtin function such as `print`.
    Builtin(&'static BuiltinDef),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => Self::Int(i),
            Number::Float(f) => Self::Float(f),
        }
    }
}

impl Value {
    /// The name of the value's type, as shown in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Bool(_) => "bool",
            Self::None => "NoneType",
            Self::Function(_) => "function",
            Self::Builtin(_) => "builtin_function",
        }
    }

    /// Returns whether the value counts as true in a condition.
    ///
    /// Zero, the empty string, `False` and `None` are false; everything else
    /// is true.
    ///
    /// # Example
    /// ```
    /// use minipy::interpreter::value::core::Value;
    ///
    /// assert!(Value::Int(3).is_truthy());
    /// assert!(!Value::Float(0.0).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// assert!(!Value::None.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::None => false,
            Self::Function(_) | Self::Builtin(_) => true,
        }
    }

    /// Views the value as a number, if it is one.
    ///
    /// Booleans count as the integers `0` and `1`.
    ///
    /// # Example
    /// ```
    /// use minipy::{ast::Number, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::Bool(true).as_number(), Some(Number::Int(1)));
    /// assert_eq!(Value::Float(2.5).as_number(), Some(Number::Float(2.5)));
    /// assert_eq!(Value::from("2").as_number(), None);
    /// ```
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Int(i) => Some(Number::Int(*i)),
            Self::Float(f) => Some(Number::Float(*f)),
            Self::Bool(b) => Some(Number::Int(*b as i64)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{}", format_float(*x)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::None => write!(f, "None"),
            Self::Function(func) => write!(f, "<function {}>", func.name),
            Self::Builtin(def) => write!(f, "<built-in function {}>", def.name),
        }
    }
}
