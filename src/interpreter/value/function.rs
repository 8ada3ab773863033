use std::collections::HashMap;

use crate::{ast::Stmt, interpreter::value::core::Value};

/// A user-defined function together with its captured bindings.
///
/// `captured` is an independent copy of the defining frame taken when the
/// `def` statement executed. Later assignments in the defining scope do not
/// reach it, and each call starts from a fresh copy of it.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionValue {
    /// The name the function was defined with.
    pub name:     String,
    /// Parameter names in declaration order.
    pub params:   Vec<String>,
    /// Statements of the body.
    pub body:     Vec<Stmt>,
    /// Bindings of the defining frame at definition time.
    pub captured: HashMap<String, Value>,
}
