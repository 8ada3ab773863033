use std::collections::HashMap;

use crate::interpreter::{evaluator::core::Context, value::core::Value};

impl Context<'_> {
    /// Pushes `frame` as the new innermost scope.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use minipy::interpreter::evaluator::core::Context;
    ///
    /// let mut out = Vec::new();
    /// let mut context = Context::new(&mut out);
    /// let initial = context.scope_stack.len();
    ///
    /// context.push_scope(HashMap::new());
    ///
    /// assert_eq!(context.scope_stack.len(), initial + 1);
    /// ```
    pub fn push_scope(&mut self, frame: HashMap<String, Value>) {
        self.scope_stack.push(frame);
    }

    /// Removes the innermost scope. The global frame is never removed.
    pub fn pop_scope(&mut self) {
        if self.scope_stack.len() > 1 {
            self.scope_stack.pop();
        }
    }

    /// Retrieves a variable from the current scope stack.
    ///
    /// Lookup begins at the innermost scope and proceeds outward toward the
    /// global scope. Returns `None` if the variable is not defined in any
    /// active scope.
    ///
    /// # Example
    /// ```
    /// use minipy::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut out = Vec::new();
    /// let mut context = Context::new(&mut out);
    /// context.define_local("x", Value::Int(5));
    ///
    /// assert_eq!(context.get_variable("x"), Some(&Value::Int(5)));
    /// assert_eq!(context.get_variable("y"), None);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.scope_stack
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
    }

    /// Defines or overwrites a variable in the innermost scope.
    ///
    /// Outer frames are never written, even when they bind the same name.
    pub fn define_local(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scope_stack.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    /// A copy of the innermost frame's bindings.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.scope_stack.last().cloned().unwrap_or_default()
    }
}
