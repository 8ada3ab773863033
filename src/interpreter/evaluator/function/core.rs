use std::{collections::HashMap, io::Write, rc::Rc};

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, Flow, MAX_CALL_DEPTH},
            function::print,
        },
        value::{core::Value, function::FunctionValue},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments, the output sink and the line
/// number of the call.
type BuiltinFn = fn(&[Value], &mut dyn Write, usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// `max` of `None` means any number of arguments from `min` upward.
#[derive(Debug, Clone, Copy)]
struct Arity {
    min: usize,
    max: Option<usize>,
}

impl Arity {
    const fn variadic(min: usize) -> Self {
        Self { min, max: None }
    }

    /// Tests whether the given argument count satisfies this arity constraint.
    fn check(self, n: usize) -> bool {
        n >= self.min && self.max.is_none_or(|max| n <= max)
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// The macro produces `BuiltinDef`, the static `BUILTIN_TABLE` and the public
/// `BUILTIN_FUNCTIONS` name list that the scope checker pre-declares.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A builtin function as it is bound in the global frame.
        pub struct BuiltinDef {
            /// The name the builtin is bound to.
            pub name: &'static str,
            arity:    Arity,
            func:     BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin function.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print" => { arity: Arity::variadic(0), func: print::print },
}

impl std::fmt::Debug for BuiltinDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinDef")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl PartialEq for BuiltinDef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// The bindings every program starts with: one `Value::Builtin` per entry of
/// the builtin table.
pub(crate) fn builtin_globals() -> HashMap<String, Value> {
    BUILTIN_TABLE.iter()
                 .map(|def| (def.name.to_string(), Value::Builtin(def)))
                 .collect()
}

impl Context<'_> {
    /// Binds a function value for `def` in the innermost frame.
    ///
    /// The function captures a copy of the innermost frame as it is now;
    /// assignments made afterwards in that frame are not seen by the
    /// function.
    pub fn define_function(&mut self, def: &FunctionDef) {
        let function = FunctionValue { name:     def.name.clone(),
                                       params:   def.params.clone(),
                                       body:     def.body.clone(),
                                       captured: self.snapshot(), };
        self.define_local(&def.name, Value::Function(Rc::new(function)));
    }

    /// Evaluates a call expression.
    ///
    /// The callee is resolved first, then the arguments are evaluated left
    /// to right.
    ///
    /// # Errors
    /// `UnknownFunction` if a named callee is bound nowhere, and any error
    /// raised by the arguments or the call itself.
    pub fn eval_call(&mut self, callee: &Expr, arguments: &[Expr], line: usize) -> EvalResult<Value> {
        let function = match callee {
            Expr::Identifier { name, .. } => {
                self.get_variable(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownFunction { name: name.clone(),
                                                                   line })?
            },
            other => self.eval(other)?,
        };

        let args = arguments.iter()
                            .map(|argument| self.eval(argument))
                            .collect::<EvalResult<Vec<_>>>()?;

        self.eval_function(&function, args, line)
    }

    /// Invokes a callable value with already evaluated arguments.
    ///
    /// # Errors
    /// - `NotCallable` if `function` is not a function.
    /// - `ArgumentCountMismatch` if a builtin's arity is violated.
    pub fn eval_function(&mut self,
                         function: &Value,
                         args: Vec<Value>,
                         line: usize)
                         -> EvalResult<Value> {
        match function {
            Value::Builtin(def) => {
                if !def.arity.check(args.len()) {
                    return Err(RuntimeError::ArgumentCountMismatch { name: def.name.to_string(),
                                                                     expected: def.arity.min,
                                                                     found: args.len(),
                                                                     line });
                }
                (def.func)(&args, &mut *self.output, line)
            },
            Value::Function(function) => {
                self.call_user_defined_function(&Rc::clone(function), args, line)
            },
            other => Err(RuntimeError::NotCallable { type_name: other.type_name(),
                                                     line }),
        }
    }

    /// Executes a user-defined function.
    ///
    /// The new frame starts as a copy of the captured bindings, then binds
    /// the function's own name (so it can call itself) and the parameters.
    /// Arguments bind positionally: parameters without an argument are bound
    /// to `None` and arguments without a parameter are dropped.
    ///
    /// # Errors
    /// `RecursionLimit` if the call would exceed [`MAX_CALL_DEPTH`].
    fn call_user_defined_function(&mut self,
                                  function: &Rc<FunctionValue>,
                                  args: Vec<Value>,
                                  line: usize)
                                  -> EvalResult<Value> {
        if self.call_depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { limit: MAX_CALL_DEPTH,
                                                      line });
        }

        let mut frame = function.captured.clone();
        frame.insert(function.name.clone(), Value::Function(Rc::clone(function)));
        let mut args = args.into_iter();
        for param in &function.params {
            frame.insert(param.clone(), args.next().unwrap_or(Value::None));
        }

        self.push_scope(frame);
        self.call_depth += 1;
        let outer_depth = std::mem::take(&mut self.expression_depth);
        let result = self.eval_block(&function.body);
        self.expression_depth = outer_depth;
        self.call_depth -= 1;
        self.pop_scope();

        match result? {
            Flow::Return(value) => Ok(value),
            Flow::Continue => Ok(Value::None),
        }
    }
}
