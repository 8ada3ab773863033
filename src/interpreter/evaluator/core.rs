use std::{collections::HashMap, io::Write};

use crate::{
    ast::{Expr, Program, Stmt},
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::builtin_globals,
        parser::core::MAX_EXPRESSION_DEPTH,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Maximum number of nested user-defined function calls.
pub const MAX_CALL_DEPTH: usize = 200;

/// What a statement asks its enclosing block to do next.
///
/// `return` is not an error: it travels up through the blocks of a function
/// body as `Flow::Return` until the call that pushed the frame turns it into
/// the call's value.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Carry on with the next statement.
    Continue,
    /// Leave the current function with this value.
    Return(Value),
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the stack of environment frames,
/// the current call and expression depths, and the sink `print` writes to.
///
/// ## Usage
///
/// `Context` is created once per run. The bottom frame holds the program's
/// global bindings and the builtins; every user-defined call pushes one frame
/// and pops it when the call finishes.
pub struct Context<'out> {
    /// Environment frames, innermost last.
    pub scope_stack: Vec<HashMap<String, Value>>,
    /// Number of user-defined calls currently executing.
    pub call_depth:  usize,
    /// Nested `eval` calls within the current function body.
    pub(crate) expression_depth: usize,
    pub(crate) output: &'out mut dyn Write,
}

impl<'out> Context<'out> {
    /// Creates a context whose global frame contains the builtins, printing
    /// to `output`.
    #[must_use]
    pub fn new(output: &'out mut dyn Write) -> Self {
        Self { scope_stack: vec![builtin_globals()],
               call_depth: 0,
               expression_depth: 0,
               output }
    }
}

impl Context<'_> {
    /// Executes every statement of `program` in order.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`]; execution does not continue past
    /// it.
    ///
    /// # Example
    /// ```
    /// use minipy::{interpreter::evaluator::core::Context, parse_source};
    ///
    /// let program = parse_source("x = 2 + 3 * 4\nprint(x)\n").unwrap();
    /// let mut out = Vec::new();
    /// Context::new(&mut out).run(&program).unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "14\n");
    /// ```
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        self.eval_block(&program.body)?;
        let line = program.body.last().map_or(1, |statement| statement.pos().line);
        self.output
            .flush()
            .map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                line })
    }

    /// Executes a sequence of statements.
    ///
    /// Stops early and hands back `Flow::Return` as soon as one statement
    /// returns.
    pub fn eval_block(&mut self, statements: &[Stmt]) -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Return(value) = self.eval_statement(statement)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Continue)
    }

    /// Evaluates a single statement.
    ///
    /// Assignments bind in the innermost frame, definitions create function
    /// values, and `return` produces `Flow::Return`. A `return` outside any
    /// call fails with `ReturnOutsideFunction`.
    pub fn eval_statement(&mut self, statement: &Stmt) -> EvalResult<Flow> {
        match statement {
            Stmt::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.define_local(name, value);
                Ok(Flow::Continue)
            },
            Stmt::If { condition,
                       then_body,
                       elifs,
                       else_body,
                       .. } => self.eval_if(condition, then_body, elifs, else_body.as_deref()),
            Stmt::While { condition, body, .. } => self.eval_while(condition, body),
            Stmt::FunctionDef(def) => {
                self.define_function(def);
                Ok(Flow::Continue)
            },
            Stmt::Return { value, pos } => {
                if self.call_depth == 0 {
                    return Err(RuntimeError::ReturnOutsideFunction { line: pos.line });
                }
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::None,
                };
                Ok(Flow::Return(value))
            },
            Stmt::Expression(expr) => {
                self.eval(expr)?;
                Ok(Flow::Continue)
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left to right.
    ///
    /// # Errors
    /// `NestingTooDeep` once more than [`MAX_EXPRESSION_DEPTH`] evaluations
    /// are nested inside one function body, besides any error raised by the
    /// expression itself.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        if self.expression_depth >= MAX_EXPRESSION_DEPTH {
            return Err(RuntimeError::NestingTooDeep { limit: MAX_EXPRESSION_DEPTH,
                                                      line:  expr.pos().line, });
        }
        self.expression_depth += 1;
        let result = self.eval_expr(expr);
        self.expression_depth -= 1;
        result
    }

    fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::from(*value)),
            Expr::Str { value, .. } => Ok(Value::Str(value.clone())),
            Expr::Identifier { name, pos } => self.eval_variable(name, pos.line),
            Expr::BinaryOp { left, op, right, pos } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, pos.line)
            },
            Expr::Call { callee,
                         arguments,
                         pos, } => self.eval_call(callee, arguments, pos.line),
        }
    }

    /// Looks up a variable by name, innermost frame first.
    ///
    /// # Errors
    /// `UnknownVariable` if no live frame binds `name`.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }
}
