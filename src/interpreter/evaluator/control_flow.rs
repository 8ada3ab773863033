use crate::{
    ast::{ElifClause, Expr, Stmt},
    interpreter::evaluator::core::{Context, EvalResult, Flow},
};

impl Context<'_> {
    /// Evaluates an `if` statement.
    ///
    /// Conditions are tested in order (`if`, then each `elif`) and the body
    /// of the first true one runs; otherwise the `else` body, if any. At most
    /// one body executes. Bodies run in the current frame.
    ///
    /// # Returns
    /// The flow produced by the executed body, or `Flow::Continue` when none
    /// ran.
    pub fn eval_if(&mut self,
                   condition: &Expr,
                   then_body: &[Stmt],
                   elifs: &[ElifClause],
                   else_body: Option<&[Stmt]>)
                   -> EvalResult<Flow> {
        if self.eval(condition)?.is_truthy() {
            return self.eval_block(then_body);
        }

        for clause in elifs {
            if self.eval(&clause.condition)?.is_truthy() {
                return self.eval_block(&clause.body);
            }
        }

        match else_body {
            Some(body) => self.eval_block(body),
            None => Ok(Flow::Continue),
        }
    }

    /// Evaluates a `while` loop.
    ///
    /// The condition is evaluated before every iteration. A `return` inside
    /// the body ends the loop and propagates to the enclosing call.
    pub fn eval_while(&mut self, condition: &Expr, body: &[Stmt]) -> EvalResult<Flow> {
        while self.eval(condition)?.is_truthy() {
            if let Flow::Return(value) = self.eval_block(body)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Continue)
    }
}
