use crate::{
    ast::{BinaryOperator, Number},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates an arithmetic operator.
    ///
    /// Two integers (booleans count as `0`/`1`) stay integers except under
    /// `/`, which always produces a float. A float on either side promotes
    /// the other operand. Strings support `+` with another string and `*`
    /// with an integer on either side.
    ///
    /// # Errors
    /// - `Overflow` if integer `+`, `-` or `*` overflows. Promotion to float
    ///   rounds to the nearest `f64` instead.
    /// - `DivisionByZero` if the divisor of `/` is zero.
    /// - `TypeError` for any other combination of operand types.
    pub(crate) fn eval_scalar_op(op: BinaryOperator,
                                 left: &Value,
                                 right: &Value,
                                 line: usize)
                                 -> EvalResult<Value> {
        match (left, right) {
            (Value::Str(a), Value::Str(b)) if op == BinaryOperator::Add => {
                Ok(Value::Str(format!("{a}{b}")))
            },
            (Value::Str(s), other) | (other, Value::Str(s)) if op == BinaryOperator::Mul => {
                match other {
                    Value::Int(_) | Value::Bool(_) => Self::repeat(s, other, line),
                    _ => Err(Self::unsupported(op, left, right, line)),
                }
            },
            _ => match (left.as_number(), right.as_number()) {
                (Some(Number::Int(a)), Some(Number::Int(b))) => Self::eval_int_op(op, a, b, line),
                (Some(a), Some(b)) => {
                    Self::eval_float_op(op, Self::to_float(a), Self::to_float(b), line)
                },
                _ => Err(Self::unsupported(op, left, right, line)),
            },
        }
    }

    fn eval_int_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Add => a.checked_add(b),
            BinaryOperator::Sub => a.checked_sub(b),
            BinaryOperator::Mul => a.checked_mul(b),
            BinaryOperator::Div => {
                return Self::eval_float_op(op,
                                           Self::to_float(Number::Int(a)),
                                           Self::to_float(Number::Int(b)),
                                           line);
            },
            _ => None,
        };
        result.map(Value::Int)
              .ok_or(RuntimeError::Overflow { line })
    }

    fn eval_float_op(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Add => a + b,
            BinaryOperator::Sub => a - b,
            BinaryOperator::Mul => a * b,
            BinaryOperator::Div => {
                if b == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                a / b
            },
            _ => {
                return Err(RuntimeError::TypeError { details: format!("Cannot use {op} on numbers"),
                                                     line });
            },
        };
        Ok(Value::Float(result))
    }

    #[allow(clippy::cast_precision_loss)]
    fn to_float(n: Number) -> f64 {
        match n {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// `s * n`: the string repeated `n` times, empty for `n <= 0`.
    fn repeat(s: &str, count: &Value, line: usize) -> EvalResult<Value> {
        let count = match count.as_number() {
            Some(Number::Int(n)) => usize::try_from(n).unwrap_or(0),
            _ => 0,
        };
        if s.len().checked_mul(count).is_none() {
            return Err(RuntimeError::Overflow { line });
        }
        Ok(Value::Str(s.repeat(count)))
    }

    pub(crate) fn unsupported(op: BinaryOperator,
                              left: &Value,
                              right: &Value,
                              line: usize)
                              -> RuntimeError {
        RuntimeError::TypeError { details: format!("unsupported operand types for {op}: '{}' and '{}'",
                                                   left.type_name(),
                                                   right.type_name()),
                                  line }
    }
}
