use std::{cmp::Ordering, rc::Rc};

use crate::{
    ast::{BinaryOperator, Number},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a comparison operator and returns a `Value::Bool`.
    ///
    /// Equality is defined for every pair of values: numbers compare by
    /// numeric value across int, float and bool, functions compare by
    /// identity, other kinds compare structurally and values of different
    /// kinds are unequal. Ordering is
    /// defined for two numbers or two strings.
    ///
    /// # Errors
    /// `TypeError` when ordering values that have no common ordering.
    pub(crate) fn eval_comparison(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Equal => Self::values_equal(left, right),
            BinaryOperator::NotEqual => !Self::values_equal(left, right),
            _ => {
                let Some(ordering) = Self::compare(left, right) else {
                    return Err(Self::unsupported(op, left, right, line));
                };
                match op {
                    BinaryOperator::Less => ordering == Ordering::Less,
                    BinaryOperator::LessEqual => ordering != Ordering::Greater,
                    BinaryOperator::Greater => ordering == Ordering::Greater,
                    _ => ordering != Ordering::Less,
                }
            },
        };
        Ok(Value::Bool(result))
    }

    /// Value equality as used by `==`.
    ///
    /// # Example
    /// ```
    /// use minipy::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// assert!(Context::values_equal(&Value::Int(1), &Value::Float(1.0)));
    /// assert!(Context::values_equal(&Value::Bool(true), &Value::Int(1)));
    /// assert!(!Context::values_equal(&Value::from("1"), &Value::Int(1)));
    /// ```
    #[must_use]
    pub fn values_equal(left: &Value, right: &Value) -> bool {
        match (left.as_number(), right.as_number()) {
            (Some(a), Some(b)) => Self::compare_numbers(a, b) == Some(Ordering::Equal),
            (None, None) => match (left, right) {
                (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
                (Value::Builtin(a), Value::Builtin(b)) => std::ptr::eq(*a, *b),
                _ => left == right,
            },
            _ => false,
        }
    }

    fn compare(left: &Value, right: &Value) -> Option<Ordering> {
        match (left, right) {
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            _ => Self::compare_numbers(left.as_number()?, right.as_number()?),
        }
    }

    /// Orders two numbers. Mixed int/float pairs compare exactly, without
    /// rounding the integer. Returns `None` when a NaN is involved.
    fn compare_numbers(a: Number, b: Number) -> Option<Ordering> {
        match (a, b) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(i), Number::Float(f)) => Self::compare_int_float(i, f),
            (Number::Float(f), Number::Int(i)) => {
                Self::compare_int_float(i, f).map(Ordering::reverse)
            },
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn compare_int_float(i: i64, f: f64) -> Option<Ordering> {
        if f.is_nan() {
            return None;
        }
        // Outside this range every i64 is strictly on one side of f.
        if f >= 9_223_372_036_854_775_808.0 {
            return Some(Ordering::Less);
        }
        if f < -9_223_372_036_854_775_808.0 {
            return Some(Ordering::Greater);
        }
        let truncated = f.trunc();
        match i.cmp(&(truncated as i64)) {
            Ordering::Equal => 0.0_f64.partial_cmp(&(f - truncated)),
            ordering => Some(ordering),
        }
    }
}
