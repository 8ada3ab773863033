use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Writes the arguments, separated by single spaces and followed by a
/// newline, to `out`.
///
/// Accepts any number of arguments; with none it writes an empty line.
///
/// # Returns
/// Always `Value::None`.
///
/// # Example
/// ```
/// use minipy::interpreter::{evaluator::function::print::print, value::core::Value};
///
/// let mut out = Vec::new();
/// let result = print(&[Value::Int(42), Value::from("apples")], &mut out, 1).unwrap();
///
/// assert_eq!(result, Value::None);
/// assert_eq!(String::from_utf8(out).unwrap(), "42 apples\n");
/// ```
pub fn print(args: &[Value], out: &mut dyn Write, line: usize) -> EvalResult<Value> {
    let text = args.iter()
                   .map(ToString::to_string)
                   .collect::<Vec<_>>()
                   .join(" ");

    writeln!(out, "{text}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                               line })?;
    Ok(Value::None)
}
