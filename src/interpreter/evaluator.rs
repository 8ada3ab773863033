/// Binary operator evaluation logic.
///
/// Handles arithmetic on numbers and strings and the six comparison
/// operators, reporting type mismatches and division by zero.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, statement and expression dispatch, and the
/// control-flow signal used to unwind `return`.
pub mod core;

/// Evaluation of `if` and `while` statements.
///
/// Bodies run in the frame that is current when the statement executes, so
/// their assignments remain visible afterwards.
pub mod control_flow;

/// Function evaluation.
///
/// Handles function definition, user-defined and builtin calls, argument
/// binding and the return value of a call.
pub mod function;

/// Utility functions for the evaluator.
///
/// Scope stack management: pushing and popping frames, lookup and binding.
pub mod utils;
