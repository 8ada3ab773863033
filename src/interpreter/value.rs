/// Runtime values.
///
/// Defines the `Value` enum produced by evaluation, its truthiness and
/// display rules, and numeric coercion used by the operators.
pub mod core;
/// User-defined function values.
///
/// Defines `FunctionValue`, a function definition bundled with the snapshot
/// of bindings captured where it was defined.
pub mod function;
