/// Function calls and the builtin table.
///
/// Defines the builtin registry, resolves call targets and runs user-defined
/// functions in their own frame.
pub mod core;

/// The `print` builtin.
pub mod print;
