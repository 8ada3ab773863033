/// Operator dispatch.
///
/// Routes each binary operator to the arithmetic or comparison handler.
pub mod core;

/// Equality and ordering.
///
/// Implements `==`, `!=`, `<`, `<=`, `>` and `>=`, all producing booleans.
pub mod comparison;

/// Arithmetic on numbers and strings.
///
/// Implements `+`, `-`, `*` and `/` with checked integer arithmetic, float
/// promotion, string concatenation and repetition.
pub mod scalar;
