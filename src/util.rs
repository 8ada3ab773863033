/// Numeric conversion and formatting helpers.
///
/// This module provides safe conversion from integers to floating point
/// without silent data loss, and the display form of floats used when
/// printing values.
pub mod num;
