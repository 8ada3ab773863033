/// Formats a float the way values are printed.
///
/// Integral values keep a trailing `.0`, very large and very small
/// magnitudes use scientific notation with a signed two-digit exponent, and
/// non-finite values print as `inf`, `-inf` and `nan`.
///
/// ## Example
/// ```
/// use minipy::util::num::format_float;
///
/// assert_eq!(format_float(5.0), "5.0");
/// assert_eq!(format_float(3.5), "3.5");
/// assert_eq!(format_float(1e20), "1e+20");
/// assert_eq!(format_float(0.00001), "1e-05");
/// assert_eq!(format_float(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_scientific(value);
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Rewrites Rust's `1.5e-7` exponent form as `1.5e-07`.
fn format_scientific(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        },
        None => formatted,
    }
}
