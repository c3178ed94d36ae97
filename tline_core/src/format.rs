//! # Display Formatting
//!
//! Number formatting for result panels. Unavailable (NaN) values render as
//! "N/A" and unbounded ones as "∞". Magnitudes in [0.1, 100) get fixed
//! four-decimal notation; everything else, zero included, gets three-decimal
//! scientific notation with a signed exponent (`8.318e+1`).

use crate::calculations::ComplexValue;

/// Placeholder for values that could not be computed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Rendering of an unbounded value, e.g. α of a line with σ = 0.
pub const INFINITY: &str = "∞";

/// Format a scalar for display.
///
/// ```rust
/// use tline_core::format::format_value;
///
/// assert_eq!(format_value(83.1777), "83.1777");
/// assert_eq!(format_value(2.5e-7), "2.500e-7");
/// assert_eq!(format_value(299.79), "2.998e+2");
/// assert_eq!(format_value(0.0), "0.000e+0");
/// assert_eq!(format_value(f64::INFINITY), "∞");
/// assert_eq!(format_value(f64::NAN), "N/A");
/// ```
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return NOT_AVAILABLE.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { INFINITY.to_string() } else { format!("-{}", INFINITY) };
    }

    let magnitude = value.abs();
    if (0.1..100.0).contains(&magnitude) {
        format!("{:.4}", value)
    } else {
        scientific(value)
    }
}

/// Format an optional scalar; `None` renders as "N/A".
pub fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_value)
}

/// Format a complex impedance as `a + jb` / `a - jb`.
pub fn format_complex(value: ComplexValue) -> String {
    if value.is_nan() {
        return NOT_AVAILABLE.to_string();
    }
    let sign = if value.imag < 0.0 { '-' } else { '+' };
    format!("{} {} j{}", format_value(value.real), sign, format_value(value.imag.abs()))
}

/// Three-decimal scientific notation with an explicit exponent sign
fn scientific(value: f64) -> String {
    let formatted = format!("{:.3e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
        _ => formatted,
    }
}
