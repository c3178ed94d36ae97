//! # Terminated Line Formulas
//!
//! Reflection, standing-wave ratio and input impedance of a uniform line
//! terminated in a load. Hyperbolic functions of the complex argument γd are
//! expanded into real sinh/cosh/sin/cos terms so each denominator can be
//! inspected before dividing.
//!
//! ## Notation
//!
//! - `Z₀` = Characteristic impedance (real, Ω)
//! - `ZL` = Load impedance (complex, Ω)
//! - `γ = α + jβ` = Propagation constant
//! - `d` = Distance from the load toward the generator (m)
//! - `Γ` = Load reflection coefficient
//!
//! ## References
//!
//! - Pozar, *Microwave Engineering*, 4th Edition, Sections 2.3 and 2.7

use num_complex::Complex64;

/// Squared-magnitude threshold below which a denominator is treated as zero.
pub const DENOMINATOR_EPSILON: f64 = 1e-5;

/// Floor on (1 − |Γ|) in the VSWR formula.
pub const VSWR_EPSILON: f64 = 1e-6;

/// Finite stand-in for an infinite impedance (Ω).
pub const IMPEDANCE_SENTINEL: f64 = 1e6;

/// Quotient of `num / den`, or `None` when |den|² is below [`DENOMINATOR_EPSILON`].
#[inline]
pub fn guarded_div(num: Complex64, den: Complex64) -> Option<Complex64> {
    if den.norm_sqr() < DENOMINATOR_EPSILON {
        None
    } else {
        Some(num / den)
    }
}

/// Load reflection coefficient.
///
/// # Formula
/// - Γ = (ZL − Z₀)/(ZL + Z₀)
///
/// # Returns
/// `None` when |ZL + Z₀|² < 1e-5.
#[inline]
pub fn reflection_coefficient(z0: f64, z_load: Complex64) -> Option<Complex64> {
    let z0c = Complex64::new(z0, 0.0);
    guarded_div(z_load - z0c, z_load + z0c)
}

/// Voltage standing wave ratio.
///
/// # Formula
/// - VSWR = (1 + |Γ|)/max(1 − |Γ|, 1e-6)
///
/// The floor caps total reflection at about 2·10⁶ instead of infinity.
#[inline]
pub fn vswr(gamma_magnitude: f64) -> f64 {
    (1.0 + gamma_magnitude) / (1.0 - gamma_magnitude).max(VSWR_EPSILON)
}

/// Propagation factor e^(−2γd) expanded as e^(−2αd)(cos 2βd − j sin 2βd)
#[inline]
pub fn round_trip_factor(gamma: Complex64, d: f64) -> Complex64 {
    let decay = (-2.0 * gamma.re * d).exp();
    let phase = 2.0 * gamma.im * d;
    Complex64::new(decay * phase.cos(), -decay * phase.sin())
}

/// |2αd| above which sinh/cosh are replaced by their scaled forms.
const HYPERBOLIC_SCALE_LIMIT: f64 = 20.0;

/// (sinh 2αd, cosh 2αd, k) with all three multiplied through by
/// k = e^(−|2αd|) once |2αd| is large, so long lossy lines stay finite.
#[inline]
fn scaled_hyperbolics(a2: f64) -> (f64, f64, f64) {
    if a2.abs() <= HYPERBOLIC_SCALE_LIMIT {
        return (a2.sinh(), a2.cosh(), 1.0);
    }
    let tail = (-2.0 * a2.abs()).exp();
    (
        a2.signum() * 0.5 * (1.0 - tail),
        0.5 * (1.0 + tail),
        (-a2.abs()).exp(),
    )
}

/// Numerator and denominator of tanh(γd):
/// (sinh 2αd + j sin 2βd) / (cosh 2αd + cos 2βd)
#[inline]
pub fn tanh_parts(gamma: Complex64, d: f64) -> (Complex64, Complex64) {
    let b2 = 2.0 * gamma.im * d;
    let (sinh, cosh, k) = scaled_hyperbolics(2.0 * gamma.re * d);
    (
        Complex64::new(sinh, k * b2.sin()),
        Complex64::new(cosh + k * b2.cos(), 0.0),
    )
}

/// Numerator and denominator of coth(γd):
/// (sinh 2αd − j sin 2βd) / (cosh 2αd − cos 2βd)
#[inline]
pub fn coth_parts(gamma: Complex64, d: f64) -> (Complex64, Complex64) {
    let b2 = 2.0 * gamma.im * d;
    let (sinh, cosh, k) = scaled_hyperbolics(2.0 * gamma.re * d);
    (
        Complex64::new(sinh, -k * b2.sin()),
        Complex64::new(cosh - k * b2.cos(), 0.0),
    )
}

/// Signed sentinel used in place of an unbounded impedance
#[inline]
pub fn impedance_sentinel(sign_of: f64) -> Complex64 {
    if sign_of < 0.0 {
        Complex64::new(-IMPEDANCE_SENTINEL, 0.0)
    } else {
        Complex64::new(IMPEDANCE_SENTINEL, 0.0)
    }
}

/// Outcome of a guarded impedance evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuardedImpedance {
    pub value: Complex64,
    /// |den|² of the rejected denominator when the sentinel was substituted
    pub rejected_denominator: Option<f64>,
}

impl GuardedImpedance {
    fn evaluate(num: Complex64, den: Complex64, sentinel_sign: f64) -> Self {
        match guarded_div(num, den) {
            Some(value) => Self { value, rejected_denominator: None },
            None => Self {
                value: impedance_sentinel(sentinel_sign),
                rejected_denominator: Some(den.norm_sqr()),
            },
        }
    }

    pub fn is_guarded(&self) -> bool {
        self.rejected_denominator.is_some()
    }
}

/// Input impedance of a line with a general load.
///
/// # Formula
/// - Z(d) = Z₀·(1 + Γe^(−2γd))/(1 − Γe^(−2γd))
///
/// When the denominator falls below the threshold the signed sentinel is
/// returned, signed by the real part of the numerator.
pub fn general_input_impedance(z0: f64, gamma_load: Complex64, gamma: Complex64, d: f64) -> GuardedImpedance {
    let g = gamma_load * round_trip_factor(gamma, d);
    let one = Complex64::new(1.0, 0.0);
    let num = (one + g) * z0;
    GuardedImpedance::evaluate(num, one - g, num.re)
}

/// Input impedance of a short-circuited line, Z₀·tanh(γd)
pub fn short_input_impedance(z0: f64, gamma: Complex64, d: f64) -> GuardedImpedance {
    let (num, den) = tanh_parts(gamma, d);
    let num = num * z0;
    GuardedImpedance::evaluate(num, den, num.re)
}

/// Input impedance of an open-circuited line, Z₀·coth(γd)
pub fn open_input_impedance(z0: f64, gamma: Complex64, d: f64) -> GuardedImpedance {
    let (num, den) = coth_parts(gamma, d);
    GuardedImpedance::evaluate(num * z0, den, z0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn test_matched_load() {
        let g = reflection_coefficient(50.0, Complex64::new(50.0, 0.0)).unwrap();
        assert_eq!(g.norm(), 0.0);
        assert_eq!(vswr(g.norm()), 1.0);
    }

    #[test]
    fn test_short_reflection() {
        let g = reflection_coefficient(50.0, Complex64::new(0.0, 0.0)).unwrap();
        assert_relative_eq!(g.re, -1.0);
        assert!(vswr(g.norm()) >= 1.0 / VSWR_EPSILON);
    }

    #[test]
    fn test_reflection_guard() {
        assert!(reflection_coefficient(0.0, Complex64::new(0.0, 0.0)).is_none());
        assert!(reflection_coefficient(50.0, Complex64::new(-50.0, 0.0)).is_none());
    }

    #[test]
    fn test_tanh_expansion_matches_library() {
        let gamma = Complex64::new(0.3, 20.0);
        let d = 0.137;
        let (num, den) = tanh_parts(gamma, d);
        let expected = (gamma * d).tanh();
        let got = num / den;
        assert_relative_eq!(got.re, expected.re, max_relative = 1e-10);
        assert_relative_eq!(got.im, expected.im, max_relative = 1e-10);
    }

    #[test]
    fn test_coth_expansion_matches_library() {
        let gamma = Complex64::new(0.3, 20.0);
        let d = 0.137;
        let (num, den) = coth_parts(gamma, d);
        let expected = Complex64::new(1.0, 0.0) / (gamma * d).tanh();
        let got = num / den;
        assert_relative_eq!(got.re, expected.re, max_relative = 1e-10);
        assert_relative_eq!(got.im, expected.im, max_relative = 1e-10);
    }

    #[test]
    fn test_long_lossy_line_stays_finite() {
        // 2αd = 1000 overflows unscaled sinh/cosh; both ends tend to Z₀
        let gamma = Complex64::new(5.0, 20.0);
        let short = short_input_impedance(50.0, gamma, 100.0);
        let open = open_input_impedance(50.0, gamma, 100.0);
        for z in [short, open] {
            assert!(!z.is_guarded());
            assert_relative_eq!(z.value.re, 50.0, max_relative = 1e-12);
            assert!(z.value.im.abs() < 1e-9);
        }
    }

    #[test]
    fn test_scaled_expansion_matches_library() {
        // 2αd = 24, past the scaling limit but still representable unscaled
        let gamma = Complex64::new(0.6, 7.0);
        let (num, den) = tanh_parts(gamma, 20.0);
        let expected = (gamma * 20.0).tanh();
        assert_relative_eq!((num / den).re, expected.re, max_relative = 1e-12);
        assert_relative_eq!((num / den).im, expected.im, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip_factor_matches_exp() {
        let gamma = Complex64::new(0.1, 5.0);
        let f = round_trip_factor(gamma, 0.4);
        let expected = (-2.0 * gamma * 0.4).exp();
        assert_relative_eq!(f.re, expected.re, epsilon = 1e-12);
        assert_relative_eq!(f.im, expected.im, epsilon = 1e-12);
    }

    #[test]
    fn test_quarter_wave_transformer() {
        // Lossless λ/4 line inverts the load: Zin = Z0²/ZL
        let beta = 2.0 * PI;
        let gamma = Complex64::new(0.0, beta);
        let zl = Complex64::new(100.0, 0.0);
        let gl = reflection_coefficient(50.0, zl).unwrap();
        let zin = general_input_impedance(50.0, gl, gamma, 0.25);
        assert!(!zin.is_guarded());
        assert_relative_eq!(zin.value.re, 25.0, max_relative = 1e-9);
        assert!(zin.value.im.abs() < 1e-9);
    }

    #[test]
    fn test_general_sentinel_sign_follows_numerator() {
        // Open-like load (Γ = 1) at zero length: 1 − Γ = 0
        let z = general_input_impedance(-50.0, Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0), 0.0);
        assert!(z.is_guarded());
        assert_eq!(z.value.re, -IMPEDANCE_SENTINEL);
    }

    #[test]
    fn test_open_at_zero_length_hits_sentinel() {
        let z = open_input_impedance(50.0, Complex64::new(0.0, 10.0), 0.0);
        assert_eq!(z.rejected_denominator, Some(0.0));
        assert_eq!(z.value.re, IMPEDANCE_SENTINEL);
    }

    #[test]
    fn test_short_at_zero_length_is_zero() {
        let z = short_input_impedance(50.0, Complex64::new(0.0, 10.0), 0.0);
        assert!(!z.is_guarded());
        assert_eq!(z.value.norm(), 0.0);
    }
}
