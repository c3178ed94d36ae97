//! # TEM Line Formulas
//!
//! Closed-form per-unit-length parameters for the three TEM geometries
//! (coaxial, two-wire, parallel-plate) and the low-loss propagation formulas
//! they share.
//!
//! ## Notation
//!
//! - `a` = Inner conductor / wire radius (m)
//! - `b` = Outer conductor inner radius (m)
//! - `D` = Center-to-center wire spacing (m)
//! - `w` = Plate width (m)
//! - `h` = Plate spacing (m)
//! - `Rs` = Conductor surface resistance (Ω)
//! - `μ`, `ε` = Absolute permeability / permittivity of the dielectric
//! - `σ_d` = Dielectric conductivity (S/m)
//!
//! All lengths are SI meters. Callers convert from millimeters first.
//!
//! ## References
//!
//! - Ulaby, *Fundamentals of Applied Electromagnetics*, Table 2-1
//! - Pozar, *Microwave Engineering*, 4th Edition, Section 2.1

use std::f64::consts::PI;

use crate::constants::{FREE_SPACE_IMPEDANCE_APPROX, VACUUM_PERMEABILITY};

// =============================================================================
// CONDUCTOR LOSS
// =============================================================================

/// Surface resistance of the conductors.
///
/// # Formula
/// - Rs = √(π f μ₀ / σ)
///
/// A conductivity of zero yields `+∞` (an insulator carries no surface
/// current), and `+∞` yields zero (a perfect conductor).
#[inline]
pub fn surface_resistance(frequency_hz: f64, conductivity: f64) -> f64 {
    if conductivity > 0.0 {
        (PI * frequency_hz * VACUUM_PERMEABILITY / conductivity).sqrt()
    } else {
        f64::INFINITY
    }
}

/// Skin depth δ = 1/√(π f μ₀ σ).
///
/// Returns `None` when σ is zero or infinite, where the depth is not a
/// meaningful finite length.
#[inline]
pub fn skin_depth(frequency_hz: f64, conductivity: f64) -> Option<f64> {
    if conductivity > 0.0 && conductivity.is_finite() && frequency_hz > 0.0 {
        Some(1.0 / (PI * frequency_hz * VACUUM_PERMEABILITY * conductivity).sqrt())
    } else {
        None
    }
}

// =============================================================================
// COAXIAL LINE
// =============================================================================

/// ln(b/a) for a coaxial line
#[inline]
pub fn coaxial_log_term(a: f64, b: f64) -> f64 {
    (b / a).ln()
}

/// Coaxial R′ = (Rs/2π)(1/a + 1/b)
#[inline]
pub fn coaxial_resistance(rs: f64, a: f64, b: f64) -> f64 {
    (rs / (2.0 * PI)) * (1.0 / a + 1.0 / b)
}

/// Coaxial L′ = (μ/2π)·ln(b/a)
#[inline]
pub fn coaxial_inductance(mu: f64, log_term: f64) -> f64 {
    (mu / (2.0 * PI)) * log_term
}

/// Coaxial G′ = 2πσ_d / ln(b/a)
#[inline]
pub fn coaxial_conductance(sigma_d: f64, log_term: f64) -> f64 {
    2.0 * PI * sigma_d / log_term
}

/// Coaxial C′ = 2πε / ln(b/a)
#[inline]
pub fn coaxial_capacitance(epsilon: f64, log_term: f64) -> f64 {
    2.0 * PI * epsilon / log_term
}

/// Coaxial Z₀ = (60/√εr)·ln(b/a)
#[inline]
pub fn coaxial_impedance(epsilon_r: f64, log_term: f64) -> f64 {
    (60.0 / epsilon_r.sqrt()) * log_term
}

// =============================================================================
// TWO-WIRE LINE
// =============================================================================

/// arccosh(D/2a) written as ln(r + √(r² − 1)) with r = D/(2a)
#[inline]
pub fn two_wire_log_term(a: f64, spacing: f64) -> f64 {
    let ratio = spacing / (2.0 * a);
    (ratio + (ratio * ratio - 1.0).sqrt()).ln()
}

/// Two-wire R′ = Rs/(πa)
#[inline]
pub fn two_wire_resistance(rs: f64, a: f64) -> f64 {
    rs / (PI * a)
}

/// Two-wire L′ = (μ/π)·logTerm
#[inline]
pub fn two_wire_inductance(mu: f64, log_term: f64) -> f64 {
    (mu / PI) * log_term
}

/// Two-wire G′ = πσ_d / logTerm
#[inline]
pub fn two_wire_conductance(sigma_d: f64, log_term: f64) -> f64 {
    PI * sigma_d / log_term
}

/// Two-wire C′ = πε / logTerm
#[inline]
pub fn two_wire_capacitance(epsilon: f64, log_term: f64) -> f64 {
    PI * epsilon / log_term
}

/// Two-wire Z₀ = (120/√εr)·logTerm
#[inline]
pub fn two_wire_impedance(epsilon_r: f64, log_term: f64) -> f64 {
    (120.0 / epsilon_r.sqrt()) * log_term
}

// =============================================================================
// PARALLEL-PLATE LINE
// =============================================================================

/// Parallel-plate R′ = 2Rs/w
#[inline]
pub fn parallel_plate_resistance(rs: f64, w: f64) -> f64 {
    2.0 * rs / w
}

/// Parallel-plate L′ = μh/w
#[inline]
pub fn parallel_plate_inductance(mu: f64, w: f64, h: f64) -> f64 {
    mu * h / w
}

/// Parallel-plate G′ = σ_d·w/h
#[inline]
pub fn parallel_plate_conductance(sigma_d: f64, w: f64, h: f64) -> f64 {
    sigma_d * w / h
}

/// Parallel-plate C′ = ε·w/h
#[inline]
pub fn parallel_plate_capacitance(epsilon: f64, w: f64, h: f64) -> f64 {
    epsilon * w / h
}

/// Parallel-plate Z₀ = 377h/(w√εr)
#[inline]
pub fn parallel_plate_impedance(epsilon_r: f64, w: f64, h: f64) -> f64 {
    FREE_SPACE_IMPEDANCE_APPROX * h / (w * epsilon_r.sqrt())
}

// =============================================================================
// PROPAGATION (LOW-LOSS)
// =============================================================================

/// Low-loss attenuation constant.
///
/// # Formula
/// - α = (R′/2)√(C′/L′) + (G′/2)√(L′/C′)
///
/// Each term is skipped when its loss parameter is exactly zero so that a
/// lossless line gives α = 0 even if the other factor is not finite.
#[inline]
pub fn low_loss_attenuation(r: f64, l: f64, g: f64, c: f64) -> f64 {
    let conductor = if r == 0.0 { 0.0 } else { (r / 2.0) * (c / l).sqrt() };
    let dielectric = if g == 0.0 { 0.0 } else { (g / 2.0) * (l / c).sqrt() };
    conductor + dielectric
}

/// Phase constant β = ω√(L′C′)
#[inline]
pub fn phase_constant(omega: f64, l: f64, c: f64) -> f64 {
    omega * (l * c).sqrt()
}

/// TEM phase velocity v_p = c/√εr
///
/// Uses the relative permittivity only; a magnetic dielectric changes β
/// through L′ but not this reported velocity.
#[inline]
pub fn tem_phase_velocity(speed_of_light: f64, epsilon_r: f64) -> f64 {
    speed_of_light / epsilon_r.sqrt()
}

/// Wavelength λ = v_p / f
#[inline]
pub fn wavelength(phase_velocity: f64, frequency_hz: f64) -> f64 {
    phase_velocity / frequency_hz
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::{SPEED_OF_LIGHT, VACUUM_PERMITTIVITY};

    #[test]
    fn test_surface_resistance_copper_1ghz() {
        // Copper at 1 GHz: Rs ≈ 8.25 mΩ
        let rs = surface_resistance(1e9, 5.8e7);
        assert_relative_eq!(rs, 8.25e-3, max_relative = 1e-2);
    }

    #[test]
    fn test_surface_resistance_limits() {
        assert!(surface_resistance(1e9, 0.0).is_infinite());
        assert_eq!(surface_resistance(1e9, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_skin_depth_copper() {
        // Copper at 1 GHz: δ ≈ 2.09 µm
        let delta = skin_depth(1e9, 5.8e7).unwrap();
        assert_relative_eq!(delta, 2.09e-6, max_relative = 1e-2);
        assert!(skin_depth(1e9, 0.0).is_none());
        assert!(skin_depth(1e9, f64::INFINITY).is_none());
    }

    #[test]
    fn test_coaxial_lc_product() {
        let log_term = coaxial_log_term(0.5e-3, 2.0e-3);
        let l = coaxial_inductance(VACUUM_PERMEABILITY, log_term);
        let c = coaxial_capacitance(VACUUM_PERMITTIVITY, log_term);
        assert_relative_eq!(l * c, VACUUM_PERMEABILITY * VACUUM_PERMITTIVITY, max_relative = 1e-12);
    }

    #[test]
    fn test_two_wire_log_term_is_acosh() {
        let lt = two_wire_log_term(1e-3, 10e-3);
        assert_relative_eq!(lt, 5.0_f64.acosh(), max_relative = 1e-12);
    }

    #[test]
    fn test_parallel_plate_impedance() {
        // h/w = 0.1 in air: 37.7 Ω
        assert_relative_eq!(parallel_plate_impedance(1.0, 20e-3, 2e-3), 37.7, max_relative = 1e-12);
    }

    #[test]
    fn test_lossless_attenuation_is_zero() {
        assert_eq!(low_loss_attenuation(0.0, 1e-7, 0.0, 1e-10), 0.0);
    }

    #[test]
    fn test_phase_velocity_and_wavelength() {
        let vp = tem_phase_velocity(SPEED_OF_LIGHT, 4.0);
        assert_relative_eq!(vp, SPEED_OF_LIGHT / 2.0);
        assert_relative_eq!(wavelength(vp, 1e9), SPEED_OF_LIGHT / 2e9);
    }
}
