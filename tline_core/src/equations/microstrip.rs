//! # Microstrip Formulas
//!
//! Quasi-static effective permittivity and impedance after Hammerstad and
//! Jensen, with the Getsinger-style dispersion correction applied above
//! [`DISPERSION_THRESHOLD_HZ`].
//!
//! ## Notation
//!
//! - `s` = w/h, strip width over substrate height
//! - `εr` = Substrate relative permittivity
//! - `εeff₀` = Static (low-frequency) effective permittivity
//! - `εeff(f)` = Frequency-dependent effective permittivity
//!
//! ## References
//!
//! - Hammerstad & Jensen, "Accurate Models for Microstrip Computer-Aided
//!   Design", IEEE MTT-S 1980
//! - Getsinger, "Microstrip Dispersion Model", IEEE Trans. MTT 1973

use std::f64::consts::PI;

use crate::constants::VACUUM_PERMEABILITY;
use crate::units::{Gigahertz, Hertz};

/// Operating frequencies strictly above this value get the dispersion correction.
pub const DISPERSION_THRESHOLD_HZ: f64 = 2.0e9;

/// Hammerstad-Jensen exponent factor x = ((εr − 0.9)/(εr + 3))^0.05
#[inline]
pub fn exponent_x(epsilon_r: f64) -> f64 {
    ((epsilon_r - 0.9) / (epsilon_r + 3.0)).powf(0.05)
}

/// Hammerstad-Jensen exponent factor
/// y = 1 + 0.02·ln((s⁴ + 3.7e-4·s²)/(s⁴ + 0.43)) + 0.05·ln(1 + 1.7e-4·s³)
#[inline]
pub fn exponent_y(s: f64) -> f64 {
    let s2 = s * s;
    let s4 = s2 * s2;
    1.0 + 0.02 * ((s4 + 3.7e-4 * s2) / (s4 + 0.43)).ln() + 0.05 * (1.0 + 1.7e-4 * s2 * s).ln()
}

/// Static effective permittivity
/// εeff₀ = (εr + 1)/2 + (εr − 1)/2 · (1 + 10/s)^(−x·y)
#[inline]
pub fn static_effective_permittivity(epsilon_r: f64, s: f64) -> f64 {
    let x = exponent_x(epsilon_r);
    let y = exponent_y(s);
    (epsilon_r + 1.0) / 2.0 + ((epsilon_r - 1.0) / 2.0) * (1.0 + 10.0 / s).powf(-x * y)
}

/// Geometry term ln[(6 + (2π − 6)e^(−t))/s + √(1 + 4/s²)] with t = (30.67/s)^0.75
#[inline]
pub fn impedance_log_term(s: f64) -> f64 {
    let t = (30.67 / s).powf(0.75);
    ((6.0 + (2.0 * PI - 6.0) * (-t).exp()) / s + (1.0 + 4.0 / (s * s)).sqrt()).ln()
}

/// Microstrip Z₀ = (60/√εeff)·logTerm
#[inline]
pub fn impedance(effective_permittivity: f64, log_term: f64) -> f64 {
    (60.0 / effective_permittivity.sqrt()) * log_term
}

/// Dispersion factor G = 0.6 + 0.009·Z₀′
#[inline]
pub fn dispersion_factor(preliminary_z0: f64) -> f64 {
    0.6 + 0.009 * preliminary_z0
}

/// Knee frequency fp = Z₀′/(2μ₀h), returned in GHz
#[inline]
pub fn knee_frequency_ghz(preliminary_z0: f64, substrate_height_m: f64) -> f64 {
    Gigahertz::from(Hertz(preliminary_z0 / (2.0 * VACUUM_PERMEABILITY * substrate_height_m))).value()
}

/// Dispersive effective permittivity
/// εeff(f) = εr − (εr − εeff₀)/(1 + G·(f/fp)²)
#[inline]
pub fn dispersive_effective_permittivity(
    epsilon_r: f64,
    static_eeff: f64,
    dispersion_factor: f64,
    frequency_ghz: f64,
    knee_ghz: f64,
) -> f64 {
    let ratio = frequency_ghz / knee_ghz;
    epsilon_r - (epsilon_r - static_eeff) / (1.0 + dispersion_factor * ratio * ratio)
}

/// Full set of intermediate microstrip quantities for one operating point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MicrostripSolution {
    pub static_effective_permittivity: f64,
    pub effective_permittivity: f64,
    pub preliminary_impedance: f64,
    pub impedance: f64,
    pub dispersion_factor: f64,
    pub knee_frequency_ghz: f64,
    pub dispersion_applied: bool,
}

/// Evaluate the microstrip model at one frequency.
///
/// # Arguments
/// * `w` - Strip width (m)
/// * `h` - Substrate height (m)
/// * `epsilon_r` - Substrate relative permittivity
/// * `frequency_hz` - Operating frequency (Hz)
pub fn solve(w: f64, h: f64, epsilon_r: f64, frequency_hz: f64) -> MicrostripSolution {
    let s = w / h;
    let static_eeff = static_effective_permittivity(epsilon_r, s);
    let log_term = impedance_log_term(s);
    let preliminary = impedance(static_eeff, log_term);
    let g = dispersion_factor(preliminary);
    let fp = knee_frequency_ghz(preliminary, h);

    let dispersion_applied = frequency_hz > DISPERSION_THRESHOLD_HZ;
    let eeff = if dispersion_applied {
        dispersive_effective_permittivity(epsilon_r, static_eeff, g, Gigahertz::from(Hertz(frequency_hz)).value(), fp)
    } else {
        static_eeff
    };

    MicrostripSolution {
        static_effective_permittivity: static_eeff,
        effective_permittivity: eeff,
        preliminary_impedance: preliminary,
        impedance: impedance(eeff, log_term),
        dispersion_factor: g,
        knee_frequency_ghz: fp,
        dispersion_applied,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_fr4_50_ohm_ballpark() {
        // w/h = 2 on FR-4 lands close to 50 Ω with εeff around 3.0
        let sol = solve(1.0e-3, 0.5e-3, 4.4, 1.0e9);
        assert!(sol.impedance > 45.0 && sol.impedance < 55.0, "Z0 = {}", sol.impedance);
        assert!(sol.effective_permittivity > 2.8 && sol.effective_permittivity < 3.6);
        assert!(!sol.dispersion_applied);
    }

    #[test]
    fn test_static_eeff_bounds() {
        // 1 < εeff₀ < εr for any positive s
        for &s in &[0.1, 0.5, 1.0, 2.0, 10.0] {
            let eeff = static_effective_permittivity(4.4, s);
            assert!(eeff > 1.0 && eeff < 4.4, "s = {} gave {}", s, eeff);
        }
    }

    #[test]
    fn test_air_substrate_has_unit_eeff() {
        assert_relative_eq!(static_effective_permittivity(1.0, 2.0), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_dispersion_raises_eeff_toward_er() {
        let low = solve(1.0e-3, 0.5e-3, 4.4, 1.0e9);
        let high = solve(1.0e-3, 0.5e-3, 4.4, 10.0e9);
        assert!(high.dispersion_applied);
        assert!(high.effective_permittivity > low.effective_permittivity);
        assert!(high.effective_permittivity < 4.4);
        assert!(high.impedance < low.impedance);
    }

    #[test]
    fn test_threshold_is_strict() {
        let at = solve(1.0e-3, 0.5e-3, 4.4, DISPERSION_THRESHOLD_HZ);
        assert!(!at.dispersion_applied);
        assert_eq!(at.effective_permittivity, at.static_effective_permittivity);
    }
}
