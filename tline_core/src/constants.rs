//! Physical constants used by the line formulas.
//!
//! μ₀ is the classical 4π × 10⁻⁷ H/m. The microstrip knee frequency and the
//! surface resistance are both written in terms of it, so changing it to the
//! CODATA 2018 value shifts those results in the 10th significant digit.

use std::f64::consts::PI;

/// Speed of light in vacuum _c_ in meters per second (m/s).
pub const SPEED_OF_LIGHT: f64 = 2.997_924_58e8;
/// Vacuum permeability μ₀ in henries per meter (H/m).
pub const VACUUM_PERMEABILITY: f64 = 4.0 * PI * 1e-7;
/// Vacuum permittivity ε₀ in farads per meter (F/m).
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_82e-12;
/// Free-space impedance as used by the parallel-plate Z₀ formula (Ω).
pub const FREE_SPACE_IMPEDANCE_APPROX: f64 = 377.0;
/// Nepers to decibels, 20·log10(e).
pub const NEPER_TO_DB: f64 = 8.685_889_638_065_035;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn mu_eps_product_matches_light_speed() {
        let c = 1.0 / (VACUUM_PERMEABILITY * VACUUM_PERMITTIVITY).sqrt();
        assert_relative_eq!(c, SPEED_OF_LIGHT, max_relative = 1.0e-8);
    }

    #[test]
    fn neper_conversion() {
        assert_relative_eq!(NEPER_TO_DB, 20.0 * std::f64::consts::E.log10(), max_relative = 1.0e-12);
    }
}
