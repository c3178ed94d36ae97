//! # Line Parameter Engine
//!
//! Turns a geometry and its materials into the distributed parameters
//! R′, L′, G′, C′ and the propagation quantities Z₀, γ = α + jβ, v_p and λ.
//!
//! ## Assumptions
//!
//! - TEM geometries use the closed forms in [`crate::equations::line`]
//! - α and β use the low-loss approximations; [`LineParameters::telegrapher`]
//!   gives the exact values for comparison
//! - Z₀ is reported as a real number
//! - Microstrip conductors and substrate are lossless (R′ = G′ = 0)
//!
//! ## Example
//!
//! ```rust
//! use tline_core::calculations::{compute_line_parameters, GeometryKind, LineInput};
//!
//! let input = LineInput::default_for(GeometryKind::Coaxial);
//! let analysis = compute_line_parameters(&input).unwrap();
//!
//! // 60·ln(4) for an air-filled 0.5/2.0 mm coax
//! assert!((analysis.propagation.characteristic_impedance_ohm - 83.18).abs() < 0.01);
//! ```

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ComplexValue, Geometry, GeometryKind, LineInput};
use crate::constants::{NEPER_TO_DB, SPEED_OF_LIGHT, VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY};
use crate::equations::line;
use crate::equations::microstrip;
use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Hertz, Megahertz, Meters, Millimeters};

// ============================================================================
// Distributed parameters
// ============================================================================

/// Per-unit-length circuit parameters of the line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineParameters {
    /// R′ (Ω/m)
    pub resistance_ohm_per_m: f64,
    /// L′ (H/m)
    pub inductance_h_per_m: f64,
    /// G′ (S/m)
    pub conductance_s_per_m: f64,
    /// C′ (F/m)
    pub capacitance_f_per_m: f64,
}

impl LineParameters {
    pub const UNAVAILABLE: LineParameters = LineParameters {
        resistance_ohm_per_m: f64::NAN,
        inductance_h_per_m: f64::NAN,
        conductance_s_per_m: f64::NAN,
        capacitance_f_per_m: f64::NAN,
    };

    /// Series impedance per length R′ + jωL′
    pub fn series_impedance(&self, omega: f64) -> Complex64 {
        Complex64::new(self.resistance_ohm_per_m, omega * self.inductance_h_per_m)
    }

    /// Shunt admittance per length G′ + jωC′
    pub fn shunt_admittance(&self, omega: f64) -> Complex64 {
        Complex64::new(self.conductance_s_per_m, omega * self.capacitance_f_per_m)
    }

    /// Exact propagation constant and characteristic impedance.
    ///
    /// - γ = √((R′ + jωL′)(G′ + jωC′))
    /// - Zc = √((R′ + jωL′)/(G′ + jωC′))
    pub fn telegrapher(&self, omega: f64) -> TelegrapherSolution {
        let z = self.series_impedance(omega);
        let y = self.shunt_admittance(omega);
        TelegrapherSolution {
            propagation_constant: (z * y).sqrt().into(),
            characteristic_impedance: (z / y).sqrt().into(),
        }
    }

    /// Element values of one ladder cell of length `dz` meters.
    pub fn lumped_section(&self, dz: f64) -> LumpedSection {
        LumpedSection {
            length_m: dz,
            resistance_ohm: self.resistance_ohm_per_m * dz,
            inductance_h: self.inductance_h_per_m * dz,
            conductance_s: self.conductance_s_per_m * dz,
            capacitance_f: self.capacitance_f_per_m * dz,
        }
    }
}

/// Exact solution of the telegrapher equations at one frequency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelegrapherSolution {
    pub propagation_constant: ComplexValue,
    pub characteristic_impedance: ComplexValue,
}

impl TelegrapherSolution {
    pub const UNAVAILABLE: Self = Self {
        propagation_constant: ComplexValue::NAN,
        characteristic_impedance: ComplexValue::NAN,
    };
}

/// One cell of the lumped-element equivalent circuit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LumpedSection {
    pub length_m: f64,
    pub resistance_ohm: f64,
    pub inductance_h: f64,
    pub conductance_s: f64,
    pub capacitance_f: f64,
}

// ============================================================================
// Results
// ============================================================================

/// Propagation quantities.
///
/// ## JSON Example
///
/// ```json
/// {
///   "characteristic_impedance_ohm": 83.18,
///   "propagation_constant": { "real": 0.0011, "imag": 20.96 },
///   "phase_velocity_m_per_s": 2.998e8,
///   "wavelength_m": 0.2998,
///   "effective_permittivity": null
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropagationResult {
    /// Z₀ (Ω)
    pub characteristic_impedance_ohm: f64,
    /// γ = α + jβ; real part in Np/m, imaginary part in rad/m
    pub propagation_constant: ComplexValue,
    pub phase_velocity_m_per_s: f64,
    pub wavelength_m: f64,
    /// εeff(f), microstrip only
    pub effective_permittivity: Option<f64>,
}

impl PropagationResult {
    pub const UNAVAILABLE: PropagationResult = PropagationResult {
        characteristic_impedance_ohm: f64::NAN,
        propagation_constant: ComplexValue::NAN,
        phase_velocity_m_per_s: f64::NAN,
        wavelength_m: f64::NAN,
        effective_permittivity: None,
    };

    /// α (Np/m)
    pub fn attenuation_np_per_m(&self) -> f64 {
        self.propagation_constant.real
    }

    /// β (rad/m)
    pub fn phase_constant_rad_per_m(&self) -> f64 {
        self.propagation_constant.imag
    }
}

/// Intermediate quantities of the microstrip model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MicrostripDetails {
    pub strip_width_mm: f64,
    pub substrate_height_mm: f64,
    pub permittivity: f64,
    /// w/h
    pub width_to_height: f64,
    pub static_effective_permittivity: f64,
    pub effective_permittivity: f64,
    /// Z₀′ from the static permittivity
    pub preliminary_impedance_ohm: f64,
    pub dispersion_factor: f64,
    pub knee_frequency_ghz: f64,
    pub dispersion_applied: bool,
}

/// Full output of the Line Parameter Engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineAnalysis {
    pub geometry: GeometryKind,
    pub frequency_hz: f64,
    pub line_parameters: LineParameters,
    pub propagation: PropagationResult,
    /// α expressed in dB/m
    pub attenuation_db_per_m: f64,
    /// Rs (Ω); +∞ for an insulating conductor, 0 for a perfect one
    pub surface_resistance_ohm: f64,
    /// δ (m), absent when σ is zero or infinite
    pub skin_depth_m: Option<f64>,
    pub microstrip: Option<MicrostripDetails>,
    /// Exact γ and Zc from R′L′G′C′, for comparison with the low-loss values
    pub telegrapher: TelegrapherSolution,
    /// Formulas evaluated to produce this result
    pub equations: EquationTracker,
}

impl LineAnalysis {
    /// The NaN-filled record a front end shows when inputs are invalid.
    pub fn unavailable(geometry: GeometryKind) -> Self {
        LineAnalysis {
            geometry,
            frequency_hz: f64::NAN,
            line_parameters: LineParameters::UNAVAILABLE,
            propagation: PropagationResult::UNAVAILABLE,
            attenuation_db_per_m: f64::NAN,
            surface_resistance_ohm: f64::NAN,
            skin_depth_m: None,
            microstrip: None,
            telegrapher: TelegrapherSolution::UNAVAILABLE,
            equations: EquationTracker::new(),
        }
    }

    /// False for the [`unavailable`](Self::unavailable) record
    pub fn is_available(&self) -> bool {
        !self.propagation.characteristic_impedance_ohm.is_nan()
    }

    pub fn characteristic_impedance(&self) -> f64 {
        self.propagation.characteristic_impedance_ohm
    }

    /// γ as a complex number
    pub fn gamma(&self) -> Complex64 {
        self.propagation.propagation_constant.to_complex()
    }

    pub fn wavelength(&self) -> f64 {
        self.propagation.wavelength_m
    }

    pub fn angular_frequency(&self) -> f64 {
        Hertz(self.frequency_hz).angular()
    }

    /// Effective permittivity for display: εeff for microstrip, else None
    pub fn effective_permittivity(&self) -> Option<f64> {
        self.propagation.effective_permittivity
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Compute the line parameters for a geometry, material and frequency.
///
/// # Errors
///
/// * `InvalidInput` - a scalar is NaN, non-finite or out of range
/// * `InvalidDimensions` - a non-positive dimension, or e.g. coaxial outer radius
///   not larger than the inner
pub fn compute_line_parameters(input: &LineInput) -> CalcResult<LineAnalysis> {
    if let Err(err) = input.validate() {
        warn!(
            geometry = %input.geometry.kind(),
            code = err.error_code(),
            "line input rejected: {}",
            err
        );
        return Err(err);
    }

    let frequency_hz = Hertz::from(Megahertz(input.frequency_mhz)).value();
    let omega = Hertz(frequency_hz).angular();
    let material = &input.material;
    let mu = material.permeability * VACUUM_PERMEABILITY;
    let epsilon = material.permittivity * VACUUM_PERMITTIVITY;
    let sigma_d = material.dielectric_conductivity_s_per_m;
    let context = input.geometry.kind().as_str();

    let mut equations = EquationTracker::new();
    let rs = line::surface_resistance(frequency_hz, material.conductivity_s_per_m);
    equations.record(Equation::SurfaceResistance, context);
    let skin_depth_m = line::skin_depth(frequency_hz, material.conductivity_s_per_m);
    if skin_depth_m.is_some() {
        equations.record(Equation::SkinDepth, context);
    }

    let (line_parameters, propagation, microstrip) = match input.geometry {
        Geometry::Microstrip {
            strip_width_mm,
            substrate_height_mm,
        } => {
            let w = Meters::from(Millimeters(strip_width_mm)).value();
            let h = Meters::from(Millimeters(substrate_height_mm)).value();
            let er = material.permittivity;
            let solution = microstrip::solve(w, h, er, frequency_hz);

            equations.record(Equation::MicrostripStaticPermittivity, context);
            equations.record(Equation::MicrostripImpedance, context);
            if solution.dispersion_applied {
                debug!(
                    frequency_hz,
                    static_eeff = solution.static_effective_permittivity,
                    eeff = solution.effective_permittivity,
                    "microstrip dispersion applied"
                );
                equations.record(Equation::MicrostripDispersion, context);
            }

            let z0 = solution.impedance;
            let eeff = solution.effective_permittivity;
            let capacitance = eeff.sqrt() / (z0 * SPEED_OF_LIGHT);
            let params = LineParameters {
                resistance_ohm_per_m: 0.0,
                inductance_h_per_m: z0 * z0 * capacitance,
                conductance_s_per_m: 0.0,
                capacitance_f_per_m: capacitance,
            };
            equations.record(Equation::MicrostripLineParameters, context);

            let vp = line::tem_phase_velocity(SPEED_OF_LIGHT, eeff);
            let beta = omega / vp;
            equations.record(Equation::PhaseVelocity, context);
            equations.record(Equation::PhaseConstant, context);
            equations.record(Equation::Wavelength, context);

            let propagation = PropagationResult {
                characteristic_impedance_ohm: z0,
                propagation_constant: ComplexValue::new(0.0, beta),
                phase_velocity_m_per_s: vp,
                wavelength_m: line::wavelength(vp, frequency_hz),
                effective_permittivity: Some(eeff),
            };
            let details = MicrostripDetails {
                strip_width_mm,
                substrate_height_mm,
                permittivity: er,
                width_to_height: w / h,
                static_effective_permittivity: solution.static_effective_permittivity,
                effective_permittivity: eeff,
                preliminary_impedance_ohm: solution.preliminary_impedance,
                dispersion_factor: solution.dispersion_factor,
                knee_frequency_ghz: solution.knee_frequency_ghz,
                dispersion_applied: solution.dispersion_applied,
            };
            (params, propagation, Some(details))
        }
        tem => {
            let (params, z0) = tem_parameters(&tem, rs, mu, epsilon, sigma_d, material.permittivity);
            equations.record(
                match tem.kind() {
                    GeometryKind::Coaxial => Equation::CoaxialLineParameters,
                    GeometryKind::TwoWire => Equation::TwoWireLineParameters,
                    _ => Equation::ParallelPlateLineParameters,
                },
                context,
            );
            equations.record(
                match tem.kind() {
                    GeometryKind::Coaxial => Equation::CoaxialImpedance,
                    GeometryKind::TwoWire => Equation::TwoWireImpedance,
                    _ => Equation::ParallelPlateImpedance,
                },
                context,
            );

            let alpha = line::low_loss_attenuation(
                params.resistance_ohm_per_m,
                params.inductance_h_per_m,
                params.conductance_s_per_m,
                params.capacitance_f_per_m,
            );
            let beta = line::phase_constant(omega, params.inductance_h_per_m, params.capacitance_f_per_m);
            let vp = line::tem_phase_velocity(SPEED_OF_LIGHT, material.permittivity);
            equations.record(Equation::LowLossAttenuation, context);
            equations.record(Equation::PhaseConstant, context);
            equations.record(Equation::PhaseVelocity, context);
            equations.record(Equation::Wavelength, context);

            let propagation = PropagationResult {
                characteristic_impedance_ohm: z0,
                propagation_constant: ComplexValue::new(alpha, beta),
                phase_velocity_m_per_s: vp,
                wavelength_m: line::wavelength(vp, frequency_hz),
                effective_permittivity: None,
            };
            (params, propagation, None)
        }
    };

    let telegrapher = line_parameters.telegrapher(omega);
    equations.record(Equation::TelegrapherPropagation, context);

    equations.record(Equation::AttenuationDecibels, context);
    let attenuation_db_per_m = NEPER_TO_DB * propagation.attenuation_np_per_m();

    if !propagation.characteristic_impedance_ohm.is_finite() {
        return Err(CalcError::Internal {
            message: format!(
                "{} produced a non-finite characteristic impedance",
                input.geometry.kind().display_name()
            ),
        });
    }

    Ok(LineAnalysis {
        geometry: input.geometry.kind(),
        frequency_hz,
        line_parameters,
        propagation,
        attenuation_db_per_m,
        surface_resistance_ohm: rs,
        skin_depth_m,
        microstrip,
        telegrapher,
        equations,
    })
}

/// R′L′G′C′ and Z₀ for the three TEM cross-sections.
fn tem_parameters(
    geometry: &Geometry,
    rs: f64,
    mu: f64,
    epsilon: f64,
    sigma_d: f64,
    epsilon_r: f64,
) -> (LineParameters, f64) {
    let mm = |v: f64| Meters::from(Millimeters(v)).value();

    match *geometry {
        Geometry::Coaxial {
            inner_radius_mm,
            outer_radius_mm,
        } => {
            let (a, b) = (mm(inner_radius_mm), mm(outer_radius_mm));
            let lt = line::coaxial_log_term(a, b);
            (
                LineParameters {
                    resistance_ohm_per_m: line::coaxial_resistance(rs, a, b),
                    inductance_h_per_m: line::coaxial_inductance(mu, lt),
                    conductance_s_per_m: line::coaxial_conductance(sigma_d, lt),
                    capacitance_f_per_m: line::coaxial_capacitance(epsilon, lt),
                },
                line::coaxial_impedance(epsilon_r, lt),
            )
        }
        Geometry::TwoWire {
            wire_radius_mm,
            wire_spacing_mm,
        } => {
            let (a, spacing) = (mm(wire_radius_mm), mm(wire_spacing_mm));
            let lt = line::two_wire_log_term(a, spacing);
            (
                LineParameters {
                    resistance_ohm_per_m: line::two_wire_resistance(rs, a),
                    inductance_h_per_m: line::two_wire_inductance(mu, lt),
                    conductance_s_per_m: line::two_wire_conductance(sigma_d, lt),
                    capacitance_f_per_m: line::two_wire_capacitance(epsilon, lt),
                },
                line::two_wire_impedance(epsilon_r, lt),
            )
        }
        Geometry::ParallelPlate {
            plate_width_mm,
            plate_spacing_mm,
        } => {
            let (w, h) = (mm(plate_width_mm), mm(plate_spacing_mm));
            (
                LineParameters {
                    resistance_ohm_per_m: line::parallel_plate_resistance(rs, w),
                    inductance_h_per_m: line::parallel_plate_inductance(mu, w, h),
                    conductance_s_per_m: line::parallel_plate_conductance(sigma_d, w, h),
                    capacitance_f_per_m: line::parallel_plate_capacitance(epsilon, w, h),
                },
                line::parallel_plate_impedance(epsilon_r, w, h),
            )
        }
        // Handled by the quasi-TEM branch of compute_line_parameters
        Geometry::Microstrip { .. } => (LineParameters::UNAVAILABLE, f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    use super::*;
    use crate::calculations::Material;

    fn coax(a: f64, b: f64) -> LineInput {
        LineInput {
            geometry: Geometry::Coaxial {
                inner_radius_mm: a,
                outer_radius_mm: b,
            },
            ..LineInput::default_for(GeometryKind::Coaxial)
        }
    }

    fn lossless(kind: GeometryKind) -> LineInput {
        let mut input = LineInput::default_for(kind);
        input.material.conductivity_s_per_m = f64::INFINITY;
        input.material.dielectric_conductivity_s_per_m = 0.0;
        input
    }

    #[test]
    fn test_coax_reference_values() {
        let result = compute_line_parameters(&coax(0.5, 2.0)).unwrap();
        let p = &result.propagation;

        assert_relative_eq!(p.characteristic_impedance_ohm, 60.0 * 4.0_f64.ln(), max_relative = 1e-12);
        assert_relative_eq!(p.characteristic_impedance_ohm, 83.18, max_relative = 1e-4);
        assert_relative_eq!(p.phase_constant_rad_per_m(), 2.0 * PI * 1e9 / SPEED_OF_LIGHT, max_relative = 1e-6);
        assert_relative_eq!(p.wavelength_m, 0.2998, max_relative = 1e-3);
        assert!(p.attenuation_np_per_m() > 0.0);
        assert!(p.effective_permittivity.is_none());
        assert!(result.skin_depth_m.is_some());
    }

    #[test]
    fn test_lossless_tem_lines() {
        for kind in [GeometryKind::Coaxial, GeometryKind::TwoWire, GeometryKind::ParallelPlate] {
            let result = compute_line_parameters(&lossless(kind)).unwrap();
            let lp = &result.line_parameters;
            let omega = result.angular_frequency();

            assert_eq!(lp.resistance_ohm_per_m, 0.0, "{:?}", kind);
            assert_eq!(result.propagation.attenuation_np_per_m(), 0.0, "{:?}", kind);
            assert_relative_eq!(
                result.propagation.phase_constant_rad_per_m(),
                omega * (lp.inductance_h_per_m * lp.capacitance_f_per_m).sqrt(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_lc_product_equals_mu_epsilon() {
        for kind in [GeometryKind::Coaxial, GeometryKind::TwoWire, GeometryKind::ParallelPlate] {
            let mut input = LineInput::default_for(kind);
            input.material.permittivity = 2.25;
            input.material.permeability = 1.5;
            let lp = compute_line_parameters(&input).unwrap().line_parameters;
            let mu_eps = 1.5 * VACUUM_PERMEABILITY * 2.25 * VACUUM_PERMITTIVITY;
            assert_relative_eq!(lp.inductance_h_per_m * lp.capacitance_f_per_m, mu_eps, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_conductance_over_capacitance() {
        for kind in [GeometryKind::Coaxial, GeometryKind::TwoWire, GeometryKind::ParallelPlate] {
            let mut input = LineInput::default_for(kind);
            input.material.permittivity = 4.0;
            input.material.dielectric_conductivity_s_per_m = 1e-4;
            let lp = compute_line_parameters(&input).unwrap().line_parameters;
            assert_relative_eq!(
                lp.conductance_s_per_m / lp.capacitance_f_per_m,
                1e-4 / (4.0 * VACUUM_PERMITTIVITY),
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_zero_conductivity_gives_infinite_loss() {
        let mut input = coax(0.5, 2.0);
        input.material.conductivity_s_per_m = 0.0;
        let result = compute_line_parameters(&input).unwrap();
        assert!(result.surface_resistance_ohm.is_infinite());
        assert!(result.line_parameters.resistance_ohm_per_m.is_infinite());
        assert_eq!(result.propagation.attenuation_np_per_m(), f64::INFINITY);
        assert!(result.skin_depth_m.is_none());
    }

    #[test]
    fn test_reversed_radii_rejected() {
        let err = compute_line_parameters(&coax(2.0, 0.5)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_nan_frequency_rejected() {
        let input = coax(0.5, 2.0).at_frequency(f64::NAN);
        let err = compute_line_parameters(&input).unwrap_err();
        assert_eq!(err.field(), Some("frequency_mhz"));
    }

    #[test]
    fn test_parallel_plate_impedance() {
        let result = compute_line_parameters(&LineInput::default_for(GeometryKind::ParallelPlate)).unwrap();
        assert_relative_eq!(result.characteristic_impedance(), 37.7, max_relative = 1e-12);
    }

    #[test]
    fn test_two_wire_impedance() {
        let result = compute_line_parameters(&LineInput::default_for(GeometryKind::TwoWire)).unwrap();
        assert_relative_eq!(result.characteristic_impedance(), 120.0 * 5.0_f64.acosh(), max_relative = 1e-12);
    }

    #[test]
    fn test_microstrip_lossless_and_consistent() {
        let mut input = LineInput::default_for(GeometryKind::Microstrip);
        input.material.permittivity = 4.4;
        let result = compute_line_parameters(&input).unwrap();
        let lp = &result.line_parameters;
        let z0 = result.characteristic_impedance();
        let eeff = result.effective_permittivity().unwrap();

        assert_eq!(result.propagation.attenuation_np_per_m(), 0.0);
        assert_eq!(lp.resistance_ohm_per_m, 0.0);
        assert_relative_eq!((lp.inductance_h_per_m / lp.capacitance_f_per_m).sqrt(), z0, max_relative = 1e-12);
        assert_relative_eq!(
            result.propagation.phase_velocity_m_per_s,
            SPEED_OF_LIGHT / eeff.sqrt(),
            max_relative = 1e-12
        );
        assert!(!result.microstrip.unwrap().dispersion_applied);
    }

    #[test]
    fn test_microstrip_dispersion_above_2ghz() {
        let mut input = LineInput::default_for(GeometryKind::Microstrip);
        input.material.permittivity = 4.4;

        let z_low = compute_line_parameters(&input.at_frequency(1.0)).unwrap().characteristic_impedance();
        let z_mid = compute_line_parameters(&input.at_frequency(500.0)).unwrap().characteristic_impedance();
        let high = compute_line_parameters(&input.at_frequency(10_000.0)).unwrap();

        assert_eq!(z_low, z_mid);
        assert!((high.characteristic_impedance() - z_low).abs() > 1e-6);
        assert!(high.microstrip.unwrap().dispersion_applied);
        assert!(high.equations.unique_equations().contains(&Equation::MicrostripDispersion));
    }

    #[test]
    fn test_attenuation_in_db() {
        let result = compute_line_parameters(&coax(0.5, 2.0)).unwrap();
        assert_relative_eq!(
            result.attenuation_db_per_m,
            8.685889638 * result.propagation.attenuation_np_per_m(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_telegrapher_matches_low_loss() {
        let mut input = coax(0.5, 2.0);
        input.material = Material {
            dielectric_conductivity_s_per_m: 1e-6,
            ..Material::default()
        };
        let result = compute_line_parameters(&input).unwrap();
        let exact = result.telegrapher;

        assert!(result.equations.unique_equations().contains(&Equation::TelegrapherPropagation));

        // Z₀ uses 60 Ω where √(L′/C′) gives η₀/2π ≈ 59.96 Ω
        assert_relative_eq!(
            exact.propagation_constant.real,
            result.propagation.attenuation_np_per_m(),
            max_relative = 1e-4
        );
        assert_relative_eq!(
            exact.propagation_constant.imag,
            result.propagation.phase_constant_rad_per_m(),
            max_relative = 1e-6
        );
        assert_relative_eq!(
            exact.characteristic_impedance.real,
            result.characteristic_impedance(),
            max_relative = 2e-3
        );
    }

    #[test]
    fn test_lumped_section_scales_with_length() {
        let lp = compute_line_parameters(&coax(0.5, 2.0)).unwrap().line_parameters;
        let cell = lp.lumped_section(1e-3);
        assert_relative_eq!(cell.inductance_h, lp.inductance_h_per_m * 1e-3);
        assert_relative_eq!(cell.capacitance_f, lp.capacitance_f_per_m * 1e-3);
        assert_eq!(cell.length_m, 1e-3);
    }

    #[test]
    fn test_unavailable_record() {
        let record = LineAnalysis::unavailable(GeometryKind::TwoWire);
        assert!(!record.is_available());
        assert!(record.propagation.wavelength_m.is_nan());
        assert!(record.line_parameters.capacitance_f_per_m.is_nan());
        assert!(record.equations.usages().is_empty());
    }

    #[test]
    fn test_equations_recorded() {
        let result = compute_line_parameters(&coax(0.5, 2.0)).unwrap();
        let used = result.equations.unique_equations();
        assert!(used.contains(&Equation::CoaxialImpedance));
        assert!(used.contains(&Equation::LowLossAttenuation));
        assert!(!used.contains(&Equation::MicrostripImpedance));
    }
}
