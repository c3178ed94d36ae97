//! # Equation Registry
//!
//! Central registry of every transmission-line formula the engine evaluates.
//! Each equation carries its formula, reference, variables and the function
//! that implements it, so a result can list exactly which formulas produced it.
//!
//! ## Usage
//!
//! ```rust
//! use tline_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::CoaxialImpedance, "coaxial");
//!
//! let meta = Equation::CoaxialImpedance.metadata();
//! assert!(meta.formula_plain.contains("ln(b/a)"));
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Literature reference for a formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reference {
    /// Pozar, Microwave Engineering
    Pozar {
        edition: u8,
        section: &'static str,
    },
    /// Ulaby, Fundamentals of Applied Electromagnetics
    Ulaby {
        edition: u8,
        table: &'static str,
    },
    /// Hammerstad & Jensen, IEEE MTT-S 1980
    HammerstadJensen,
    /// Getsinger, IEEE Trans. MTT 1973
    Getsinger,
    /// Standard transmission line theory (no specific citation needed)
    LineTheory,
}

impl Reference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            Reference::Pozar { edition, section } => {
                format!("Pozar {}ed, Section {}", edition, section)
            }
            Reference::Ulaby { edition, table } => {
                format!("Ulaby {}ed, {}", edition, table)
            }
            Reference::HammerstadJensen => "Hammerstad & Jensen, IEEE MTT-S 1980".to_string(),
            Reference::Getsinger => "Getsinger, IEEE Trans. MTT-21, 1973".to_string(),
            Reference::LineTheory => "Transmission Line Theory".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            Reference::Pozar { .. } => "Pozar",
            Reference::Ulaby { .. } => "Ulaby",
            Reference::HammerstadJensen => "Hammerstad-Jensen",
            Reference::Getsinger => "Getsinger",
            Reference::LineTheory => "Line Theory",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Conductor surface effects (Rs, skin depth)
    ConductorLoss,
    /// Per-unit-length R′, L′, G′, C′
    LineParameters,
    /// Characteristic impedance Z₀
    CharacteristicImpedance,
    /// Quasi-static and dispersive microstrip model
    Microstrip,
    /// α, β, phase velocity, wavelength
    Propagation,
    /// Γ, VSWR, input impedance
    Termination,
    /// Standing-wave and traveling-wave plotting functions
    Waveforms,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::ConductorLoss => "Conductor Loss",
            EquationCategory::LineParameters => "Line Parameters",
            EquationCategory::CharacteristicImpedance => "Characteristic Impedance",
            EquationCategory::Microstrip => "Microstrip",
            EquationCategory::Propagation => "Propagation",
            EquationCategory::Termination => "Termination",
            EquationCategory::Waveforms => "Waveforms",
        }
    }

    /// Sort order for documentation (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::ConductorLoss => 1,
            EquationCategory::LineParameters => 2,
            EquationCategory::CharacteristicImpedance => 3,
            EquationCategory::Microstrip => 4,
            EquationCategory::Propagation => 5,
            EquationCategory::Termination => 6,
            EquationCategory::Waveforms => 7,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "Z0", "a", "εr")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "Ω", "m", "rad/m")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a formula.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Coaxial Characteristic Impedance")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Literature reference
    pub reference: Reference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All formulas evaluated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Conductor loss
    // -------------------------------------------------------------------------
    /// Rs = √(πfμ₀/σ)
    SurfaceResistance,
    /// δ = 1/√(πfμ₀σ)
    SkinDepth,

    // -------------------------------------------------------------------------
    // TEM line parameters
    // -------------------------------------------------------------------------
    /// R′, L′, G′, C′ for coaxial line
    CoaxialLineParameters,
    /// R′, L′, G′, C′ for two-wire line
    TwoWireLineParameters,
    /// R′, L′, G′, C′ for parallel-plate line
    ParallelPlateLineParameters,
    /// C′ = √εeff/(Z₀c), L′ = Z₀²C′
    MicrostripLineParameters,

    // -------------------------------------------------------------------------
    // Characteristic impedance
    // -------------------------------------------------------------------------
    /// Z₀ = (60/√εr)·ln(b/a)
    CoaxialImpedance,
    /// Z₀ = (120/√εr)·acosh(D/2a)
    TwoWireImpedance,
    /// Z₀ = 377h/(w√εr)
    ParallelPlateImpedance,

    // -------------------------------------------------------------------------
    // Microstrip
    // -------------------------------------------------------------------------
    /// εeff₀ (Hammerstad-Jensen)
    MicrostripStaticPermittivity,
    /// Z₀ = (60/√εeff)·ln[...]
    MicrostripImpedance,
    /// εeff(f) dispersion above 2 GHz
    MicrostripDispersion,

    // -------------------------------------------------------------------------
    // Propagation
    // -------------------------------------------------------------------------
    /// α = (R′/2)√(C′/L′) + (G′/2)√(L′/C′)
    LowLossAttenuation,
    /// β = ω√(L′C′)
    PhaseConstant,
    /// v_p = c/√εr
    PhaseVelocity,
    /// λ = v_p/f
    Wavelength,
    /// α_dB = 20·log10(e)·α
    AttenuationDecibels,
    /// γ = √((R′+jωL′)(G′+jωC′))
    TelegrapherPropagation,

    // -------------------------------------------------------------------------
    // Termination
    // -------------------------------------------------------------------------
    /// Γ = (ZL − Z₀)/(ZL + Z₀)
    ReflectionCoefficient,
    /// VSWR = (1 + |Γ|)/(1 − |Γ|)
    Vswr,
    /// Z(d) = Z₀(1 + Γe^(−2γd))/(1 − Γe^(−2γd))
    InputImpedanceGeneral,
    /// Z(d) = Z₀·tanh(γd)
    InputImpedanceShort,
    /// Z(d) = Z₀·coth(γd)
    InputImpedanceOpen,

    // -------------------------------------------------------------------------
    // Waveforms
    // -------------------------------------------------------------------------
    /// |V(d)| = √(1 + |Γ|² + 2|Γ|cos(2βd − θ))
    StandingWaveEnvelope,
    /// V(d,t) = cos(ωt − βd) + |Γ|cos(ωt + βd − θ)
    TravelingWave,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::SurfaceResistance => EquationMetadata {
                name: "Surface Resistance",
                description: "High-frequency resistance of a conductor surface per square",
                formula_plain: "Rs = sqrt(pi * f * mu0 / sigma)",
                reference: Reference::Pozar { edition: 4, section: "1.7" },
                variables: vec![
                    Variable::new("Rs", "Surface resistance", "Ω"),
                    Variable::new("f", "Frequency", "Hz"),
                    Variable::new("sigma", "Conductor conductivity", "S/m"),
                ],
                assumptions: vec!["Good conductor (σ >> ωε)", "Conductor thickness >> skin depth", "σ = 0 gives Rs = ∞"],
                category: EquationCategory::ConductorLoss,
                source_module: "equations/line.rs",
                source_function: "surface_resistance",
            },

            Equation::SkinDepth => EquationMetadata {
                name: "Skin Depth",
                description: "Depth at which current density falls to 1/e of its surface value",
                formula_plain: "delta = 1 / sqrt(pi * f * mu0 * sigma)",
                reference: Reference::Pozar { edition: 4, section: "1.7" },
                variables: vec![
                    Variable::new("delta", "Skin depth", "m"),
                    Variable::new("sigma", "Conductor conductivity", "S/m"),
                ],
                assumptions: vec!["Non-magnetic conductor"],
                category: EquationCategory::ConductorLoss,
                source_module: "equations/line.rs",
                source_function: "skin_depth",
            },

            Equation::CoaxialLineParameters => EquationMetadata {
                name: "Coaxial Line Parameters",
                description: "Per-unit-length RLGC of a coaxial line",
                formula_plain: "R' = (Rs/2pi)(1/a + 1/b), L' = (mu/2pi)ln(b/a), G' = 2pi*sigma_d/ln(b/a), C' = 2pi*eps/ln(b/a)",
                reference: Reference::Ulaby { edition: 7, table: "Table 2-1" },
                variables: vec![
                    Variable::new("a", "Inner conductor radius", "m"),
                    Variable::new("b", "Outer conductor radius", "m"),
                    Variable::new("mu", "Dielectric permeability", "H/m"),
                    Variable::new("eps", "Dielectric permittivity", "F/m"),
                    Variable::new("sigma_d", "Dielectric conductivity", "S/m"),
                ],
                assumptions: vec!["TEM mode", "0 < a < b"],
                category: EquationCategory::LineParameters,
                source_module: "equations/line.rs",
                source_function: "coaxial_inductance",
            },

            Equation::TwoWireLineParameters => EquationMetadata {
                name: "Two-Wire Line Parameters",
                description: "Per-unit-length RLGC of a balanced two-wire line",
                formula_plain: "R' = Rs/(pi*a), L' = (mu/pi)acosh(D/2a), G' = pi*sigma_d/acosh(D/2a), C' = pi*eps/acosh(D/2a)",
                reference: Reference::Ulaby { edition: 7, table: "Table 2-1" },
                variables: vec![
                    Variable::new("a", "Wire radius", "m"),
                    Variable::new("D", "Center-to-center spacing", "m"),
                ],
                assumptions: vec!["TEM mode", "D > 2a"],
                category: EquationCategory::LineParameters,
                source_module: "equations/line.rs",
                source_function: "two_wire_inductance",
            },

            Equation::ParallelPlateLineParameters => EquationMetadata {
                name: "Parallel-Plate Line Parameters",
                description: "Per-unit-length RLGC of a wide parallel-plate line",
                formula_plain: "R' = 2Rs/w, L' = mu*h/w, G' = sigma_d*w/h, C' = eps*w/h",
                reference: Reference::Ulaby { edition: 7, table: "Table 2-1" },
                variables: vec![
                    Variable::new("w", "Plate width", "m"),
                    Variable::new("h", "Plate spacing", "m"),
                ],
                assumptions: vec!["TEM mode", "w >> h (fringing neglected)"],
                category: EquationCategory::LineParameters,
                source_module: "equations/line.rs",
                source_function: "parallel_plate_inductance",
            },

            Equation::MicrostripLineParameters => EquationMetadata {
                name: "Microstrip Line Parameters",
                description: "Equivalent C′ and L′ of a microstrip from Z₀ and εeff",
                formula_plain: "C' = sqrt(eeff)/(Z0*c), L' = Z0^2 * C', R' = G' = 0",
                reference: Reference::Pozar { edition: 4, section: "3.8" },
                variables: vec![
                    Variable::new("eeff", "Effective permittivity", "-"),
                    Variable::new("Z0", "Characteristic impedance", "Ω"),
                    Variable::new("c", "Speed of light", "m/s"),
                ],
                assumptions: vec!["Quasi-TEM", "Lossless conductors and substrate"],
                category: EquationCategory::LineParameters,
                source_module: "calculations/line_parameters.rs",
                source_function: "microstrip",
            },

            Equation::CoaxialImpedance => EquationMetadata {
                name: "Coaxial Characteristic Impedance",
                description: "Characteristic impedance of a coaxial line",
                formula_plain: "Z0 = (60/sqrt(er)) * ln(b/a)",
                reference: Reference::Pozar { edition: 4, section: "2.2" },
                variables: vec![
                    Variable::new("Z0", "Characteristic impedance", "Ω"),
                    Variable::new("er", "Relative permittivity", "-"),
                ],
                assumptions: vec!["Non-magnetic dielectric", "Low-loss line (Z0 taken as real)"],
                category: EquationCategory::CharacteristicImpedance,
                source_module: "equations/line.rs",
                source_function: "coaxial_impedance",
            },

            Equation::TwoWireImpedance => EquationMetadata {
                name: "Two-Wire Characteristic Impedance",
                description: "Characteristic impedance of a balanced two-wire line",
                formula_plain: "Z0 = (120/sqrt(er)) * ln(D/2a + sqrt((D/2a)^2 - 1))",
                reference: Reference::Ulaby { edition: 7, table: "Table 2-2" },
                variables: vec![
                    Variable::new("Z0", "Characteristic impedance", "Ω"),
                    Variable::new("D", "Center-to-center spacing", "m"),
                    Variable::new("a", "Wire radius", "m"),
                ],
                assumptions: vec!["Non-magnetic dielectric", "Low-loss line (Z0 taken as real)"],
                category: EquationCategory::CharacteristicImpedance,
                source_module: "equations/line.rs",
                source_function: "two_wire_impedance",
            },

            Equation::ParallelPlateImpedance => EquationMetadata {
                name: "Parallel-Plate Characteristic Impedance",
                description: "Characteristic impedance of a wide parallel-plate line",
                formula_plain: "Z0 = 377 * h / (w * sqrt(er))",
                reference: Reference::Ulaby { edition: 7, table: "Table 2-2" },
                variables: vec![
                    Variable::new("Z0", "Characteristic impedance", "Ω"),
                    Variable::new("h", "Plate spacing", "m"),
                    Variable::new("w", "Plate width", "m"),
                ],
                assumptions: vec!["w >> h", "Free-space impedance rounded to 377 Ω"],
                category: EquationCategory::CharacteristicImpedance,
                source_module: "equations/line.rs",
                source_function: "parallel_plate_impedance",
            },

            Equation::MicrostripStaticPermittivity => EquationMetadata {
                name: "Microstrip Static Effective Permittivity",
                description: "Low-frequency effective permittivity of a microstrip",
                formula_plain: "eeff0 = (er+1)/2 + (er-1)/2 * (1 + 10/s)^(-x*y)",
                reference: Reference::HammerstadJensen,
                variables: vec![
                    Variable::new("s", "Strip width over substrate height", "-"),
                    Variable::new("x", "((er-0.9)/(er+3))^0.05", "-"),
                    Variable::new("y", "1 + 0.02ln((s^4+3.7e-4 s^2)/(s^4+0.43)) + 0.05ln(1+1.7e-4 s^3)", "-"),
                ],
                assumptions: vec!["Zero strip thickness", "er >= 1"],
                category: EquationCategory::Microstrip,
                source_module: "equations/microstrip.rs",
                source_function: "static_effective_permittivity",
            },

            Equation::MicrostripImpedance => EquationMetadata {
                name: "Microstrip Characteristic Impedance",
                description: "Characteristic impedance of a microstrip for a given effective permittivity",
                formula_plain: "Z0 = (60/sqrt(eeff)) * ln((6 + (2pi-6)e^(-t))/s + sqrt(1 + 4/s^2)), t = (30.67/s)^0.75",
                reference: Reference::HammerstadJensen,
                variables: vec![
                    Variable::new("Z0", "Characteristic impedance", "Ω"),
                    Variable::new("eeff", "Effective permittivity", "-"),
                ],
                assumptions: vec!["Zero strip thickness"],
                category: EquationCategory::Microstrip,
                source_module: "equations/microstrip.rs",
                source_function: "impedance",
            },

            Equation::MicrostripDispersion => EquationMetadata {
                name: "Microstrip Dispersion",
                description: "Frequency-dependent effective permittivity, applied above 2 GHz",
                formula_plain: "eeff(f) = er - (er - eeff0)/(1 + G(f/fp)^2), G = 0.6 + 0.009 Z0', fp = Z0'/(2 mu0 h)",
                reference: Reference::Getsinger,
                variables: vec![
                    Variable::new("G", "Dispersion factor", "-"),
                    Variable::new("fp", "Knee frequency", "GHz"),
                    Variable::new("Z0'", "Static characteristic impedance", "Ω"),
                ],
                assumptions: vec!["Applied only for f > 2 GHz"],
                category: EquationCategory::Microstrip,
                source_module: "equations/microstrip.rs",
                source_function: "dispersive_effective_permittivity",
            },

            Equation::LowLossAttenuation => EquationMetadata {
                name: "Low-Loss Attenuation Constant",
                description: "Attenuation from conductor and dielectric losses",
                formula_plain: "alpha = (R'/2)sqrt(C'/L') + (G'/2)sqrt(L'/C')",
                reference: Reference::Pozar { edition: 4, section: "2.7" },
                variables: vec![
                    Variable::new("alpha", "Attenuation constant", "Np/m"),
                    Variable::new("R'", "Resistance per length", "Ω/m"),
                    Variable::new("G'", "Conductance per length", "S/m"),
                ],
                assumptions: vec!["R' << ωL'", "G' << ωC'"],
                category: EquationCategory::Propagation,
                source_module: "equations/line.rs",
                source_function: "low_loss_attenuation",
            },

            Equation::PhaseConstant => EquationMetadata {
                name: "Phase Constant",
                description: "Phase shift per unit length",
                formula_plain: "beta = omega * sqrt(L' * C')",
                reference: Reference::Pozar { edition: 4, section: "2.1" },
                variables: vec![
                    Variable::new("beta", "Phase constant", "rad/m"),
                    Variable::new("omega", "Angular frequency", "rad/s"),
                ],
                assumptions: vec!["Low-loss line"],
                category: EquationCategory::Propagation,
                source_module: "equations/line.rs",
                source_function: "phase_constant",
            },

            Equation::PhaseVelocity => EquationMetadata {
                name: "Phase Velocity",
                description: "Velocity of constant-phase points along the line",
                formula_plain: "v_p = c / sqrt(er)",
                reference: Reference::LineTheory,
                variables: vec![
                    Variable::new("v_p", "Phase velocity", "m/s"),
                    Variable::new("er", "Relative (or effective) permittivity", "-"),
                ],
                assumptions: vec!["Non-magnetic dielectric", "Microstrip uses eeff(f)"],
                category: EquationCategory::Propagation,
                source_module: "equations/line.rs",
                source_function: "tem_phase_velocity",
            },

            Equation::Wavelength => EquationMetadata {
                name: "Guided Wavelength",
                description: "Wavelength on the line",
                formula_plain: "lambda = v_p / f",
                reference: Reference::LineTheory,
                variables: vec![
                    Variable::new("lambda", "Wavelength", "m"),
                    Variable::new("f", "Frequency", "Hz"),
                ],
                assumptions: vec![],
                category: EquationCategory::Propagation,
                source_module: "equations/line.rs",
                source_function: "wavelength",
            },

            Equation::AttenuationDecibels => EquationMetadata {
                name: "Attenuation in Decibels",
                description: "Attenuation constant converted from Np/m to dB/m",
                formula_plain: "alpha_dB = 20*log10(e) * alpha ≈ 8.686 * alpha",
                reference: Reference::LineTheory,
                variables: vec![Variable::new("alpha_dB", "Attenuation", "dB/m")],
                assumptions: vec![],
                category: EquationCategory::Propagation,
                source_module: "calculations/line_parameters.rs",
                source_function: "attenuation_db_per_m",
            },

            Equation::TelegrapherPropagation => EquationMetadata {
                name: "Exact Propagation Constant",
                description: "Complex propagation constant and impedance from the telegrapher equations",
                formula_plain: "gamma = sqrt((R' + jwL')(G' + jwC')), Zc = sqrt((R' + jwL')/(G' + jwC'))",
                reference: Reference::Pozar { edition: 4, section: "2.1" },
                variables: vec![
                    Variable::new("gamma", "Propagation constant", "1/m"),
                    Variable::new("Zc", "Complex characteristic impedance", "Ω"),
                ],
                assumptions: vec!["Uniform line"],
                category: EquationCategory::Propagation,
                source_module: "calculations/line_parameters.rs",
                source_function: "telegrapher",
            },

            Equation::ReflectionCoefficient => EquationMetadata {
                name: "Load Reflection Coefficient",
                description: "Ratio of reflected to incident voltage at the load",
                formula_plain: "Gamma = (ZL - Z0)/(ZL + Z0)",
                reference: Reference::Pozar { edition: 4, section: "2.3" },
                variables: vec![
                    Variable::new("Gamma", "Reflection coefficient", "-"),
                    Variable::new("ZL", "Load impedance", "Ω"),
                ],
                assumptions: vec!["Gamma = 0 when |ZL + Z0|^2 < 1e-5"],
                category: EquationCategory::Termination,
                source_module: "equations/circuit.rs",
                source_function: "reflection_coefficient",
            },

            Equation::Vswr => EquationMetadata {
                name: "Voltage Standing Wave Ratio",
                description: "Ratio of maximum to minimum voltage on the line",
                formula_plain: "VSWR = (1 + |Gamma|)/max(1 - |Gamma|, 1e-6)",
                reference: Reference::Pozar { edition: 4, section: "2.3" },
                variables: vec![Variable::new("VSWR", "Standing wave ratio", "-")],
                assumptions: vec!["Capped near 2e6 for total reflection"],
                category: EquationCategory::Termination,
                source_module: "equations/circuit.rs",
                source_function: "vswr",
            },

            Equation::InputImpedanceGeneral => EquationMetadata {
                name: "Input Impedance (General Load)",
                description: "Impedance seen a distance d from an arbitrary load",
                formula_plain: "Z(d) = Z0 (1 + Gamma e^(-2 gamma d))/(1 - Gamma e^(-2 gamma d))",
                reference: Reference::Pozar { edition: 4, section: "2.7" },
                variables: vec![
                    Variable::new("d", "Distance from load", "m"),
                    Variable::new("gamma", "Propagation constant", "1/m"),
                ],
                assumptions: vec!["±1e6 Ω sentinel when the denominator vanishes"],
                category: EquationCategory::Termination,
                source_module: "equations/circuit.rs",
                source_function: "general_input_impedance",
            },

            Equation::InputImpedanceShort => EquationMetadata {
                name: "Input Impedance (Short Circuit)",
                description: "Impedance of a short-circuited stub",
                formula_plain: "Z(d) = Z0 tanh(gamma d)",
                reference: Reference::Pozar { edition: 4, section: "2.3" },
                variables: vec![Variable::new("d", "Distance from load", "m")],
                assumptions: vec![],
                category: EquationCategory::Termination,
                source_module: "equations/circuit.rs",
                source_function: "short_input_impedance",
            },

            Equation::InputImpedanceOpen => EquationMetadata {
                name: "Input Impedance (Open Circuit)",
                description: "Impedance of an open-circuited stub",
                formula_plain: "Z(d) = Z0 coth(gamma d)",
                reference: Reference::Pozar { edition: 4, section: "2.3" },
                variables: vec![Variable::new("d", "Distance from load", "m")],
                assumptions: vec!["1e6 Ω sentinel at d = 0"],
                category: EquationCategory::Termination,
                source_module: "equations/circuit.rs",
                source_function: "open_input_impedance",
            },

            Equation::StandingWaveEnvelope => EquationMetadata {
                name: "Standing Wave Envelope",
                description: "Voltage magnitude along the line for unit incident amplitude",
                formula_plain: "|V(d)| = sqrt(1 + |Gamma|^2 + 2|Gamma|cos(2 beta d - theta))",
                reference: Reference::Pozar { edition: 4, section: "2.3" },
                variables: vec![
                    Variable::new("theta", "Reflection coefficient angle", "rad"),
                    Variable::new("beta", "2pi/lambda", "rad/m"),
                ],
                assumptions: vec!["Lossless line", "Unit incident amplitude"],
                category: EquationCategory::Waveforms,
                source_module: "calculations/waveform.rs",
                source_function: "standing_wave_amplitude",
            },

            Equation::TravelingWave => EquationMetadata {
                name: "Traveling Wave Superposition",
                description: "Instantaneous incident, reflected and total voltage",
                formula_plain: "V(d,t) = cos(wt - beta d) + |Gamma| cos(wt + beta d - theta)",
                reference: Reference::LineTheory,
                variables: vec![
                    Variable::new("wt", "Animation phase", "rad"),
                ],
                assumptions: vec!["Animation phase, not the physical signal frequency"],
                category: EquationCategory::Waveforms,
                source_module: "calculations/waveform.rs",
                source_function: "traveling_wave",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in documentation order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![
            ConductorLoss,
            LineParameters,
            CharacteristicImpedance,
            Microstrip,
            Propagation,
            Termination,
            Waveforms,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::SurfaceResistance,
    Equation::SkinDepth,
    Equation::CoaxialLineParameters,
    Equation::TwoWireLineParameters,
    Equation::ParallelPlateLineParameters,
    Equation::MicrostripLineParameters,
    Equation::CoaxialImpedance,
    Equation::TwoWireImpedance,
    Equation::ParallelPlateImpedance,
    Equation::MicrostripStaticPermittivity,
    Equation::MicrostripImpedance,
    Equation::MicrostripDispersion,
    Equation::LowLossAttenuation,
    Equation::PhaseConstant,
    Equation::PhaseVelocity,
    Equation::Wavelength,
    Equation::AttenuationDecibels,
    Equation::TelegrapherPropagation,
    Equation::ReflectionCoefficient,
    Equation::Vswr,
    Equation::InputImpedanceGeneral,
    Equation::InputImpedanceShort,
    Equation::InputImpedanceOpen,
    Equation::StandingWaveEnvelope,
    Equation::TravelingWave,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where it was used (e.g., "coaxial", "short load")
    pub context: String,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used, in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group unique equations by category
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }

    /// Merge another tracker into this one
    pub fn merge(&mut self, other: EquationTracker) {
        self.usages.extend(other.usages);
    }

    /// Render a "List of Equations" section for a text report.
    pub fn generate_appendix_markdown(&self) -> String {
        let mut output = String::from("## List of Equations\n\n");

        let grouped = self.by_category();
        if grouped.is_empty() {
            output.push_str("_No equations recorded._\n");
            return output;
        }

        for (category, equations) in grouped {
            output.push_str(&format!("### {}\n\n", category.display_name()));
            for eq in equations {
                let meta = eq.metadata();
                let contexts: Vec<&str> = self
                    .usages
                    .iter()
                    .filter(|u| u.equation == eq)
                    .map(|u| u.context.as_str())
                    .collect::<HashSet<_>>()
                    .into_iter()
                    .collect();
                let mut contexts = contexts;
                contexts.sort_unstable();
                output.push_str(&format!(
                    "- **{}**: `{}` ({}) [used for: {}]\n",
                    meta.name,
                    meta.formula_plain,
                    meta.reference.short_form(),
                    contexts.join(", ")
                ));
            }
            output.push('\n');
        }

        output
    }
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate a complete EQUATIONS.md file for documentation.
///
/// # Example
///
/// ```rust
/// use tline_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Transmission Line Equations Reference"));
/// assert!(markdown.contains("## Microstrip"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(24_000);

    output.push_str(r#"# Transmission Line Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula evaluated by the calculation engine.
Each equation includes its formula, literature reference, source location, and assumptions.

## Conventions

| Quantity | Convention |
|----------|------------|
| Lengths | Entered in mm, evaluated in m |
| Frequency | Entered in MHz, evaluated in Hz |
| d | Distance measured from the load toward the generator |
| Gamma angle | Degrees, atan2(Im, Re) |
| Z0 | Real-valued (low-loss approximation) |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 25);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_module.is_empty(), "Equation {:?} missing source_module", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
        }

        assert!(Equation::CoaxialImpedance.metadata().formula_plain.contains("ln(b/a)"));
        assert!(Equation::Vswr.metadata().formula_plain.contains("1e-6"));
    }

    #[test]
    fn test_reference_citation() {
        let pozar = Reference::Pozar { edition: 4, section: "2.7" };
        assert_eq!(pozar.citation(), "Pozar 4ed, Section 2.7");
        assert_eq!(Reference::HammerstadJensen.short_form(), "Hammerstad-Jensen");
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::CoaxialImpedance, "coaxial");
        tracker.record(Equation::PhaseConstant, "coaxial");
        tracker.record(Equation::CoaxialImpedance, "sweep");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(tracker.unique_equations(), vec![Equation::CoaxialImpedance, Equation::PhaseConstant]);
    }

    #[test]
    fn test_by_category_sorted() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::Vswr, "load");
        tracker.record(Equation::SurfaceResistance, "coaxial");
        tracker.record(Equation::MicrostripDispersion, "microstrip");

        let cats: Vec<_> = tracker.by_category().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            cats,
            vec![EquationCategory::ConductorLoss, EquationCategory::Microstrip, EquationCategory::Termination]
        );
    }

    #[test]
    fn test_every_category_has_equations() {
        for cat in Equation::all_categories() {
            assert!(!Equation::in_category(cat).is_empty(), "{:?} is empty", cat);
        }
    }

    #[test]
    fn test_appendix_markdown() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::ReflectionCoefficient, "complex load");
        let md = tracker.generate_appendix_markdown();
        assert!(md.contains("List of Equations"));
        assert!(md.contains("Load Reflection Coefficient"));
        assert!(md.contains("complex load"));

        let empty = EquationTracker::new().generate_appendix_markdown();
        assert!(empty.contains("No equations recorded"));
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Transmission Line Equations Reference"));
        assert!(markdown.contains("Auto-generated from source code"));
        assert!(markdown.contains("## Conductor Loss"));
        assert!(markdown.contains("## Termination"));
        assert!(markdown.contains("### Coaxial Characteristic Impedance"));
        assert!(markdown.contains("`Z0 = (60/sqrt(er)) * ln(b/a)`"));
        assert!(markdown.contains("Hammerstad & Jensen"));
        assert!(markdown.contains("**Total Equations:** 25"));
        assert!(markdown.contains("**Categories:** 7"));
    }
}
