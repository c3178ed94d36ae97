//! # Circuit Analysis Engine
//!
//! Terminates a line of known Z₀ and γ in a load and reports the reflection
//! coefficient, VSWR and the impedance seen at the line input.
//!
//! Near-zero denominators never fail the calculation. Γ falls back to zero and
//! Z(d) to a ±1 MΩ sentinel, and each substitution is listed in
//! [`CircuitResult::guards`]. Only a NaN in the outputs makes the result
//! unavailable.
//!
//! ## Example
//!
//! ```rust
//! use num_complex::Complex64;
//! use tline_core::calculations::circuit::{compute_circuit_properties, LoadSpec};
//!
//! let gamma = Complex64::new(0.0, 20.96);
//! let result = compute_circuit_properties(50.0, gamma, 0.1, LoadSpec::impedance(50.0, 0.0)).unwrap();
//! assert_eq!(result.reflection_coefficient.magnitude, 0.0);
//! assert_eq!(result.vswr, 1.0);
//! ```

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ComplexValue;
use crate::equations::circuit::{self as formulas, GuardedImpedance, IMPEDANCE_SENTINEL, VSWR_EPSILON};
use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::CalcError;

/// Termination at the far end of the line.
///
/// ## JSON Example
///
/// ```json
/// { "type": "impedance", "real": 75.0, "imag": -25.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LoadSpec {
    /// Arbitrary complex load ZL = real + j·imag (Ω)
    Impedance { real: f64, imag: f64 },
    /// ZL = 0
    Short,
    /// ZL = 1 MΩ for Γ; Z₀·coth(γd) for the input impedance
    Open,
}

impl Default for LoadSpec {
    fn default() -> Self {
        LoadSpec::Impedance { real: 50.0, imag: 0.0 }
    }
}

impl LoadSpec {
    pub fn impedance(real: f64, imag: f64) -> Self {
        LoadSpec::Impedance { real, imag }
    }

    /// Load impedance used in the reflection coefficient
    pub fn load_impedance(&self) -> Complex64 {
        match *self {
            LoadSpec::Impedance { real, imag } => Complex64::new(real, imag),
            LoadSpec::Short => Complex64::new(0.0, 0.0),
            LoadSpec::Open => Complex64::new(IMPEDANCE_SENTINEL, 0.0),
        }
    }

    pub fn label(&self) -> String {
        match *self {
            LoadSpec::Impedance { real, imag } if imag < 0.0 => format!("{} - j{} Ω", real, -imag),
            LoadSpec::Impedance { real, imag } => format!("{} + j{} Ω", real, imag),
            LoadSpec::Short => "short circuit".to_string(),
            LoadSpec::Open => "open circuit".to_string(),
        }
    }
}

/// Γ in polar form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReflectionCoefficient {
    /// |Γ|
    pub magnitude: f64,
    /// atan2(Im Γ, Re Γ) in degrees
    pub angle_deg: f64,
}

impl ReflectionCoefficient {
    pub const ZERO: ReflectionCoefficient = ReflectionCoefficient {
        magnitude: 0.0,
        angle_deg: 0.0,
    };

    pub fn from_complex(gamma: Complex64) -> Self {
        ReflectionCoefficient {
            magnitude: gamma.norm(),
            angle_deg: gamma.im.atan2(gamma.re).to_degrees(),
        }
    }

    pub fn to_complex(&self) -> Complex64 {
        Complex64::from_polar(self.magnitude, self.angle_deg.to_radians())
    }

    /// θ in radians
    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }
}

/// Output of the Circuit Analysis Engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitResult {
    pub load: LoadSpec,
    pub line_length_m: f64,
    pub reflection_coefficient: ReflectionCoefficient,
    pub vswr: f64,
    /// Impedance looking into the line at distance `line_length_m` from the load
    pub wave_impedance: ComplexValue,
    /// Fallbacks applied for near-zero denominators
    pub guards: Vec<CalcError>,
    pub equations: EquationTracker,
}

impl CircuitResult {
    /// VSWR at the 1/ε cap, i.e. |Γ| ≈ 1
    pub fn is_total_reflection(&self) -> bool {
        self.vswr >= 1.0 / VSWR_EPSILON
    }

    /// −20·log10|Γ| (dB); `None` for a matched load
    pub fn return_loss_db(&self) -> Option<f64> {
        let mag = self.reflection_coefficient.magnitude;
        if mag > 0.0 {
            Some(-20.0 * mag.log10())
        } else {
            None
        }
    }

    /// −10·log10(1 − |Γ|²) (dB); `None` at or beyond total reflection
    pub fn mismatch_loss_db(&self) -> Option<f64> {
        let transmitted = 1.0 - self.reflection_coefficient.magnitude.powi(2);
        if transmitted > 0.0 {
            Some(-10.0 * transmitted.log10())
        } else {
            None
        }
    }

    /// Input impedance hit the ±1 MΩ sentinel
    pub fn impedance_is_sentinel(&self) -> bool {
        self.wave_impedance.real.abs() == IMPEDANCE_SENTINEL && self.wave_impedance.imag == 0.0
    }
}

/// Compute Γ, VSWR and Z(d) for a terminated line.
///
/// # Arguments
///
/// * `z0` - Characteristic impedance (Ω)
/// * `gamma` - Propagation constant α + jβ
/// * `line_length_m` - Distance d from the load to the input (m)
/// * `load` - Termination
///
/// # Returns
///
/// `None` when any output is NaN (typically because the line stage was
/// unavailable).
pub fn compute_circuit_properties(
    z0: f64,
    gamma: Complex64,
    line_length_m: f64,
    load: LoadSpec,
) -> Option<CircuitResult> {
    let mut guards = Vec::new();
    let mut equations = EquationTracker::new();
    let context = match load {
        LoadSpec::Impedance { .. } => "impedance load",
        LoadSpec::Short => "short load",
        LoadSpec::Open => "open load",
    };

    let z_load = load.load_impedance();
    let gamma_load = match formulas::reflection_coefficient(z0, z_load) {
        Some(g) => g,
        None => {
            let magnitude_sq = (z_load + z0).norm_sqr();
            debug!(z0, magnitude_sq, "reflection coefficient denominator vanished, using 0");
            guards.push(CalcError::degenerate_denominator("reflection coefficient", magnitude_sq));
            Complex64::new(0.0, 0.0)
        }
    };
    equations.record(Equation::ReflectionCoefficient, context);

    let reflection = ReflectionCoefficient::from_complex(gamma_load);
    let vswr = formulas::vswr(reflection.magnitude);
    equations.record(Equation::Vswr, context);

    let (impedance, equation): (GuardedImpedance, Equation) = match load {
        LoadSpec::Short => (
            formulas::short_input_impedance(z0, gamma, line_length_m),
            Equation::InputImpedanceShort,
        ),
        LoadSpec::Open => (
            formulas::open_input_impedance(z0, gamma, line_length_m),
            Equation::InputImpedanceOpen,
        ),
        LoadSpec::Impedance { .. } => (
            formulas::general_input_impedance(z0, gamma_load, gamma, line_length_m),
            Equation::InputImpedanceGeneral,
        ),
    };
    equations.record(equation, context);

    if let Some(magnitude_sq) = impedance.rejected_denominator {
        debug!(
            line_length_m,
            magnitude_sq,
            sentinel = impedance.value.re,
            "input impedance denominator vanished, using sentinel"
        );
        guards.push(CalcError::degenerate_denominator("input impedance", magnitude_sq));
    }

    let wave_impedance = ComplexValue::from(impedance.value);
    if reflection.magnitude.is_nan() || reflection.angle_deg.is_nan() || vswr.is_nan() || wave_impedance.is_nan() {
        return None;
    }

    Some(CircuitResult {
        load,
        line_length_m,
        reflection_coefficient: reflection,
        vswr,
        wave_impedance,
        guards,
        equations,
    })
}
