//! # Transmission Line Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` / `Scenario` - Input parameters (JSON-serializable)
//! - `*Result` / analysis type - Calculation results (JSON-serializable)
//! - a pure `compute_*` function from one to the other
//!
//! ## Available Calculations
//!
//! - [`line_parameters`] - Geometry + material → R′L′G′C′, Z₀, γ, v_p, λ
//! - [`circuit`] - Z₀, γ, length, load → Γ, VSWR, Z(d)
//! - [`waveform`] - Standing/traveling wave sampling, extrema, animation clock
//! - [`frequency_response`] - Z₀, εeff, α, β swept around the operating point
//! - [`pipeline`] - The whole chain in one call

pub mod circuit;
pub mod frequency_response;
pub mod line_parameters;
pub mod pipeline;
pub mod waveform;

use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

pub use circuit::{compute_circuit_properties, CircuitResult, LoadSpec, ReflectionCoefficient};
pub use frequency_response::{frequency_response, FrequencyResponse, SweepPoint};
pub use line_parameters::{compute_line_parameters, LineAnalysis, LineParameters, PropagationResult};
pub use pipeline::{evaluate, Evaluation, Scenario};

// ============================================================================
// Geometry
// ============================================================================

/// The four supported line cross-sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GeometryKind {
    Coaxial,
    TwoWire,
    ParallelPlate,
    Microstrip,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 4] = [
        GeometryKind::Coaxial,
        GeometryKind::TwoWire,
        GeometryKind::ParallelPlate,
        GeometryKind::Microstrip,
    ];

    /// Serialized tag (e.g. "twoWire")
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Coaxial => "coaxial",
            GeometryKind::TwoWire => "twoWire",
            GeometryKind::ParallelPlate => "parallelPlate",
            GeometryKind::Microstrip => "microstrip",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            GeometryKind::Coaxial => "Coaxial Line",
            GeometryKind::TwoWire => "Two-Wire Line",
            GeometryKind::ParallelPlate => "Parallel-Plate Line",
            GeometryKind::Microstrip => "Microstrip",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryKind {
    type Err = CalcError;

    /// Accepts the serialized tags, case-insensitively, plus dashed/underscored spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "coaxial" | "coax" => Ok(GeometryKind::Coaxial),
            "twowire" => Ok(GeometryKind::TwoWire),
            "parallelplate" => Ok(GeometryKind::ParallelPlate),
            "microstrip" => Ok(GeometryKind::Microstrip),
            _ => Err(CalcError::unknown_geometry(s.trim())),
        }
    }
}

/// Cross-section dimensions, in millimeters.
///
/// ## JSON Example
///
/// ```json
/// { "kind": "coaxial", "inner_radius_mm": 0.5, "outer_radius_mm": 2.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Geometry {
    Coaxial {
        /// Inner conductor radius a
        inner_radius_mm: f64,
        /// Outer conductor radius b
        outer_radius_mm: f64,
    },
    TwoWire {
        /// Wire radius a
        wire_radius_mm: f64,
        /// Center-to-center spacing D
        wire_spacing_mm: f64,
    },
    ParallelPlate {
        plate_width_mm: f64,
        plate_spacing_mm: f64,
    },
    Microstrip {
        strip_width_mm: f64,
        substrate_height_mm: f64,
    },
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Coaxial { .. } => GeometryKind::Coaxial,
            Geometry::TwoWire { .. } => GeometryKind::TwoWire,
            Geometry::ParallelPlate { .. } => GeometryKind::ParallelPlate,
            Geometry::Microstrip { .. } => GeometryKind::Microstrip,
        }
    }

    /// Calculator defaults for each geometry
    pub fn default_for(kind: GeometryKind) -> Self {
        match kind {
            GeometryKind::Coaxial => Geometry::Coaxial {
                inner_radius_mm: 0.5,
                outer_radius_mm: 2.0,
            },
            GeometryKind::TwoWire => Geometry::TwoWire {
                wire_radius_mm: 1.0,
                wire_spacing_mm: 10.0,
            },
            GeometryKind::ParallelPlate => Geometry::ParallelPlate {
                plate_width_mm: 20.0,
                plate_spacing_mm: 2.0,
            },
            GeometryKind::Microstrip => Geometry::Microstrip {
                strip_width_mm: 1.0,
                substrate_height_mm: 0.5,
            },
        }
    }

    /// (field name, value) pairs in declaration order
    pub fn dimensions(&self) -> [(&'static str, f64); 2] {
        match *self {
            Geometry::Coaxial { inner_radius_mm, outer_radius_mm } => {
                [("inner_radius_mm", inner_radius_mm), ("outer_radius_mm", outer_radius_mm)]
            }
            Geometry::TwoWire { wire_radius_mm, wire_spacing_mm } => {
                [("wire_radius_mm", wire_radius_mm), ("wire_spacing_mm", wire_spacing_mm)]
            }
            Geometry::ParallelPlate { plate_width_mm, plate_spacing_mm } => {
                [("plate_width_mm", plate_width_mm), ("plate_spacing_mm", plate_spacing_mm)]
            }
            Geometry::Microstrip { strip_width_mm, substrate_height_mm } => {
                [("strip_width_mm", strip_width_mm), ("substrate_height_mm", substrate_height_mm)]
            }
        }
    }

    /// Check every dimension is finite and positive, then the geometric constraint.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in self.dimensions() {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Dimension must be a finite number"));
            }
            if value <= 0.0 {
                return Err(CalcError::invalid_dimensions(
                    self.kind().as_str(),
                    format!("{} must be positive (got {} mm)", field, value),
                ));
            }
        }

        match *self {
            Geometry::Coaxial { inner_radius_mm, outer_radius_mm } if outer_radius_mm <= inner_radius_mm => {
                Err(CalcError::invalid_dimensions(
                    self.kind().as_str(),
                    format!(
                        "outer radius ({} mm) must exceed inner radius ({} mm)",
                        outer_radius_mm, inner_radius_mm
                    ),
                ))
            }
            Geometry::TwoWire { wire_radius_mm, wire_spacing_mm } if wire_spacing_mm <= 2.0 * wire_radius_mm => {
                Err(CalcError::invalid_dimensions(
                    self.kind().as_str(),
                    format!(
                        "wire spacing ({} mm) must exceed the wire diameter ({} mm)",
                        wire_spacing_mm,
                        2.0 * wire_radius_mm
                    ),
                ))
            }
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Material and input
// ============================================================================

/// Dielectric and conductor properties shared by every geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Relative permittivity εr of the dielectric (substrate for microstrip)
    pub permittivity: f64,
    /// Relative permeability μr of the dielectric
    pub permeability: f64,
    /// Conductor conductivity σ (S/m); +∞ is a perfect conductor
    pub conductivity_s_per_m: f64,
    /// Dielectric conductivity σ_d (S/m)
    pub dielectric_conductivity_s_per_m: f64,
}

impl Default for Material {
    /// Air-filled copper line
    fn default() -> Self {
        Material {
            permittivity: 1.0,
            permeability: 1.0,
            conductivity_s_per_m: 5.8e7,
            dielectric_conductivity_s_per_m: 0.0,
        }
    }
}

impl Material {
    pub fn validate(&self) -> CalcResult<()> {
        positive_finite("permittivity", self.permittivity)?;
        positive_finite("permeability", self.permeability)?;
        non_negative("conductivity_s_per_m", self.conductivity_s_per_m)?;
        non_negative("dielectric_conductivity_s_per_m", self.dielectric_conductivity_s_per_m)
    }
}

/// Everything the Line Parameter Engine needs.
///
/// ## JSON Example
///
/// ```json
/// {
///   "geometry": { "kind": "coaxial", "inner_radius_mm": 0.5, "outer_radius_mm": 2.0 },
///   "frequency_mhz": 1000.0,
///   "permittivity": 1.0,
///   "permeability": 1.0,
///   "conductivity_s_per_m": 5.8e7,
///   "dielectric_conductivity_s_per_m": 0.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineInput {
    pub geometry: Geometry,
    /// Operating frequency (MHz)
    pub frequency_mhz: f64,
    #[serde(flatten)]
    pub material: Material,
}

impl LineInput {
    /// Calculator defaults for a geometry: 1000 MHz, air dielectric, copper conductors
    pub fn default_for(kind: GeometryKind) -> Self {
        LineInput {
            geometry: Geometry::default_for(kind),
            frequency_mhz: 1000.0,
            material: Material::default(),
        }
    }

    /// Validate scalars first, then dimensions, then geometry-specific limits.
    pub fn validate(&self) -> CalcResult<()> {
        positive_finite("frequency_mhz", self.frequency_mhz)?;
        self.material.validate()?;
        self.geometry.validate()?;

        // The Hammerstad-Jensen exponent is undefined for εr < 0.9 and meaningless below 1
        if self.geometry.kind() == GeometryKind::Microstrip && self.material.permittivity < 1.0 {
            return Err(CalcError::invalid_input(
                "permittivity",
                self.material.permittivity.to_string(),
                "Microstrip substrate permittivity must be at least 1",
            ));
        }
        Ok(())
    }

    /// Same input at another frequency
    pub fn at_frequency(&self, frequency_mhz: f64) -> Self {
        LineInput { frequency_mhz, ..*self }
    }
}

fn positive_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

/// Conductivities may be +∞ (ideal limit) but never NaN or negative
fn non_negative(field: &str, value: f64) -> CalcResult<()> {
    if value.is_nan() {
        return Err(CalcError::invalid_input(field, "NaN", "Value must be a number"));
    }
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Conductivity cannot be negative"));
    }
    Ok(())
}

// ============================================================================
// Complex output
// ============================================================================

/// Complex number as it appears in JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComplexValue {
    pub real: f64,
    pub imag: f64,
}

impl ComplexValue {
    pub const NAN: ComplexValue = ComplexValue {
        real: f64::NAN,
        imag: f64::NAN,
    };

    pub fn new(real: f64, imag: f64) -> Self {
        ComplexValue { real, imag }
    }

    pub fn to_complex(self) -> Complex64 {
        Complex64::new(self.real, self.imag)
    }

    pub fn magnitude(self) -> f64 {
        self.to_complex().norm()
    }

    pub fn is_nan(self) -> bool {
        self.real.is_nan() || self.imag.is_nan()
    }
}

impl From<Complex64> for ComplexValue {
    fn from(c: Complex64) -> Self {
        ComplexValue { real: c.re, imag: c.im }
    }
}

impl From<ComplexValue> for Complex64 {
    fn from(c: ComplexValue) -> Self {
        c.to_complex()
    }
}
