//! # Evaluation Pipeline
//!
//! Runs the Line Parameter Engine and the Circuit Analysis Engine in one call.
//! A front end re-invokes [`evaluate`] whenever any input changes; nothing is
//! cached between calls.
//!
//! ## Example
//!
//! ```rust
//! use tline_core::calculations::{evaluate, Evaluation, GeometryKind, Scenario};
//!
//! let scenario = Scenario::default_for(GeometryKind::Coaxial);
//! match evaluate(&scenario) {
//!     Evaluation::Ok { line, circuit } => {
//!         assert!(line.is_available());
//!         assert!(circuit.is_some());
//!     }
//!     Evaluation::Failed { error, .. } => panic!("{}", error),
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::circuit::{compute_circuit_properties, CircuitResult, LoadSpec};
use super::line_parameters::{compute_line_parameters, LineAnalysis};
use super::{GeometryKind, LineInput};
use crate::errors::CalcError;

/// Full set of inputs: the line plus its length and termination.
///
/// ## JSON Example
///
/// ```json
/// {
///   "line": {
///     "geometry": { "kind": "microstrip", "strip_width_mm": 1.0, "substrate_height_mm": 0.5 },
///     "frequency_mhz": 1000.0,
///     "permittivity": 4.4,
///     "permeability": 1.0,
///     "conductivity_s_per_m": 5.8e7,
///     "dielectric_conductivity_s_per_m": 0.0
///   },
///   "line_length_m": 0.1,
///   "load": { "type": "impedance", "real": 50.0, "imag": 0.0 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub line: LineInput,
    /// Distance from the load to the point of interest (m)
    pub line_length_m: f64,
    pub load: LoadSpec,
}

impl Scenario {
    /// Calculator defaults: 0.1 m line into 50 + j0 Ω
    pub fn default_for(kind: GeometryKind) -> Self {
        Scenario {
            line: LineInput::default_for(kind),
            line_length_m: 0.1,
            load: LoadSpec::default(),
        }
    }
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Evaluation {
    /// The line stage succeeded. `circuit` is `None` when the circuit stage
    /// produced NaN.
    Ok {
        line: LineAnalysis,
        circuit: Option<CircuitResult>,
    },
    /// The line stage rejected the input; every displayed value is unavailable.
    Failed {
        line: LineAnalysis,
        error: CalcError,
    },
}

impl Evaluation {
    pub fn line(&self) -> &LineAnalysis {
        match self {
            Evaluation::Ok { line, .. } | Evaluation::Failed { line, .. } => line,
        }
    }

    pub fn circuit(&self) -> Option<&CircuitResult> {
        match self {
            Evaluation::Ok { circuit, .. } => circuit.as_ref(),
            Evaluation::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&CalcError> {
        match self {
            Evaluation::Failed { error, .. } => Some(error),
            Evaluation::Ok { .. } => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Evaluation::Ok { .. })
    }
}

/// Evaluate a scenario end to end. Never panics.
pub fn evaluate(scenario: &Scenario) -> Evaluation {
    let line = match compute_line_parameters(&scenario.line) {
        Ok(line) => line,
        Err(error) => {
            return Evaluation::Failed {
                line: LineAnalysis::unavailable(scenario.line.geometry.kind()),
                error,
            }
        }
    };

    let circuit = compute_circuit_properties(
        line.characteristic_impedance(),
        line.gamma(),
        scenario.line_length_m,
        scenario.load,
    );

    Evaluation::Ok { line, circuit }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::Geometry;

    #[test]
    fn test_default_scenarios_evaluate() {
        for kind in GeometryKind::ALL {
            let evaluation = evaluate(&Scenario::default_for(kind));
            assert!(evaluation.is_ok(), "{:?}: {:?}", kind, evaluation.error());
            assert!(evaluation.circuit().is_some());
            assert_eq!(evaluation.line().geometry, kind);
        }
    }

    #[test]
    fn test_invalid_geometry_fails_softly() {
        let mut scenario = Scenario::default_for(GeometryKind::Coaxial);
        scenario.line.geometry = Geometry::Coaxial {
            inner_radius_mm: 3.0,
            outer_radius_mm: 1.0,
        };

        let evaluation = evaluate(&scenario);
        assert!(!evaluation.is_ok());
        assert!(!evaluation.line().is_available());
        assert!(evaluation.circuit().is_none());
        assert_eq!(evaluation.error().map(CalcError::error_code), Some("INVALID_DIMENSIONS"));
    }

    #[test]
    fn test_nan_length_leaves_circuit_unavailable() {
        let mut scenario = Scenario::default_for(GeometryKind::Coaxial);
        scenario.line_length_m = f64::NAN;
        let evaluation = evaluate(&scenario);
        assert!(evaluation.is_ok());
        assert!(evaluation.circuit().is_none());
    }

    #[test]
    fn test_evaluation_json_is_tagged() {
        let value = serde_json::to_value(evaluate(&Scenario::default_for(GeometryKind::TwoWire))).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["line"]["geometry"], "twoWire");

        let mut scenario = Scenario::default_for(GeometryKind::TwoWire);
        scenario.line.frequency_mhz = 0.0;
        let value = serde_json::to_value(evaluate(&scenario)).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["error"]["type"], "InvalidInput");
    }

    #[test]
    fn test_scenario_from_json() {
        let json = r#"{
            "line": {
                "geometry": { "kind": "parallelPlate", "plate_width_mm": 20.0, "plate_spacing_mm": 2.0 },
                "frequency_mhz": 1000.0,
                "permittivity": 1.0,
                "permeability": 1.0,
                "conductivity_s_per_m": 5.8e7,
                "dielectric_conductivity_s_per_m": 0.0
            },
            "line_length_m": 0.1,
            "load": { "type": "short" }
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.load, LoadSpec::Short);
        assert_eq!(scenario, Scenario { load: LoadSpec::Short, ..Scenario::default_for(GeometryKind::ParallelPlate) });
    }
}
