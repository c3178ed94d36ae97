//! # Frequency Response
//!
//! Re-runs the Line Parameter Engine across a band around the operating
//! frequency. TEM lines show a flat Z₀; microstrip shows the dispersion
//! step above 2 GHz.
//!
//! ## Example
//!
//! ```rust
//! use tline_core::calculations::{frequency_response, GeometryKind, LineInput};
//! use tline_core::settings::SweepSettings;
//!
//! let input = LineInput::default_for(GeometryKind::Coaxial);
//! let response = frequency_response(&input, &SweepSettings::default()).unwrap();
//! assert_eq!(response.points.len(), 51);
//! assert!((response.max_impedance_ohm - response.min_impedance_ohm).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use super::line_parameters::{compute_line_parameters, LineAnalysis};
use super::LineInput;
use crate::equations::registry::EquationTracker;
use crate::errors::CalcResult;
use crate::settings::SweepSettings;

/// Line quantities at one sweep frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub frequency_mhz: f64,
    pub characteristic_impedance_ohm: f64,
    /// εeff for microstrip, εr otherwise
    pub effective_permittivity: f64,
    pub attenuation_np_per_m: f64,
    pub phase_constant_rad_per_m: f64,
}

impl SweepPoint {
    fn from_analysis(frequency_mhz: f64, permittivity: f64, analysis: &LineAnalysis) -> Self {
        SweepPoint {
            frequency_mhz,
            characteristic_impedance_ohm: analysis.characteristic_impedance(),
            effective_permittivity: analysis.effective_permittivity().unwrap_or(permittivity),
            attenuation_np_per_m: analysis.propagation.attenuation_np_per_m(),
            phase_constant_rad_per_m: analysis.propagation.phase_constant_rad_per_m(),
        }
    }
}

/// Sweep output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyResponse {
    pub points: Vec<SweepPoint>,
    pub min_impedance_ohm: f64,
    pub max_impedance_ohm: f64,
    /// The unswept input's own frequency
    pub operating_point: SweepPoint,
    pub equations: EquationTracker,
}

impl FrequencyResponse {
    /// max Z₀ − min Z₀ over the band
    pub fn impedance_spread_ohm(&self) -> f64 {
        self.max_impedance_ohm - self.min_impedance_ohm
    }
}

/// Sweep the operating frequency from `start_factor·f` to `stop_factor·f`.
///
/// # Errors
///
/// Whatever [`compute_line_parameters`] returns for the operating point, or
/// `InvalidInput` for bad sweep settings.
pub fn frequency_response(input: &LineInput, settings: &SweepSettings) -> CalcResult<FrequencyResponse> {
    settings.validate()?;

    let operating = compute_line_parameters(input)?;
    let permittivity = input.material.permittivity;
    let mut equations = operating.equations.clone();

    let mut points = Vec::with_capacity(settings.points);
    for index in 0..settings.points {
        let frequency_mhz = settings.frequency_at(input.frequency_mhz, index);
        let analysis = compute_line_parameters(&input.at_frequency(frequency_mhz))?;
        points.push(SweepPoint::from_analysis(frequency_mhz, permittivity, &analysis));
        equations.merge(analysis.equations);
    }

    let (min_impedance_ohm, max_impedance_ohm) = points
        .iter()
        .map(|p| p.characteristic_impedance_ohm)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), z| (lo.min(z), hi.max(z)));

    Ok(FrequencyResponse {
        operating_point: SweepPoint::from_analysis(input.frequency_mhz, permittivity, &operating),
        points,
        min_impedance_ohm,
        max_impedance_ohm,
        equations,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::calculations::GeometryKind;
    use crate::errors::CalcError;

    #[test]
    fn test_tem_sweep_is_flat() {
        let input = LineInput::default_for(GeometryKind::TwoWire);
        let response = frequency_response(&input, &SweepSettings::default()).unwrap();
        assert_eq!(response.points.len(), 51);
        assert_relative_eq!(response.points[0].frequency_mhz, 500.0);
        assert_relative_eq!(response.points[50].frequency_mhz, 2000.0);
        assert!(response.impedance_spread_ohm().abs() < 1e-9);
        assert_eq!(response.operating_point.effective_permittivity, 1.0);
    }

    #[test]
    fn test_beta_grows_with_frequency() {
        let input = LineInput::default_for(GeometryKind::Coaxial);
        let response = frequency_response(&input, &SweepSettings::default()).unwrap();
        for pair in response.points.windows(2) {
            assert!(pair[1].phase_constant_rad_per_m > pair[0].phase_constant_rad_per_m);
            assert!(pair[1].attenuation_np_per_m > pair[0].attenuation_np_per_m);
        }
    }

    #[test]
    fn test_microstrip_sweep_crosses_dispersion_threshold() {
        let mut input = LineInput::default_for(GeometryKind::Microstrip).at_frequency(1500.0);
        input.material.permittivity = 4.4;
        let response = frequency_response(&input, &SweepSettings::default()).unwrap();

        // 750 MHz .. 3 GHz: flat below 2 GHz, dispersive above
        assert!(response.impedance_spread_ohm() > 0.0);
        let first = response.points[0];
        let last = response.points[response.points.len() - 1];
        assert!(last.effective_permittivity > first.effective_permittivity);
        assert_eq!(response.operating_point.characteristic_impedance_ohm, first.characteristic_impedance_ohm);
    }

    #[test]
    fn test_invalid_input_propagates() {
        let input = LineInput::default_for(GeometryKind::Coaxial).at_frequency(-1.0);
        let err = frequency_response(&input, &SweepSettings::default()).unwrap_err();
        assert_eq!(err.field(), Some("frequency_mhz"));
    }

    #[test]
    fn test_bad_settings_rejected() {
        let settings = SweepSettings {
            points: 1,
            ..SweepSettings::default()
        };
        let input = LineInput::default_for(GeometryKind::Coaxial);
        assert!(matches!(
            frequency_response(&input, &settings),
            Err(CalcError::InvalidInput { .. })
        ));
    }
}
