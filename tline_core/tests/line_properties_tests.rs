//! End-to-End Line Property Tests
//!
//! Physical properties every geometry must satisfy, checked through the
//! public API only.

use approx::assert_relative_eq;
use num_complex::Complex64;
use tline_core::calculations::waveform::{find_extrema, standing_wave_amplitude, ExtremumKind};
use tline_core::calculations::{
    compute_circuit_properties, compute_line_parameters, evaluate, frequency_response, Evaluation, Geometry,
    GeometryKind, LineInput, LoadSpec, Scenario,
};
use tline_core::constants::{SPEED_OF_LIGHT, VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY};
use tline_core::settings::{SamplerSettings, SweepSettings};
use tline_core::CalcError;

const TEM_KINDS: [GeometryKind; 3] = [GeometryKind::Coaxial, GeometryKind::TwoWire, GeometryKind::ParallelPlate];

fn lossless_input(kind: GeometryKind) -> LineInput {
    let mut input = LineInput::default_for(kind);
    input.material.conductivity_s_per_m = f64::INFINITY;
    input.material.dielectric_conductivity_s_per_m = 0.0;
    input
}

#[test]
fn lossless_lines_have_zero_attenuation() {
    for kind in TEM_KINDS {
        let line = compute_line_parameters(&lossless_input(kind)).unwrap();
        let lp = line.line_parameters;

        assert_eq!(line.propagation.attenuation_np_per_m(), 0.0, "{kind}");
        assert_relative_eq!(
            line.propagation.phase_constant_rad_per_m(),
            line.angular_frequency() * (lp.inductance_h_per_m * lp.capacitance_f_per_m).sqrt(),
            max_relative = 1e-12
        );
    }
}

#[test]
fn tem_lc_product_matches_medium() {
    for kind in TEM_KINDS {
        for (er, mur) in [(1.0, 1.0), (2.1, 1.0), (4.4, 3.0)] {
            let mut input = LineInput::default_for(kind);
            input.material.permittivity = er;
            input.material.permeability = mur;
            let lp = compute_line_parameters(&input).unwrap().line_parameters;

            let mu_eps = mur * VACUUM_PERMEABILITY * er * VACUUM_PERMITTIVITY;
            assert_relative_eq!(lp.inductance_h_per_m * lp.capacitance_f_per_m, mu_eps, max_relative = 1e-9);
        }
    }
}

#[test]
fn conductance_capacitance_ratio_is_loss_tangent() {
    for kind in TEM_KINDS {
        let mut input = LineInput::default_for(kind);
        input.material.permittivity = 2.25;
        input.material.dielectric_conductivity_s_per_m = 3e-5;
        let lp = compute_line_parameters(&input).unwrap().line_parameters;

        assert_relative_eq!(
            lp.conductance_s_per_m / lp.capacitance_f_per_m,
            3e-5 / (2.25 * VACUUM_PERMITTIVITY),
            max_relative = 1e-9
        );
    }
}

#[test]
fn coaxial_reference_example() {
    let input = LineInput {
        geometry: Geometry::Coaxial {
            inner_radius_mm: 0.5,
            outer_radius_mm: 2.0,
        },
        ..lossless_input(GeometryKind::Coaxial)
    };
    let line = compute_line_parameters(&input).unwrap();

    assert_relative_eq!(line.characteristic_impedance(), 83.18, max_relative = 1e-4);
    assert_relative_eq!(
        line.propagation.phase_constant_rad_per_m(),
        2.0 * std::f64::consts::PI * 1e9 / SPEED_OF_LIGHT,
        max_relative = 1e-6
    );
    assert_relative_eq!(line.wavelength(), 0.2998, max_relative = 1e-3);
}

#[test]
fn reversed_coaxial_radii_are_rejected() {
    let input = LineInput {
        geometry: Geometry::Coaxial {
            inner_radius_mm: 2.0,
            outer_radius_mm: 0.5,
        },
        ..LineInput::default_for(GeometryKind::Coaxial)
    };
    assert!(matches!(
        compute_line_parameters(&input),
        Err(CalcError::InvalidDimensions { .. })
    ));
}

#[test]
fn microstrip_disperses_only_above_threshold() {
    let mut input = LineInput::default_for(GeometryKind::Microstrip);
    input.material.permittivity = 4.4;

    let z = |mhz: f64| {
        compute_line_parameters(&input.at_frequency(mhz))
            .unwrap()
            .characteristic_impedance()
    };
    assert_eq!(z(500.0), z(1.0));
    assert_ne!(z(10_000.0), z(1.0));
}

#[test]
fn matched_and_shorted_loads() {
    let gamma = Complex64::new(0.0, 20.0);

    let matched = compute_circuit_properties(50.0, gamma, 0.1, LoadSpec::impedance(50.0, 0.0)).unwrap();
    assert_eq!(matched.reflection_coefficient.magnitude, 0.0);
    assert_eq!(matched.vswr, 1.0);

    let shorted = compute_circuit_properties(50.0, gamma, 0.1, LoadSpec::Short).unwrap();
    assert_relative_eq!(shorted.reflection_coefficient.magnitude, 1.0);
    assert!(shorted.vswr >= 1e6);
}

#[test]
fn zero_length_line_shows_the_load() {
    for load in [LoadSpec::impedance(75.0, 30.0), LoadSpec::impedance(10.0, -5.0), LoadSpec::Short] {
        let result = compute_circuit_properties(50.0, Complex64::new(0.05, 12.0), 0.0, load).unwrap();
        let expected = load.load_impedance();
        assert_relative_eq!(result.wave_impedance.real, expected.re, epsilon = 1e-9);
        assert_relative_eq!(result.wave_impedance.imag, expected.im, epsilon = 1e-9);
    }
}

#[test]
fn pipeline_chains_both_engines() {
    let mut scenario = Scenario::default_for(GeometryKind::Coaxial);
    scenario.load = LoadSpec::impedance(100.0, 0.0);

    let Evaluation::Ok { line, circuit } = evaluate(&scenario) else {
        panic!("default coax scenario should evaluate");
    };
    let circuit = circuit.unwrap();
    let z0 = line.characteristic_impedance();
    assert_relative_eq!(
        circuit.reflection_coefficient.magnitude,
        (100.0 - z0).abs() / (100.0 + z0),
        max_relative = 1e-9
    );
}

#[test]
fn standing_wave_extrema_match_vswr() {
    let scenario = Scenario {
        load: LoadSpec::impedance(150.0, 0.0),
        ..Scenario::default_for(GeometryKind::TwoWire)
    };
    let evaluation = evaluate(&scenario);
    let line = evaluation.line();
    let circuit = evaluation.circuit().unwrap();
    let reflection = circuit.reflection_coefficient;

    let extrema = find_extrema(&reflection, line.wavelength(), &SamplerSettings::default());
    let max = extrema
        .iter()
        .filter(|e| e.kind == ExtremumKind::Maximum)
        .map(|e| e.amplitude)
        .fold(f64::MIN, f64::max);
    let min = extrema
        .iter()
        .filter(|e| e.kind == ExtremumKind::Minimum)
        .map(|e| e.amplitude)
        .fold(f64::MAX, f64::min);

    assert_relative_eq!(max / min, circuit.vswr, max_relative = 1e-4);
    assert_relative_eq!(
        standing_wave_amplitude(&reflection, line.wavelength(), 0.0),
        (Complex64::new(1.0, 0.0) + reflection.to_complex()).norm(),
        max_relative = 1e-12
    );
}

#[test]
fn sweep_reports_operating_point() {
    let input = LineInput::default_for(GeometryKind::ParallelPlate);
    let response = frequency_response(&input, &SweepSettings::default()).unwrap();
    assert_eq!(response.operating_point.frequency_mhz, 1000.0);
    assert_relative_eq!(response.min_impedance_ohm, 37.7, max_relative = 1e-12);
}
