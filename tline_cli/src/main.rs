//! # Transmission Line Calculator CLI
//!
//! Terminal front end for `tline_core`. Prompts for a scenario (or reads
//! `key=value` arguments), evaluates it and prints a report followed by the
//! JSON evaluation.
//!
//! ```bash
//! tline_cli                                   # interactive
//! tline_cli geometry=microstrip permittivity=4.4 frequency_mhz=5000
//! tline_cli --equations load=short            # also list the formulas used
//! ```
//!
//! `RUST_LOG` controls log output (default `info`). `TLINE_SETTINGS` may point
//! to a JSON file with sampler and sweep settings.

mod input;

use std::env;
use std::fs;

use tline_core::calculations::waveform::{sample_standing_wave, AnimationClock, ExtremumKind, StandingWave};
use tline_core::calculations::{frequency_response, CircuitResult, Evaluation, LineAnalysis, Scenario};
use tline_core::equations::EquationTracker;
use tline_core::format::{format_complex, format_optional, format_value};
use tline_core::settings::AnalysisSettings;
use tline_core::CalcError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use input::InputSource;

const RULE: &str = "═══════════════════════════════════════";
const SETTINGS_ENV: &str = "TLINE_SETTINGS";

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

/// Settings from `TLINE_SETTINGS`, falling back to defaults on any problem.
fn load_settings() -> AnalysisSettings {
    let Ok(path) = env::var(SETTINGS_ENV) else {
        return AnalysisSettings::default();
    };

    match fs::read_to_string(&path) {
        Ok(json) => match AnalysisSettings::from_json(&json) {
            Ok(settings) => {
                info!(path = %path, "loaded analysis settings");
                settings
            }
            Err(e) => {
                warn!(path = %path, "ignoring settings file: {}", e);
                AnalysisSettings::default()
            }
        },
        Err(e) => {
            warn!(path = %path, "cannot read settings file: {}", e);
            AnalysisSettings::default()
        }
    }
}

fn main() {
    init_logging();

    let mut show_equations = false;
    let mut pairs = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "--equations" {
            show_equations = true;
        } else {
            pairs.push(arg);
        }
    }

    println!("Transmission Line Calculator");
    println!("============================");
    println!();

    let source = if pairs.is_empty() {
        InputSource::Interactive
    } else {
        match InputSource::from_args(pairs) {
            Ok(source) => source,
            Err(e) => {
                print_error(&e);
                std::process::exit(2);
            }
        }
    };

    let scenario = match source.read_scenario() {
        Ok(scenario) => scenario,
        Err(e) => {
            print_error(&e);
            std::process::exit(2);
        }
    };

    let settings = load_settings();
    let evaluation = tline_core::evaluate(&scenario);

    let standing_wave = evaluation.circuit().map(|circuit| {
        sample_standing_wave(
            &circuit.reflection_coefficient,
            evaluation.line().wavelength(),
            AnimationClock::new().time_phase(),
            &settings.sampler,
        )
    });

    println!();
    print_report(&scenario, &evaluation, standing_wave.as_ref(), &settings);

    if show_equations {
        let mut tracker = EquationTracker::new();
        tracker.merge(evaluation.line().equations.clone());
        if let Some(circuit) = evaluation.circuit() {
            tracker.merge(circuit.equations.clone());
        }
        if let Some(wave) = &standing_wave {
            tracker.merge(wave.equations.clone());
        }
        println!();
        println!("{}", tracker.generate_appendix_markdown());
    }

    println!();
    println!("JSON Output:");
    match serde_json::to_string_pretty(&evaluation) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing evaluation: {}", e),
    }

    if let Some(error) = evaluation.error() {
        print_error(error);
        std::process::exit(1);
    }
}

fn print_error(error: &CalcError) {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn print_report(
    scenario: &Scenario,
    evaluation: &Evaluation,
    standing_wave: Option<&StandingWave>,
    settings: &AnalysisSettings,
) {
    let line = evaluation.line();

    println!("{}", RULE);
    println!("  {}", line.geometry.display_name().to_uppercase());
    println!("{}", RULE);
    println!();
    print_inputs(scenario);
    println!();
    print_line(line);
    println!();

    match evaluation.circuit() {
        Some(circuit) => print_circuit(circuit),
        None => {
            println!("Termination:");
            println!("  Γ = N/A   VSWR = N/A   Z(d) = N/A");
        }
    }
    println!();

    if let Some(wave) = standing_wave {
        print_standing_wave(wave);
        println!();
    }

    if evaluation.is_ok() {
        print_sweep(scenario, settings);
    }
    println!("{}", RULE);
}

fn print_inputs(scenario: &Scenario) {
    let line = &scenario.line;
    let material = &line.material;
    println!("Input:");
    println!("  Frequency:  {} MHz", format_value(line.frequency_mhz));
    println!("  εr / μr:    {} / {}", format_value(material.permittivity), format_value(material.permeability));
    println!("  σ:          {} S/m", format_value(material.conductivity_s_per_m));
    println!("  σd:         {} S/m", format_value(material.dielectric_conductivity_s_per_m));
    for (name, value) in line.geometry.dimensions() {
        let label = format!("{}:", name.trim_end_matches("_mm"));
        println!("  {:<11} {} mm", label, format_value(value));
    }
    println!("  Length:     {} m", format_value(scenario.line_length_m));
    println!("  Load:       {}", scenario.load.label());
}

fn print_line(line: &LineAnalysis) {
    let lp = &line.line_parameters;
    let p = &line.propagation;

    println!("Line Parameters:");
    println!("  R′ = {} Ω/m", format_value(lp.resistance_ohm_per_m));
    println!("  L′ = {} H/m", format_value(lp.inductance_h_per_m));
    println!("  G′ = {} S/m", format_value(lp.conductance_s_per_m));
    println!("  C′ = {} F/m", format_value(lp.capacitance_f_per_m));
    println!();
    println!("Propagation:");
    println!("  Z₀   = {} Ω", format_value(p.characteristic_impedance_ohm));
    println!(
        "  α    = {} Np/m ({} dB/m)",
        format_value(p.attenuation_np_per_m()),
        format_value(line.attenuation_db_per_m)
    );
    println!("  β    = {} rad/m", format_value(p.phase_constant_rad_per_m()));
    println!("  v_p  = {} m/s", format_value(p.phase_velocity_m_per_s));
    println!("  λ    = {} m", format_value(p.wavelength_m));
    println!("  δ    = {} m", format_optional(line.skin_depth_m));
    println!("  γ    = {} /m (exact)", format_complex(line.telegrapher.propagation_constant));

    if let Some(ms) = &line.microstrip {
        println!();
        println!("Microstrip:");
        println!("  w/h        = {}", format_value(ms.width_to_height));
        println!("  εeff(0)    = {}", format_value(ms.static_effective_permittivity));
        println!("  εeff(f)    = {}", format_value(ms.effective_permittivity));
        println!("  fp         = {} GHz", format_value(ms.knee_frequency_ghz));
        println!("  Dispersion = {}", if ms.dispersion_applied { "applied" } else { "not applied (f ≤ 2 GHz)" });
    }
}

fn print_circuit(circuit: &CircuitResult) {
    let gamma = &circuit.reflection_coefficient;
    println!("Termination:");
    println!("  |Γ|  = {} ∠ {}°", format_value(gamma.magnitude), format_value(gamma.angle_deg));
    println!(
        "  VSWR = {}{}",
        format_value(circuit.vswr),
        if circuit.is_total_reflection() { " (total reflection)" } else { "" }
    );
    println!("  Z(d) = {} Ω", format_complex(circuit.wave_impedance));
    println!("  RL   = {} dB", format_optional(circuit.return_loss_db()));
    println!("  ML   = {} dB", format_optional(circuit.mismatch_loss_db()));
    for guard in &circuit.guards {
        println!("  [GUARD] {}", guard);
    }
}

fn print_standing_wave(wave: &StandingWave) {
    println!("Standing Wave:");
    if wave.extrema.is_empty() {
        println!("  Flat envelope (matched load)");
        return;
    }
    if !wave.reflected_visible {
        println!("  Reflected wave below display threshold");
    }
    for e in wave.extrema.iter().take(6) {
        let label = match e.kind {
            ExtremumKind::Maximum => "max",
            ExtremumKind::Minimum => "min",
        };
        println!(
            "  {} {} at {} m ({} λ)",
            label,
            format_value(e.amplitude),
            format_value(e.distance_m),
            format_value(e.distance_wavelengths)
        );
    }
    if wave.extrema.len() > 6 {
        println!("  ... {} more", wave.extrema.len() - 6);
    }

    let peak = wave.snapshot.iter().map(|s| s.total.abs()).fold(0.0, f64::max);
    println!("  peak |v(d, 0)| = {} over {} samples", format_value(peak), wave.snapshot.len());
}

fn print_sweep(scenario: &Scenario, settings: &AnalysisSettings) {
    match frequency_response(&scenario.line, &settings.sweep) {
        Ok(response) => {
            let first = response.points.first();
            let last = response.points.last();
            println!("Frequency Response:");
            println!(
                "  Band:  {} – {} MHz ({} points)",
                format_optional(first.map(|p| p.frequency_mhz)),
                format_optional(last.map(|p| p.frequency_mhz)),
                response.points.len()
            );
            println!(
                "  Z₀:    {} – {} Ω",
                format_value(response.min_impedance_ohm),
                format_value(response.max_impedance_ohm)
            );
        }
        Err(e) => warn!("frequency sweep skipped: {}", e),
    }
}
