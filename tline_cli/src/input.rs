//! Raw text → typed scenario.
//!
//! Values come either from interactive prompts or from `key=value` command
//! line arguments. Every number passes through [`parse_field`]: a comma is
//! accepted as the decimal separator, and an empty value or a lone "." reads
//! as zero. At a prompt, pressing Enter on its own keeps the shown default.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use tline_core::calculations::{Geometry, GeometryKind, LineInput, LoadSpec, Material, Scenario};
use tline_core::{CalcError, CalcResult};

/// Keys accepted on the command line.
pub const KNOWN_KEYS: &[&str] = &[
    "geometry",
    "frequency_mhz",
    "permittivity",
    "permeability",
    "conductivity_s_per_m",
    "dielectric_conductivity_s_per_m",
    "inner_radius_mm",
    "outer_radius_mm",
    "wire_radius_mm",
    "wire_spacing_mm",
    "plate_width_mm",
    "plate_spacing_mm",
    "strip_width_mm",
    "substrate_height_mm",
    "line_length_m",
    "load",
    "load_real",
    "load_imag",
];

/// Parse one numeric field typed by a user.
pub fn parse_field(field: &str, raw: &str) -> CalcResult<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() || normalized == "." {
        return Ok(0.0);
    }
    normalized
        .parse::<f64>()
        .map_err(|_| CalcError::invalid_input(field, raw.trim(), "Not a number"))
}

/// Parse a termination name.
pub fn parse_load_kind(raw: &str) -> CalcResult<LoadKind> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "z" | "impedance" => Ok(LoadKind::Impedance),
        "short" | "sc" => Ok(LoadKind::Short),
        "open" | "oc" => Ok(LoadKind::Open),
        _ => Err(CalcError::invalid_input(
            "load",
            raw.trim(),
            "Expected 'impedance', 'short' or 'open'",
        )),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    Impedance,
    Short,
    Open,
}

/// Where raw values come from.
pub enum InputSource {
    Interactive,
    Arguments(HashMap<String, String>),
}

impl InputSource {
    /// Build from `key=value` arguments. Unknown keys are rejected.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> CalcResult<Self> {
        let mut values = HashMap::new();
        for arg in args {
            let Some((key, value)) = arg.split_once('=') else {
                return Err(CalcError::invalid_input("arguments", arg.as_str(), "Expected key=value"));
            };
            let key = key.trim();
            if !KNOWN_KEYS.contains(&key) {
                return Err(CalcError::invalid_input(key, value, "Unknown parameter"));
            }
            values.insert(key.to_string(), value.to_string());
        }
        Ok(InputSource::Arguments(values))
    }

    /// Raw text for `key`, or `None` to use the default.
    fn raw(&self, key: &str, prompt: &str, default: &str) -> Option<String> {
        match self {
            InputSource::Interactive => {
                print!("{} [{}]: ", prompt, default);
                if io::stdout().flush().is_err() {
                    return None;
                }
                let mut line = String::new();
                match io::stdin().lock().read_line(&mut line) {
                    Ok(0) | Err(_) => None,
                    Ok(_) if line.trim_end_matches(['\r', '\n']).is_empty() => None,
                    Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
                }
            }
            InputSource::Arguments(values) => values.get(key).cloned(),
        }
    }

    fn number(&self, key: &str, prompt: &str, default: f64) -> CalcResult<f64> {
        match self.raw(key, prompt, &default.to_string()) {
            Some(raw) => parse_field(key, &raw),
            None => Ok(default),
        }
    }

    /// Gather a complete scenario, starting from the calculator defaults.
    pub fn read_scenario(&self) -> CalcResult<Scenario> {
        let kind = match self.raw("geometry", "Geometry (coaxial/twoWire/parallelPlate/microstrip)", "coaxial") {
            Some(raw) => raw.parse::<GeometryKind>()?,
            None => GeometryKind::Coaxial,
        };
        let defaults = Scenario::default_for(kind);
        let material = defaults.line.material;

        let frequency_mhz = self.number("frequency_mhz", "Frequency (MHz)", defaults.line.frequency_mhz)?;
        let material = Material {
            permittivity: self.number("permittivity", "Relative permittivity εr", material.permittivity)?,
            permeability: self.number("permeability", "Relative permeability μr", material.permeability)?,
            conductivity_s_per_m: self.number(
                "conductivity_s_per_m",
                "Conductor conductivity σ (S/m)",
                material.conductivity_s_per_m,
            )?,
            dielectric_conductivity_s_per_m: self.number(
                "dielectric_conductivity_s_per_m",
                "Dielectric conductivity σd (S/m)",
                material.dielectric_conductivity_s_per_m,
            )?,
        };

        let geometry = match defaults.line.geometry {
            Geometry::Coaxial {
                inner_radius_mm,
                outer_radius_mm,
            } => Geometry::Coaxial {
                inner_radius_mm: self.number("inner_radius_mm", "Inner radius a (mm)", inner_radius_mm)?,
                outer_radius_mm: self.number("outer_radius_mm", "Outer radius b (mm)", outer_radius_mm)?,
            },
            Geometry::TwoWire {
                wire_radius_mm,
                wire_spacing_mm,
            } => Geometry::TwoWire {
                wire_radius_mm: self.number("wire_radius_mm", "Wire radius a (mm)", wire_radius_mm)?,
                wire_spacing_mm: self.number("wire_spacing_mm", "Wire spacing D (mm)", wire_spacing_mm)?,
            },
            Geometry::ParallelPlate {
                plate_width_mm,
                plate_spacing_mm,
            } => Geometry::ParallelPlate {
                plate_width_mm: self.number("plate_width_mm", "Plate width w (mm)", plate_width_mm)?,
                plate_spacing_mm: self.number("plate_spacing_mm", "Plate spacing h (mm)", plate_spacing_mm)?,
            },
            Geometry::Microstrip {
                strip_width_mm,
                substrate_height_mm,
            } => Geometry::Microstrip {
                strip_width_mm: self.number("strip_width_mm", "Strip width w (mm)", strip_width_mm)?,
                substrate_height_mm: self.number(
                    "substrate_height_mm",
                    "Substrate height h (mm)",
                    substrate_height_mm,
                )?,
            },
        };

        let line_length_m = self.number("line_length_m", "Line length d (m)", defaults.line_length_m)?;

        let load = match self.raw("load", "Load (impedance/short/open)", "impedance") {
            Some(raw) => parse_load_kind(&raw)?,
            None => LoadKind::Impedance,
        };
        let load = match load {
            LoadKind::Short => LoadSpec::Short,
            LoadKind::Open => LoadSpec::Open,
            LoadKind::Impedance => LoadSpec::Impedance {
                real: self.number("load_real", "Load resistance Re(ZL) (Ω)", 50.0)?,
                imag: self.number("load_imag", "Load reactance Im(ZL) (Ω)", 0.0)?,
            },
        };

        Ok(Scenario {
            line: LineInput {
                geometry,
                frequency_mhz,
                material,
            },
            line_length_m,
            load,
        })
    }
}
