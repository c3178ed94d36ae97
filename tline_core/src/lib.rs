//! # tline_core - Transmission Line Calculation Engine
//!
//! `tline_core` computes the electrical parameters of coaxial, two-wire,
//! parallel-plate and microstrip transmission lines, terminates them in a load
//! and samples the resulting standing and traveling waves. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Traceable**: Every result lists the formulas that produced it
//!
//! ## Quick Start
//!
//! ```rust
//! use tline_core::calculations::{evaluate, GeometryKind, Scenario};
//!
//! let scenario = Scenario::default_for(GeometryKind::Coaxial);
//! let evaluation = evaluate(&scenario);
//!
//! let json = serde_json::to_string_pretty(&evaluation).unwrap();
//! assert!(json.contains("\"status\": \"ok\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Line, circuit, waveform and sweep calculations
//! - [`equations`] - Formula implementations and the equation registry
//! - [`settings`] - Sampler and sweep tunables
//! - [`format`] - Display formatting with "N/A" for unavailable values
//! - [`units`] - Type-safe unit wrappers
//! - [`constants`] - Physical constants
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod constants;
pub mod equations;
pub mod errors;
pub mod format;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    compute_circuit_properties, compute_line_parameters, evaluate, Evaluation, Geometry, GeometryKind, LineAnalysis,
    LineInput, LoadSpec, Material, Scenario,
};
pub use errors::{CalcError, CalcResult};
pub use settings::AnalysisSettings;
