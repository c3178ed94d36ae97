//! # Transmission Line Equations
//!
//! Every closed-form formula the engine evaluates lives here, one function per
//! formula. Keeping them in one place makes it easy to check each one against
//! its reference and keeps the calculation modules free of inline math.
//!
//! ## Modules
//!
//! - [`line`] - TEM per-unit-length parameters, Z₀, low-loss α and β
//! - [`microstrip`] - Hammerstad-Jensen static model with dispersion
//! - [`circuit`] - Reflection, VSWR and guarded input impedance
//! - [`registry`] - Equation metadata and usage tracking
//!
//! ## Conventions
//!
//! - **Units**: SI throughout (m, Hz, Ω, S, H, F)
//! - **Distance**: `d` is measured from the load toward the generator
//! - **Propagation constant**: γ = α + jβ with α in Np/m, β in rad/m
//!
//! ## References
//!
//! - Pozar, *Microwave Engineering*, 4th Edition
//! - Ulaby, *Fundamentals of Applied Electromagnetics*
//! - Hammerstad & Jensen, IEEE MTT-S Digest 1980
//! - Getsinger, IEEE Trans. MTT-21, 1973

pub mod circuit;
pub mod line;
pub mod microstrip;
pub mod registry;

pub use circuit::{
    general_input_impedance,
    open_input_impedance,
    reflection_coefficient,
    short_input_impedance,
    vswr,
    GuardedImpedance,
    DENOMINATOR_EPSILON,
    IMPEDANCE_SENTINEL,
    VSWR_EPSILON,
};

pub use line::{
    low_loss_attenuation,
    phase_constant,
    skin_depth,
    surface_resistance,
    tem_phase_velocity,
    wavelength,
};

pub use microstrip::{MicrostripSolution, DISPERSION_THRESHOLD_HZ};

pub use registry::{
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Reference,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
