//! # Error Types
//!
//! Structured error types for tline_core. Every variant carries enough
//! context for a front end to point at the offending field and for a
//! program to branch on [`CalcError::error_code`].
//!
//! ## Example
//!
//! ```rust
//! use tline_core::errors::{CalcError, CalcResult};
//!
//! fn validate_frequency(frequency_mhz: f64) -> CalcResult<()> {
//!     if !(frequency_mhz > 0.0) {
//!         return Err(CalcError::invalid_input(
//!             "frequency_mhz",
//!             frequency_mhz.to_string(),
//!             "Frequency must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tline_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A scalar input is unparsable, NaN, non-finite or outside its domain
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The geometry violates a physical constraint (e.g. outer radius <= inner radius)
    #[error("Invalid {geometry} dimensions: {reason}")]
    InvalidDimensions { geometry: String, reason: String },

    /// The geometry tag is not one of the supported line types
    #[error("Unknown geometry: {name}")]
    UnknownGeometry { name: String },

    /// A complex division hit a near-zero denominator and a fallback value was used
    #[error("Degenerate denominator in {context}: |den|^2 = {magnitude_sq:e}, fallback applied")]
    DegenerateDenominator { context: String, magnitude_sq: f64 },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidDimensions error
    pub fn invalid_dimensions(geometry: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidDimensions {
            geometry: geometry.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownGeometry error
    pub fn unknown_geometry(name: impl Into<String>) -> Self {
        CalcError::UnknownGeometry { name: name.into() }
    }

    /// Create a DegenerateDenominator record
    pub fn degenerate_denominator(context: impl Into<String>, magnitude_sq: f64) -> Self {
        CalcError::DegenerateDenominator {
            context: context.into(),
            magnitude_sq,
        }
    }

    /// Name of the offending field, when the error points at one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Whether the condition was absorbed by a fallback rather than failing the calculation
    pub fn is_soft(&self) -> bool {
        matches!(self, CalcError::DegenerateDenominator { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidDimensions { .. } => "INVALID_DIMENSIONS",
            CalcError::UnknownGeometry { .. } => "UNKNOWN_GEOMETRY",
            CalcError::DegenerateDenominator { .. } => "DEGENERATE_DENOMINATOR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
