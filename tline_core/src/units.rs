//! # Unit Types
//!
//! Type-safe wrappers for the engineering units that cross the API boundary.
//! Inputs arrive in the units a bench engineer types (mm, MHz); every formula
//! works in SI (m, Hz). The wrappers make that conversion explicit.
//!
//! ## Example
//!
//! ```rust
//! use tline_core::units::{Hertz, Megahertz, Meters, Millimeters};
//!
//! let radius = Millimeters(0.5);
//! let radius_m: Meters = radius.into();
//! assert_eq!(radius_m.0, 0.0005);
//!
//! let f: Hertz = Megahertz(1000.0).into();
//! assert_eq!(f.0, 1.0e9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 * 1e-3)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1e3)
    }
}

// ============================================================================
// Frequency Units
// ============================================================================

/// Frequency in hertz
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hertz(pub f64);

/// Frequency in megahertz
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megahertz(pub f64);

/// Frequency in gigahertz
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gigahertz(pub f64);

impl From<Megahertz> for Hertz {
    fn from(mhz: Megahertz) -> Self {
        Hertz(mhz.0 * 1e6)
    }
}

impl From<Hertz> for Megahertz {
    fn from(hz: Hertz) -> Self {
        Megahertz(hz.0 / 1e6)
    }
}

impl From<Gigahertz> for Hertz {
    fn from(ghz: Gigahertz) -> Self {
        Hertz(ghz.0 * 1e9)
    }
}

impl From<Hertz> for Gigahertz {
    fn from(hz: Hertz) -> Self {
        Gigahertz(hz.0 / 1e9)
    }
}

impl Hertz {
    /// Angular frequency ω = 2πf in rad/s
    pub fn angular(self) -> f64 {
        2.0 * std::f64::consts::PI * self.0
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Hertz);
impl_arithmetic!(Megahertz);
impl_arithmetic!(Gigahertz);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_m() {
        let m: Meters = Millimeters(2.0).into();
        assert!((m.0 - 0.002).abs() < 1e-15);
    }

    #[test]
    fn test_frequency_conversions() {
        let hz: Hertz = Megahertz(500.0).into();
        assert_eq!(hz.0, 5.0e8);
        let ghz: Gigahertz = hz.into();
        assert!((ghz.0 - 0.5).abs() < 1e-12);
        assert!((Hertz(1.0).angular() - 2.0 * std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimeters(10.0);
        let b = Millimeters(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let f = Megahertz(1000.0);
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, "1000.0");

        let roundtrip: Megahertz = serde_json::from_str(&json).unwrap();
        assert_eq!(f, roundtrip);
    }
}
