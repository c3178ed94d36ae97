//! # Analysis Settings
//!
//! Tunables for the plotting helpers. Everything here has a default that
//! reproduces the interactive calculator, so a front end only needs to load a
//! settings file when it wants finer sampling or a wider sweep.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "sampler": { "grid_samples": 800, "span_wavelengths": 2.0, "refine_steps": 20, "profile_samples": 200 },
//!   "sweep": { "start_factor": 0.5, "stop_factor": 2.0, "points": 51 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Top-level settings bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Standing-wave sampling and extremum search
    pub sampler: SamplerSettings,
    /// Frequency-response sweep
    pub sweep: SweepSettings,
}

impl AnalysisSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    ///
    /// ```rust
    /// use tline_core::settings::AnalysisSettings;
    ///
    /// let settings = AnalysisSettings::from_json(r#"{"sweep": {"points": 101}}"#).unwrap();
    /// assert_eq!(settings.sweep.points, 101);
    /// assert_eq!(settings.sampler.grid_samples, 800);
    /// ```
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: AnalysisSettings = serde_json::from_str(json)
            .map_err(|e| CalcError::invalid_input("settings", "<json>", e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate both sections
    pub fn validate(&self) -> CalcResult<()> {
        self.sampler.validate()?;
        self.sweep.validate()
    }
}

/// Standing-wave sampler settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerSettings {
    /// Grid points used by the extremum search
    pub grid_samples: usize,
    /// Distance covered from the load, in wavelengths
    pub span_wavelengths: f64,
    /// Sub-steps used to refine each extremum over ±half a grid step
    pub refine_steps: usize,
    /// Points in a plotted envelope or traveling-wave profile
    pub profile_samples: usize,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        SamplerSettings {
            grid_samples: 800,
            span_wavelengths: 2.0,
            refine_steps: 20,
            profile_samples: 200,
        }
    }
}

impl SamplerSettings {
    pub fn validate(&self) -> CalcResult<()> {
        if self.grid_samples < 3 {
            return Err(CalcError::invalid_input(
                "sampler.grid_samples",
                self.grid_samples.to_string(),
                "At least 3 grid samples are needed to compare neighbors",
            ));
        }
        if !(self.span_wavelengths.is_finite() && self.span_wavelengths > 0.0) {
            return Err(CalcError::invalid_input(
                "sampler.span_wavelengths",
                self.span_wavelengths.to_string(),
                "Span must be a positive number of wavelengths",
            ));
        }
        if self.refine_steps == 0 {
            return Err(CalcError::invalid_input(
                "sampler.refine_steps",
                "0",
                "Refinement needs at least one sub-step",
            ));
        }
        if self.profile_samples < 2 {
            return Err(CalcError::invalid_input(
                "sampler.profile_samples",
                self.profile_samples.to_string(),
                "A profile needs at least 2 samples",
            ));
        }
        Ok(())
    }
}

/// Frequency sweep settings, expressed relative to the operating frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    pub start_factor: f64,
    pub stop_factor: f64,
    /// Number of sweep points including both ends
    pub points: usize,
}

impl Default for SweepSettings {
    fn default() -> Self {
        SweepSettings {
            start_factor: 0.5,
            stop_factor: 2.0,
            points: 51,
        }
    }
}

impl SweepSettings {
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.start_factor.is_finite() && self.start_factor > 0.0) {
            return Err(CalcError::invalid_input(
                "sweep.start_factor",
                self.start_factor.to_string(),
                "Start factor must be positive",
            ));
        }
        if !(self.stop_factor.is_finite() && self.stop_factor > self.start_factor) {
            return Err(CalcError::invalid_input(
                "sweep.stop_factor",
                self.stop_factor.to_string(),
                "Stop factor must exceed the start factor",
            ));
        }
        if self.points < 2 {
            return Err(CalcError::invalid_input(
                "sweep.points",
                self.points.to_string(),
                "A sweep needs at least 2 points",
            ));
        }
        Ok(())
    }

    /// Frequency of sweep point `index` for an operating frequency in MHz
    pub fn frequency_at(&self, operating_mhz: f64, index: usize) -> f64 {
        let start = operating_mhz * self.start_factor;
        let stop = operating_mhz * self.stop_factor;
        let step = (stop - start) / (self.points - 1) as f64;
        start + step * index as f64
    }
}
