//! # Waveform Sampler
//!
//! Plotting helpers for a terminated line: the standing-wave envelope, the
//! instantaneous incident/reflected/total voltages, an extremum locator and
//! the frame counter that drives an animation.
//!
//! All functions assume a lossless line and unit incident amplitude. Distance
//! `d` is measured from the load.
//!
//! ## Formulas
//!
//! - |V(d)| = √(1 + |Γ|² + 2|Γ|cos(2βd − θ)), β = 2π/λ
//! - V(d, t) = cos(ωt − βd) + |Γ|cos(ωt + βd − θ)

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::circuit::ReflectionCoefficient;
use crate::equations::registry::{Equation, EquationTracker};
use crate::settings::SamplerSettings;

/// Frames in one animation period.
pub const FRAMES_PER_CYCLE: u32 = 100;

/// The reflected wave is drawn only above this |Γ|.
pub const REFLECTION_VISIBILITY_THRESHOLD: f64 = 0.01;

/// Below this |Γ| the envelope is treated as flat.
pub const FLAT_ENVELOPE_THRESHOLD: f64 = 1e-9;

fn phase_constant(wavelength_m: f64) -> f64 {
    2.0 * PI / wavelength_m
}

/// Standing-wave envelope |V(d)| for unit incident amplitude.
pub fn standing_wave_amplitude(reflection: &ReflectionCoefficient, wavelength_m: f64, distance_m: f64) -> f64 {
    let g = reflection.magnitude;
    let beta = phase_constant(wavelength_m);
    (1.0 + g * g + 2.0 * g * (2.0 * beta * distance_m - reflection.angle_rad()).cos()).sqrt()
}

/// One point of a plotted envelope
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopePoint {
    pub distance_m: f64,
    pub amplitude: f64,
}

/// Sample the envelope at `samples` evenly spaced points over d ∈ [0, span·λ].
pub fn standing_wave_profile(
    reflection: &ReflectionCoefficient,
    wavelength_m: f64,
    settings: &SamplerSettings,
) -> Vec<EnvelopePoint> {
    let span = settings.span_wavelengths * wavelength_m;
    let samples = settings.profile_samples.max(2);
    (0..samples)
        .map(|i| {
            let distance_m = span * i as f64 / (samples - 1) as f64;
            EnvelopePoint {
                distance_m,
                amplitude: standing_wave_amplitude(reflection, wavelength_m, distance_m),
            }
        })
        .collect()
}

/// Instantaneous voltages at one position and animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveSample {
    pub distance_m: f64,
    /// cos(ωt − βd)
    pub incident: f64,
    /// |Γ|cos(ωt + βd − θ)
    pub reflected: f64,
    pub total: f64,
}

/// Incident, reflected and total voltage at distance `d` and phase `ωt`.
///
/// `time_phase` is an animation phase in radians, usually from
/// [`AnimationClock::time_phase`], not the physical signal period.
pub fn traveling_wave(
    reflection: &ReflectionCoefficient,
    wavelength_m: f64,
    distance_m: f64,
    time_phase: f64,
) -> WaveSample {
    let beta = phase_constant(wavelength_m);
    let incident = (time_phase - beta * distance_m).cos();
    let reflected = reflection.magnitude * (time_phase + beta * distance_m - reflection.angle_rad()).cos();
    WaveSample {
        distance_m,
        incident,
        reflected,
        total: incident + reflected,
    }
}

/// Traveling-wave snapshot over d ∈ [0, span·λ] at one phase
pub fn traveling_wave_profile(
    reflection: &ReflectionCoefficient,
    wavelength_m: f64,
    time_phase: f64,
    settings: &SamplerSettings,
) -> Vec<WaveSample> {
    let span = settings.span_wavelengths * wavelength_m;
    let samples = settings.profile_samples.max(2);
    (0..samples)
        .map(|i| {
            let d = span * i as f64 / (samples - 1) as f64;
            traveling_wave(reflection, wavelength_m, d, time_phase)
        })
        .collect()
}

/// Whether the reflected component is large enough to draw
pub fn reflected_wave_visible(reflection: &ReflectionCoefficient) -> bool {
    reflection.magnitude > REFLECTION_VISIBILITY_THRESHOLD
}

// ============================================================================
// Extrema
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtremumKind {
    Maximum,
    Minimum,
}

/// A located envelope maximum or minimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    pub kind: ExtremumKind,
    pub amplitude: f64,
    /// Distance from the load (m)
    pub distance_m: f64,
    /// Distance from the load in wavelengths
    pub distance_wavelengths: f64,
}

/// Locate the maxima and minima of the standing-wave envelope.
///
/// The envelope is sampled on a grid of `grid_samples` points over
/// `span_wavelengths`. Interior points that beat both neighbors become
/// candidates, and each candidate is refined by sub-sampling ±half a grid step
/// with `refine_steps` sub-steps. Results are sorted by distance.
///
/// A flat envelope (|Γ| ≈ 0) or an unusable wavelength yields no extrema.
pub fn find_extrema(reflection: &ReflectionCoefficient, wavelength_m: f64, settings: &SamplerSettings) -> Vec<Extremum> {
    if reflection.magnitude.is_nan()
        || reflection.magnitude < FLAT_ENVELOPE_THRESHOLD
        || !(wavelength_m.is_finite() && wavelength_m > 0.0)
    {
        return Vec::new();
    }

    let samples = settings.grid_samples.max(3);
    let span = settings.span_wavelengths * wavelength_m;
    let step = span / (samples - 1) as f64;
    let amplitude = |d: f64| standing_wave_amplitude(reflection, wavelength_m, d);
    let grid: Vec<f64> = (0..samples).map(|i| amplitude(step * i as f64)).collect();

    let mut extrema = Vec::new();
    for i in 1..samples - 1 {
        let (prev, here, next) = (grid[i - 1], grid[i], grid[i + 1]);
        let kind = if here > prev && here >= next {
            ExtremumKind::Maximum
        } else if here < prev && here <= next {
            ExtremumKind::Minimum
        } else {
            continue;
        };

        let (distance_m, amp) = refine(&amplitude, step * i as f64, step, settings.refine_steps.max(1), kind);
        extrema.push(Extremum {
            kind,
            amplitude: amp,
            distance_m,
            distance_wavelengths: distance_m / wavelength_m,
        });
    }

    extrema
}

/// Best point within ±step/2 of `center`
fn refine(amplitude: &impl Fn(f64) -> f64, center: f64, step: f64, sub_steps: usize, kind: ExtremumKind) -> (f64, f64) {
    let start = (center - step / 2.0).max(0.0);
    let sub = (center + step / 2.0 - start) / sub_steps as f64;

    let mut best = (center, amplitude(center));
    for k in 0..=sub_steps {
        let d = start + sub * k as f64;
        let a = amplitude(d);
        let better = match kind {
            ExtremumKind::Maximum => a > best.1,
            ExtremumKind::Minimum => a < best.1,
        };
        if better {
            best = (d, a);
        }
    }
    best
}

// ============================================================================
// Combined sampling
// ============================================================================

/// Everything a standing-wave panel draws for one termination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingWave {
    pub envelope: Vec<EnvelopePoint>,
    pub extrema: Vec<Extremum>,
    /// Traveling-wave snapshot at the requested phase
    pub snapshot: Vec<WaveSample>,
    pub reflected_visible: bool,
    pub equations: EquationTracker,
}

/// Sample envelope, extrema and a traveling-wave snapshot in one pass.
pub fn sample_standing_wave(
    reflection: &ReflectionCoefficient,
    wavelength_m: f64,
    time_phase: f64,
    settings: &SamplerSettings,
) -> StandingWave {
    let mut equations = EquationTracker::new();
    equations.record(Equation::StandingWaveEnvelope, "envelope");
    equations.record(Equation::TravelingWave, "snapshot");

    StandingWave {
        envelope: standing_wave_profile(reflection, wavelength_m, settings),
        extrema: find_extrema(reflection, wavelength_m, settings),
        snapshot: traveling_wave_profile(reflection, wavelength_m, time_phase, settings),
        reflected_visible: reflected_wave_visible(reflection),
        equations,
    }
}

// ============================================================================
// Animation
// ============================================================================

/// Frame counter for the traveling-wave animation.
///
/// The clock starts stopped at frame 0. The caller advances it once per
/// rendered frame; advancing a stopped clock does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationClock {
    frame: u32,
    running: bool,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Move to the next frame, wrapping after [`FRAMES_PER_CYCLE`]. Returns the current frame.
    pub fn advance(&mut self) -> u32 {
        if self.running {
            self.frame = (self.frame + 1) % FRAMES_PER_CYCLE;
        }
        self.frame
    }

    /// ωt = frame/100 · 2π
    pub fn time_phase(&self) -> f64 {
        (self.frame % FRAMES_PER_CYCLE) as f64 / FRAMES_PER_CYCLE as f64 * 2.0 * PI
    }
}
