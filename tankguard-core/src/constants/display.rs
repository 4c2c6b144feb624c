//! Display Rounding Constants
//!
//! Volumes shown to operators are quantized so the dashboard does not
//! flicker with sensor noise.

/// Volume display step (litres).
///
/// Per-tank and fleet volumes are rounded to the nearest multiple of this
/// step. 5 L is below the resolution of the level sensors on a 1 m³ tank
/// but coarse enough to hide ADC jitter.
pub const VOLUME_STEP_LITRES: f64 = 5.0;

/// Noise floor for per-tank volumes (litres).
///
/// Anything below this reads as exactly zero. A nearly-empty tank reports
/// a few litres of residue from offset error; operators read that as
/// "empty" anyway.
pub const VOLUME_NOISE_FLOOR_LITRES: f64 = 5.0;
