//! Shared conversion arithmetic
//!
//! Pure helpers used by every converter. All of them are total on finite
//! input: degenerate geometry produces a defined number, never a panic or NaN.

use crate::{
    calibration::CalibrationPoint,
    constants::{DEGENERATE_SEGMENT_WIDTH, LEVEL_PERCENT_FULL},
};

/// Replace a zero denominator with the degenerate segment width
#[inline]
pub fn guard_denominator(denominator: f64) -> f64 {
    if denominator == 0.0 {
        DEGENERATE_SEGMENT_WIDTH
    } else {
        denominator
    }
}

/// Linear interpolation (or extrapolation) along the segment `a → b`
///
/// ```text
/// y = a.h + (raw - a.raw) * (b.h - a.h) / (b.raw - a.raw)
/// ```
pub fn interpolate_segment(a: CalibrationPoint, b: CalibrationPoint, raw: f64) -> f64 {
    let width = b.raw - a.raw;
    if width == 0.0 {
        log_debug!("Zero-width calibration segment at raw {}, using unit width", a.raw);
    }
    a.height_mm + (raw - a.raw) * (b.height_mm - a.height_mm) / guard_denominator(width)
}

/// Clamp a height to `[0, max_height]`
///
/// The ceiling is applied before the floor, so a non-positive ceiling
/// yields 0. `f64::clamp` would panic there.
#[inline]
pub fn clamp_height(height_mm: f64, max_height_mm: f64) -> f64 {
    height_mm.min(max_height_mm).max(0.0)
}

/// Height as a percentage of the ceiling
///
/// A non-positive ceiling reads as 0% instead of dividing by zero.
#[inline]
pub fn level_percent(height_mm: f64, max_height_mm: f64) -> f64 {
    if max_height_mm <= 0.0 {
        return 0.0;
    }
    height_mm / max_height_mm * LEVEL_PERCENT_FULL
}
