//! Piecewise-linear converter (canonical policy)
//!
//! Height follows two straight segments through the three calibration
//! points. The middle point's raw value picks the segment:
//!
//! ```text
//! raw <= p2.raw  →  p1 ── p2
//! raw >  p2.raw  →  p2 ── p3
//! ```
//!
//! Signals outside the calibrated span extrapolate along the outer segment
//! and are then clamped to `[0, max_height]`.

use crate::{
    calibration::CalibrationParameters,
    traits::LevelConverter,
    volume::VolumeRounding,
};

use super::utils;

/// Piecewise-linear raw-to-height converter
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PiecewiseConverter {
    rounding: VolumeRounding,
}

impl PiecewiseConverter {
    /// Converter with dashboard rounding (5 L steps)
    pub const fn new() -> Self {
        Self {
            rounding: VolumeRounding::DASHBOARD,
        }
    }

    /// Converter with a custom rounding policy
    pub const fn with_rounding(rounding: VolumeRounding) -> Self {
        Self { rounding }
    }

    /// Unclamped height from the segment the signal falls on
    pub fn interpolate(&self, raw_signal: f64, calibration: &CalibrationParameters) -> f64 {
        let (a, b) = if raw_signal <= calibration.points[1].raw {
            calibration.lower_segment()
        } else {
            calibration.upper_segment()
        };
        utils::interpolate_segment(a, b, raw_signal)
    }
}

impl LevelConverter for PiecewiseConverter {
    fn height_mm(&self, raw_signal: f64, calibration: &CalibrationParameters) -> f64 {
        let height = self.interpolate(raw_signal, calibration);
        utils::clamp_height(height, calibration.max_height_mm)
    }

    fn rounding(&self) -> VolumeRounding {
        self.rounding
    }
}
