//! Least-squares regression converter (alternative policy)
//!
//! Fits one straight line `h = m·raw + c` through all three calibration
//! points instead of joining them segment by segment. Readings are smoother
//! but miss the calibration points whenever the sensor response is not
//! linear, so near the points it disagrees with [`PiecewiseConverter`].
//!
//! Kept selectable through [`ConversionPolicy`](super::ConversionPolicy);
//! it is not the default.
//!
//! ```text
//! m = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)     zero denominator → 1
//! c = (Σy − m·Σx) / n
//! ```
//!
//! [`PiecewiseConverter`]: super::PiecewiseConverter

use crate::{
    calibration::CalibrationParameters,
    constants::{CALIBRATION_POINT_COUNT, LEVEL_PERCENT_FULL},
    traits::LevelConverter,
    volume::VolumeRounding,
};

use super::utils;

/// Fitted line through the calibration points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Height gained per raw count (mm)
    pub slope: f64,
    /// Height at raw signal zero (mm)
    pub intercept: f64,
}

impl LinearFit {
    /// Least-squares fit through a calibration's points
    pub fn from_calibration(calibration: &CalibrationParameters) -> Self {
        let n = CALIBRATION_POINT_COUNT as f64;
        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);

        for p in &calibration.points {
            sum_x += p.raw;
            sum_y += p.height_mm;
            sum_xy += p.raw * p.height_mm;
            sum_x2 += p.raw * p.raw;
        }

        let denominator = utils::guard_denominator(n * sum_x2 - sum_x * sum_x);
        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        Self { slope, intercept }
    }

    /// Height on the fitted line, unclamped
    #[inline]
    pub fn evaluate(&self, raw_signal: f64) -> f64 {
        self.slope * raw_signal + self.intercept
    }
}

/// Regression-based raw-to-height converter
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegressionConverter {
    rounding: VolumeRounding,
}

impl RegressionConverter {
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
}

impl LevelConverter for RegressionConverter {
    fn height_mm(&self, raw_signal: f64, calibration: &CalibrationParameters) -> f64 {
        let height = LinearFit::from_calibration(calibration).evaluate(raw_signal);
        utils::clamp_height(height, calibration.max_height_mm)
    }

    fn rounding(&self) -> VolumeRounding {
        self.rounding
    }

    // This policy has always capped the percentage explicitly
    fn level_percent(&self, height_mm: f64, calibration: &CalibrationParameters) -> f64 {
        utils::level_percent(height_mm, calibration.max_height_mm).min(LEVEL_PERCENT_FULL)
    }
}
