//! Raw-Signal-to-Volume Converters
//!
//! ## Overview
//!
//! A level sensor reports a unitless analog value. Calibration ties that
//! value to fluid height at three fill levels; the converters in this module
//! turn any later reading into height, then volume and level:
//!
//! ```text
//! raw signal ──height model──► height (mm, clamped to [0, max])
//!            ──cylinder──────► volume (L, ≥ 0) ──rounding──► displayed L
//!            ──/ max height──► level (%)
//! ```
//!
//! ## Policies
//!
//! Two height models exist in the field and they disagree near the
//! calibration points, so exactly one is chosen per deployment:
//!
//! - [`PiecewiseConverter`] (default): two segments through the points.
//!   Passes through every captured point exactly.
//! - [`RegressionConverter`]: one least-squares line through all points.
//!   Caps level at 100% explicitly.
//!
//! [`ConversionPolicy`] names the choice as configuration and
//! [`AnyConverter`] dispatches to it at runtime.
//!
//! ## Failure semantics
//!
//! Conversion never fails. Uncalibrated tanks read as empty, zero-width
//! calibration segments fall back to a unit denominator, and out-of-range
//! heights are clamped. A monitoring display that keeps drawing beats one
//! that stops on a bad record.
//!
//! ## Usage Example
//!
//! ```rust
//! use tankguard_core::{
//!     CalibrationParameters, CalibrationPoint, LevelConverter, PiecewiseConverter,
//! };
//!
//! let cal = CalibrationParameters::new(
//!     1200.0,
//!     2000.0,
//!     [
//!         CalibrationPoint::new(100.0, 0.0),
//!         CalibrationPoint::new(500.0, 1000.0),
//!         CalibrationPoint::new(900.0, 2000.0),
//!     ],
//! );
//!
//! let reading = PiecewiseConverter::new().convert(500.0, Some(&cal));
//! assert_eq!(reading.height_mm, 1000.0);
//! assert_eq!(reading.volume_litres, 1130.0);
//! assert_eq!(reading.level_percent, 50.0);
//! ```

mod piecewise;
mod regression;
pub mod utils;

pub use piecewise::PiecewiseConverter;
pub use regression::{LinearFit, RegressionConverter};

use crate::{
    calibration::CalibrationParameters,
    traits::{ConversionResult, LevelConverter},
    volume::VolumeRounding,
};

/// Which height model a deployment uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConversionPolicy {
    /// Two interpolation segments through the calibration points
    #[default]
    Piecewise,
    /// One least-squares line through the calibration points
    Regression,
}

/// Converter chosen at runtime from a [`ConversionPolicy`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyConverter {
    /// Piecewise-linear model
    Piecewise(PiecewiseConverter),
    /// Least-squares model
    Regression(RegressionConverter),
}

impl AnyConverter {
    /// Build the converter for a policy
    pub const fn from_policy(policy: ConversionPolicy, rounding: VolumeRounding) -> Self {
        match policy {
            ConversionPolicy::Piecewise => Self::Piecewise(PiecewiseConverter::with_rounding(rounding)),
            ConversionPolicy::Regression => Self::Regression(RegressionConverter::with_rounding(rounding)),
        }
    }

    /// Policy this converter implements
    pub const fn policy(&self) -> ConversionPolicy {
        match self {
            Self::Piecewise(_) => ConversionPolicy::Piecewise,
            Self::Regression(_) => ConversionPolicy::Regression,
        }
    }
}

impl Default for AnyConverter {
    fn default() -> Self {
        Self::Piecewise(PiecewiseConverter::new())
    }
}

impl From<ConversionPolicy> for AnyConverter {
    fn from(policy: ConversionPolicy) -> Self {
        Self::from_policy(policy, VolumeRounding::DASHBOARD)
    }
}

impl LevelConverter for AnyConverter {
    fn height_mm(&self, raw_signal: f64, calibration: &CalibrationParameters) -> f64 {
        match self {
            Self::Piecewise(c) => c.height_mm(raw_signal, calibration),
            Self::Regression(c) => c.height_mm(raw_signal, calibration),
        }
    }

    fn rounding(&self) -> VolumeRounding {
        match self {
            Self::Piecewise(c) => c.rounding(),
            Self::Regression(c) => c.rounding(),
        }
    }

    fn level_percent(&self, height_mm: f64, calibration: &CalibrationParameters) -> f64 {
        match self {
            Self::Piecewise(c) => c.level_percent(height_mm, calibration),
            Self::Regression(c) => c.level_percent(height_mm, calibration),
        }
    }
}

/// Convert one reading with the canonical piecewise policy and dashboard rounding
pub fn convert(raw_signal: f64, calibration: Option<&CalibrationParameters>) -> ConversionResult {
    PiecewiseConverter::new().convert(raw_signal, calibration)
}
