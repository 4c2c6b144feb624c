//! Core traits for converters
//!
//! Every conversion policy implements [`LevelConverter`]. Implementors only
//! supply the height model; gating on the configured flag, volume, rounding
//! and level percentage are shared so all policies agree on those rules.

use crate::{
    calibration::CalibrationParameters,
    converters::utils,
    volume::{cylinder_volume_litres, VolumeRounding},
};

/// One tank's calibrated reading
///
/// Derived on every read and never stored by the core.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversionResult {
    /// Fluid height in mm, within `[0, max_height]`
    pub height_mm: f64,

    /// Displayed volume in litres, after rounding
    pub volume_litres: f64,

    /// Fill level as a percentage of maximum height
    pub level_percent: f64,
}

impl ConversionResult {
    /// Reading shown for uncalibrated tanks
    pub const EMPTY: Self = Self {
        height_mm: 0.0,
        volume_litres: 0.0,
        level_percent: 0.0,
    };
}

/// Converts a raw sensor signal into height, volume and level
pub trait LevelConverter {
    /// Fluid height in mm for a raw signal, clamped to `[0, max_height]`
    ///
    /// Only called with a finite raw signal and a configured calibration.
    fn height_mm(&self, raw_signal: f64, calibration: &CalibrationParameters) -> f64;

    /// Rounding applied to per-tank volumes
    fn rounding(&self) -> VolumeRounding;

    /// Level percentage for an already clamped height
    fn level_percent(&self, height_mm: f64, calibration: &CalibrationParameters) -> f64 {
        utils::level_percent(height_mm, calibration.max_height_mm)
    }

    /// Convert one tank's raw signal
    ///
    /// Total over its inputs: uncalibrated tanks and non-finite signals
    /// read as [`ConversionResult::EMPTY`], never as an error.
    fn convert(
        &self,
        raw_signal: f64,
        calibration: Option<&CalibrationParameters>,
    ) -> ConversionResult {
        let calibration = match calibration {
            Some(cal) if cal.is_configured => cal,
            _ => return ConversionResult::EMPTY,
        };

        if !raw_signal.is_finite() {
            log_warn!("Non-finite raw signal {}, reading tank as empty", raw_signal);
            return ConversionResult::EMPTY;
        }

        let height_mm = self.height_mm(raw_signal, calibration);
        let exact = cylinder_volume_litres(calibration.diameter_mm, height_mm).max(0.0);

        ConversionResult {
            height_mm,
            volume_litres: self.rounding().apply(exact),
            level_percent: self.level_percent(height_mm, calibration),
        }
    }
}

impl<C: LevelConverter + ?Sized> LevelConverter for &C {
    fn height_mm(&self, raw_signal: f64, calibration: &CalibrationParameters) -> f64 {
        (**self).height_mm(raw_signal, calibration)
    }

    fn rounding(&self) -> VolumeRounding {
        (**self).rounding()
    }

    fn level_percent(&self, height_mm: f64, calibration: &CalibrationParameters) -> f64 {
        (**self).level_percent(height_mm, calibration)
    }

    fn convert(
        &self,
        raw_signal: f64,
        calibration: Option<&CalibrationParameters>,
    ) -> ConversionResult {
        (**self).convert(raw_signal, calibration)
    }
}
