//! Calibration capture workflow
//!
//! Calibrating a tank is a four-step procedure performed on site:
//!
//! ```text
//! Dimensions ──► Point 1 ──► Point 2 ──► Point 3 ──► Complete
//!  diameter,      empty-ish    middle      near-full
//!  max height
//! ```
//!
//! At each point the operator brings the tank to a fill level, measures the
//! height by hand and confirms; the raw signal is whatever the sensor reads
//! at that moment. [`CalibrationWizard`] holds that state without any UI so
//! the rules live next to the converters that consume the result.
//!
//! ```rust
//! use tankguard_core::{CalibrationWizard, WizardStep};
//!
//! let mut wizard = CalibrationWizard::new();
//! wizard.set_dimensions(1200.0, 2000.0)?;
//! wizard.capture(100.0, 0.0)?;
//! wizard.capture(500.0, 1000.0)?;
//! wizard.capture(900.0, 2000.0)?;
//! assert_eq!(wizard.step(), WizardStep::Complete);
//!
//! let cal = wizard.finish()?;
//! assert!(cal.is_configured);
//! # Ok::<(), tankguard_core::CalibrationError>(())
//! ```

use crate::{
    calibration::{CalibrationParameters, CalibrationPoint},
    constants::CALIBRATION_POINT_COUNT,
    errors::{CalibrationError, CalibrationResult},
};

/// Where the wizard currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Waiting for diameter and maximum height
    Dimensions,
    /// Waiting for calibration point `n` (1-based)
    Point(u8),
    /// All values captured
    Complete,
}

impl WizardStep {
    /// Human-readable step name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Dimensions => "dimensions",
            Self::Point(1) => "point 1",
            Self::Point(2) => "point 2",
            Self::Point(_) => "point 3",
            Self::Complete => "complete",
        }
    }
}

/// Step-by-step builder for [`CalibrationParameters`]
#[derive(Debug, Clone)]
pub struct CalibrationWizard {
    step: WizardStep,
    diameter_mm: f64,
    max_height_mm: f64,
    points: [CalibrationPoint; CALIBRATION_POINT_COUNT],
}

impl CalibrationWizard {
    /// Start a new calibration at the dimensions step
    pub const fn new() -> Self {
        Self {
            step: WizardStep::Dimensions,
            diameter_mm: 0.0,
            max_height_mm: 0.0,
            points: [CalibrationPoint::new(0.0, 0.0); CALIBRATION_POINT_COUNT],
        }
    }

    /// Current step
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Whether every value has been captured
    pub fn is_complete(&self) -> bool {
        self.step == WizardStep::Complete
    }

    /// Record tank dimensions and advance to the first point
    pub fn set_dimensions(&mut self, diameter_mm: f64, max_height_mm: f64) -> CalibrationResult<()> {
        self.expect_step(WizardStep::Dimensions)?;
        check_dimension("diameter", diameter_mm)?;
        check_dimension("max_height", max_height_mm)?;

        self.diameter_mm = diameter_mm;
        self.max_height_mm = max_height_mm;
        self.step = WizardStep::Point(1);
        Ok(())
    }

    /// Capture the current point from the live signal and a measured height
    pub fn capture(&mut self, live_raw: f64, measured_height_mm: f64) -> CalibrationResult<()> {
        let WizardStep::Point(n) = self.step else {
            return Err(CalibrationError::WrongStep {
                expected: "point",
                actual: self.step.name(),
            });
        };
        if !live_raw.is_finite() || !measured_height_mm.is_finite() {
            return Err(CalibrationError::InvalidValue);
        }

        let index = usize::from(n - 1);
        if index > 0 && live_raw < self.points[index - 1].raw {
            log_warn!(
                "Calibration point {} raw {} is below previous point raw {}",
                n,
                live_raw,
                self.points[index - 1].raw
            );
        }

        self.points[index] = CalibrationPoint::new(live_raw, measured_height_mm);
        self.step = if index + 1 == CALIBRATION_POINT_COUNT {
            WizardStep::Complete
        } else {
            WizardStep::Point(n + 1)
        };
        Ok(())
    }

    /// Go back one step; captured values are kept until overwritten
    pub fn back(&mut self) {
        self.step = match self.step {
            WizardStep::Dimensions | WizardStep::Point(1) => WizardStep::Dimensions,
            WizardStep::Point(n) => WizardStep::Point(n - 1),
            WizardStep::Complete => WizardStep::Point(CALIBRATION_POINT_COUNT as u8),
        };
    }

    /// Produce the configured calibration record
    pub fn finish(&self) -> CalibrationResult<CalibrationParameters> {
        if !self.is_complete() {
            return Err(CalibrationError::Incomplete {
                step: self.step.name(),
            });
        }
        Ok(CalibrationParameters::new(
            self.diameter_mm,
            self.max_height_mm,
            self.points,
        ))
    }

    fn expect_step(&self, expected: WizardStep) -> CalibrationResult<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(CalibrationError::WrongStep {
                expected: expected.name(),
                actual: self.step.name(),
            })
        }
    }
}

impl Default for CalibrationWizard {
    fn default() -> Self {
        Self::new()
    }
}

fn check_dimension(field: &'static str, value: f64) -> CalibrationResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalibrationError::InvalidDimension { field, value })
    }
}
