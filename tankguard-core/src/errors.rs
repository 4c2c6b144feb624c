//! Error Types for Calibration Workflows
//!
//! ## Design Philosophy
//!
//! Conversion and aggregation never fail: a dashboard that stops rendering
//! because one tank was miscalibrated is worse than one that shows zero.
//! Errors therefore only exist at the edges where a caller is *building*
//! something:
//!
//! 1. **Calibration capture**: the wizard rejects out-of-order steps and
//!    values that can't describe a real tank.
//! 2. **Fleet snapshots**: fixed-capacity containers reject overflow.
//!
//! Like the rest of the core, errors are small, `Copy`, and carry only
//! `&'static str` or numeric context so they can be returned from no_std
//! code without allocation.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use tankguard_core::{CalibrationError, CalibrationWizard};
//!
//! let mut wizard = CalibrationWizard::new();
//! match wizard.set_dimensions(1200.0, -5.0) {
//!     Ok(()) => {}
//!     Err(CalibrationError::InvalidDimension { field, .. }) => {
//!         // Ask the operator to re-enter `field`
//!         assert_eq!(field, "max_height");
//!     }
//!     Err(_) => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for calibration operations
pub type CalibrationResult<T> = Result<T, CalibrationError>;

/// Calibration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalibrationError {
    /// A tank dimension was non-finite or not strictly positive
    #[error("Invalid {field}: {value} (must be a positive number of millimetres)")]
    InvalidDimension {
        /// Which dimension was rejected (`diameter` or `max_height`)
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Value makes no physical sense (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,

    /// The wizard was asked to do something its current step doesn't allow
    #[error("Wrong calibration step: expected {expected}, wizard is at {actual}")]
    WrongStep {
        /// Step the operation belongs to
        expected: &'static str,
        /// Step the wizard is currently at
        actual: &'static str,
    },

    /// Calibration was finalized before all points were captured
    #[error("Calibration incomplete: stopped at {step}")]
    Incomplete {
        /// Step the wizard stopped at
        step: &'static str,
    },

    /// The fleet snapshot has no room for another tank
    #[error("Fleet full: capacity is {capacity} tanks")]
    FleetFull {
        /// Fixed snapshot capacity
        capacity: usize,
    },

    /// Tank identifier longer than the inline buffer
    #[error("Tank id too long: {len} bytes, limit {max}")]
    TankIdTooLong {
        /// Length of the rejected identifier
        len: usize,
        /// Maximum identifier length
        max: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for CalibrationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidDimension { field, value } =>
                defmt::write!(fmt, "Invalid {}: {}", field, value),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::WrongStep { expected, actual } =>
                defmt::write!(fmt, "Wrong step: expected {}, at {}", expected, actual),
            Self::Incomplete { step } =>
                defmt::write!(fmt, "Calibration incomplete at {}", step),
            Self::FleetFull { capacity } =>
                defmt::write!(fmt, "Fleet full ({} tanks)", capacity),
            Self::TankIdTooLong { len, max } =>
                defmt::write!(fmt, "Tank id {} bytes, max {}", len, max),
        }
    }
}
