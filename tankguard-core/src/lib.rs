//! Core calibration engine for TankGuard
//!
//! Turns raw level-sensor signals into calibrated fluid height, volume and
//! fill level for liquid storage tanks, and folds a whole fleet of tanks into
//! dashboard totals. Designed to run on the gateway next to the sensors as
//! well as on the server behind the dashboard.
//!
//! Key constraints:
//! - no_std capable, no heap allocation
//! - Pure functions: no state kept between calls, safe to call from any thread
//! - Never fails on a reading: bad calibration shows as zero, not as an error
//!
//! ```no_run
//! use tankguard_core::{aggregate, convert, CalibrationParameters, CalibrationPoint, TankReading};
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
//! // One tank
//! let reading = convert(500.0, Some(&cal));
//!
//! // Whole fleet
//! let summary = aggregate(&[TankReading::new(500.0, cal), TankReading::uncalibrated(42.0)]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod aggregator;
pub mod calibration;
pub mod constants;
pub mod converters;
pub mod errors;
pub mod fleet;
pub mod traits;
pub mod volume;
pub mod wizard;

// Public API
pub use aggregator::{aggregate, FleetAggregator, FleetSummary};
pub use calibration::{CalibrationIssue, CalibrationParameters, CalibrationPoint};
pub use converters::{
    convert,
    AnyConverter,
    ConversionPolicy,
    LinearFit,
    PiecewiseConverter,
    RegressionConverter,
};
pub use errors::{CalibrationError, CalibrationResult};
pub use fleet::{FleetSnapshot, TankId, TankReading};
pub use traits::{ConversionResult, LevelConverter};
pub use volume::VolumeRounding;
pub use wizard::{CalibrationWizard, WizardStep};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
