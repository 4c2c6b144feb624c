//! Wire Records and Reports for the Live Feed
//!
//! ## Overview
//!
//! The realtime database holds one node per tank under `Tanks`:
//!
//! ```json
//! {
//!   "Tank1": {
//!     "analog_raw": 512,
//!     "config": {
//!       "diameter": 1200, "max_height": 2000,
//!       "p1_raw": 100, "p1_h": 0,
//!       "p2_raw": 500, "p2_h": 1000,
//!       "p3_raw": 900, "p3_h": 2000,
//!       "isConfigured": true
//!     }
//!   },
//!   "Tank2": { "analog_raw": 87 }
//! }
//! ```
//!
//! This crate maps that document onto the core types and back:
//!
//! - [`parse_snapshot`] turns a `Tanks` document into a [`FleetSnapshot`]
//! - [`TankConfigRecord`] is the flat `config` record the calibration tool writes
//! - [`FleetReport`] renders per-tank cards plus fleet totals as JSON
//!
//! Field names follow the database, not Rust conventions, so records written
//! by older dashboards keep parsing. Unknown fields are ignored.
//!
//! ## Usage Example
//!
//! ```rust
//! use tankguard_core::PiecewiseConverter;
//! use tankguard_schemas::{parse_snapshot, FleetReport};
//!
//! let feed = r#"{
//!     "Tank1": {
//!         "analog_raw": 500,
//!         "config": {
//!             "diameter": 1200, "max_height": 2000,
//!             "p1_raw": 100, "p1_h": 0,
//!             "p2_raw": 500, "p2_h": 1000,
//!             "p3_raw": 900, "p3_h": 2000,
//!             "isConfigured": true
//!         }
//!     }
//! }"#;
//!
//! let fleet = parse_snapshot(feed)?;
//! let report = FleetReport::build(&fleet, PiecewiseConverter::new());
//! assert_eq!(report.summary.total_volume_litres, 1130.0);
//! # Ok::<(), tankguard_schemas::SchemaError>(())
//! ```
//!
//! [`FleetSnapshot`]: tankguard_core::FleetSnapshot

pub mod records;
pub mod report;
pub mod snapshot;

pub use records::{TankConfigRecord, TankRecord};
pub use report::{FleetReport, TankCard};
pub use snapshot::{encode_config, parse_snapshot};

/// Schema-related errors
#[derive(Debug, Clone, PartialEq, thiserror_no_std::Error)]
pub enum SchemaError {
    /// Document is not valid JSON or doesn't match the record layout
    #[error("Failed to parse live feed: {0}")]
    Parse(String),

    /// More tanks than a snapshot can hold
    #[error("Too many tanks in live feed: {0}")]
    TooManyTanks(usize),

    /// Tank id cannot be stored
    #[error("Invalid tank id: {0}")]
    InvalidTankId(String),

    /// Report or record could not be written as JSON
    #[error("Failed to serialize: {0}")]
    Serialization(String),
}
