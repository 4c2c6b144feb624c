//! Constants for TankGuard Core
//!
//! This module provides centralized, documented constants used throughout
//! the calibration engine. Every magic number in the conversion path lives
//! here with its unit in the name.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Physics**: Unit conversions and calibration geometry
//! - **Display**: Rounding applied to volumes shown to operators
//! - **Buffers**: Fixed capacities for no_std containers
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units
//! 3. Group related constants together

/// Unit conversions and calibration geometry.
pub mod physics;

/// Rounding thresholds for operator-facing volumes.
pub mod display;

/// Fixed capacities for fleet snapshots and diagnostics.
pub mod buffers;

// Re-export commonly used constants for convenience
pub use physics::{
    MM3_PER_LITRE, CALIBRATION_POINT_COUNT, DEGENERATE_SEGMENT_WIDTH, LEVEL_PERCENT_FULL,
};

pub use display::{VOLUME_STEP_LITRES, VOLUME_NOISE_FLOOR_LITRES};

pub use buffers::{MAX_TANKS, TANK_ID_CAPACITY, MAX_CALIBRATION_ISSUES};
