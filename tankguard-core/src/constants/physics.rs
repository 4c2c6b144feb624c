//! Physical Constants for TankGuard
//!
//! Unit conversions and calibration geometry used by the converters.
//! Tank dimensions and calibration heights are always millimetres;
//! volumes are always litres.

// ===== UNIT CONVERSIONS =====

/// Cubic millimetres per litre (mm³/L).
///
/// A litre is one cubic decimetre: (100 mm)³ = 1,000,000 mm³.
/// Dividing a cylinder volume computed in mm³ by this value yields litres.
pub const MM3_PER_LITRE: f64 = 1_000_000.0;

/// Level percentage of a completely full tank.
pub const LEVEL_PERCENT_FULL: f64 = 100.0;

// ===== CALIBRATION GEOMETRY =====

/// Number of (raw signal, height) points captured during calibration.
///
/// Three points give two interpolation segments: empty-to-middle and
/// middle-to-full. The middle point's raw value selects the segment.
pub const CALIBRATION_POINT_COUNT: usize = 3;

/// Substitute width for a zero-width calibration segment.
///
/// When two calibration points share a raw value the interpolation slope
/// would divide by zero. The denominator is replaced by this value so the
/// result stays finite. The number is meaningless physically; it only keeps
/// the display alive until the tank is recalibrated.
pub const DEGENERATE_SEGMENT_WIDTH: f64 = 1.0;
