//! Tank calibration records
//!
//! A calibration describes one tank's geometry and three
//! (raw signal, measured height) pairs captured at increasing fill levels.
//! Converters read it; nothing in the core writes it back.
//!
//! ## Ordering
//!
//! Points are *expected* to satisfy `p1.raw <= p2.raw <= p3.raw` with
//! non-decreasing heights. The piecewise converter picks its segment by
//! comparing the raw input against `p2.raw`, so a record that breaks the
//! ordering still converts, just into a non-monotonic mapping. Nothing here
//! rejects such records; [`CalibrationParameters::check`] reports them so an
//! admin tool can warn before saving.

use core::f64::consts::PI;

use heapless::Vec;

use crate::constants::{CALIBRATION_POINT_COUNT, MAX_CALIBRATION_ISSUES, MM3_PER_LITRE};

/// One captured (raw signal, measured height) pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationPoint {
    /// Raw analog signal at capture time (unitless)
    pub raw: f64,
    /// Fluid height measured by hand at capture time (mm)
    pub height_mm: f64,
}

impl CalibrationPoint {
    /// Create a calibration point
    pub const fn new(raw: f64, height_mm: f64) -> Self {
        Self { raw, height_mm }
    }
}

/// Calibration parameters for a single tank
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationParameters {
    /// Inner diameter of the (cylindrical) tank in mm
    pub diameter_mm: f64,

    /// Physical ceiling of the fluid column in mm
    pub max_height_mm: f64,

    /// Calibration points, lowest fill level first
    pub points: [CalibrationPoint; CALIBRATION_POINT_COUNT],

    /// Set once dimensions and all points have been captured and saved.
    /// Conversion only runs when this is true.
    pub is_configured: bool,
}

impl CalibrationParameters {
    /// Create a configured calibration
    pub const fn new(
        diameter_mm: f64,
        max_height_mm: f64,
        points: [CalibrationPoint; CALIBRATION_POINT_COUNT],
    ) -> Self {
        Self {
            diameter_mm,
            max_height_mm,
            points,
            is_configured: true,
        }
    }

    /// Same record with the configured flag replaced
    pub fn with_configured(mut self, is_configured: bool) -> Self {
        self.is_configured = is_configured;
        self
    }

    /// Segment used for raw signals at or below the middle point
    pub const fn lower_segment(&self) -> (CalibrationPoint, CalibrationPoint) {
        (self.points[0], self.points[1])
    }

    /// Segment used for raw signals above the middle point
    pub const fn upper_segment(&self) -> (CalibrationPoint, CalibrationPoint) {
        (self.points[1], self.points[2])
    }

    /// Cross-section area in mm²
    pub fn cross_section_mm2(&self) -> f64 {
        let radius = self.diameter_mm / 2.0;
        PI * radius * radius
    }

    /// Theoretical volume of a full tank in litres, unrounded
    pub fn capacity_litres(&self) -> f64 {
        self.cross_section_mm2() * self.max_height_mm / MM3_PER_LITRE
    }

    /// Report calibration problems without rejecting the record
    ///
    /// An empty result means the record is well-formed. Non-finite values
    /// short-circuit the check since nothing else can be judged.
    pub fn check(&self) -> Vec<CalibrationIssue, MAX_CALIBRATION_ISSUES> {
        // MAX_CALIBRATION_ISSUES covers the worst case, so pushes never overflow
        let mut issues = Vec::new();

        let all_finite = self.diameter_mm.is_finite()
            && self.max_height_mm.is_finite()
            && self.points.iter().all(|p| p.raw.is_finite() && p.height_mm.is_finite());
        if !all_finite {
            let _ = issues.push(CalibrationIssue::NonFiniteValue);
            return issues;
        }

        if self.diameter_mm <= 0.0 {
            let _ = issues.push(CalibrationIssue::NonPositiveDimension { field: "diameter" });
        }
        if self.max_height_mm <= 0.0 {
            let _ = issues.push(CalibrationIssue::NonPositiveDimension { field: "max_height" });
        }

        for (segment, (lo, hi)) in [self.lower_segment(), self.upper_segment()]
            .into_iter()
            .enumerate()
        {
            if hi.raw == lo.raw {
                let _ = issues.push(CalibrationIssue::ZeroWidthSegment { segment });
            } else if hi.raw < lo.raw {
                let _ = issues.push(CalibrationIssue::UnorderedRawPoints { segment });
            }
            if hi.height_mm < lo.height_mm {
                let _ = issues.push(CalibrationIssue::DecreasingHeights { segment });
            }
        }

        for (point, p) in self.points.iter().enumerate() {
            if p.height_mm > self.max_height_mm {
                let _ = issues.push(CalibrationIssue::PointAboveCeiling { point });
            }
        }

        issues
    }
}

/// Non-fatal calibration diagnostics
///
/// Segments and points are zero-indexed: segment 0 joins points 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CalibrationIssue {
    /// Some dimension or point is NaN or infinite
    NonFiniteValue,
    /// Diameter or maximum height is zero or negative
    NonPositiveDimension {
        /// `diameter` or `max_height`
        field: &'static str,
    },
    /// Both ends of a segment share a raw value; slope falls back to a unit width
    ZeroWidthSegment {
        /// Segment index
        segment: usize,
    },
    /// Raw signal decreases along a segment
    UnorderedRawPoints {
        /// Segment index
        segment: usize,
    },
    /// Measured height decreases along a segment
    DecreasingHeights {
        /// Segment index
        segment: usize,
    },
    /// A measured height lies above the tank ceiling and will be clamped
    PointAboveCeiling {
        /// Point index
        point: usize,
    },
}
