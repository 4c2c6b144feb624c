//! Volume geometry and display rounding
//!
//! Tanks are modelled as upright cylinders, so volume is linear in fluid
//! height. Rounding is a display concern kept separate from the geometry:
//! aggregation needs both the exact and the rounded figure for the same tank.
//!
//! ## Rounding policy
//!
//! ```text
//! litres < noise floor   → 0
//! otherwise              → nearest multiple of step (half rounds up)
//! ```
//!
//! The dashboard uses a 5 L step and a 5 L floor. Fleet totals are rounded
//! a second time with the step only; see [`VolumeRounding::apply_total`].

use core::f64::consts::PI;

use crate::constants::{MM3_PER_LITRE, VOLUME_NOISE_FLOOR_LITRES, VOLUME_STEP_LITRES};

/// Volume of a cylinder in litres from diameter and height in mm
///
/// No clamping: a negative height gives a negative volume.
#[inline]
pub fn cylinder_volume_litres(diameter_mm: f64, height_mm: f64) -> f64 {
    let radius = diameter_mm / 2.0;
    PI * radius * radius * height_mm / MM3_PER_LITRE
}

/// Round to the nearest integer, halves toward positive infinity
///
/// `2.5 → 3`, `-2.5 → -2`. This is the rounding the operator dashboards
/// have always shown, so it is kept over `round()`'s half-away-from-zero.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    libm::floor(value + 0.5)
}

/// Quantization applied to volumes before they are displayed
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeRounding {
    /// Volumes are reported as multiples of this step (litres).
    /// Zero or negative disables quantization.
    pub step_litres: f64,

    /// Per-tank volumes below this read as exactly zero (litres)
    pub noise_floor_litres: f64,
}

impl VolumeRounding {
    /// Operator dashboard: 5 L steps, 5 L noise floor
    pub const DASHBOARD: Self = Self {
        step_litres: VOLUME_STEP_LITRES,
        noise_floor_litres: VOLUME_NOISE_FLOOR_LITRES,
    };

    /// No quantization at all, for analytics consumers
    pub const EXACT: Self = Self {
        step_litres: 0.0,
        noise_floor_litres: 0.0,
    };

    /// Create a custom rounding policy
    pub const fn new(step_litres: f64, noise_floor_litres: f64) -> Self {
        Self {
            step_litres,
            noise_floor_litres,
        }
    }

    /// Round one tank's volume for display
    pub fn apply(&self, litres: f64) -> f64 {
        if litres < self.noise_floor_litres {
            0.0
        } else {
            self.quantize(litres)
        }
    }

    /// Round a fleet total that was summed from already-rounded tanks
    ///
    /// No noise floor: a fleet of several nearly-empty tanks still sums to
    /// a real number.
    pub fn apply_total(&self, litres: f64) -> f64 {
        self.quantize(litres)
    }

    fn quantize(&self, litres: f64) -> f64 {
        if self.step_litres <= 0.0 {
            return litres;
        }
        round_half_up(litres / self.step_litres) * self.step_litres
    }
}

impl Default for VolumeRounding {
    fn default() -> Self {
        Self::DASHBOARD
    }
}
