//! Property-test generators for calibrations and readings
//!
//! Calibrations are built the way they come out of the field: three points
//! with increasing raw signal and non-decreasing measured height, heights
//! inside the tank, dimensions in the range of real storage tanks.

use proptest::prelude::*;

use tankguard_core::{CalibrationParameters, CalibrationPoint, TankReading};

/// Well-ordered calibration: strictly increasing raw, non-decreasing height
pub fn ordered_calibration() -> impl Strategy<Value = CalibrationParameters> {
    (
        200.0f64..3000.0,   // diameter
        500.0f64..4000.0,   // max height
        0.0f64..1000.0,     // p1 raw
        1.0f64..1000.0,     // raw gap 1→2
        1.0f64..1000.0,     // raw gap 2→3
        0.0f64..1.0,        // height fractions, sorted below
        0.0f64..1.0,
        0.0f64..1.0,
    )
        .prop_map(|(diameter, max_h, r1, g1, g2, f1, f2, f3)| {
            let mut fractions = [f1, f2, f3];
            fractions.sort_by(|a, b| a.total_cmp(b));
            CalibrationParameters::new(
                diameter,
                max_h,
                [
                    CalibrationPoint::new(r1, fractions[0] * max_h),
                    CalibrationPoint::new(r1 + g1, fractions[1] * max_h),
                    CalibrationPoint::new(r1 + g1 + g2, fractions[2] * max_h),
                ],
            )
        })
}

/// Any finite calibration, including unordered and degenerate point sets
pub fn arbitrary_calibration() -> impl Strategy<Value = CalibrationParameters> {
    let point = (-2000.0f64..2000.0, -5000.0f64..5000.0)
        .prop_map(|(raw, h)| CalibrationPoint::new(raw, h));
    (1.0f64..5000.0, 1.0f64..5000.0, point.clone(), point.clone(), point)
        .prop_map(|(d, h, p1, p2, p3)| CalibrationParameters::new(d, h, [p1, p2, p3]))
}

/// Raw signals across and well beyond a typical calibrated span
pub fn raw_signal() -> impl Strategy<Value = f64> {
    -5000.0f64..10000.0
}

/// Reading that may or may not be configured
pub fn tank_reading() -> impl Strategy<Value = TankReading> {
    (raw_signal(), ordered_calibration(), 0u8..3).prop_map(|(raw, cal, kind)| match kind {
        0 => TankReading::new(raw, cal),
        1 => TankReading::new(raw, cal.with_configured(false)),
        _ => TankReading::uncalibrated(raw),
    })
}
