//! Common fixtures for integration tests
//!
//! Provides:
//! - The reference tank used throughout the field documentation
//! - Fleet builders for mixed calibrated/uncalibrated sites
//! - Float assertion helpers

#![allow(dead_code)]

use tankguard_core::{
    CalibrationParameters, CalibrationPoint, FleetSnapshot, TankReading,
};

pub mod generators;

/// 1.2 m diameter, 2 m tall, linear sensor from raw 100 (empty) to 900 (full)
pub fn reference_tank() -> CalibrationParameters {
    CalibrationParameters::new(
        1200.0,
        2000.0,
        [
            CalibrationPoint::new(100.0, 0.0),
            CalibrationPoint::new(500.0, 1000.0),
            CalibrationPoint::new(900.0, 2000.0),
        ],
    )
}

/// Smaller tank with a sensor that gets steeper toward the top
pub fn bent_tank() -> CalibrationParameters {
    CalibrationParameters::new(
        800.0,
        1500.0,
        [
            CalibrationPoint::new(40.0, 50.0),
            CalibrationPoint::new(600.0, 700.0),
            CalibrationPoint::new(800.0, 1450.0),
        ],
    )
}

/// Typical four-tank site: two calibrated, one awaiting calibration, one never touched
pub fn mixed_site() -> FleetSnapshot {
    let mut fleet = FleetSnapshot::new();
    fleet
        .insert("Tank1", TankReading::new(500.0, reference_tank()))
        .expect("fleet has room");
    fleet
        .insert("Tank2", TankReading::new(700.0, bent_tank()))
        .expect("fleet has room");
    fleet
        .insert(
            "Tank3",
            TankReading::new(300.0, reference_tank().with_configured(false)),
        )
        .expect("fleet has room");
    fleet
        .insert("Tank4", TankReading::uncalibrated(812.0))
        .expect("fleet has room");
    fleet
}

/// Assert two floats agree within an absolute tolerance
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
