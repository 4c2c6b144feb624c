//! Basic Conversion Example
//!
//! Converts raw sensor readings from one calibrated tank into height,
//! volume and fill level, the figures shown on a tank card.
//!
//! ## What You'll Learn
//!
//! - Describing a tank with three calibration points
//! - Converting raw signals with the default piecewise policy
//! - How out-of-range and uncalibrated readings behave
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_conversion
//! ```

use tankguard_core::{
    convert, CalibrationParameters, CalibrationPoint, LevelConverter, RegressionConverter,
};

fn main() {
    println!("TankGuard Basic Conversion Example");
    println!("==================================\n");

    // 1.2 m diameter, 2 m tall. The sensor reads 100 when empty,
    // 500 at 1 m of fluid and 900 when full.
    let cal = CalibrationParameters::new(
        1200.0,
        2000.0,
        [
            CalibrationPoint::new(100.0, 0.0),
            CalibrationPoint::new(500.0, 1000.0),
            CalibrationPoint::new(900.0, 2000.0),
        ],
    );

    println!("Tank: {} mm diameter, {} mm tall", cal.diameter_mm, cal.max_height_mm);
    println!("Capacity: {:.1} L\n", cal.capacity_litres());

    let issues = cal.check();
    if issues.is_empty() {
        println!("Calibration record looks sound\n");
    } else {
        for issue in &issues {
            println!("Calibration issue: {issue:?}");
        }
    }

    println!("{:>8} {:>10} {:>10} {:>8}", "raw", "height mm", "volume L", "level %");
    for raw in [50.0, 100.0, 104.0, 300.0, 500.0, 520.0, 900.0, 1200.0] {
        let r = convert(raw, Some(&cal));
        println!(
            "{:>8.0} {:>10.1} {:>10.0} {:>8.1}",
            raw, r.height_mm, r.volume_litres, r.level_percent
        );
    }

    // Readings below the empty point clamp to 0; above full clamp to max height.
    // Near-empty tanks (under 5 L) read as exactly 0.

    println!("\nUncalibrated tank:");
    let r = convert(500.0, None);
    println!("  {r:?}");

    println!("\nRegression policy on the same tank:");
    let regression = RegressionConverter::new();
    for raw in [300.0, 500.0, 700.0] {
        let r = regression.convert(raw, Some(&cal));
        println!("  raw {raw:>5.0}: {:.1} mm, {:.0} L", r.height_mm, r.volume_litres);
    }
}
