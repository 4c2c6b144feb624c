//! Calibration Wizard Example
//!
//! Walks through the on-site calibration procedure: enter the tank
//! dimensions, then capture three points while the tank is filled.
//!
//! ## What You'll Learn
//!
//! - Driving [`CalibrationWizard`] step by step
//! - Handling operator mistakes (wrong order, bad input)
//! - Checking the finished record before saving it
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_calibration_wizard
//! ```

use tankguard_core::{convert, CalibrationError, CalibrationWizard};

fn main() -> Result<(), CalibrationError> {
    println!("TankGuard Calibration Wizard Example");
    println!("====================================\n");

    let mut wizard = CalibrationWizard::new();
    println!("Step: {}", wizard.step().name());

    // Operator tries to capture before entering dimensions
    if let Err(e) = wizard.capture(120.0, 0.0) {
        println!("  rejected: {e}");
    }

    // Typo: zero diameter
    if let Err(e) = wizard.set_dimensions(0.0, 2000.0) {
        println!("  rejected: {e}");
    }
    wizard.set_dimensions(1200.0, 2000.0)?;

    // The raw value is whatever the sensor shows when the operator confirms
    let live_feed = [(102.0, 0.0), (497.0, 1000.0), (905.0, 2000.0)];
    for (live_raw, measured) in live_feed {
        println!("Step: {} (sensor reads {live_raw})", wizard.step().name());
        wizard.capture(live_raw, measured)?;
    }

    // Operator remeasures the top point
    wizard.back();
    println!("Step: {} (recapture)", wizard.step().name());
    wizard.capture(903.0, 1995.0)?;

    let cal = wizard.finish()?;
    println!("\nFinished record: {cal:?}");

    let issues = cal.check();
    println!("Issues found: {}", issues.len());

    let r = convert(497.0, Some(&cal));
    println!("Sensor at 497 now reads {:.0} L ({:.1} %)", r.volume_litres, r.level_percent);
    Ok(())
}
