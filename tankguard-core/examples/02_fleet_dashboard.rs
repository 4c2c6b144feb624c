//! Fleet Dashboard Example
//!
//! Builds one live-feed snapshot for a small site and renders what the
//! operator dashboard shows: a card per tank and the fleet totals.
//!
//! ## What You'll Learn
//!
//! - Holding a fleet in a fixed-size [`FleetSnapshot`]
//! - Rendering per-tank cards and totals from one aggregator
//! - Why uncalibrated tanks don't drag the system load down
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_fleet_dashboard
//! ```

use tankguard_core::{
    AnyConverter, CalibrationParameters, CalibrationPoint, ConversionPolicy, FleetAggregator,
    FleetSnapshot, TankReading, VolumeRounding,
};

fn main() {
    println!("TankGuard Fleet Dashboard Example");
    println!("=================================\n");

    let big = CalibrationParameters::new(
        1200.0,
        2000.0,
        [
            CalibrationPoint::new(100.0, 0.0),
            CalibrationPoint::new(500.0, 1000.0),
            CalibrationPoint::new(900.0, 2000.0),
        ],
    );
    let small = CalibrationParameters::new(
        800.0,
        1500.0,
        [
            CalibrationPoint::new(40.0, 50.0),
            CalibrationPoint::new(600.0, 700.0),
            CalibrationPoint::new(800.0, 1450.0),
        ],
    );

    let mut fleet: FleetSnapshot = FleetSnapshot::new();
    let tanks = [
        ("Tank1", TankReading::new(520.0, big)),
        ("Tank2", TankReading::new(700.0, small)),
        ("Tank3", TankReading::new(300.0, big.with_configured(false))),
        ("Tank4", TankReading::uncalibrated(812.0)),
    ];
    for (id, reading) in tanks {
        if let Err(e) = fleet.insert(id, reading) {
            eprintln!("Skipping {id}: {e}");
        }
    }

    let aggregator = FleetAggregator::new(AnyConverter::from(ConversionPolicy::Piecewise));

    println!("{:<8} {:>8} {:>10} {:>8}", "tank", "raw", "volume L", "level %");
    for (id, result) in aggregator.tank_results(&fleet) {
        let raw = fleet.get(id.as_str()).map(|r| r.raw_signal).unwrap_or_default();
        println!(
            "{:<8} {:>8.0} {:>10.0} {:>8.1}",
            id.as_str(),
            raw,
            result.volume_litres,
            result.level_percent
        );
    }

    let summary = aggregator.aggregate_snapshot(&fleet);
    println!("\nConfigured tanks: {} of {}", summary.configured_tanks, fleet.len());
    println!("Total volume:     {:.0} L", summary.total_volume_litres);
    println!("System load:      {:.1} %", summary.average_load_percent);

    // Analytics consumers want the unrounded total
    let exact = FleetAggregator::new(AnyConverter::from_policy(
        ConversionPolicy::Piecewise,
        VolumeRounding::EXACT,
    ))
    .aggregate_snapshot(&fleet);
    println!("Exact total:      {:.2} L", exact.total_volume_litres);

    // Next feed update: only the signals change
    fleet.update_signal("Tank1", 900.0);
    let summary = aggregator.aggregate_snapshot(&fleet);
    println!("\nAfter refill of Tank1:");
    println!("Total volume:     {:.0} L", summary.total_volume_litres);
    println!("System load:      {:.1} %", summary.average_load_percent);
}
