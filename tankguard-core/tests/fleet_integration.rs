//! Integration tests for fleet aggregation
//!
//! Covers the full path a dashboard takes: calibrate tanks through the
//! wizard, receive a snapshot, render per-tank cards and fleet totals.

mod common;

use std::collections::BTreeMap;

use proptest::prelude::*;

use tankguard_core::{
    aggregate, convert, AnyConverter, CalibrationWizard, ConversionPolicy, ConversionResult,
    FleetAggregator, FleetSnapshot, FleetSummary, LevelConverter, PiecewiseConverter,
    TankReading, VolumeRounding,
};

use common::{assert_close, bent_tank, generators::tank_reading, mixed_site, reference_tank};

#[test]
fn reference_tank_scenarios() {
    let cal = reference_tank();

    let half = convert(500.0, Some(&cal));
    assert_eq!(half.height_mm, 1000.0);
    assert_eq!(half.volume_litres, 1130.0);
    assert_eq!(half.level_percent, 50.0);

    let empty = convert(100.0, Some(&cal));
    assert_eq!(empty, ConversionResult::EMPTY);
}

#[test]
fn degenerate_calibration_is_finite() {
    let mut cal = reference_tank();
    cal.points[0].raw = 300.0;
    cal.points[1].raw = 300.0;

    for raw in [0.0, 299.9, 300.0, 300.1, 2000.0] {
        let r = convert(raw, Some(&cal));
        assert!(r.height_mm.is_finite() && r.volume_litres.is_finite());
        assert!(r.level_percent.is_finite());
    }
}

#[test]
fn empty_fleet_summary() {
    let fleet = FleetSnapshot::<4>::new();
    let aggregator: FleetAggregator = FleetAggregator::default();
    assert_eq!(aggregator.aggregate_snapshot(&fleet), FleetSummary::EMPTY);
}

#[test]
fn mixed_site_summary() {
    let fleet = mixed_site();
    let summary = FleetAggregator::new(PiecewiseConverter::new()).aggregate_snapshot(&fleet);

    // Tank1: 1130.97 L → 1130. Tank2 (bent, raw 700 on the upper segment):
    // 700 + 100 * 750 / 200 = 1075 mm, π * 400² * 1075 / 1e6 = 540.35 L → 540.
    assert_eq!(summary.configured_tanks, 2);
    assert_eq!(summary.total_volume_litres, 1670.0);

    let exact = 1130.973_355_292_325_6 + 540.353_936_417_444_5;
    let capacity = 2261.946_710_584_651 + 753.982_236_861_550_3;
    assert_close(summary.average_load_percent, exact / capacity * 100.0, 1e-9);
}

#[test]
fn cards_and_totals_agree() {
    let fleet = mixed_site();
    let aggregator = FleetAggregator::new(AnyConverter::default());

    let card_total: f64 = aggregator
        .tank_results(&fleet)
        .map(|(_, r)| r.volume_litres)
        .sum();
    let summary = aggregator.aggregate_snapshot(&fleet);

    // Card volumes are multiples of 5, so the second rounding pass is a no-op
    assert_eq!(card_total, summary.total_volume_litres);
}

#[test]
fn any_collection_of_readings_aggregates() {
    let fleet = mixed_site();
    let by_id: BTreeMap<&str, TankReading> = fleet
        .iter()
        .map(|(id, reading)| (id.as_str(), *reading))
        .collect();
    let as_vec: Vec<TankReading> = fleet.readings().copied().collect();

    let expected = aggregate(fleet.readings());
    assert_eq!(aggregate(by_id.values()), expected);
    assert_eq!(aggregate(&as_vec), expected);
    assert_eq!(expected.total_volume_litres, 1670.0);
}

#[test]
fn uncalibrated_tank_does_not_dilute_average() {
    let configured = [TankReading::new(500.0, reference_tank())];
    let with_extra = [
        TankReading::new(500.0, reference_tank()),
        TankReading::uncalibrated(999.0),
    ];
    let a = aggregate(&configured);
    let b = aggregate(&with_extra);
    assert_close(a.average_load_percent, 50.0, 1e-9);
    assert_eq!(a, b);
}

#[test]
fn wizard_calibration_feeds_aggregation() {
    let mut wizard = CalibrationWizard::new();
    wizard.set_dimensions(1200.0, 2000.0).unwrap();
    for (raw, height) in [(100.0, 0.0), (500.0, 1000.0), (900.0, 2000.0)] {
        wizard.capture(raw, height).unwrap();
    }
    let cal = wizard.finish().unwrap();
    assert_eq!(cal, reference_tank());

    let mut fleet = FleetSnapshot::<4>::new();
    fleet.insert("Tank1", TankReading::new(500.0, cal)).unwrap();
    let summary = FleetAggregator::new(PiecewiseConverter::new()).aggregate_snapshot(&fleet);
    assert_eq!(summary.total_volume_litres, 1130.0);

    // Live feed moves on; calibration stays
    fleet.update_signal("Tank1", 900.0);
    let summary = FleetAggregator::new(PiecewiseConverter::new()).aggregate_snapshot(&fleet);
    assert_eq!(summary.total_volume_litres, 2260.0);
    assert_close(summary.average_load_percent, 100.0, 1e-9);
}

#[test]
fn policies_diverge_near_bent_points() {
    let cal = bent_tank();
    let piecewise = AnyConverter::from(ConversionPolicy::Piecewise);
    let regression = AnyConverter::from(ConversionPolicy::Regression);

    let at_p2 = cal.points[1].raw;
    assert_eq!(piecewise.height_mm(at_p2, &cal), 700.0);
    assert!((regression.height_mm(at_p2, &cal) - 700.0).abs() > 50.0);
}

#[test]
fn exact_rounding_for_analytics() {
    let aggregator = FleetAggregator::new(AnyConverter::from_policy(
        ConversionPolicy::Piecewise,
        VolumeRounding::EXACT,
    ));
    let summary = aggregator.aggregate(&[TankReading::new(520.0, reference_tank())]);
    // 1050 mm of fluid, unrounded
    assert_close(summary.total_volume_litres, 1187.522_023_056_942, 1e-9);
}

proptest! {
    #[test]
    fn summary_bounds(readings in proptest::collection::vec(tank_reading(), 0..12)) {
        let summary = aggregate(&readings);
        prop_assert!(summary.total_volume_litres >= 0.0);
        prop_assert_eq!(summary.total_volume_litres % 5.0, 0.0);
        prop_assert!(summary.average_load_percent >= 0.0);
        prop_assert!(summary.average_load_percent <= 100.0 + 1e-9);
        prop_assert_eq!(
            summary.configured_tanks,
            readings.iter().filter(|r| r.is_configured()).count()
        );
    }

    #[test]
    fn unconfigured_tanks_never_change_summary(
        readings in proptest::collection::vec(tank_reading(), 0..8),
        extra_raw in -1000.0f64..5000.0,
    ) {
        let mut extended = readings.clone();
        extended.push(TankReading::uncalibrated(extra_raw));
        extended.push(TankReading::new(extra_raw, reference_tank().with_configured(false)));
        prop_assert_eq!(aggregate(&readings), aggregate(&extended));
    }
}
