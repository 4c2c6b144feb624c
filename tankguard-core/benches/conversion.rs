//! Conversion and aggregation throughput
//!
//! A dashboard recomputes every card and the fleet totals on each feed
//! update, so both paths should stay well under a millisecond for a full
//! site.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tankguard_core::{
    AnyConverter, CalibrationParameters, CalibrationPoint, ConversionPolicy, FleetAggregator,
    FleetSnapshot, LevelConverter, TankReading,
};

fn reference_tank() -> CalibrationParameters {
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

fn bench_single_conversion(c: &mut Criterion) {
    let cal = reference_tank();
    let mut group = c.benchmark_group("convert");

    for policy in [ConversionPolicy::Piecewise, ConversionPolicy::Regression] {
        let converter = AnyConverter::from(policy);
        group.bench_function(BenchmarkId::from_parameter(format!("{policy:?}")), |b| {
            b.iter(|| converter.convert(black_box(512.0), black_box(Some(&cal))))
        });
    }
    group.finish();
}

fn bench_fleet(c: &mut Criterion) {
    let aggregator = FleetAggregator::new(AnyConverter::default());
    let mut group = c.benchmark_group("aggregate");

    for size in [1usize, 4, 16] {
        let mut fleet: FleetSnapshot<16> = FleetSnapshot::new();
        for i in 0..size {
            let id = format!("Tank{}", i + 1);
            let reading = if i % 4 == 3 {
                TankReading::uncalibrated(300.0)
            } else {
                TankReading::new(100.0 + 50.0 * i as f64, reference_tank())
            };
            fleet.insert(&id, reading).expect("bench fleet fits");
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), &fleet, |b, fleet| {
            b.iter(|| aggregator.aggregate_snapshot(black_box(fleet)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_conversion, bench_fleet);
criterion_main!(benches);
