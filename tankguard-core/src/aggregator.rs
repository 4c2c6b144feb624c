//! Fleet aggregation
//!
//! Folds every tank's reading into two dashboard figures: total volume and
//! system load. The two figures deliberately use different inputs:
//!
//! ```text
//! total volume  = round₅( Σ round₅(tank volume) )     rounded per tank, then again
//! system load   = Σ exact tank volume / Σ tank capacity × 100
//! ```
//!
//! Rounding each tank first keeps the total consistent with the per-tank
//! cards operators see next to it; the load percentage uses exact volumes so
//! small tanks don't vanish into the rounding step.
//!
//! Uncalibrated tanks are skipped entirely. They add nothing to the volume
//! and nothing to the capacity, so adding one doesn't dilute the load.

use crate::{
    converters::PiecewiseConverter,
    fleet::{FleetSnapshot, TankId, TankReading},
    traits::{ConversionResult, LevelConverter},
    volume::cylinder_volume_litres,
};

/// Fleet-wide dashboard figures
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetSummary {
    /// Sum of per-tank displayed volumes, rounded again (litres)
    pub total_volume_litres: f64,

    /// Exact volume over theoretical capacity of configured tanks (%)
    pub average_load_percent: f64,

    /// Number of tanks that contributed
    pub configured_tanks: usize,
}

impl FleetSummary {
    /// Summary of a fleet with no configured tanks
    pub const EMPTY: Self = Self {
        total_volume_litres: 0.0,
        average_load_percent: 0.0,
        configured_tanks: 0,
    };
}

/// Aggregates a fleet through one converter
///
/// Per-tank cards and fleet totals should come from the same aggregator so
/// they agree on policy and rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleetAggregator<C = PiecewiseConverter> {
    converter: C,
}

impl<C: LevelConverter> FleetAggregator<C> {
    /// Aggregator over a specific converter
    pub const fn new(converter: C) -> Self {
        Self { converter }
    }

    /// Converter used for every tank
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Summarize any collection of readings
    ///
    /// Never fails; an empty fleet gives [`FleetSummary::EMPTY`].
    pub fn aggregate<'a, I>(&self, readings: I) -> FleetSummary
    where
        I: IntoIterator<Item = &'a TankReading>,
    {
        let rounding = self.converter.rounding();

        let mut rounded_sum = 0.0;
        let mut exact_sum = 0.0;
        let mut capacity_sum = 0.0;
        let mut configured_tanks = 0;

        for reading in readings {
            let Some(cal) = reading.configured_calibration() else {
                continue;
            };

            let result = self.converter.convert(reading.raw_signal, Some(cal));
            rounded_sum += result.volume_litres;
            exact_sum += cylinder_volume_litres(cal.diameter_mm, result.height_mm).max(0.0);
            capacity_sum += cal.capacity_litres();
            configured_tanks += 1;
        }

        let average_load_percent = if capacity_sum > 0.0 {
            exact_sum / capacity_sum * 100.0
        } else {
            0.0
        };

        log_debug!(
            "Fleet: {} configured tanks, {} L rounded, {} L exact of {} L capacity",
            configured_tanks,
            rounded_sum,
            exact_sum,
            capacity_sum
        );

        FleetSummary {
            total_volume_litres: rounding.apply_total(rounded_sum),
            average_load_percent,
            configured_tanks,
        }
    }

    /// Summarize a snapshot
    pub fn aggregate_snapshot<const N: usize>(&self, snapshot: &FleetSnapshot<N>) -> FleetSummary {
        self.aggregate(snapshot.readings())
    }

    /// Per-tank readings in snapshot order, uncalibrated tanks included as empty
    pub fn tank_results<'a, const N: usize>(
        &'a self,
        snapshot: &'a FleetSnapshot<N>,
    ) -> impl Iterator<Item = (&'a TankId, ConversionResult)> + 'a {
        snapshot.iter().map(move |(id, reading)| {
            (id, self.converter.convert(reading.raw_signal, reading.calibration.as_ref()))
        })
    }
}

/// Summarize readings with the canonical piecewise policy and dashboard rounding
pub fn aggregate<'a, I>(readings: I) -> FleetSummary
where
    I: IntoIterator<Item = &'a TankReading>,
{
    FleetAggregator::new(PiecewiseConverter::new()).aggregate(readings)
}
