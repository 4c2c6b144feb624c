//! Dashboard report
//!
//! Everything an operator screen draws for one feed delivery: a card per
//! tank and the fleet totals, computed through a single converter so the
//! cards and the totals agree.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tankguard_core::{FleetAggregator, FleetSnapshot, FleetSummary, LevelConverter};

use crate::SchemaError;

/// One tank as shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankCard {
    /// Tank identifier
    pub id: String,
    /// Raw signal, shown for diagnostics
    pub raw_signal: f64,
    /// Displayed volume (litres)
    pub volume_litres: f64,
    /// Fill level (%)
    pub level_percent: f64,
    /// Whether the tank has a saved calibration
    pub configured: bool,
}

/// Cards plus fleet totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetReport {
    /// Cards ordered by tank id, `Tank2` before `Tank10`
    pub tanks: Vec<TankCard>,
    /// Fleet totals
    pub summary: FleetSummary,
}

impl FleetReport {
    /// Render a snapshot through one converter
    pub fn build<C: LevelConverter, const N: usize>(snapshot: &FleetSnapshot<N>, converter: C) -> Self {
        let aggregator = FleetAggregator::new(converter);

        let mut tanks: Vec<TankCard> = aggregator
            .tank_results(snapshot)
            .zip(snapshot.readings())
            .map(|((id, result), reading)| TankCard {
                id: id.as_str().to_string(),
                raw_signal: reading.raw_signal,
                volume_litres: result.volume_litres,
                level_percent: result.level_percent,
                configured: reading.is_configured(),
            })
            .collect();
        tanks.sort_by(|a, b| tank_order(&a.id, &b.id));

        Self {
            tanks,
            summary: aggregator.aggregate_snapshot(snapshot),
        }
    }

    /// Card for a tank
    pub fn card(&self, id: &str) -> Option<&TankCard> {
        self.tanks.iter().find(|c| c.id == id)
    }

    /// Serialize as JSON for the dashboard
    pub fn to_json(&self) -> Result<String, SchemaError> {
        serde_json::to_string(self).map_err(|e| SchemaError::Serialization(e.to_string()))
    }
}

/// Orders ids by text prefix, then by trailing number
fn tank_order(a: &str, b: &str) -> Ordering {
    let (a_prefix, a_num) = split_numeric_suffix(a);
    let (b_prefix, b_num) = split_numeric_suffix(b);
    a_prefix
        .cmp(b_prefix)
        .then(a_num.cmp(&b_num))
        .then_with(|| a.cmp(b))
}

fn split_numeric_suffix(id: &str) -> (&str, Option<u64>) {
    let digits_at = id.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let (prefix, digits) = id.split_at(digits_at);
    (prefix, digits.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_suffixes_sort_naturally() {
        let mut ids = vec!["Tank10", "Tank2", "Tank1", "Pump", "Tank"];
        ids.sort_by(|a, b| tank_order(a, b));
        assert_eq!(ids, ["Pump", "Tank", "Tank1", "Tank2", "Tank10"]);
    }

    #[test]
    fn leading_zeros_still_ordered() {
        assert_eq!(tank_order("Tank01", "Tank1"), Ordering::Less);
        assert_eq!(tank_order("Tank02", "Tank1"), Ordering::Greater);
    }
}
