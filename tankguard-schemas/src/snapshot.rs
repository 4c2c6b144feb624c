//! Live feed parsing
//!
//! The feed delivers the whole `Tanks` node on every change. It is parsed
//! into a fresh [`FleetSnapshot`]; nothing from a previous delivery is kept.

use std::collections::BTreeMap;

use serde_json::Value;

use tankguard_core::{
    constants::MAX_TANKS, CalibrationError, CalibrationParameters, FleetSnapshot,
};

use crate::{
    records::{TankConfigRecord, TankRecord},
    SchemaError,
};

/// Parse a `Tanks` document into a snapshot
///
/// A `null` document (no tank has ever reported) gives an empty fleet.
/// Each tank node is decoded on its own: a node that doesn't match the
/// record layout, or whose id is too long, is logged and skipped so the rest
/// of the fleet still renders. Configured records with suspicious
/// calibrations are accepted and logged.
pub fn parse_snapshot(json: &str) -> Result<FleetSnapshot<MAX_TANKS>, SchemaError> {
    let nodes: Option<BTreeMap<String, Value>> =
        serde_json::from_str(json).map_err(|e| SchemaError::Parse(e.to_string()))?;
    let nodes = nodes.unwrap_or_default();

    if nodes.len() > MAX_TANKS {
        return Err(SchemaError::TooManyTanks(nodes.len()));
    }

    let mut fleet = FleetSnapshot::new();
    for (id, node) in nodes.iter() {
        let record: TankRecord = match serde_json::from_value(node.clone()) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Tank {}: skipping unreadable record: {}", id, e);
                continue;
            }
        };

        let reading = record.to_reading();
        if let Some(cal) = reading.configured_calibration() {
            warn_on_issues(id, cal);
        }

        match fleet.insert(id, reading) {
            Ok(_) => {}
            Err(CalibrationError::FleetFull { .. }) => {
                return Err(SchemaError::TooManyTanks(nodes.len()));
            }
            Err(e) => log::warn!("Tank {}: skipping: {}", id, e),
        }
    }

    log::debug!(
        "Parsed live feed: {} of {} tanks, {} configured",
        fleet.len(),
        nodes.len(),
        fleet.configured_count()
    );
    Ok(fleet)
}

/// Encode a calibration as the `config` node the dashboard reads back
pub fn encode_config(calibration: &CalibrationParameters) -> Result<String, SchemaError> {
    serde_json::to_string(&TankConfigRecord::from(calibration))
        .map_err(|e| SchemaError::Serialization(e.to_string()))
}

fn warn_on_issues(id: &str, calibration: &CalibrationParameters) {
    for issue in calibration.check() {
        log::warn!("Tank {}: calibration issue {:?}", id, issue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_document_is_empty_fleet() {
        let fleet = parse_snapshot("null").unwrap();
        assert!(fleet.is_empty());
    }

    #[test]
    fn empty_object_is_empty_fleet() {
        assert!(parse_snapshot("{}").unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(parse_snapshot("{\"Tank1\": "), Err(SchemaError::Parse(_))));
        assert!(matches!(parse_snapshot("[1, 2]"), Err(SchemaError::Parse(_))));
    }

    #[test]
    fn unreadable_node_is_skipped() {
        let fleet = parse_snapshot(
            r#"{"Tank1": {"analog_raw": 12}, "Tank2": {"analog_raw": "high"}, "Tank3": 7}"#,
        )
        .unwrap();
        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet.get("Tank1").unwrap().raw_signal, 12.0);
        assert!(fleet.get("Tank2").is_none());
    }

    #[test]
    fn null_signal_keeps_tank() {
        let fleet = parse_snapshot(r#"{"Tank1": {"analog_raw": null}, "Tank2": {}}"#).unwrap();
        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet.get("Tank1").unwrap().raw_signal, 0.0);
        assert_eq!(fleet.get("Tank2").unwrap().raw_signal, 0.0);
    }

    #[test]
    fn unknown_fields_ignored() {
        let fleet = parse_snapshot(r#"{"Tank1": {"analog_raw": 12, "rssi": -71}}"#).unwrap();
        assert_eq!(fleet.get("Tank1").unwrap().raw_signal, 12.0);
    }

    #[test]
    fn overlong_id_is_skipped() {
        let fleet = parse_snapshot(
            r#"{"Tank1": {"analog_raw": 5}, "NorthYardDieselTank7": {"analog_raw": 1}}"#,
        )
        .unwrap();
        assert_eq!(fleet.len(), 1);
        assert!(fleet.get("Tank1").is_some());
    }

    #[test]
    fn too_many_tanks_rejected() {
        let body: Vec<String> = (0..=MAX_TANKS)
            .map(|i| format!("\"Tank{i}\": {{\"analog_raw\": 0}}"))
            .collect();
        let json = format!("{{{}}}", body.join(","));
        assert_eq!(
            parse_snapshot(&json).unwrap_err(),
            SchemaError::TooManyTanks(MAX_TANKS + 1)
        );
    }
}
