//! Database records
//!
//! Flat mirrors of the JSON the calibration tool writes. Every field has a
//! default so half-written records (a wizard abandoned midway, a tank whose
//! sensor has never reported) still parse.

use serde::{Deserialize, Deserializer, Serialize};
use tankguard_core::{CalibrationParameters, CalibrationPoint, TankReading};

/// One tank node: live signal plus optional calibration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TankRecord {
    /// Latest raw analog signal; absent or `null` reads as 0
    #[serde(default, deserialize_with = "null_as_zero")]
    pub analog_raw: f64,

    /// Calibration record, absent until a tank is first calibrated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<TankConfigRecord>,
}

impl TankRecord {
    /// Core reading for this node
    pub fn to_reading(&self) -> TankReading {
        match &self.config {
            Some(config) => TankReading::new(self.analog_raw, config.to_calibration()),
            None => TankReading::uncalibrated(self.analog_raw),
        }
    }
}

impl From<&TankReading> for TankRecord {
    fn from(reading: &TankReading) -> Self {
        Self {
            analog_raw: reading.raw_signal,
            config: reading.calibration.as_ref().map(TankConfigRecord::from),
        }
    }
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// The `config` node under a tank
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TankConfigRecord {
    /// Inner diameter (mm)
    pub diameter: f64,
    /// Maximum fluid height (mm)
    pub max_height: f64,
    /// Raw signal at the first calibration point
    pub p1_raw: f64,
    /// Measured height at the first calibration point (mm)
    pub p1_h: f64,
    /// Raw signal at the second calibration point
    pub p2_raw: f64,
    /// Measured height at the second calibration point (mm)
    pub p2_h: f64,
    /// Raw signal at the third calibration point
    pub p3_raw: f64,
    /// Measured height at the third calibration point (mm)
    pub p3_h: f64,
    /// Only true once the wizard has saved every value
    #[serde(rename = "isConfigured")]
    pub is_configured: bool,
}

impl TankConfigRecord {
    /// Calibration parameters carried by this record
    pub fn to_calibration(&self) -> CalibrationParameters {
        CalibrationParameters::new(
            self.diameter,
            self.max_height,
            [
                CalibrationPoint::new(self.p1_raw, self.p1_h),
                CalibrationPoint::new(self.p2_raw, self.p2_h),
                CalibrationPoint::new(self.p3_raw, self.p3_h),
            ],
        )
        .with_configured(self.is_configured)
    }
}

impl From<&CalibrationParameters> for TankConfigRecord {
    fn from(cal: &CalibrationParameters) -> Self {
        let [p1, p2, p3] = cal.points;
        Self {
            diameter: cal.diameter_mm,
            max_height: cal.max_height_mm,
            p1_raw: p1.raw,
            p1_h: p1.height_mm,
            p2_raw: p2.raw,
            p2_h: p2.height_mm,
            p3_raw: p3.raw,
            p3_h: p3.height_mm,
            is_configured: cal.is_configured,
        }
    }
}

impl From<TankConfigRecord> for CalibrationParameters {
    fn from(record: TankConfigRecord) -> Self {
        record.to_calibration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        let record = TankConfigRecord {
            diameter: 1200.0,
            is_configured: true,
            ..Default::default()
        };
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["diameter"], 1200.0);
        assert_eq!(json["isConfigured"], true);
        assert!(json.get("is_configured").is_none());
    }

    #[test]
    fn missing_flag_means_unconfigured() {
        let record: TankConfigRecord =
            serde_json::from_str(r#"{"diameter": 900, "max_height": 1500}"#).unwrap();
        assert!(!record.is_configured);
        assert!(!record.to_calibration().is_configured);
        assert_eq!(record.p2_raw, 0.0);
    }

    #[test]
    fn node_without_config_is_uncalibrated() {
        let record: TankRecord = serde_json::from_str(r#"{"analog_raw": 87}"#).unwrap();
        let reading = record.to_reading();
        assert_eq!(reading.raw_signal, 87.0);
        assert!(reading.calibration.is_none());
    }

    #[test]
    fn null_signal_reads_as_zero() {
        let record: TankRecord = serde_json::from_str(r#"{"analog_raw": null}"#).unwrap();
        assert_eq!(record.analog_raw, 0.0);
        assert!(serde_json::from_str::<TankRecord>(r#"{"analog_raw": "high"}"#).is_err());
    }

    #[test]
    fn calibration_converts_both_ways() {
        let cal = CalibrationParameters::new(
            1200.0,
            2000.0,
            [
                CalibrationPoint::new(100.0, 0.0),
                CalibrationPoint::new(500.0, 1000.0),
                CalibrationPoint::new(900.0, 2000.0),
            ],
        );
        let record = TankConfigRecord::from(&cal);
        assert_eq!(record.p2_raw, 500.0);
        assert_eq!(record.p3_h, 2000.0);
        assert_eq!(CalibrationParameters::from(record), cal);
    }
}
