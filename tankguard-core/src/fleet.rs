//! Fleet snapshots
//!
//! The live feed delivers the whole fleet at once: tank id to
//! `{raw signal, optional calibration}`. A [`FleetSnapshot`] holds one such
//! delivery in fixed memory. Inserting a tank that is already present
//! replaces its reading; the newest value always wins.

use core::fmt;

use heapless::{FnvIndexMap, String};

use crate::{
    calibration::CalibrationParameters,
    constants::{MAX_TANKS, TANK_ID_CAPACITY},
    errors::{CalibrationError, CalibrationResult},
};

/// Stable tank identifier, e.g. `Tank1`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TankId(String<TANK_ID_CAPACITY>);

impl TankId {
    /// Create an identifier, rejecting ids longer than [`TANK_ID_CAPACITY`]
    pub fn new(id: &str) -> CalibrationResult<Self> {
        let mut inner = String::new();
        inner.push_str(id).map_err(|_| CalibrationError::TankIdTooLong {
            len: id.len(),
            max: TANK_ID_CAPACITY,
        })?;
        Ok(Self(inner))
    }

    /// Identifier as a string slice
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TankId {
    type Error = CalibrationError;

    fn try_from(id: &str) -> CalibrationResult<Self> {
        Self::new(id)
    }
}

/// Latest raw signal for one tank plus its calibration, if any
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TankReading {
    /// Raw analog signal (unitless)
    pub raw_signal: f64,

    /// Calibration record; `None` means the tank was never calibrated
    pub calibration: Option<CalibrationParameters>,
}

impl TankReading {
    /// Reading for a calibrated (or partially calibrated) tank
    pub const fn new(raw_signal: f64, calibration: CalibrationParameters) -> Self {
        Self {
            raw_signal,
            calibration: Some(calibration),
        }
    }

    /// Reading for a tank without any calibration record
    pub const fn uncalibrated(raw_signal: f64) -> Self {
        Self {
            raw_signal,
            calibration: None,
        }
    }

    /// Calibration, but only when it is marked configured
    pub fn configured_calibration(&self) -> Option<&CalibrationParameters> {
        self.calibration.as_ref().filter(|cal| cal.is_configured)
    }

    /// Whether this tank takes part in conversion
    pub fn is_configured(&self) -> bool {
        self.configured_calibration().is_some()
    }
}

/// One delivery of the live feed, in fixed memory
///
/// `N` must be a power of two.
#[derive(Clone)]
pub struct FleetSnapshot<const N: usize = MAX_TANKS> {
    tanks: FnvIndexMap<TankId, TankReading, N>,
}

impl<const N: usize> FleetSnapshot<N> {
    /// Empty snapshot
    pub fn new() -> Self {
        Self {
            tanks: FnvIndexMap::new(),
        }
    }

    /// Insert or replace a tank's reading
    ///
    /// Returns the previous reading for that tank, if there was one.
    pub fn insert(&mut self, id: &str, reading: TankReading) -> CalibrationResult<Option<TankReading>> {
        let id = TankId::new(id)?;
        if let Some(slot) = self.tanks.get_mut(&id) {
            return Ok(Some(core::mem::replace(slot, reading)));
        }
        self.tanks
            .insert(id, reading)
            .map_err(|_| CalibrationError::FleetFull { capacity: N })
    }

    /// Replace only the raw signal of a known tank, keeping its calibration
    ///
    /// Returns `false` when the tank isn't in the snapshot.
    pub fn update_signal(&mut self, id: &str, raw_signal: f64) -> bool {
        let Ok(id) = TankId::new(id) else {
            return false;
        };
        match self.tanks.get_mut(&id) {
            Some(reading) => {
                reading.raw_signal = raw_signal;
                true
            }
            None => false,
        }
    }

    /// Reading for a tank
    pub fn get(&self, id: &str) -> Option<&TankReading> {
        let id = TankId::new(id).ok()?;
        self.tanks.get(&id)
    }

    /// Remove a tank from the snapshot
    pub fn remove(&mut self, id: &str) -> Option<TankReading> {
        let id = TankId::new(id).ok()?;
        self.tanks.remove(&id)
    }

    /// Number of tanks
    pub fn len(&self) -> usize {
        self.tanks.len()
    }

    /// Whether the snapshot holds no tanks
    pub fn is_empty(&self) -> bool {
        self.tanks.is_empty()
    }

    /// Number of tanks with a configured calibration
    pub fn configured_count(&self) -> usize {
        self.readings().filter(|r| r.is_configured()).count()
    }

    /// Tanks in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&TankId, &TankReading)> {
        self.tanks.iter()
    }

    /// Readings in insertion order
    pub fn readings(&self) -> impl Iterator<Item = &TankReading> {
        self.tanks.values()
    }
}

impl<const N: usize> Default for FleetSnapshot<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for FleetSnapshot<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.tanks.iter()).finish()
    }
}
