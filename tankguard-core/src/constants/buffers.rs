//! Buffer Sizes and Memory Constraints
//!
//! Fixed capacities for the `heapless` containers used by the core. All of
//! them must stay powers of two where they size an index map.

/// Maximum number of tanks in one fleet snapshot.
///
/// Field installations monitor four tanks per site; sixteen leaves room for
/// larger sites without growing the snapshot past a few hundred bytes.
/// Must be a power of two (`heapless::FnvIndexMap` requirement).
pub const MAX_TANKS: usize = 16;

/// Maximum length of a tank identifier in bytes.
///
/// Identifiers look like `Tank1`..`Tank4` in the realtime store.
pub const TANK_ID_CAPACITY: usize = 16;

/// Maximum number of diagnostics reported by a calibration check.
///
/// Worst case is two dimension issues, two per segment and one per point (9).
pub const MAX_CALIBRATION_ISSUES: usize = 12;
