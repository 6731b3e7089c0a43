/// Rating-curve lookups derived from the storage table.
///
/// All three curves are piecewise linear over the survey samples and
/// extrapolate with the end-segment slope: a simulation step may land
/// slightly outside the calibration range and must still resolve.
/// `elevation_at` is the numeric inverse of `capacity_at`, keyed by the
/// same sample pairs (capacity is strictly monotonic by construction).
use super::table;
use crate::interpolate::piecewise_linear;

/// Storage capacity [MCM] at the given elevation [mdpl].
pub fn capacity_at(elevation: f64) -> f64 {
    piecewise_linear(&table::ELEVATION, &table::CAPACITY, elevation)
}

/// Elevation [mdpl] holding the given storage capacity [MCM].
pub fn elevation_at(capacity: f64) -> f64 {
    piecewise_linear(&table::CAPACITY, &table::ELEVATION, capacity)
}

/// Water surface area [km^2] at the given elevation [mdpl].
pub fn area_at(elevation: f64) -> f64 {
    piecewise_linear(&table::ELEVATION, &table::AREA, elevation)
}
