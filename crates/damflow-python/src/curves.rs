use pyo3::prelude::*;

use damflow_core::hcv;
use damflow_core::reservoir::curves as reservoir_curves;
use damflow_core::spillway;

curve_bindings!(
    /// Storage capacity [MCM] at the given elevation [mdpl].
    elevation_to_capacity,
    elevation_to_capacity_array,
    reservoir_curves::capacity_at
);

curve_bindings!(
    /// Elevation [mdpl] holding the given storage capacity [MCM].
    capacity_to_elevation,
    capacity_to_elevation_array,
    reservoir_curves::elevation_at
);

curve_bindings!(
    /// Water surface area [km^2] at the given elevation [mdpl].
    elevation_to_area,
    elevation_to_area_array,
    reservoir_curves::area_at
);

/// Discharge [m^3/s] through one hollow-cone valve.
///
/// Zero outside the rated opening/level rectangle.
#[pyfunction]
fn hcv_discharge(opening_percent: f64, reservoir_level: f64) -> f64 {
    hcv::discharge(opening_percent, reservoir_level)
}

/// Spillway overflow [m^3/s] at the given reservoir level [mdpl].
#[pyfunction]
fn spillway_discharge(reservoir_level: f64) -> f64 {
    spillway::discharge(reservoir_level)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "curves")?;
    m.add_function(wrap_pyfunction!(elevation_to_capacity, &m)?)?;
    m.add_function(wrap_pyfunction!(elevation_to_capacity_array, &m)?)?;
    m.add_function(wrap_pyfunction!(capacity_to_elevation, &m)?)?;
    m.add_function(wrap_pyfunction!(capacity_to_elevation_array, &m)?)?;
    m.add_function(wrap_pyfunction!(elevation_to_area, &m)?)?;
    m.add_function(wrap_pyfunction!(elevation_to_area_array, &m)?)?;
    m.add_function(wrap_pyfunction!(hcv_discharge, &m)?)?;
    m.add_function(wrap_pyfunction!(spillway_discharge, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
