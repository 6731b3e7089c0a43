use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::convert::checked_slice;
use damflow_core::discharge::{self, DischargeBreakdown};
use damflow_core::inputs::Readings;
use damflow_core::turbine::N_UNITS;

/// Instantaneous-discharge breakdown with typed attributes.
#[pyclass(frozen)]
pub struct DischargeResult {
    /// Hydraulic head [m].
    #[pyo3(get)]
    pub head: f64,
    /// Discharge per turbine unit [m^3/s], 6-element array.
    #[pyo3(get)]
    pub unit_discharges: Py<PyArray1<f64>>,
    /// Aggregate turbine discharge used downstream [m^3/s].
    #[pyo3(get)]
    pub turbine: f64,
    /// True when the 15 MW rule demands a manually read aggregate.
    #[pyo3(get)]
    pub requires_manual: bool,
    /// True when the aggregate came from a manual reading.
    #[pyo3(get)]
    pub turbine_overridden: bool,
    /// Spillway overflow [m^3/s].
    #[pyo3(get)]
    pub spillway: f64,
    /// Left valve discharge [m^3/s].
    #[pyo3(get)]
    pub hcv_left: f64,
    /// Right valve discharge [m^3/s].
    #[pyo3(get)]
    pub hcv_right: f64,
    /// Combined valve discharge [m^3/s].
    #[pyo3(get)]
    pub hcv_total: f64,
    /// Grand total discharge [m^3/s].
    #[pyo3(get)]
    pub total: f64,
    /// Total electrical load [MW].
    #[pyo3(get)]
    pub total_load: f64,
    /// Number of active units.
    #[pyo3(get)]
    pub active_unit_count: usize,
    /// 1-based numbers of the active units, as reported in dispatch messages.
    #[pyo3(get)]
    pub active_unit_numbers: Vec<usize>,
}

impl DischargeResult {
    fn from_breakdown(py: Python<'_>, b: DischargeBreakdown) -> Self {
        Self {
            head: b.head,
            unit_discharges: PyArray1::from_slice(py, &b.unit_discharges).unbind(),
            turbine: b.turbine,
            requires_manual: b.requires_manual,
            turbine_overridden: b.turbine_overridden,
            spillway: b.spillway,
            hcv_left: b.hcv_left,
            hcv_right: b.hcv_right,
            hcv_total: b.hcv_total,
            total: b.total,
            total_load: b.total_load,
            active_unit_count: b.active_unit_count(),
            active_unit_numbers: b.active_units.iter().map(|i| i + 1).collect(),
        }
    }
}

/// Compute the full discharge breakdown from operator readings.
///
/// `loads` is a 6-element array of unit loads [MW]; blank form fields
/// should be passed as 0.0. The optional scalars may be omitted or None
/// and resolve to zero inside the engine.
#[pyfunction]
#[pyo3(signature = (
    loads,
    reservoir_level=None,
    tailrace_level=None,
    hcv_left_opening=None,
    hcv_right_opening=None,
    manual_turbine_discharge=None
))]
fn compute_discharge<'py>(
    py: Python<'py>,
    loads: PyReadonlyArray1<'py, f64>,
    reservoir_level: Option<f64>,
    tailrace_level: Option<f64>,
    hcv_left_opening: Option<f64>,
    hcv_right_opening: Option<f64>,
    manual_turbine_discharge: Option<f64>,
) -> PyResult<DischargeResult> {
    let load_slice = checked_slice(&loads, N_UNITS, "loads")?;
    let mut unit_loads = [None; N_UNITS];
    for (dst, &load) in unit_loads.iter_mut().zip(load_slice) {
        *dst = Some(load);
    }

    let readings = Readings {
        reservoir_level,
        tailrace_level,
        hcv_left_opening,
        hcv_right_opening,
        unit_loads,
        manual_turbine_discharge,
    };

    Ok(DischargeResult::from_breakdown(
        py,
        discharge::compute(&readings),
    ))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "discharge")?;
    m.add_function(wrap_pyfunction!(compute_discharge, &m)?)?;
    m.add_class::<DischargeResult>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
