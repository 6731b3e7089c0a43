use pyo3::prelude::*;

use damflow_core::balance::{self, StepInputs};

/// Mass-balance step result with typed attributes.
///
/// When `valid` is False the step could not run (no initial elevation)
/// and the derived fields are 0.0 sentinels.
#[pyclass(frozen)]
pub struct StepResult {
    /// Sum of the outflow components [m^3/s].
    #[pyo3(get)]
    pub outflow_total: f64,
    /// Net flow: inflow minus outflow [m^3/s], signed.
    #[pyo3(get)]
    pub net_flow: f64,
    /// Volume change over the step [MCM], signed.
    #[pyo3(get)]
    pub volume_delta: f64,
    /// Starting elevation [mdpl].
    #[pyo3(get)]
    pub initial_elevation: f64,
    /// Storage at the starting elevation [MCM].
    #[pyo3(get)]
    pub initial_capacity: f64,
    /// Storage after the step [MCM].
    #[pyo3(get)]
    pub final_capacity: f64,
    /// Elevation after the step [mdpl].
    #[pyo3(get)]
    pub final_elevation: f64,
    /// Water surface area after the step [km^2].
    #[pyo3(get)]
    pub final_area: f64,
    /// Step duration [h].
    #[pyo3(get)]
    pub duration_hours: f64,
    /// False when no initial elevation was supplied.
    #[pyo3(get)]
    pub valid: bool,
    /// Human-readable rise/fall narrative for the step.
    #[pyo3(get)]
    pub interpretation: String,
}

/// Advance the reservoir one mass-balance step.
///
/// Flows in m^3/s, duration in hours. Omitting `initial_elevation`
/// yields the all-zero sentinel result with `valid = False`.
#[pyfunction]
#[pyo3(signature = (
    inflow,
    duration_hours,
    initial_elevation=None,
    spillway_outflow=0.0,
    turbine_outflow=0.0,
    valve_outflow=0.0
))]
fn simulate_step(
    inflow: f64,
    duration_hours: f64,
    initial_elevation: Option<f64>,
    spillway_outflow: f64,
    turbine_outflow: f64,
    valve_outflow: f64,
) -> StepResult {
    let result = balance::simulate_step(&StepInputs {
        initial_elevation,
        inflow,
        spillway_outflow,
        turbine_outflow,
        valve_outflow,
        duration_hours,
    });

    StepResult {
        outflow_total: result.outflow_total,
        net_flow: result.net_flow,
        volume_delta: result.volume_delta,
        initial_elevation: result.initial_elevation,
        initial_capacity: result.initial_capacity,
        final_capacity: result.final_capacity,
        final_elevation: result.final_elevation,
        final_area: result.final_area,
        duration_hours: result.duration_hours,
        valid: result.valid,
        interpretation: result.interpretation(),
    }
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "balance")?;
    m.add_function(wrap_pyfunction!(simulate_step, &m)?)?;
    m.add_class::<StepResult>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
