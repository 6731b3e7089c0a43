/// Mass-balance simulation of reservoir elevation over one time step.
///
/// A single transition: net flow over the duration becomes a volume
/// delta, which moves the reservoir along the storage rating curve to a
/// new elevation. The simulator holds no state; callers chain steps by
/// re-seeding the initial elevation with the previous final one.
use crate::reservoir::curves;
use crate::reservoir::ReservoirState;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Cubic metres per MCM.
pub const CUBIC_METRES_PER_MCM: f64 = 1e6;

/// Inputs to one mass-balance step. Flows in m^3/s.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepInputs {
    /// Reservoir elevation at the start of the step [mdpl]; absent means
    /// no simulation is possible.
    pub initial_elevation: Option<f64>,
    /// Total inflow.
    pub inflow: f64,
    /// Spillway outflow component.
    pub spillway_outflow: f64,
    /// Turbine outflow component.
    pub turbine_outflow: f64,
    /// Combined valve outflow component.
    pub valve_outflow: f64,
    /// Step duration [h].
    pub duration_hours: f64,
}

/// Result of one mass-balance step.
///
/// When `valid` is false the step could not run (no initial elevation)
/// and every derived field is the 0.0 sentinel; callers must check
/// before presenting the numbers as meaningful.
#[derive(Debug, Clone)]
pub struct StepResult {
    /// Sum of the outflow components [m^3/s].
    pub outflow_total: f64,
    /// Net flow: inflow minus outflow [m^3/s], signed.
    pub net_flow: f64,
    /// Volume change over the step [MCM], signed.
    pub volume_delta: f64,
    /// Starting elevation [mdpl].
    pub initial_elevation: f64,
    /// Storage at the starting elevation [MCM].
    pub initial_capacity: f64,
    /// Storage after the step [MCM].
    pub final_capacity: f64,
    /// Elevation after the step [mdpl].
    pub final_elevation: f64,
    /// Water surface area after the step [km^2].
    pub final_area: f64,
    /// Step duration [h].
    pub duration_hours: f64,
    /// False when no initial elevation was supplied.
    pub valid: bool,
}

impl StepResult {
    /// Elevation change over the step [m], signed.
    pub fn elevation_delta(&self) -> f64 {
        self.final_elevation - self.initial_elevation
    }

    /// Reservoir snapshot after the step.
    pub fn final_state(&self) -> ReservoirState {
        ReservoirState::at_elevation(self.final_elevation)
    }

    /// Human-readable rise/fall narrative for the step.
    ///
    /// Pure derived view over the step's numbers; carries no state of
    /// its own.
    pub fn interpretation(&self) -> String {
        if !self.valid {
            return "No simulation possible: initial reservoir elevation was not provided."
                .to_string();
        }
        let delta = self.elevation_delta();
        if self.net_flow > 0.0 {
            format!(
                "Net inflow of {:.2} m³/s over {:.0} h raises the reservoir \
                 from {:.2} to {:.2} mdpl ({:+.2} m).",
                self.net_flow,
                self.duration_hours,
                self.initial_elevation,
                self.final_elevation,
                delta
            )
        } else if self.net_flow < 0.0 {
            format!(
                "Net outflow of {:.2} m³/s over {:.0} h draws the reservoir \
                 down from {:.2} to {:.2} mdpl ({:+.2} m).",
                -self.net_flow,
                self.duration_hours,
                self.initial_elevation,
                self.final_elevation,
                delta
            )
        } else {
            format!(
                "Inflow and outflow balance; the reservoir holds at {:.2} mdpl \
                 over {:.0} h.",
                self.initial_elevation, self.duration_hours
            )
        }
    }
}

/// Advance the reservoir one step.
pub fn simulate_step(inputs: &StepInputs) -> StepResult {
    let outflow_total =
        inputs.spillway_outflow + inputs.turbine_outflow + inputs.valve_outflow;
    let net_flow = inputs.inflow - outflow_total;

    let initial_elevation = match inputs.initial_elevation {
        Some(elevation) => elevation,
        None => {
            return StepResult {
                outflow_total,
                net_flow,
                volume_delta: 0.0,
                initial_elevation: 0.0,
                initial_capacity: 0.0,
                final_capacity: 0.0,
                final_elevation: 0.0,
                final_area: 0.0,
                duration_hours: inputs.duration_hours,
                valid: false,
            };
        }
    };

    let seconds = inputs.duration_hours * SECONDS_PER_HOUR;
    let volume_delta = net_flow * seconds / CUBIC_METRES_PER_MCM;

    let initial_capacity = curves::capacity_at(initial_elevation);
    let final_capacity = initial_capacity + volume_delta;
    let final_elevation = curves::elevation_at(final_capacity);

    StepResult {
        outflow_total,
        net_flow,
        volume_delta,
        initial_elevation,
        initial_capacity,
        final_capacity,
        final_elevation,
        final_area: curves::area_at(final_elevation),
        duration_hours: inputs.duration_hours,
        valid: true,
    }
}
