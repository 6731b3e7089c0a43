/// Operator input readings and the missing-value resolution step.
///
/// Every reading arrives optional: the operator may leave any field
/// blank. The unset-as-zero policy is applied exactly once, here, so the
/// formula modules always see fully-populated numbers. The manual
/// turbine discharge stays optional after resolution because its absence
/// is meaningful (no override supplied).
use crate::turbine::N_UNITS;

/// Raw operator readings; any field may be unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Readings {
    /// Reservoir (forebay) water level [mdpl].
    pub reservoir_level: Option<f64>,
    /// Tailrace water level [mdpl].
    pub tailrace_level: Option<f64>,
    /// Left hollow-cone valve opening [%].
    pub hcv_left_opening: Option<f64>,
    /// Right hollow-cone valve opening [%].
    pub hcv_right_opening: Option<f64>,
    /// Electrical load per turbine unit [MW].
    pub unit_loads: [Option<f64>; N_UNITS],
    /// Manually read aggregate turbine discharge [m^3/s].
    pub manual_turbine_discharge: Option<f64>,
}

/// Fully-populated inputs after resolving unset readings to zero.
#[derive(Debug, Clone, Copy)]
pub struct Resolved {
    pub reservoir_level: f64,
    pub tailrace_level: f64,
    pub hcv_left_opening: f64,
    pub hcv_right_opening: f64,
    pub unit_loads: [f64; N_UNITS],
    pub manual_turbine_discharge: Option<f64>,
}

impl Resolved {
    /// Resolve raw readings, substituting 0 for every unset value.
    pub fn from_readings(readings: &Readings) -> Self {
        let mut unit_loads = [0.0; N_UNITS];
        for (resolved, raw) in unit_loads.iter_mut().zip(&readings.unit_loads) {
            *resolved = raw.unwrap_or(0.0);
        }
        Self {
            reservoir_level: readings.reservoir_level.unwrap_or(0.0),
            tailrace_level: readings.tailrace_level.unwrap_or(0.0),
            hcv_left_opening: readings.hcv_left_opening.unwrap_or(0.0),
            hcv_right_opening: readings.hcv_right_opening.unwrap_or(0.0),
            unit_loads,
            manual_turbine_discharge: readings.manual_turbine_discharge,
        }
    }

    /// Hydraulic head [m]: reservoir level minus tailrace level.
    pub fn head(&self) -> f64 {
        self.reservoir_level - self.tailrace_level
    }

    /// Total electrical load across all units [MW].
    pub fn total_load(&self) -> f64 {
        self.unit_loads.iter().sum()
    }
}
