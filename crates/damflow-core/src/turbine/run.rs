/// Turbine discharge computation over all six units.
use smallvec::SmallVec;

use super::constants::{MIN_MODEL_LOAD, N_UNITS};
use super::processes;

/// Result of the per-unit discharge chain.
///
/// `computed_total` is the sum of the per-unit discharges. When
/// `requires_manual` is set, the fit is outside its valid operating
/// regime and the aggregate used downstream must come from a manual
/// reading instead; the per-unit breakdown remains available for
/// display either way.
#[derive(Debug, Clone)]
pub struct TurbineOutput {
    /// Discharge per unit [m^3/s].
    pub unit_discharges: [f64; N_UNITS],
    /// Sum of the per-unit discharges [m^3/s].
    pub computed_total: f64,
    /// True when an active unit is loaded below the model's valid range.
    pub requires_manual: bool,
}

/// Indices of active units: units carrying a positive load.
///
/// Unset loads resolve to zero upstream and are therefore never active.
pub fn active_units(loads: &[f64; N_UNITS]) -> SmallVec<[usize; N_UNITS]> {
    loads
        .iter()
        .enumerate()
        .filter(|(_, &load)| load > 0.0)
        .map(|(i, _)| i)
        .collect()
}

/// Compute per-unit discharges for the given loads [MW] and head [m].
pub fn compute(loads: &[f64; N_UNITS], head: f64) -> TurbineOutput {
    let head_factor = processes::head_factor(head);

    let mut unit_discharges = [0.0; N_UNITS];
    for (q, &load) in unit_discharges.iter_mut().zip(loads) {
        *q = processes::unit_discharge(load, head, head_factor);
    }

    let requires_manual = loads
        .iter()
        .any(|&load| load > 0.0 && load < MIN_MODEL_LOAD);

    TurbineOutput {
        unit_discharges,
        computed_total: unit_discharges.iter().sum(),
        requires_manual,
    }
}
