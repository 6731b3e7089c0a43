/// Instantaneous discharge orchestration.
///
/// Assembles the full outflow picture from one set of operator readings:
/// head, per-unit and aggregate turbine discharge, spillway overflow,
/// valve discharge, and the grand total. Each call recomputes everything
/// from scratch and returns a fresh, immutable breakdown.
use smallvec::SmallVec;

use crate::hcv;
use crate::inputs::{Readings, Resolved};
use crate::spillway;
use crate::turbine::{self, N_UNITS};

/// Complete instantaneous-discharge result.
#[derive(Debug, Clone)]
pub struct DischargeBreakdown {
    /// Hydraulic head [m].
    pub head: f64,
    /// Discharge per turbine unit [m^3/s].
    pub unit_discharges: [f64; N_UNITS],
    /// Aggregate turbine discharge used downstream [m^3/s].
    pub turbine: f64,
    /// True when the 15 MW rule demands a manually read aggregate.
    pub requires_manual: bool,
    /// True when the aggregate actually came from a manual reading.
    pub turbine_overridden: bool,
    /// Spillway overflow [m^3/s].
    pub spillway: f64,
    /// Left valve discharge [m^3/s].
    pub hcv_left: f64,
    /// Right valve discharge [m^3/s].
    pub hcv_right: f64,
    /// Combined valve discharge [m^3/s].
    pub hcv_total: f64,
    /// Grand total discharge [m^3/s].
    pub total: f64,
    /// Total electrical load [MW].
    pub total_load: f64,
    /// Indices (0-based) of units carrying a positive load.
    pub active_units: SmallVec<[usize; N_UNITS]>,
}

impl DischargeBreakdown {
    /// Number of active units.
    pub fn active_unit_count(&self) -> usize {
        self.active_units.len()
    }
}

/// Total discharge [m^3/s]: plain sum of the three outflow paths.
pub fn aggregate(turbine: f64, spillway: f64, hcv_left: f64, hcv_right: f64) -> f64 {
    turbine + spillway + hcv_left + hcv_right
}

/// Compute the full breakdown from raw readings.
pub fn compute(readings: &Readings) -> DischargeBreakdown {
    compute_resolved(&Resolved::from_readings(readings))
}

/// Compute the full breakdown from already-resolved inputs.
pub fn compute_resolved(inputs: &Resolved) -> DischargeBreakdown {
    let head = inputs.head();
    let turbine_out = turbine::compute(&inputs.unit_loads, head);

    // The manual aggregate replaces the computed sum only when the model
    // demands it; without a supplied reading the computed sum stands and
    // the requires_manual flag tells the caller a reading is still owed.
    let (turbine_total, overridden) = if turbine_out.requires_manual {
        match inputs.manual_turbine_discharge {
            Some(manual) => (manual, true),
            None => (turbine_out.computed_total, false),
        }
    } else {
        (turbine_out.computed_total, false)
    };

    let spillway = spillway::discharge(inputs.reservoir_level);
    let hcv_left = hcv::discharge(inputs.hcv_left_opening, inputs.reservoir_level);
    let hcv_right = hcv::discharge(inputs.hcv_right_opening, inputs.reservoir_level);

    DischargeBreakdown {
        head,
        unit_discharges: turbine_out.unit_discharges,
        turbine: turbine_total,
        requires_manual: turbine_out.requires_manual,
        turbine_overridden: overridden,
        spillway,
        hcv_left,
        hcv_right,
        hcv_total: hcv_left + hcv_right,
        total: aggregate(turbine_total, spillway, hcv_left, hcv_right),
        total_load: inputs.total_load(),
        active_units: turbine::active_units(&inputs.unit_loads),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn readings() -> Readings {
        Readings {
            reservoir_level: Some(101.5),
            tailrace_level: Some(21.5),
            hcv_left_opening: Some(50.0),
            hcv_right_opening: Some(25.0),
            unit_loads: [Some(25.0), Some(30.0), None, Some(28.0), None, Some(31.5)],
            manual_turbine_discharge: None,
        }
    }

    // -- Assembly --

    #[test]
    fn head_from_levels() {
        let b = compute(&readings());
        assert_relative_eq!(b.head, 80.0);
    }

    #[test]
    fn total_sums_three_paths() {
        let b = compute(&readings());
        assert_relative_eq!(b.total, b.turbine + b.spillway + b.hcv_left + b.hcv_right);
        assert_relative_eq!(b.hcv_total, b.hcv_left + b.hcv_right);
    }

    #[test]
    fn valves_use_independent_openings() {
        let b = compute(&readings());
        assert!(b.hcv_left > b.hcv_right);
    }

    #[test]
    fn no_spillway_below_crest() {
        let b = compute(&readings());
        assert_eq!(b.spillway, 0.0);
    }

    #[test]
    fn spillway_engages_above_crest() {
        let mut r = readings();
        r.reservoir_level = Some(108.0);
        let b = compute(&r);
        assert!(b.spillway > 0.0);
    }

    #[test]
    fn active_unit_bookkeeping() {
        let b = compute(&readings());
        assert_eq!(b.active_unit_count(), 4);
        assert_eq!(b.active_units.as_slice(), &[0, 1, 3, 5]);
        assert_relative_eq!(b.total_load, 114.5);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let a = compute(&readings());
        let b = compute(&readings());
        assert_eq!(a.total, b.total);
        assert_eq!(a.unit_discharges, b.unit_discharges);
        assert_eq!(a.active_units, b.active_units);
    }

    #[test]
    fn empty_readings_yield_all_zero_breakdown() {
        let b = compute(&Readings::default());
        assert_eq!(b.total, 0.0);
        assert_eq!(b.turbine, 0.0);
        assert_eq!(b.spillway, 0.0);
        assert_eq!(b.hcv_total, 0.0);
        assert!(b.active_units.is_empty());
    }

    // -- Manual override --

    #[test]
    fn low_load_with_manual_reading_overrides_aggregate() {
        let mut r = readings();
        r.unit_loads = [Some(10.0), Some(20.0), None, None, None, None];
        r.manual_turbine_discharge = Some(42.5);
        let b = compute(&r);
        assert!(b.requires_manual);
        assert!(b.turbine_overridden);
        assert_relative_eq!(b.turbine, 42.5);
        // Per-unit breakdown is still computed for display.
        assert!(b.unit_discharges[1] > 0.0);
    }

    #[test]
    fn low_load_without_manual_reading_keeps_computed_sum() {
        let mut r = readings();
        r.unit_loads = [Some(10.0), Some(20.0), None, None, None, None];
        let b = compute(&r);
        assert!(b.requires_manual);
        assert!(!b.turbine_overridden);
        let sum: f64 = b.unit_discharges.iter().sum();
        assert_relative_eq!(b.turbine, sum);
    }

    #[test]
    fn manual_reading_ignored_when_not_required() {
        let mut r = readings();
        r.manual_turbine_discharge = Some(999.0);
        let b = compute(&r);
        assert!(!b.requires_manual);
        assert!(!b.turbine_overridden);
        let sum: f64 = b.unit_discharges.iter().sum();
        assert_relative_eq!(b.turbine, sum);
    }

    #[test]
    fn override_scoped_to_turbine_only() {
        // Spillway and valve paths never take the manual value.
        let mut r = readings();
        r.reservoir_level = Some(108.0);
        r.unit_loads = [Some(10.0), None, None, None, None, None];
        r.manual_turbine_discharge = Some(42.5);
        let b = compute(&r);
        assert_relative_eq!(b.turbine, 42.5);
        assert!(b.spillway > 0.0);
        assert!(b.hcv_left > 0.0);
        assert_relative_eq!(b.total, 42.5 + b.spillway + b.hcv_left + b.hcv_right);
    }
}
