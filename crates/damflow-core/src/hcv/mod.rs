/// Hollow-cone valve (HCV) discharge lookup.
///
/// The dam carries two bypass valves (left and right); each is rated by
/// the same empirical grid over opening percent and reservoir level.
pub mod table;

use crate::interpolate;

/// Discharge through one valve [m^3/s].
///
/// Bilinear interpolation over the rating grid. Inputs outside the rated
/// rectangle (level below 80 or above 110 mdpl, opening outside 0-100%)
/// contribute nothing: the lookup yields 0.0 rather than extrapolating.
/// A closed or unset valve therefore always reads as zero discharge.
pub fn discharge(opening_percent: f64, reservoir_level: f64) -> f64 {
    interpolate::bilinear(
        &table::OPENING_PERCENT,
        &table::RESERVOIR_LEVEL,
        &table::DISCHARGE,
        opening_percent,
        reservoir_level,
    )
    .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -- Exact table points --

    #[test]
    fn grid_corners() {
        assert_relative_eq!(discharge(50.0, 80.0), 85.60);
        assert_relative_eq!(discharge(100.0, 110.0), 200.00);
        assert_relative_eq!(discharge(5.0, 80.0), 15.90);
        assert_relative_eq!(discharge(100.0, 80.0), 142.90);
    }

    #[test]
    fn closed_valve_yields_zero_at_every_level() {
        for level in 80..=110 {
            assert_eq!(discharge(0.0, level as f64), 0.0);
        }
    }

    // -- Interpolation between table points --

    #[test]
    fn interpolates_between_levels() {
        // Opening 50% between levels 80 and 81: midway between 85.60 and 86.95.
        assert_relative_eq!(discharge(50.0, 80.5), 86.275, epsilon = 1e-9);
    }

    #[test]
    fn interpolates_on_nonuniform_opening_axis() {
        // Level 80 between openings 50% and 60%: midway between 85.60 and 98.80.
        assert_relative_eq!(discharge(55.0, 80.0), 92.20, epsilon = 1e-9);
    }

    #[test]
    fn interpolated_values_bracketed_by_cell_corners() {
        let v = discharge(52.5, 90.5);
        assert!(v > discharge(50.0, 90.0));
        assert!(v < discharge(60.0, 91.0));
    }

    // -- Out-of-domain policy --

    #[test]
    fn out_of_domain_yields_zero() {
        assert_eq!(discharge(50.0, 79.9), 0.0);
        assert_eq!(discharge(50.0, 110.1), 0.0);
        assert_eq!(discharge(-1.0, 90.0), 0.0);
        assert_eq!(discharge(100.1, 90.0), 0.0);
    }

    #[test]
    fn unset_level_resolved_to_zero_yields_zero() {
        // A missing reservoir reading resolves to 0 mdpl, far below the grid.
        assert_eq!(discharge(50.0, 0.0), 0.0);
    }
}
