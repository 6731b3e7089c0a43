/// Turbine discharge process functions.
///
/// Pure functions implementing each link of the empirical chain that
/// converts per-unit electrical load [MW] and hydraulic head [m] into
/// discharge [m^3/s]. Any degenerate denominator yields 0 for that term
/// rather than NaN: a non-positive head must read as zero discharge.
use super::constants::{
    DISCHARGE_SCALE, EFFICIENCY_COEFFS, FLOW_DENOMINATOR_COEFFS, GRAVITY, HEAD_FACTOR_COEFFS,
    LOAD_SCALE,
};

/// Evaluate a polynomial with ascending-power coefficients at `x`.
fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Head factor: cubic in head [m].
pub fn head_factor(head: f64) -> f64 {
    polynomial(&HEAD_FACTOR_COEFFS, head)
}

/// Flow factor for one unit: scaled load over the head-dependent
/// denominator. Zero when the denominator vanishes.
pub fn flow_factor(load: f64, head: f64) -> f64 {
    let denominator = polynomial(&FLOW_DENOMINATOR_COEFFS, head);
    if denominator != 0.0 {
        load * LOAD_SCALE / denominator
    } else {
        0.0
    }
}

/// Unit efficiency [%] as a quartic in the flow factor.
pub fn efficiency_percent(flow_factor: f64) -> f64 {
    polynomial(&EFFICIENCY_COEFFS, flow_factor)
}

/// Discharge of one unit [m^3/s].
///
/// Inverts the power equation: load over (g * head * head factor *
/// efficiency). Zero when the denominator vanishes, which covers the
/// non-positive head case.
pub fn unit_discharge(load: f64, head: f64, head_factor: f64) -> f64 {
    let eff = efficiency_percent(flow_factor(load, head));
    let denominator = GRAVITY * head * head_factor * (eff / 100.0);
    if denominator != 0.0 {
        load / denominator * DISCHARGE_SCALE
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -- polynomial --

    #[test]
    fn polynomial_constant() {
        assert_relative_eq!(polynomial(&[3.5], 100.0), 3.5);
    }

    #[test]
    fn polynomial_cubic_known_value() {
        // 1 + 2x + 3x^2 + 4x^3 at x = 2: 1 + 4 + 12 + 32 = 49
        assert_relative_eq!(polynomial(&[1.0, 2.0, 3.0, 4.0], 2.0), 49.0);
    }

    // -- head_factor --

    #[test]
    fn head_factor_known_value() {
        // -0.32675 + 3.5945*80 - 0.0463189*6400 + 0.0001975*512000
        let expected = -0.32675 + 3.5945 * 80.0 - 0.0463189 * 6400.0 + 0.0001975 * 512_000.0;
        assert_relative_eq!(head_factor(80.0), expected, epsilon = 1e-9);
    }

    // -- flow_factor --

    #[test]
    fn flow_factor_zero_load() {
        assert_eq!(flow_factor(0.0, 80.0), 0.0);
    }

    #[test]
    fn flow_factor_scales_with_load() {
        let single = flow_factor(10.0, 80.0);
        let double = flow_factor(20.0, 80.0);
        assert_relative_eq!(double, 2.0 * single, epsilon = 1e-9);
    }

    #[test]
    fn flow_factor_finite_at_zero_head() {
        // Denominator is -30857 at zero head, so the factor stays finite.
        assert!(flow_factor(50.0, 0.0).is_finite());
    }

    // -- unit_discharge --

    #[test]
    fn unit_discharge_zero_head_is_zero() {
        let hf = head_factor(0.0);
        assert_eq!(unit_discharge(50.0, 0.0, hf), 0.0);
    }

    #[test]
    fn unit_discharge_zero_load_is_zero() {
        let hf = head_factor(80.0);
        assert_eq!(unit_discharge(0.0, 80.0, hf), 0.0);
    }

    #[test]
    fn unit_discharge_plausible_operating_point() {
        // 30 MW at 80 m head lands in the tens of m^3/s.
        let hf = head_factor(80.0);
        let q = unit_discharge(30.0, 80.0, hf);
        assert!(q > 10.0 && q < 100.0, "got {q}");
    }

    #[test]
    fn unit_discharge_never_nan() {
        for head in [-10.0, 0.0, 0.5, 40.0, 80.0, 120.0] {
            for load in [0.0, 5.0, 30.0, 50.0] {
                let q = unit_discharge(load, head, head_factor(head));
                assert!(!q.is_nan(), "NaN at head {head}, load {load}");
            }
        }
    }
}
