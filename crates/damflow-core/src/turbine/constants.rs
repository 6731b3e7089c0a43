/// Turbine discharge model constants.
///
/// Centralises the coefficients of the empirical polynomial chain fitted
/// to the powerhouse commissioning data. Coefficient arrays are ordered
/// by ascending power.

/// Number of turbine units in the powerhouse.
pub const N_UNITS: usize = 6;

/// Gravitational acceleration used by the fit [m/s^2].
pub const GRAVITY: f64 = 9.8;

/// Cubic in head giving the head factor (R5 term of the fit).
pub const HEAD_FACTOR_COEFFS: [f64; 4] = [-0.32675, 3.5945, -0.0463189, 0.0001975];

/// Cubic in head forming the flow-factor denominator.
pub const FLOW_DENOMINATOR_COEFFS: [f64; 4] = [-30857.0, 1292.71, -8.9741, 0.03682];

/// Quartic in the flow factor giving unit efficiency [%].
pub const EFFICIENCY_COEFFS: [f64; 5] = [
    -4.532068452,
    0.31155337,
    -0.006520552181,
    0.0000597737436,
    -0.0000002019124,
];

/// Scale from unit load [MW] to the fit's flow-factor numerator.
pub const LOAD_SCALE: f64 = 100_000.0;

/// Scale from the discharge denominator [kW per m^3/s] back to [m^3/s].
pub const DISCHARGE_SCALE: f64 = 1000.0;

/// Lowest active-unit load [MW] for which the fit is considered valid.
///
/// An active unit loaded below this forces the aggregate turbine
/// discharge to be supplied manually.
pub const MIN_MODEL_LOAD: f64 = 15.0;
