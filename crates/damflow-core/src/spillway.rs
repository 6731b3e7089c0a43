/// Spillway (overrun) discharge.
///
/// Uncontrolled overflow begins once the reservoir exceeds the spillway
/// crest; below the crest the spillway passes nothing.

/// Spillway crest elevation [mdpl].
pub const CREST_ELEVATION: f64 = 106.9;

/// Rating coefficient of the 1.5-power term.
pub const COEFF_LOW: f64 = 231.2;

/// Rating coefficient of the 2.5-power term.
pub const COEFF_HIGH: f64 = 15.8;

/// Spillway discharge [m^3/s] at the given reservoir level [mdpl].
///
/// Zero at or below the crest; above it, the two-term power rating
/// applies to the overflow depth (which the branch keeps non-negative,
/// so the fractional powers are always defined).
pub fn discharge(reservoir_level: f64) -> f64 {
    if reservoir_level <= CREST_ELEVATION {
        return 0.0;
    }
    let depth = reservoir_level - CREST_ELEVATION;
    COEFF_LOW * depth.powf(1.5) + COEFF_HIGH * depth.powf(2.5)
}
