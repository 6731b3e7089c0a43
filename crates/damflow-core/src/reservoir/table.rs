/// Reservoir storage rating table.
///
/// 37 bathymetric survey samples pairing elevation [mdpl] with gross
/// storage capacity [MCM] and water surface area [km^2]. Capacity and
/// area are strictly increasing with elevation, and capacity increments
/// are consistent with the trapezoidal integral of surface area
/// (1 km^2 x 1 m = 1 MCM).

/// Elevation [mdpl], 1 m steps.
pub const ELEVATION: [f64; 37] = [
    75.0, 76.0, 77.0, 78.0, 79.0, 80.0, 81.0, 82.0, 83.0, 84.0, 85.0, 86.0, 87.0, 88.0, 89.0,
    90.0, 91.0, 92.0, 93.0, 94.0, 95.0, 96.0, 97.0, 98.0, 99.0, 100.0, 101.0, 102.0, 103.0,
    104.0, 105.0, 106.0, 107.0, 108.0, 109.0, 110.0, 111.0,
];

/// Storage capacity [MCM] at each elevation sample.
pub const CAPACITY: [f64; 37] = [
    560.00, 594.65, 630.63, 667.94, 706.61, 746.65, 788.09, 830.95, 875.23, 920.97, 968.18,
    1016.88, 1067.09, 1118.83, 1172.11, 1226.96, 1283.40, 1341.43, 1401.10, 1462.40, 1525.37,
    1590.01, 1656.35, 1724.42, 1794.21, 1865.77, 1939.10, 2014.22, 2091.16, 2169.93, 2250.55,
    2333.04, 2417.42, 2503.70, 2591.92, 2682.08, 2774.20,
];

/// Water surface area [km^2] at each elevation sample.
pub const AREA: [f64; 37] = [
    34.00, 35.31, 36.64, 37.99, 39.35, 40.74, 42.14, 43.57, 45.01, 46.47, 47.95, 49.45, 50.97,
    52.51, 54.06, 55.64, 57.23, 58.85, 60.48, 62.13, 63.80, 65.49, 67.20, 68.93, 70.67, 72.44,
    74.22, 76.03, 77.85, 79.69, 81.55, 83.43, 85.33, 87.25, 89.18, 91.14, 93.11,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays_are_paired() {
        assert_eq!(ELEVATION.len(), CAPACITY.len());
        assert_eq!(ELEVATION.len(), AREA.len());
    }

    #[test]
    fn capacity_strictly_increasing() {
        for i in 1..CAPACITY.len() {
            assert!(
                CAPACITY[i] > CAPACITY[i - 1],
                "capacity not increasing at elevation {}",
                ELEVATION[i]
            );
        }
    }

    #[test]
    fn area_strictly_increasing() {
        for i in 1..AREA.len() {
            assert!(
                AREA[i] > AREA[i - 1],
                "area not increasing at elevation {}",
                ELEVATION[i]
            );
        }
    }

    #[test]
    fn capacity_increments_consistent_with_area() {
        // One metre of rise stores roughly the mean surface area in MCM.
        for i in 1..CAPACITY.len() {
            let delta = CAPACITY[i] - CAPACITY[i - 1];
            let mean_area = (AREA[i] + AREA[i - 1]) / 2.0;
            assert!(
                (delta - mean_area).abs() < 0.05,
                "increment {delta} inconsistent with mean area {mean_area} at {}",
                ELEVATION[i]
            );
        }
    }
}
