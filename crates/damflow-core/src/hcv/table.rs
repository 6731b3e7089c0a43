/// Hollow-cone-valve rating table.
///
/// Empirical calibration grid: discharge [m^3/s] per valve as a function
/// of opening percent and reservoir level. Values are non-decreasing
/// along both axes, and the closed-valve column is all zeros.

/// Valve opening percent, non-uniform spacing (5% steps up to 50%,
/// then 10% steps).
pub const OPENING_PERCENT: [f64; 16] = [
    0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0,
];

/// Reservoir level [mdpl], 1 m steps.
pub const RESERVOIR_LEVEL: [f64; 31] = [
    80.0, 81.0, 82.0, 83.0, 84.0, 85.0, 86.0, 87.0, 88.0, 89.0, 90.0, 91.0, 92.0, 93.0, 94.0,
    95.0, 96.0, 97.0, 98.0, 99.0, 100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 106.0, 107.0, 108.0,
    109.0, 110.0,
];

/// Discharge [m^3/s], indexed `[level][opening]` matching the axes above.
#[rustfmt::skip]
pub const DISCHARGE: [[f64; 16]; 31] = [
    [0.0, 15.90, 26.50, 35.60, 43.80, 51.50, 59.00, 65.70, 72.40, 79.10, 85.60, 98.80, 111.70, 123.60, 134.20, 142.90],
    [0.0, 16.15, 26.90, 36.15, 44.50, 52.30, 59.90, 66.70, 73.50, 80.30, 86.95, 100.35, 113.45, 125.50, 136.30, 145.10],
    [0.0, 16.40, 27.35, 36.70, 45.15, 53.10, 60.75, 67.75, 74.60, 81.55, 88.30, 101.90, 115.20, 127.45, 138.35, 147.35],
    [0.0, 16.60, 27.75, 37.30, 45.85, 53.90, 61.75, 68.75, 75.75, 82.75, 89.60, 103.40, 116.90, 129.35, 140.45, 149.55],
    [0.0, 16.85, 28.00, 37.85, 46.50, 54.70, 62.70, 69.80, 76.90, 84.00, 90.95, 104.95, 118.65, 131.30, 142.50, 151.80],
    [0.0, 17.10, 28.60, 38.40, 47.20, 55.50, 63.60, 70.80, 78.00, 85.20, 92.30, 106.50, 120.40, 133.20, 144.60, 154.00],
    [0.0, 17.30, 29.00, 38.90, 47.80, 56.25, 64.45, 71.75, 79.05, 86.35, 93.55, 107.95, 122.00, 135.00, 146.55, 156.05],
    [0.0, 17.55, 29.35, 39.45, 48.45, 57.00, 65.30, 72.70, 80.10, 87.50, 94.80, 109.40, 123.60, 136.75, 148.50, 158.10],
    [0.0, 17.75, 29.75, 39.95, 49.05, 57.70, 66.20, 73.70, 81.10, 88.60, 96.00, 110.80, 125.20, 138.55, 150.40, 160.20],
    [0.0, 18.00, 30.10, 40.50, 49.70, 58.45, 67.05, 74.65, 82.15, 89.75, 97.25, 112.25, 126.80, 140.30, 152.35, 162.23],
    [0.0, 18.20, 30.50, 41.00, 50.30, 59.20, 67.90, 75.60, 83.20, 90.90, 98.50, 113.70, 128.40, 142.10, 154.30, 164.30],
    [0.0, 18.40, 30.85, 41.50, 50.90, 59.90, 68.70, 76.50, 84.20, 92.00, 99.65, 115.05, 129.95, 143.80, 156.15, 166.25],
    [0.0, 18.65, 31.20, 41.95, 51.50, 60.60, 69.50, 77.35, 86.20, 93.05, 100.80, 116.40, 131.50, 145.50, 158.00, 168.20],
    [0.0, 18.85, 31.60, 42.45, 52.10, 61.30, 70.30, 78.50, 87.20, 94.15, 102.00, 117.70, 133.00, 147.20, 159.80, 170.10],
    [0.0, 19.10, 31.95, 42.90, 52.70, 62.00, 71.10, 79.10, 88.20, 95.20, 103.15, 119.05, 134.55, 148.90, 161.65, 172.05],
    [0.0, 19.30, 32.30, 43.40, 53.30, 62.70, 71.90, 80.00, 89.10, 96.30, 104.30, 120.40, 136.10, 150.60, 163.50, 174.00],
    [0.0, 19.50, 32.65, 43.85, 53.85, 63.40, 72.65, 80.85, 90.05, 97.30, 105.40, 121.70, 137.55, 152.20, 165.20, 175.05],
    [0.0, 19.75, 33.00, 44.30, 54.40, 64.05, 73.40, 81.70, 90.95, 98.35, 106.50, 122.95, 139.00, 153.75, 166.95, 177.70],
    [0.0, 19.95, 33.30, 44.80, 55.40, 64.75, 74.20, 82.60, 91.90, 99.35, 107.60, 124.25, 140.40, 155.35, 168.65, 179.50],
    [0.0, 20.20, 33.65, 45.25, 55.55, 65.40, 74.95, 83.45, 91.90, 100.40, 108.70, 125.50, 141.85, 156.90, 170.40, 181.35],
    [0.0, 20.40, 34.00, 45.70, 56.10, 66.10, 75.70, 84.30, 92.80, 101.40, 109.80, 126.80, 143.30, 158.50, 172.10, 183.20],
    [0.0, 20.60, 34.30, 46.15, 56.65, 66.70, 76.40, 85.10, 93.70, 102.40, 110.85, 128.00, 144.65, 160.00, 173.75, 184.95],
    [0.0, 20.75, 34.65, 46.60, 57.20, 67.35, 77.10, 85.90, 94.50, 103.35, 111.90, 129.20, 146.00, 161.55, 175.40, 186.70],
    [0.0, 20.95, 34.95, 47.00, 57.70, 67.95, 77.85, 86.70, 95.50, 104.35, 113.00, 130.40, 147.40, 163.05, 177.00, 188.50],
    [0.0, 21.10, 35.30, 47.45, 58.50, 68.60, 78.60, 87.50, 96.40, 105.30, 114.05, 131.60, 148.75, 164.60, 178.65, 190.50],
    [0.0, 21.30, 35.60, 47.90, 58.80, 69.20, 79.30, 88.30, 97.30, 106.30, 115.10, 132.80, 150.10, 166.10, 180.30, 192.00],
    [0.0, 21.50, 35.80, 48.30, 59.30, 69.80, 80.00, 89.10, 98.15, 107.20, 116.10, 133.95, 151.40, 167.56, 181.90, 193.70],
    [0.0, 21.70, 36.25, 48.75, 59.85, 70.40, 80.70, 89.85, 99.00, 108.15, 117.10, 135.10, 152.75, 169.00, 183.45, 195.35],
    [0.0, 21.90, 36.56, 49.16, 60.35, 71.00, 81.40, 90.66, 99.80, 109.05, 118.10, 136.30, 154.05, 170.50, 185.05, 197.05],
    [0.0, 22.10, 36.90, 49.60, 60.90, 71.60, 82.10, 91.40, 100.65, 110.00, 119.10, 137.45, 155.40, 171.95, 186.60, 198.70],
    [0.0, 22.30, 37.20, 50.00, 61.40, 72.20, 82.80, 92.20, 101.50, 110.90, 120.10, 138.60, 156.70, 173.40, 188.20, 200.00],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_match_grid_dimensions() {
        assert_eq!(DISCHARGE.len(), RESERVOIR_LEVEL.len());
        for row in &DISCHARGE {
            assert_eq!(row.len(), OPENING_PERCENT.len());
        }
    }

    #[test]
    fn closed_valve_column_is_zero() {
        for row in &DISCHARGE {
            assert_eq!(row[0], 0.0);
        }
    }

    #[test]
    fn non_decreasing_along_opening_axis() {
        for (j, row) in DISCHARGE.iter().enumerate() {
            for i in 1..row.len() {
                assert!(
                    row[i] >= row[i - 1],
                    "row {j}: discharge decreases between openings {} and {}",
                    OPENING_PERCENT[i - 1],
                    OPENING_PERCENT[i]
                );
            }
        }
    }

    #[test]
    fn non_decreasing_along_level_axis() {
        for j in 1..DISCHARGE.len() {
            for i in 0..OPENING_PERCENT.len() {
                assert!(
                    DISCHARGE[j][i] >= DISCHARGE[j - 1][i],
                    "opening {}: discharge decreases between levels {} and {}",
                    OPENING_PERCENT[i],
                    RESERVOIR_LEVEL[j - 1],
                    RESERVOIR_LEVEL[j]
                );
            }
        }
    }
}
