/// Seasonal consumption allocator.
///
/// Spreads a single annual consumption figure across twelve months with a
/// smooth heating-driven curve: winter-peaked, summer-low, amplitude fixed
/// at 0.2. Pure arithmetic over fixed twelve-element arrays, no error
/// conditions.

use std::f64::consts::PI;

/// Cosine amplitude of the seasonal shape.
const SEASONAL_AMPLITUDE: f64 = 0.2;

/// Normalized monthly weights, index 0 = January.
///
/// Raw weight for month m (1-based): 1 + 0.2·cos(2π·(m−1)/11), then
/// normalized so the twelve weights sum to 1.
pub fn monthly_weights() -> [f64; 12] {
    let mut weights = [0.0f64; 12];
    for (i, w) in weights.iter_mut().enumerate() {
        *w = 1.0 + SEASONAL_AMPLITUDE * (2.0 * PI * i as f64 / 11.0).cos();
    }
    let total: f64 = weights.iter().sum();
    for w in weights.iter_mut() {
        *w /= total;
    }
    weights
}

/// Allocate an annual consumption figure (kWh) to months 1–12.
/// The twelve values sum back to `annual_kwh` within floating-point
/// tolerance.
pub fn allocate_annual(annual_kwh: f64) -> [f64; 12] {
    let mut out = monthly_weights();
    for v in out.iter_mut() {
        *v *= annual_kwh;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let w = monthly_weights();
        let sum: f64 = w.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "weights sum to {}", sum);
    }

    #[test]
    fn test_allocation_conserves_annual_total() {
        for annual in [0.0, 1.0, 3500.0, 12000.0, 250_000.0] {
            let months = allocate_annual(annual);
            let sum: f64 = months.iter().sum();
            let tol = 1e-9 * annual.max(1.0);
            assert!(
                (sum - annual).abs() < tol,
                "annual {} reassembled as {}",
                annual,
                sum
            );
        }
    }

    #[test]
    fn test_winter_peak_summer_trough() {
        let w = monthly_weights();
        let max = w.iter().cloned().fold(f64::MIN, f64::max);
        let min = w.iter().cloned().fold(f64::MAX, f64::min);
        // January carries the maximum (December ties it), July the minimum
        // (June ties it).
        assert!((w[0] - max).abs() < 1e-12);
        assert!((w[6] - min).abs() < 1e-12);
        assert!(w[0] > w[6]);
    }

    #[test]
    fn test_cosine_symmetry() {
        // The raw curve is symmetric around mid-year: w(m) = w(13−m).
        let w = monthly_weights();
        for m in 2..=11usize {
            let mirror = 13 - m;
            assert!(
                (w[m - 1] - w[mirror - 1]).abs() < 1e-12,
                "weight({}) = {} but weight({}) = {}",
                m,
                w[m - 1],
                mirror,
                w[mirror - 1]
            );
        }
    }

    #[test]
    fn test_january_weight_value() {
        // Raw weights sum to 12.2 (the first and last cosine terms are both
        // 1), so January's normalized share is 1.2 / 12.2.
        let w = monthly_weights();
        assert!((w[0] - 1.2 / 12.2).abs() < 1e-12);
    }

    #[test]
    fn test_january_largest_july_smallest_at_default_usage() {
        let months = allocate_annual(12000.0);
        for v in months.iter() {
            assert!(months[0] >= *v);
            assert!(months[6] <= *v);
        }
    }
}
