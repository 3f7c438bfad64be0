//! Decimal rounding applied to transform results before presentation.
//!
//! The transform itself never rounds; callers opt into this step.

/// Round `value` to `decimals` decimal places.
///
/// Negative zero is normalized to `0.0`. Values too large to scale (and
/// non-finite values) are returned unchanged. `decimals` beyond the largest
/// finite power of ten are clamped to it.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let exponent = i32::try_from(decimals).map_or(f64::MAX_10_EXP, |d| d.min(f64::MAX_10_EXP));
    let factor = 10f64.powi(exponent);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round every value in `values` to `decimals` places.
#[must_use]
pub fn round_all(values: &[f64], decimals: u32) -> Vec<f64> {
    values.iter().map(|&v| round_to(v, decimals)).collect()
}

/// Whether two real sequences agree element-wise within `tolerance`.
#[must_use]
pub fn all_close(a: &[f64], b: &[f64], tolerance: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() <= tolerance)
}
