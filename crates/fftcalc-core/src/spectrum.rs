//! Frequency-domain helpers: magnitudes, phases, and bin frequencies.

use crate::complex::Complex;
use crate::error::FftError;

/// Magnitude of every bin.
#[must_use]
pub fn magnitudes(spectrum: &[Complex]) -> Vec<f64> {
    spectrum.iter().map(|c| c.magnitude()).collect()
}

/// Phase (radians) of every bin.
#[must_use]
pub fn phases(spectrum: &[Complex]) -> Vec<f64> {
    spectrum.iter().map(|c| c.phase()).collect()
}

/// Frequency of each bin for an `n`-point transform with the given sample
/// spacing. Bins above `n/2` map to negative frequencies.
pub fn frequencies(n: usize, sample_spacing: f64) -> Result<Vec<f64>, FftError> {
    if n == 0 {
        return Err(FftError::InvalidInput(
            "frequency bins require n > 0".into(),
        ));
    }
    if !(sample_spacing.is_finite() && sample_spacing > 0.0) {
        return Err(FftError::InvalidInput(format!(
            "sample spacing must be positive and finite, got {sample_spacing}"
        )));
    }

    let scale = 1.0 / (n as f64 * sample_spacing);
    let split = n.div_ceil(2);
    Ok((0..n)
        .map(|k| {
            if k < split {
                k as f64 * scale
            } else {
                -((n - k) as f64) * scale
            }
        })
        .collect())
}

/// Indices of the `count` strongest bins in the non-negative half
/// (`0..=n/2`), strongest first. Ties keep the lower bin first.
#[must_use]
pub fn dominant_bins(spectrum: &[Complex], count: usize) -> Vec<usize> {
    if spectrum.is_empty() {
        return Vec::new();
    }
    let mags = magnitudes(&spectrum[..=spectrum.len() / 2]);
    let mut bins: Vec<usize> = (0..mags.len()).collect();
    bins.sort_by(|&a, &b| mags[b].total_cmp(&mags[a]));
    bins.truncate(count);
    bins
}
