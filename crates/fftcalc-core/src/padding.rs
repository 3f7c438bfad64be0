//! Zero-padding to power-of-two lengths and real-to-complex lifting.

use crate::complex::Complex;

/// Smallest power of two `>= n`. Zero maps to one.
#[must_use]
pub fn next_power_of_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Copy `samples` and append zero samples up to `len`.
///
/// Never truncates: if `len` is shorter than the input, the copy keeps every
/// sample.
#[must_use]
pub fn zero_pad(samples: &[Complex], len: usize) -> Vec<Complex> {
    let mut padded = Vec::with_capacity(len.max(samples.len()));
    padded.extend_from_slice(samples);
    padded.resize(len.max(samples.len()), Complex::ZERO);
    padded
}

/// Zero-pad to the next power of two `>= samples.len()`.
#[must_use]
pub fn pad_to_power_of_two(samples: &[Complex]) -> Vec<Complex> {
    zero_pad(samples, next_power_of_two(samples.len()))
}

/// Lift real values to complex with a zero imaginary part.
#[must_use]
pub fn lift_real(values: &[f64]) -> Vec<Complex> {
    values.iter().copied().map(Complex::from_real).collect()
}
