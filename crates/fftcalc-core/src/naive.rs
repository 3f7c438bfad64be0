//! Direct O(N²) reference implementations.
//!
//! Used to cross-check the fast paths. No padding is applied: the DFT has
//! exactly as many bins as input samples.

use crate::complex::Complex;
use crate::error::{ensure_non_empty, FftError};
use crate::transform::twiddle;

/// Direct DFT: `X[k] = Σ x[j]·exp(−2πi·jk/N)`.
pub fn dft(samples: &[Complex]) -> Result<Vec<Complex>, FftError> {
    ensure_non_empty(samples, "direct DFT")?;
    let n = samples.len();
    Ok((0..n)
        .map(|k| {
            samples
                .iter()
                .enumerate()
                .map(|(j, &x)| x * twiddle((j * k) % n, n))
                .sum::<Complex>()
        })
        .collect())
}

/// Direct linear convolution of two real sequences.
pub fn convolve(a: &[f64], b: &[f64]) -> Result<Vec<f64>, FftError> {
    ensure_non_empty(a, "direct convolution (left operand)")?;
    ensure_non_empty(b, "direct convolution (right operand)")?;
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::lift_real;
    use crate::transform::forward_transform;

    #[test]
    fn dft_matches_fft_on_power_of_two() {
        let x = lift_real(&[0.5, -1.0, 2.0, 3.0, 0.0, 1.0, -2.0, 4.0]);
        let slow = dft(&x).unwrap();
        let fast = forward_transform(&x).unwrap();
        for (s, f) in slow.iter().zip(&fast) {
            assert!(s.approx_eq(*f, 1e-9), "{s} != {f}");
        }
    }

    #[test]
    fn dft_does_not_pad() {
        assert_eq!(dft(&lift_real(&[1.0, 2.0, 3.0])).unwrap().len(), 3);
    }

    #[test]
    fn convolve_reference() {
        assert_eq!(
            convolve(&[2.0, 3.0, 1.0], &[1.0, 2.0, 4.0]).unwrap(),
            vec![2.0, 7.0, 15.0, 14.0, 4.0]
        );
    }

    #[test]
    fn empty_rejected() {
        assert!(dft(&[]).is_err());
        assert!(convolve(&[], &[1.0]).is_err());
    }
}
