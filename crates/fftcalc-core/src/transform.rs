//! Forward and inverse FFT: recursive radix-2 Cooley-Tukey.
//!
//! Input of any non-zero length is zero-padded to the next power of two, so
//! the output length is the padded length. Each recursion level allocates
//! fresh half-length buffers for the even- and odd-indexed samples; there is
//! no shared table or prior initialization.

use std::f64::consts::PI;

use num_traits::Zero;
use tracing::{debug, trace};

use crate::complex::Complex;
use crate::error::{ensure_non_empty, FftError};
use crate::options::TransformOptions;
use crate::padding::pad_to_power_of_two;

/// Forward DFT of `samples`, zero-padded to the next power of two.
///
/// # Example
/// ```
/// use fftcalc_core::{forward_transform, Complex};
///
/// let spectrum = forward_transform(&[Complex::ONE; 4]).unwrap();
/// assert!(spectrum[0].approx_eq(Complex::from_real(4.0), 1e-12));
/// ```
pub fn forward_transform(samples: &[Complex]) -> Result<Vec<Complex>, FftError> {
    forward_transform_with(samples, &TransformOptions::default())
}

/// Forward transform with explicit execution options.
pub fn forward_transform_with(
    samples: &[Complex],
    opts: &TransformOptions,
) -> Result<Vec<Complex>, FftError> {
    ensure_non_empty(samples, "forward transform")?;
    let padded = pad_to_power_of_two(samples);
    debug!(
        input_len = samples.len(),
        padded_len = padded.len(),
        parallel = opts.forks_at(padded.len()),
        "forward transform"
    );
    Ok(fft_recursive(&padded, opts))
}

/// Forward transform of real samples (lifted to complex with `im = 0`).
pub fn forward_transform_real(samples: &[f64]) -> Result<Vec<Complex>, FftError> {
    forward_transform(&crate::padding::lift_real(samples))
}

/// Inverse DFT of `spectrum`.
///
/// Computed as `conj(FFT(conj(X))) / N`, reusing the forward recursion. `N`
/// is the length of the transform actually performed, i.e. the spectrum
/// length padded to a power of two.
pub fn inverse_transform(spectrum: &[Complex]) -> Result<Vec<Complex>, FftError> {
    inverse_transform_with(spectrum, &TransformOptions::default())
}

/// Inverse transform with explicit execution options.
pub fn inverse_transform_with(
    spectrum: &[Complex],
    opts: &TransformOptions,
) -> Result<Vec<Complex>, FftError> {
    ensure_non_empty(spectrum, "inverse transform")?;
    let conjugated: Vec<Complex> = spectrum.iter().map(|c| c.conjugate()).collect();
    let transformed = forward_transform_with(&conjugated, opts)?;
    let n = transformed.len() as f64;
    Ok(transformed
        .into_iter()
        .map(|c| c.conjugate() / n)
        .collect())
}

/// Twiddle factor `exp(−2πi·k/n)`.
#[must_use]
pub fn twiddle(k: usize, n: usize) -> Complex {
    Complex::from_polar(1.0, -2.0 * PI * k as f64 / n as f64)
}

/// Recursive Cooley-Tukey over a power-of-two-length slice.
fn fft_recursive(data: &[Complex], opts: &TransformOptions) -> Vec<Complex> {
    let n = data.len();
    if n <= 1 {
        return data.to_vec();
    }

    let (even, odd) = split_even_odd(data);
    let (even, odd) = if opts.forks_at(n) {
        trace!(len = n, "forking half-transforms");
        rayon::join(
            || fft_recursive(&even, opts),
            || fft_recursive(&odd, opts),
        )
    } else {
        (fft_recursive(&even, opts), fft_recursive(&odd, opts))
    };

    combine(&even, &odd)
}

/// Stride-2 decimation in time.
fn split_even_odd(data: &[Complex]) -> (Vec<Complex>, Vec<Complex>) {
    let even = data.iter().step_by(2).copied().collect();
    let odd = data.iter().skip(1).step_by(2).copied().collect();
    (even, odd)
}

/// Butterfly: `out[k] = E[k] + w^k·O[k]`, `out[k + n/2] = E[k] − w^k·O[k]`.
fn combine(even: &[Complex], odd: &[Complex]) -> Vec<Complex> {
    debug_assert_eq!(even.len(), odd.len());
    let half = even.len();
    let n = half * 2;
    let mut out = vec![Complex::zero(); n];
    for (k, (&e, &o)) in even.iter().zip(odd).enumerate() {
        let t = twiddle(k, n) * o;
        out[k] = e + t;
        out[k + half] = e - t;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::lift_real;

    const EPS: f64 = 1e-9;

    fn assert_close(got: &[Complex], expected: &[Complex]) {
        assert_eq!(got.len(), expected.len(), "length mismatch");
        for (i, (g, e)) in got.iter().zip(expected).enumerate() {
            assert!(g.approx_eq(*e, EPS), "index {i}: got {g}, expected {e}");
        }
    }

    #[test]
    fn known_dft_of_1234() {
        let spectrum = forward_transform(&lift_real(&[1.0, 2.0, 3.0, 4.0])).unwrap();
        assert_close(
            &spectrum,
            &[
                Complex::new(10.0, 0.0),
                Complex::new(-2.0, 2.0),
                Complex::new(-2.0, 0.0),
                Complex::new(-2.0, -2.0),
            ],
        );
    }

    #[test]
    fn single_sample_is_its_own_transform() {
        let x = [Complex::new(42.0, -1.0)];
        assert_eq!(forward_transform(&x).unwrap(), x.to_vec());
        assert_eq!(inverse_transform(&x).unwrap(), x.to_vec());
    }

    #[test]
    fn empty_input_rejected() {
        assert!(matches!(
            forward_transform(&[]),
            Err(FftError::InvalidInput(_))
        ));
        assert!(matches!(
            inverse_transform(&[]),
            Err(FftError::InvalidInput(_))
        ));
        assert!(forward_transform_real(&[]).is_err());
    }

    #[test]
    fn length_three_pads_to_four() {
        let x = lift_real(&[1.0, 2.0, 3.0]);
        let spectrum = forward_transform(&x).unwrap();
        assert_eq!(spectrum.len(), 4);
        let explicit = forward_transform(&lift_real(&[1.0, 2.0, 3.0, 0.0])).unwrap();
        assert_close(&spectrum, &explicit);
    }

    #[test]
    fn roundtrip_recovers_input() {
        let x: Vec<Complex> = (0..16)
            .map(|i| Complex::new(f64::from(i).sin(), f64::from(i) * 0.25))
            .collect();
        let back = inverse_transform(&forward_transform(&x).unwrap()).unwrap();
        assert_close(&back, &x);
    }

    #[test]
    fn impulse_has_flat_spectrum() {
        let mut x = vec![Complex::ZERO; 8];
        x[0] = Complex::ONE;
        let spectrum = forward_transform(&x).unwrap();
        assert_close(&spectrum, &[Complex::ONE; 8]);
    }

    #[test]
    fn parallel_matches_sequential() {
        let x: Vec<Complex> = (0..256)
            .map(|i| Complex::new(f64::from(i % 7), -f64::from(i % 5)))
            .collect();
        let opts = TransformOptions {
            parallel_threshold: 64,
            ..TransformOptions::default()
        };
        let seq = forward_transform(&x).unwrap();
        let par = forward_transform_with(&x, &opts).unwrap();
        assert_close(&par, &seq);
        assert_close(&inverse_transform_with(&par, &opts).unwrap(), &x);
    }

    #[test]
    fn twiddle_quarter_turn() {
        assert!(twiddle(0, 8).approx_eq(Complex::ONE, EPS));
        assert!(twiddle(1, 4).approx_eq(Complex::new(0.0, -1.0), EPS));
        assert!(twiddle(2, 4).approx_eq(Complex::new(-1.0, 0.0), EPS));
    }
}
