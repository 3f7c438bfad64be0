//! Polynomial multiplication via the convolution theorem.
//!
//! Coefficient sequences are low-degree-first: index `i` holds the
//! coefficient of `x^i`. Both operands are zero-padded to the next power of
//! two that can hold the product, transformed, multiplied pointwise, and
//! inverse-transformed. The result is truncated to the exact product length
//! `La + Lb − 1`, so no padding leaks out.

use tracing::debug;

use crate::complex::Complex;
use crate::error::{ensure_non_empty, FftError};
use crate::options::TransformOptions;
use crate::padding::{lift_real, next_power_of_two, zero_pad};
use crate::rounding::round_all;
use crate::transform::{forward_transform_with, inverse_transform_with};

/// Multiply two real polynomials, rounding to the default precision.
///
/// An empty operand is rejected with [`FftError::InvalidInput`].
///
/// # Example
/// ```
/// use fftcalc_core::multiply_polynomials;
///
/// // (2 + 3x + x²)(1 + 2x + 4x²)
/// let product = multiply_polynomials(&[2.0, 3.0, 1.0], &[1.0, 2.0, 4.0]).unwrap();
/// assert_eq!(product, vec![2.0, 7.0, 15.0, 14.0, 4.0]);
/// ```
pub fn multiply_polynomials(a: &[f64], b: &[f64]) -> Result<Vec<f64>, FftError> {
    multiply_polynomials_with(a, b, &TransformOptions::default())
}

/// Multiply two real polynomials with explicit options.
///
/// Rounds to `opts.round_decimals` places after taking real parts.
pub fn multiply_polynomials_with(
    a: &[f64],
    b: &[f64],
    opts: &TransformOptions,
) -> Result<Vec<f64>, FftError> {
    let raw = multiply_polynomials_raw_with(a, b, opts)?;
    Ok(round_all(&raw, opts.round_decimals))
}

/// Multiply two real polynomials without the rounding step.
///
/// Coefficients carry the inverse transform's floating-point noise.
pub fn multiply_polynomials_raw(a: &[f64], b: &[f64]) -> Result<Vec<f64>, FftError> {
    multiply_polynomials_raw_with(a, b, &TransformOptions::default())
}

fn multiply_polynomials_raw_with(
    a: &[f64],
    b: &[f64],
    opts: &TransformOptions,
) -> Result<Vec<f64>, FftError> {
    ensure_non_empty(a, "polynomial multiply (left operand)")?;
    ensure_non_empty(b, "polynomial multiply (right operand)")?;
    let product = convolve(&lift_real(a), &lift_real(b), opts)?;
    Ok(real_parts(&product))
}

/// Multiply two complex-coefficient polynomials. No rounding is applied.
pub fn multiply_complex(a: &[Complex], b: &[Complex]) -> Result<Vec<Complex>, FftError> {
    ensure_non_empty(a, "complex multiply (left operand)")?;
    ensure_non_empty(b, "complex multiply (right operand)")?;
    convolve(a, b, &TransformOptions::default())
}

/// Square a real polynomial using a single forward transform.
pub fn square_polynomial(a: &[f64]) -> Result<Vec<f64>, FftError> {
    square_polynomial_with(a, &TransformOptions::default())
}

/// Square a real polynomial with explicit options.
pub fn square_polynomial_with(a: &[f64], opts: &TransformOptions) -> Result<Vec<f64>, FftError> {
    ensure_non_empty(a, "polynomial square")?;
    let target = 2 * a.len() - 1;
    let padded = next_power_of_two(target);
    debug!(len = a.len(), target, padded, "polynomial square");

    let mut spectrum = forward_transform_with(&zero_pad(&lift_real(a), padded), opts)?;
    // Reuse the single transform for both factors.
    for bin in &mut spectrum {
        *bin = *bin * *bin;
    }
    let mut result = inverse_transform_with(&spectrum, opts)?;
    result.truncate(target);
    Ok(round_all(&real_parts(&result), opts.round_decimals))
}

/// Pointwise product of two equal-length spectra.
///
/// # Panics
///
/// Panics if the spectra differ in length. Spectra produced for the same
/// padded length always match.
#[must_use]
pub fn pointwise_multiply(a: &[Complex], b: &[Complex]) -> Vec<Complex> {
    assert_eq!(a.len(), b.len(), "spectra must have equal length");
    a.iter().zip(b).map(|(&x, &y)| x * y).collect()
}

/// Linear convolution of two non-empty complex sequences via FFT.
fn convolve(
    a: &[Complex],
    b: &[Complex],
    opts: &TransformOptions,
) -> Result<Vec<Complex>, FftError> {
    let target = a.len() + b.len() - 1;
    let padded = next_power_of_two(target);
    debug!(
        left = a.len(),
        right = b.len(),
        target,
        padded,
        "convolution"
    );

    let fa = forward_transform_with(&zero_pad(a, padded), opts)?;
    let fb = forward_transform_with(&zero_pad(b, padded), opts)?;
    let product = pointwise_multiply(&fa, &fb);

    let mut result = inverse_transform_with(&product, opts)?;
    result.truncate(target);
    Ok(result)
}

/// Real components; imaginary parts are roundoff noise for real operands.
fn real_parts(values: &[Complex]) -> Vec<f64> {
    values.iter().map(|c| c.re).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_reference_example() {
        let product = multiply_polynomials(&[2.0, 3.0, 1.0], &[1.0, 2.0, 4.0]).unwrap();
        assert_eq!(product, vec![2.0, 7.0, 15.0, 14.0, 4.0]);
    }

    #[test]
    fn multiply_by_one_is_identity() {
        for c in [0.0, 1.0, -3.5, 1234.25] {
            assert_eq!(multiply_polynomials(&[c], &[1.0]).unwrap(), vec![c]);
        }
    }

    #[test]
    fn scalar_times_scalar() {
        assert_eq!(multiply_polynomials(&[6.0], &[7.0]).unwrap(), vec![42.0]);
    }

    #[test]
    fn mismatched_lengths() {
        // (1 + x)(1 + x + x² + x³ + x⁴)
        let product = multiply_polynomials(&[1.0, 1.0], &[1.0; 5]).unwrap();
        assert_eq!(product, vec![1.0, 2.0, 2.0, 2.0, 2.0, 1.0]);
    }

    #[test]
    fn empty_operand_rejected() {
        assert!(matches!(
            multiply_polynomials(&[], &[1.0]),
            Err(FftError::InvalidInput(_))
        ));
        assert!(multiply_polynomials(&[1.0], &[]).is_err());
        assert!(square_polynomial(&[]).is_err());
        assert!(multiply_complex(&[], &[Complex::ONE]).is_err());
    }

    #[test]
    fn raw_result_is_close_but_unrounded_length() {
        let raw = multiply_polynomials_raw(&[2.0, 3.0, 1.0], &[1.0, 2.0, 4.0]).unwrap();
        assert_eq!(raw.len(), 5);
        for (got, expected) in raw.iter().zip([2.0, 7.0, 15.0, 14.0, 4.0]) {
            assert!((got - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn custom_precision() {
        let opts = TransformOptions::default().with_round_decimals(1);
        let product = multiply_polynomials_with(&[0.25], &[0.5], &opts).unwrap();
        assert_eq!(product, vec![0.1]);
    }

    #[test]
    fn square_matches_multiply() {
        let a = [1.0, -2.0, 3.0, 0.5];
        assert_eq!(
            square_polynomial(&a).unwrap(),
            multiply_polynomials(&a, &a).unwrap()
        );
    }

    #[test]
    fn complex_multiply() {
        // (i)(i) = -1 ; (1 + i x)(1 - i x) = 1 + x²
        let product = multiply_complex(&[Complex::I], &[Complex::I]).unwrap();
        assert!(product[0].approx_eq(Complex::new(-1.0, 0.0), 1e-12));

        let product = multiply_complex(
            &[Complex::ONE, Complex::I],
            &[Complex::ONE, -Complex::I],
        )
        .unwrap();
        let expected = [Complex::ONE, Complex::ZERO, Complex::ONE];
        assert_eq!(product.len(), 3);
        for (g, e) in product.iter().zip(expected) {
            assert!(g.approx_eq(e, 1e-12), "got {g}, expected {e}");
        }
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn pointwise_length_mismatch_panics() {
        let _ = pointwise_multiply(&[Complex::ONE], &[Complex::ONE, Complex::ONE]);
    }
}
