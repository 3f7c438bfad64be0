//! # fftcalc-core
//!
//! Core library for FFTCalc-rs: complex arithmetic, recursive radix-2
//! Cooley-Tukey forward and inverse transforms, and polynomial
//! multiplication via the convolution theorem.
//!
//! Every entry point is a pure function of its input. Sequences whose length
//! is not a power of two are zero-padded; transform output has the padded
//! length, while polynomial products are truncated to `La + Lb − 1`.

pub mod complex;
pub mod constants;
pub mod convolution;
pub mod error;
pub mod naive;
pub mod options;
pub mod padding;
pub mod rounding;
pub mod spectrum;
pub mod transform;

// Re-exports
pub use complex::Complex;
pub use constants::{
    exit_codes, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_ROUND_DECIMALS, DEFAULT_TOLERANCE,
};
pub use convolution::{
    multiply_complex, multiply_polynomials, multiply_polynomials_raw,
    multiply_polynomials_with, pointwise_multiply, square_polynomial,
};
pub use error::FftError;
pub use options::TransformOptions;
pub use padding::{lift_real, next_power_of_two};
pub use transform::{
    forward_transform, forward_transform_real, forward_transform_with, inverse_transform,
    inverse_transform_with,
};
