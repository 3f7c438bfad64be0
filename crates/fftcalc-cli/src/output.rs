//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use fftcalc_core::rounding::round_to;
use fftcalc_core::Complex;

/// Largest number of decimals the formatters will print.
pub const MAX_PRECISION: usize = 64;

/// Format a complex value with `precision` decimals, suppressing `-0`.
///
/// `precision` is capped at [`MAX_PRECISION`].
#[must_use]
pub fn format_complex(value: Complex, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    let decimals = u32::try_from(precision).unwrap_or(u32::MAX);
    let cleaned = Complex::new(round_to(value.re, decimals), round_to(value.im, decimals));
    format!("{cleaned:.precision$}")
}

/// Format a real value with `precision` decimals, suppressing `-0`.
///
/// `precision` is capped at [`MAX_PRECISION`].
#[must_use]
pub fn format_real(value: f64, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    let decimals = u32::try_from(precision).unwrap_or(u32::MAX);
    format!("{:.precision$}", round_to(value, decimals))
}

/// Format a complex sequence as `[a, b, ...]`.
#[must_use]
pub fn format_complex_sequence(values: &[Complex], precision: usize) -> String {
    let parts: Vec<String> = values
        .iter()
        .map(|&v| format_complex(v, precision))
        .collect();
    format!("[{}]", parts.join(", "))
}

/// Format a real sequence as `[a, b, ...]`.
#[must_use]
pub fn format_real_sequence(values: &[f64], precision: usize) -> String {
    let parts: Vec<String> = values.iter().map(|&v| format_real(v, precision)).collect();
    format!("[{}]", parts.join(", "))
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Write rendered output to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{contents}")?;
    Ok(())
}
