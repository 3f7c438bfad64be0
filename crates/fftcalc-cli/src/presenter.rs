//! CLI result presenter.
//!
//! Renders transform, multiplication, and spectrum results either as
//! human-readable text or as JSON. Rendering returns a `String` so callers
//! can print it or write it to a file.

use std::time::Duration;

use serde::Serialize;

use fftcalc_core::Complex;

use crate::output::{
    format_complex_sequence, format_duration, format_real, format_real_sequence,
};
use crate::ui::header;

/// A transform result ready for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct TransformReport {
    /// Operation name (`forward`, `inverse`).
    pub operation: String,
    /// Number of input samples before padding.
    pub input_len: usize,
    /// Output values (padded length).
    pub values: Vec<Complex>,
    #[serde(skip)]
    pub duration: Duration,
}

/// A polynomial product ready for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct ProductReport {
    pub left: Vec<f64>,
    pub right: Vec<f64>,
    pub product: Vec<f64>,
    #[serde(skip)]
    pub duration: Duration,
}

/// One frequency bin of a spectrum analysis.
#[derive(Debug, Clone, Serialize)]
pub struct BinReport {
    pub index: usize,
    pub frequency: f64,
    pub magnitude: f64,
    pub phase: f64,
}

/// A spectrum analysis ready for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct SpectrumReport {
    pub input_len: usize,
    pub bins: Vec<BinReport>,
    pub dominant: Vec<usize>,
    #[serde(skip)]
    pub duration: Duration,
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    precision: usize,
    json: bool,
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(precision: usize, json: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            precision,
            json,
            verbose,
            quiet,
        }
    }

    /// Render a transform result.
    #[must_use]
    pub fn render_transform(&self, report: &TransformReport) -> String {
        if self.json {
            return to_json(report);
        }
        let values = format_complex_sequence(&report.values, self.precision);
        if self.quiet {
            return values;
        }

        let mut lines = vec![header(&format!("{} transform", report.operation))];
        lines.push(format!("Input length: {}", report.input_len));
        if report.values.len() != report.input_len {
            lines.push(format!(
                "Padded length: {} (zero-padded to a power of two)",
                report.values.len()
            ));
        }
        if self.verbose {
            lines.push(format!("Duration: {}", format_duration(report.duration)));
        }
        lines.push(format!("Output: {values}"));
        lines.join("\n")
    }

    /// Render a polynomial product.
    #[must_use]
    pub fn render_product(&self, report: &ProductReport) -> String {
        if self.json {
            return to_json(report);
        }
        let product = format_real_sequence(&report.product, self.precision);
        if self.quiet {
            return product;
        }

        let mut lines = vec![header("Polynomial multiplication")];
        lines.push(format!(
            "First polynomial:  {}",
            format_real_sequence(&report.left, self.precision)
        ));
        lines.push(format!(
            "Second polynomial: {}",
            format_real_sequence(&report.right, self.precision)
        ));
        if self.verbose {
            lines.push(format!("Duration: {}", format_duration(report.duration)));
        }
        lines.push(format!("Product:           {product}"));
        lines.join("\n")
    }

    /// Render a spectrum analysis.
    #[must_use]
    pub fn render_spectrum(&self, report: &SpectrumReport) -> String {
        if self.json {
            return to_json(report);
        }
        if self.quiet {
            let mags: Vec<f64> = report.bins.iter().map(|b| b.magnitude).collect();
            return format_real_sequence(&mags, self.precision);
        }

        let mut lines = vec![header("Frequency spectrum")];
        lines.push(format!("Input length: {}", report.input_len));
        if self.verbose {
            lines.push(format!("Duration: {}", format_duration(report.duration)));
        }
        lines.push(format!(
            "  {:>5} {:>12} {:>12} {:>12}",
            "bin", "frequency", "magnitude", "phase"
        ));
        for bin in &report.bins {
            lines.push(format!(
                "  F[{:>2}] {:>12} {:>12} {:>12}",
                bin.index,
                format_real(bin.frequency, self.precision),
                format_real(bin.magnitude, self.precision),
                format_real(bin.phase, self.precision),
            ));
        }
        let dominant: Vec<String> = report.dominant.iter().map(ToString::to_string).collect();
        lines.push(format!("Dominant bins: {}", dominant.join(", ")));
        lines.join("\n")
    }

    /// Print a rendered result to stdout.
    pub fn present(&self, rendered: &str) {
        println!("{rendered}");
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("failed to serialize report: {e}");
            String::from("{}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform_report() -> TransformReport {
        TransformReport {
            operation: "forward".into(),
            input_len: 3,
            values: vec![
                Complex::new(6.0, 0.0),
                Complex::new(-2.0, -2.0),
                Complex::new(2.0, 0.0),
                Complex::new(-2.0, 2.0),
            ],
            duration: Duration::from_micros(12),
        }
    }

    #[test]
    fn quiet_transform_is_bare_values() {
        let presenter = CLIResultPresenter::new(1, false, false, true);
        assert_eq!(
            presenter.render_transform(&transform_report()),
            "[6.0+0.0i, -2.0-2.0i, 2.0+0.0i, -2.0+2.0i]"
        );
    }

    #[test]
    fn normal_transform_mentions_padding() {
        let presenter = CLIResultPresenter::new(2, false, true, false);
        let text = presenter.render_transform(&transform_report());
        assert!(text.contains("Padded length: 4"));
        assert!(text.contains("Duration:"));
    }

    #[test]
    fn json_transform() {
        let presenter = CLIResultPresenter::new(2, true, false, false);
        let json = presenter.render_transform(&transform_report());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["operation"], "forward");
        assert_eq!(parsed["values"].as_array().unwrap().len(), 4);
        assert_eq!(parsed["values"][1]["im"], -2.0);
    }

    #[test]
    fn product_rendering() {
        let report = ProductReport {
            left: vec![2.0, 3.0, 1.0],
            right: vec![1.0, 2.0, 4.0],
            product: vec![2.0, 7.0, 15.0, 14.0, 4.0],
            duration: Duration::from_micros(5),
        };
        let quiet = CLIResultPresenter::new(0, false, false, true);
        assert_eq!(quiet.render_product(&report), "[2, 7, 15, 14, 4]");

        let normal = CLIResultPresenter::new(1, false, false, false);
        assert!(normal
            .render_product(&report)
            .contains("Product:           [2.0, 7.0, 15.0, 14.0, 4.0]"));
    }

    #[test]
    fn spectrum_rendering() {
        let report = SpectrumReport {
            input_len: 2,
            bins: vec![
                BinReport {
                    index: 0,
                    frequency: 0.0,
                    magnitude: 3.0,
                    phase: 0.0,
                },
                BinReport {
                    index: 1,
                    frequency: -0.5,
                    magnitude: 1.0,
                    phase: std::f64::consts::PI,
                },
            ],
            dominant: vec![0, 1],
            duration: Duration::ZERO,
        };
        let presenter = CLIResultPresenter::new(3, false, false, false);
        let text = presenter.render_spectrum(&report);
        assert!(text.contains("F[ 1]"));
        assert!(text.contains("Dominant bins: 0, 1"));

        let quiet = CLIResultPresenter::new(1, false, false, true);
        assert_eq!(quiet.render_spectrum(&report), "[3.0, 1.0]");
    }
}
