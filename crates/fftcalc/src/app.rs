//! Application entry point and dispatch.

use std::f64::consts::PI;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use fftcalc_cli::output::write_to_file;
use fftcalc_cli::presenter::{
    BinReport, CLIResultPresenter, ProductReport, SpectrumReport, TransformReport,
};
use fftcalc_cli::{parse_reals, parse_sequence};
use fftcalc_core::padding::zero_pad;
use fftcalc_core::spectrum::{dominant_bins, frequencies, magnitudes, phases};
use fftcalc_core::{
    forward_transform_with, inverse_transform_with, lift_real, multiply_polynomials_with, naive,
    Complex, TransformOptions, DEFAULT_TOLERANCE,
};

use crate::config::{join_values, AppConfig, Command};
use crate::errors::AppError;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fftcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    config.validate()?;
    debug!("{}", full_version());

    let opts = config.transform_options();
    let presenter =
        CLIResultPresenter::new(config.precision, config.json, config.verbose, config.quiet);

    let command = config.command.clone().unwrap_or(Command::Demo);
    let rendered = match command {
        Command::Forward { values } => run_forward(&join_values(&values), config, &opts, &presenter)?,
        Command::Inverse { values } => run_inverse(&join_values(&values), config, &opts, &presenter)?,
        Command::Multiply { left, right } => {
            run_multiply(&left, &right, config, &opts, &presenter)?
        }
        Command::Spectrum {
            values,
            spacing,
            top,
        } => run_spectrum(&join_values(&values), spacing, top, &opts, &presenter)?,
        Command::Demo => run_demo(&opts, &presenter)?,
    };

    presenter.present(&rendered);

    if let Some(ref path) = config.output {
        write_to_file(path, &rendered).with_context(|| format!("failed to write {path}"))?;
    }

    Ok(())
}

fn run_forward(
    input: &str,
    config: &AppConfig,
    opts: &TransformOptions,
    presenter: &CLIResultPresenter,
) -> Result<String> {
    let samples = parse_sequence(input)?;
    let start = Instant::now();
    let spectrum = forward_transform_with(&samples, opts)?;
    let duration = start.elapsed();
    info!(len = samples.len(), padded = spectrum.len(), ?duration, "forward transform done");

    if config.verify {
        let reference = naive::dft(&zero_pad(&samples, spectrum.len()))?;
        check_close("forward", &spectrum, &reference, config)?;
    }

    Ok(presenter.render_transform(&TransformReport {
        operation: "forward".into(),
        input_len: samples.len(),
        values: spectrum,
        duration,
    }))
}

fn run_inverse(
    input: &str,
    config: &AppConfig,
    opts: &TransformOptions,
    presenter: &CLIResultPresenter,
) -> Result<String> {
    let spectrum = parse_sequence(input)?;
    let start = Instant::now();
    let samples = inverse_transform_with(&spectrum, opts)?;
    let duration = start.elapsed();
    info!(len = spectrum.len(), ?duration, "inverse transform done");

    if config.verify {
        // Transforming the result back must reproduce the (padded) spectrum.
        let back = forward_transform_with(&samples, opts)?;
        check_close("inverse", &back, &zero_pad(&spectrum, samples.len()), config)?;
    }

    Ok(presenter.render_transform(&TransformReport {
        operation: "inverse".into(),
        input_len: spectrum.len(),
        values: samples,
        duration,
    }))
}

fn run_multiply(
    left: &str,
    right: &str,
    config: &AppConfig,
    opts: &TransformOptions,
    presenter: &CLIResultPresenter,
) -> Result<String> {
    let a = parse_reals(left)?;
    let b = parse_reals(right)?;
    let start = Instant::now();
    let product = multiply_polynomials_with(&a, &b, opts)?;
    let duration = start.elapsed();
    info!(left = a.len(), right = b.len(), ?duration, "polynomial multiply done");

    if config.verify {
        let reference = naive::convolve(&a, &b)?;
        check_close(
            "multiply",
            &lift_real(&product),
            &lift_real(&reference),
            config,
        )?;
    }

    Ok(presenter.render_product(&ProductReport {
        left: a,
        right: b,
        product,
        duration,
    }))
}

fn run_spectrum(
    input: &str,
    spacing: f64,
    top: usize,
    opts: &TransformOptions,
    presenter: &CLIResultPresenter,
) -> Result<String> {
    let samples = parse_sequence(input)?;
    let start = Instant::now();
    let spectrum = forward_transform_with(&samples, opts)?;
    let duration = start.elapsed();

    let freqs = frequencies(spectrum.len(), spacing)?;
    let bins = magnitudes(&spectrum)
        .into_iter()
        .zip(phases(&spectrum))
        .zip(freqs)
        .enumerate()
        .map(|(index, ((magnitude, phase), frequency))| BinReport {
            index,
            frequency,
            magnitude,
            phase,
        })
        .collect();

    Ok(presenter.render_spectrum(&SpectrumReport {
        input_len: samples.len(),
        bins,
        dominant: dominant_bins(&spectrum, top),
        duration,
    }))
}

/// The classic demonstrations: a small transform with its round trip, a
/// polynomial product, and a two-tone frequency analysis.
fn run_demo(opts: &TransformOptions, presenter: &CLIResultPresenter) -> Result<String> {
    let mut sections = Vec::new();

    let x = lift_real(&[1.0, 2.0, 3.0, 4.0]);
    let start = Instant::now();
    let spectrum = forward_transform_with(&x, opts)?;
    sections.push(presenter.render_transform(&TransformReport {
        operation: "forward".into(),
        input_len: x.len(),
        values: spectrum.clone(),
        duration: start.elapsed(),
    }));

    let start = Instant::now();
    let recovered = inverse_transform_with(&spectrum, opts)?;
    sections.push(presenter.render_transform(&TransformReport {
        operation: "inverse".into(),
        input_len: spectrum.len(),
        values: recovered,
        duration: start.elapsed(),
    }));

    let (a, b) = (vec![2.0, 3.0, 1.0], vec![1.0, 2.0, 4.0]);
    let start = Instant::now();
    let product = multiply_polynomials_with(&a, &b, opts)?;
    sections.push(presenter.render_product(&ProductReport {
        left: a,
        right: b,
        product,
        duration: start.elapsed(),
    }));

    let samples = 8;
    let signal: Vec<String> = (0..samples)
        .map(|i| {
            let t = f64::from(i) / f64::from(samples);
            let value = (2.0 * PI * t).sin() + 0.5 * (2.0 * PI * 3.0 * t).sin();
            value.to_string()
        })
        .collect();
    sections.push(run_spectrum(&signal.join(" "), 1.0, 2, opts, presenter)?);

    Ok(sections.join("\n\n"))
}

/// Fail with [`AppError::Mismatch`] if `got` and `expected` diverge.
///
/// The tolerance scales with the size of the values compared.
fn check_close(
    operation: &str,
    got: &[Complex],
    expected: &[Complex],
    config: &AppConfig,
) -> Result<()> {
    let scale = expected
        .iter()
        .map(|c| c.magnitude())
        .fold(1.0_f64, f64::max);
    let tolerance = DEFAULT_TOLERANCE * scale * (expected.len() as f64).max(1.0);
    let max_error = got
        .iter()
        .zip(expected)
        .map(|(g, e)| (*g - *e).magnitude())
        .fold(0.0_f64, f64::max);

    if got.len() != expected.len() || max_error > tolerance {
        return Err(AppError::Mismatch {
            operation: operation.to_string(),
            max_error,
        }
        .into());
    }

    debug!(operation, max_error, tolerance, "verification passed");
    if !config.quiet && !config.json {
        fftcalc_cli::ui::print_success(&format!(
            "{operation} verified against direct computation (max error {max_error:.2e})"
        ));
    }
    Ok(())
}
