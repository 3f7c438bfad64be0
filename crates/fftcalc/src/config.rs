//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};

use fftcalc_cli::output::MAX_PRECISION;
use fftcalc_core::constants::MAX_ROUND_DECIMALS;
use fftcalc_core::{TransformOptions, DEFAULT_ROUND_DECIMALS};

use crate::errors::AppError;

/// FFTCalc-rs: Fast Fourier Transform and FFT polynomial multiplication.
#[derive(Parser, Debug)]
#[command(name = "fftcalc", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Decimal places shown in output.
    #[arg(short, long, global = true, default_value = "5", env = "FFTCALC_PRECISION")]
    pub precision: usize,

    /// Decimal places kept when rounding polynomial products.
    #[arg(long, global = true, default_value_t = DEFAULT_ROUND_DECIMALS)]
    pub round_decimals: u32,

    /// Transform length at which halves run in parallel (0 = default threshold).
    #[arg(long, global = true, env = "FFTCALC_PARALLEL_THRESHOLD")]
    pub parallel_threshold: Option<usize>,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Cross-check results against the direct O(N²) computation.
    #[arg(long, global = true)]
    pub verify: bool,

    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output the values).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output file path.
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Operation to run.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Forward FFT of real or complex samples (e.g. `1,2,3,4` or `1+2i 3`).
    Forward {
        /// Sample values, comma or space separated.
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Inverse FFT of a spectrum.
    Inverse {
        /// Spectrum values, comma or space separated.
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Multiply two polynomials given low-degree-first coefficients.
    Multiply {
        /// First polynomial coefficients (index i = coefficient of x^i).
        #[arg(long = "a", allow_hyphen_values = true)]
        left: String,
        /// Second polynomial coefficients.
        #[arg(long = "b", allow_hyphen_values = true)]
        right: String,
    },
    /// Magnitude spectrum and dominant frequencies of a signal.
    Spectrum {
        /// Sample values, comma or space separated.
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
        /// Spacing between samples (inverse of the sample rate).
        #[arg(long, default_value_t = 1.0)]
        spacing: f64,
        /// Number of dominant bins to report.
        #[arg(long, default_value_t = 3)]
        top: usize,
    },
    /// Run the built-in demonstrations.
    Demo,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Check flag combinations that clap cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.precision > MAX_PRECISION {
            return Err(AppError::Config(format!(
                "--precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        if self.round_decimals > MAX_ROUND_DECIMALS {
            return Err(AppError::Config(format!(
                "--round-decimals must be at most {MAX_ROUND_DECIMALS}, got {}",
                self.round_decimals
            )));
        }
        if self.json && self.quiet {
            return Err(AppError::Config(
                "--json and --quiet cannot be combined".into(),
            ));
        }
        Ok(())
    }

    /// Build normalized transform options from flags.
    #[must_use]
    pub fn transform_options(&self) -> TransformOptions {
        let mut opts = TransformOptions::default().with_round_decimals(self.round_decimals);
        if let Some(threshold) = self.parallel_threshold {
            opts.parallel_threshold = threshold;
        }
        opts.normalize()
    }
}

/// Join positional value arguments into one parseable string.
#[must_use]
pub fn join_values(values: &[String]) -> String {
    values.join(" ")
}
