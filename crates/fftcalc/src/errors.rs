//! Application errors and exit codes.

use fftcalc_cli::ParseError;
use fftcalc_core::constants::exit_codes;
use fftcalc_core::FftError;

/// Errors raised by the application layer itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The fast result disagreed with the direct reference computation.
    #[error("{operation} result differs from the direct computation (max error {max_error:e})")]
    Mismatch { operation: String, max_error: f64 },

    /// Invalid flag combination or value.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Map an error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = if err.downcast_ref::<FftError>().is_some()
        || err.downcast_ref::<ParseError>().is_some()
    {
        exit_codes::ERROR_INPUT
    } else if let Some(app) = err.downcast_ref::<AppError>() {
        match app {
            AppError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
            AppError::Config(_) => exit_codes::ERROR_CONFIG,
        }
    } else {
        exit_codes::ERROR_GENERIC
    };
    u8::try_from(code).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        let input = anyhow::Error::new(FftError::InvalidInput("empty".into()));
        assert_eq!(exit_code(&input), 2);

        let parse = anyhow::Error::new(ParseError::InvalidNumber("x".into()));
        assert_eq!(exit_code(&parse), 2);

        let mismatch = anyhow::Error::new(AppError::Mismatch {
            operation: "forward".into(),
            max_error: 1.0,
        });
        assert_eq!(exit_code(&mismatch), 3);

        let config = anyhow::Error::new(AppError::Config("bad".into()));
        assert_eq!(exit_code(&config), 4);

        assert_eq!(exit_code(&anyhow::anyhow!("io")), 1);
    }

    #[test]
    fn context_preserves_code() {
        let err = anyhow::Error::new(FftError::InvalidInput("empty".into()))
            .context("forward transform failed");
        assert_eq!(exit_code(&err), 2);
    }
}
