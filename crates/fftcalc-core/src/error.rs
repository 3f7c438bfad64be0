//! Error type for transform and convolution entry points.

/// Error returned by the FFT engine.
///
/// Every failure is a call-time precondition violation. Transforms are
/// deterministic, so an error is never transient and retrying with the same
/// input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FftError {
    /// The caller passed input the operation is undefined for
    /// (e.g. an empty sequence).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl FftError {
    /// Shorthand for the empty-sequence rejection shared by all entry points.
    pub(crate) fn empty(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} requires a non-empty sequence"))
    }
}

/// Reject empty input for `operation`.
pub(crate) fn ensure_non_empty<T>(values: &[T], operation: &str) -> Result<(), FftError> {
    if values.is_empty() {
        return Err(FftError::empty(operation));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_operation() {
        let err = FftError::empty("forward transform");
        assert_eq!(
            err.to_string(),
            "invalid input: forward transform requires a non-empty sequence"
        );
    }

    #[test]
    fn ensure_non_empty_accepts_values() {
        assert!(ensure_non_empty(&[1.0], "x").is_ok());
        assert!(matches!(
            ensure_non_empty::<f64>(&[], "x"),
            Err(FftError::InvalidInput(_))
        ));
    }
}
