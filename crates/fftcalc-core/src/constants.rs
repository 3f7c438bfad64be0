//! Defaults for transform execution and result rounding.

/// Decimal places kept when rounding polynomial products.
///
/// Ten places removes the roundoff noise of the inverse transform while
/// leaving integer coefficients exact.
pub const DEFAULT_ROUND_DECIMALS: u32 = 10;

/// Largest rounding precision accepted; `f64` carries ~15.9 significant digits.
pub const MAX_ROUND_DECIMALS: u32 = 15;

/// Default sub-transform length at or above which the two recursive halves
/// are transformed concurrently.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 14;

/// Smallest accepted fork threshold. Forking below this costs more in
/// scheduling than the half-transforms themselves.
pub const MIN_PARALLEL_THRESHOLD: usize = 64;

/// Threshold value meaning "never fork".
pub const SEQUENTIAL: usize = usize::MAX;

/// Absolute tolerance used when comparing transform output in tests and
/// verification.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Exit codes for the command-line front end.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Input rejected by the engine or the parser.
    pub const ERROR_INPUT: i32 = 2;
    /// Fast result disagreed with the reference implementation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
