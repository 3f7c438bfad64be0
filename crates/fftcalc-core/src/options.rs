//! Transform execution options.

use crate::constants::{
    DEFAULT_PARALLEL_THRESHOLD, DEFAULT_ROUND_DECIMALS, MAX_ROUND_DECIMALS,
    MIN_PARALLEL_THRESHOLD, SEQUENTIAL,
};

/// Options for transform and convolution calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Sub-transform length at or above which the even and odd halves are
    /// transformed with `rayon::join` (0 = default threshold,
    /// [`SEQUENTIAL`] = never).
    pub parallel_threshold: usize,
    /// Decimal places kept by the rounding step of polynomial multiplication.
    pub round_decimals: u32,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: SEQUENTIAL,
            round_decimals: DEFAULT_ROUND_DECIMALS,
        }
    }
}

impl TransformOptions {
    /// Fork-join execution at the default threshold.
    #[must_use]
    pub fn parallel() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            ..Self::default()
        }
    }

    /// Set the rounding precision.
    #[must_use]
    pub fn with_round_decimals(mut self, decimals: u32) -> Self {
        self.round_decimals = decimals;
        self
    }

    /// Normalize options: zero threshold becomes the default, tiny thresholds
    /// are raised to the minimum, and precision is capped.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        } else if self.parallel_threshold < MIN_PARALLEL_THRESHOLD {
            self.parallel_threshold = MIN_PARALLEL_THRESHOLD;
        }
        self.round_decimals = self.round_decimals.min(MAX_ROUND_DECIMALS);
        self
    }

    /// Whether a sub-transform of `len` samples should fork its halves.
    ///
    /// A zero threshold means the default, whether or not the options were
    /// normalized.
    #[must_use]
    pub fn forks_at(&self, len: usize) -> bool {
        let threshold = match self.parallel_threshold {
            0 => DEFAULT_PARALLEL_THRESHOLD,
            t => t.max(2),
        };
        len >= threshold
    }
}
