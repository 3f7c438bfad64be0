//! # fftcalc-cli
//!
//! CLI input parsing, output formatting, result presentation, and shell
//! completion.

pub mod completion;
pub mod output;
pub mod parse;
pub mod presenter;
pub mod ui;

pub use parse::{parse_complex, parse_reals, parse_sequence, ParseError};
pub use presenter::CLIResultPresenter;
