//! FFTCalc-rs library: application logic for the FFT calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
