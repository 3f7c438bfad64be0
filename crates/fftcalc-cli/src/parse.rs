//! Parsing of numeric sequences from command-line text.
//!
//! Values are separated by commas and/or whitespace, optionally wrapped in
//! `[` `]`. Each value is a real (`1.5`, `-2e3`) or a complex number in
//! rectangular form (`1+2i`, `2-0.5i`, `-3i`, `i`); `j` is accepted in place
//! of `i`.

use fftcalc_core::Complex;

/// Error raised for malformed command-line numbers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token is not a number.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// A complex value was given where only reals are accepted.
    #[error("expected a real coefficient, got '{0}'")]
    NotReal(String),
}

/// Parse a whitespace/comma separated list of real or complex values.
///
/// An empty list parses to an empty vector; rejecting it is the engine's job.
pub fn parse_sequence(input: &str) -> Result<Vec<Complex>, ParseError> {
    tokens(input).map(parse_complex).collect()
}

/// Parse a whitespace/comma separated list of real values.
pub fn parse_reals(input: &str) -> Result<Vec<f64>, ParseError> {
    tokens(input)
        .map(|token| {
            if is_imaginary(token) {
                Err(ParseError::NotReal(token.to_string()))
            } else {
                parse_real(token)
            }
        })
        .collect()
}

/// Parse a single real or complex value.
pub fn parse_complex(token: &str) -> Result<Complex, ParseError> {
    let s = token.trim();
    let Some(body) = s.strip_suffix(|c: char| c == 'i' || c == 'j') else {
        return parse_real(s).map(Complex::from_real);
    };

    // Split at the last sign that is neither leading nor an exponent sign.
    let bytes = body.as_bytes();
    let split = body
        .char_indices()
        .rev()
        .find(|&(idx, c)| {
            idx > 0 && (c == '+' || c == '-') && !matches!(bytes[idx - 1], b'e' | b'E')
        })
        .map(|(idx, _)| idx);

    let (re_part, im_part) = match split {
        Some(idx) => (&body[..idx], &body[idx..]),
        None => ("", body),
    };

    let re = if re_part.is_empty() {
        0.0
    } else {
        parse_real(re_part).map_err(|_| ParseError::InvalidNumber(s.to_string()))?
    };
    let im = match im_part {
        "" | "+" => 1.0,
        "-" => -1.0,
        other => parse_real(other).map_err(|_| ParseError::InvalidNumber(s.to_string()))?,
    };
    Ok(Complex::new(re, im))
}

fn parse_real(token: &str) -> Result<f64, ParseError> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

fn is_imaginary(token: &str) -> bool {
    token.ends_with(|c: char| c == 'i' || c == 'j')
}

fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}
