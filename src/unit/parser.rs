use crate::unit::error::UnitError;
use crate::unit::types::{Unit, UnitKind};
use lazy_static::lazy_static;
use regex::Regex;

/// Longest numeric literal that is read from the start of the input
const MAX_LITERAL_CHARS: usize = 20;

lazy_static! {
    /// Leading decimal literal, anchored at the start of the text
    /// Digits are ASCII only, any other digit ends the literal
    /// Matches: optional sign, digits with optional fraction, optional exponent,
    /// or inf/infinity/nan
    /// Examples: "1.5", "-20", ".5e3", "+7.", "inf"
    static ref LEADING_NUMBER: Regex = Regex::new(
        r"^[+-]?(?:(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?|(?i:inf(?:inity)?|nan))"
    ).unwrap();
}

/// Whitespace as the C locale classifies it (includes vertical tab)
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Multiplier for the first character that cannot belong to the number.
///
/// Only that one character is consulted; anything that is not a known prefix means 1.
/// Lowercase 'k' and the micro sign are not prefixes here.
pub fn prefix_scale(text: &str) -> f64 {
    let first = text
        .chars()
        .find(|&c| !(is_space(c) || c.is_ascii_digit() || c == '.' || c == '-'));

    let scale = match first {
        Some('G') => 1e9,
        Some('M') => 1e6,
        Some('K') => 1e3,
        Some('m') => 1e-3,
        Some('u') => 1e-6,
        Some('n') => 1e-9,
        Some('p') => 1e-12,
        _ => 1.0,
    };
    log::trace!("prefix {:?} in '{}' scales by {}", first, text, scale);
    scale
}

/// Numeric literal at the start of `text`, after leading whitespace.
///
/// At most [`MAX_LITERAL_CHARS`] characters are read, so very long literals are cut
/// off rather than rejected.
pub fn leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start_matches(is_space);
    let window = match trimmed.char_indices().nth(MAX_LITERAL_CHARS) {
        Some((end, _)) => &trimmed[..end],
        None => trimmed,
    };

    let literal = LEADING_NUMBER.find(window)?.as_str();
    let unsigned = literal.trim_start_matches(['+', '-']).to_ascii_lowercase();
    let negative = literal.starts_with('-');

    let magnitude = if unsigned.starts_with("inf") {
        f64::INFINITY
    } else if unsigned == "nan" {
        f64::NAN
    } else {
        unsigned.parse::<f64>().ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Extra factor between the prefixed user input and the base representation of a kind
fn base_scale(unit: Unit) -> f64 {
    match unit.kind() {
        // Typed in seconds, stored in picoseconds
        Some(UnitKind::Picoseconds) => 1e12,
        _ => 1.0,
    }
}

/// Parse user input into the unit's base representation, or report text with no number
pub fn try_parse(unit: Unit, text: &str) -> Result<f64, UnitError> {
    let scale = prefix_scale(text);
    let value = leading_number(text).ok_or_else(|| UnitError::Unparseable(text.to_string()))?;
    Ok(value * scale * base_scale(unit))
}

/// Parse user input into the unit's base representation.
///
/// Never fails: text without a leading number parses as zero, so partially typed input
/// can be fed straight in.
pub fn parse_string(unit: Unit, text: &str) -> f64 {
    match try_parse(unit, text) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("{}, using 0", e);
            0.0
        }
    }
}

impl Unit {
    /// See [`parse_string`]
    pub fn parse_string(&self, text: &str) -> f64 {
        parse_string(*self, text)
    }

    /// See [`try_parse`]
    pub fn try_parse(&self, text: &str) -> Result<f64, UnitError> {
        try_parse(*self, text)
    }
}
