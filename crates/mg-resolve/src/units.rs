//! Normalization of the provider's human-readable quantity text.
//!
//! Durations arrive split into compound parts of varying units
//! (`"1 hour 20 mins"`), distances as a single value+unit pair
//! (`"500 m"`, `"7.3 km"`).  Everything normalizes to minutes and
//! kilometres respectively.

use thiserror::Error;

/// A quantity string that could not be normalized.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitParseError {
    #[error("empty quantity text")]
    Empty,

    #[error("bad number {0:?}")]
    BadNumber(String),

    #[error("unknown unit {0:?}")]
    UnknownUnit(String),

    /// A trailing number with no unit token after it.
    #[error("dangling number {0:?}")]
    DanglingNumber(String),
}

fn minutes_per(unit: &str) -> Option<f64> {
    match unit {
        "min" | "mins" | "minute" | "minutes" => Some(1.0),
        "hour" | "hours" | "hr" | "hrs" => Some(60.0),
        _ => None,
    }
}

fn km_per(unit: &str) -> Option<f64> {
    match unit {
        "m" => Some(1.0 / 1000.0),
        "km" => Some(1.0),
        _ => None,
    }
}

/// Parse a compound duration into minutes: alternating number/unit tokens,
/// parts summed.  `"1 hour 20 mins"` → `80.0`; `"32 mins"` → `32.0`.
pub fn parse_duration_min(text: &str) -> Result<f64, UnitParseError> {
    let mut tokens = text.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return Err(UnitParseError::Empty);
    }

    let mut total = 0.0;
    while let Some(number) = tokens.next() {
        let value: f64 = number
            .parse()
            .map_err(|_| UnitParseError::BadNumber(number.to_string()))?;
        let unit = tokens
            .next()
            .ok_or_else(|| UnitParseError::DanglingNumber(number.to_string()))?;
        let scale =
            minutes_per(unit).ok_or_else(|| UnitParseError::UnknownUnit(unit.to_string()))?;
        total += value * scale;
    }
    Ok(total)
}

/// Parse a single value+unit distance into kilometres.
/// `"500 m"` → `0.5`; `"7.3 km"` → `7.3`.
pub fn parse_distance_km(text: &str) -> Result<f64, UnitParseError> {
    let mut tokens = text.split_whitespace();
    let number = tokens.next().ok_or(UnitParseError::Empty)?;
    let value: f64 = number
        .parse()
        .map_err(|_| UnitParseError::BadNumber(number.to_string()))?;
    let unit = tokens
        .next()
        .ok_or_else(|| UnitParseError::DanglingNumber(number.to_string()))?;
    let scale = km_per(unit).ok_or_else(|| UnitParseError::UnknownUnit(unit.to_string()))?;
    Ok(value * scale)
}
