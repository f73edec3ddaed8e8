use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ScaleError, ScaleResult};

pub fn decimal_to_f64(value: Decimal, field: &'static str) -> ScaleResult<f64> {
    value.to_f64().ok_or_else(|| {
        ScaleError::InvalidData(format!("{field} cannot be represented as f64"))
    })
}

/// Parses a bound from text. Surrounding whitespace is ignored; anything that
/// is not a finite number is rejected.
pub fn parse_number(input: &str, field: &'static str) -> ScaleResult<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| ScaleError::InvalidNumber {
            field,
            input: input.to_owned(),
        })?;
    if !value.is_finite() {
        return Err(ScaleError::NonFinite { field, value });
    }
    Ok(value)
}

/// Parses a tick count from text, truncating fractional input toward zero
/// (`"4.7"` becomes `4`). The result is not clamped.
pub fn parse_tick_count(input: &str) -> ScaleResult<i64> {
    let trimmed = input.trim();
    if let Ok(count) = trimmed.parse::<i64>() {
        return Ok(count);
    }

    parse_number(trimmed, "max tick count").map(|value| value.trunc() as i64)
}

/// Clamps a signed tick count to the minimum of one tick.
#[must_use]
pub fn clamp_tick_count(count: i64) -> usize {
    usize::try_from(count.max(1)).unwrap_or(usize::MAX)
}
