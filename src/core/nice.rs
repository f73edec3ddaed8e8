use serde::{Deserialize, Serialize};

use crate::error::{ScaleError, ScaleResult};

const NICE_MANTISSAS: [u8; 4] = [1, 2, 5, 10];
// Index-matched with `NICE_MANTISSAS`; compared with strict `<`.
const ROUND_THRESHOLDS: [f64; 4] = [1.5, 3.0, 7.0, 10.0];

/// Rounding policy for [`nearest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NiceMode {
    /// Smallest nice number that is `>=` the input. Used for the raw range.
    #[default]
    Ceil,
    /// Picks the nice number whose threshold (`1.5`, `3`, `7`, `10`) the
    /// normalized input falls strictly below. Used for the step size.
    Round,
}

/// A value of the form `mantissa * 10^exponent` with `mantissa` in `{1, 2, 5}`.
///
/// A mantissa of `10` is folded into the next decade on construction, so two
/// equal nice numbers always compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NiceNumberRepr")]
pub struct NiceNumber {
    mantissa: u8,
    exponent: i32,
}

#[derive(Deserialize)]
struct NiceNumberRepr {
    mantissa: u8,
    exponent: i32,
}

impl TryFrom<NiceNumberRepr> for NiceNumber {
    type Error = ScaleError;

    fn try_from(repr: NiceNumberRepr) -> ScaleResult<Self> {
        Self::new(repr.mantissa, repr.exponent)
    }
}

impl NiceNumber {
    pub fn new(mantissa: u8, exponent: i32) -> ScaleResult<Self> {
        if !NICE_MANTISSAS.contains(&mantissa) {
            return Err(ScaleError::InvalidData(format!(
                "nice mantissa must be one of 1, 2, 5, 10, got {mantissa}"
            )));
        }
        if mantissa == 10 {
            let exponent = exponent.checked_add(1).ok_or_else(|| {
                ScaleError::InvalidData("nice exponent overflow".to_owned())
            })?;
            return Ok(Self {
                mantissa: 1,
                exponent,
            });
        }

        Ok(Self { mantissa, exponent })
    }

    #[must_use]
    pub fn mantissa(self) -> u8 {
        self.mantissa
    }

    #[must_use]
    pub fn exponent(self) -> i32 {
        self.exponent
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.multiple(1)
    }

    /// Returns `index * self` computed in integer units of the mantissa, so
    /// that e.g. `3 * 0.1` yields `0.3` rather than `0.30000000000000004`.
    #[must_use]
    pub fn multiple(self, index: i64) -> f64 {
        let units = index as f64 * f64::from(self.mantissa);
        scale_by_pow10(units, self.exponent)
    }
}

/// Finds the nice number nearest to `value` under `mode`.
///
/// `value` must be finite and strictly positive.
pub fn nearest(value: f64, mode: NiceMode) -> ScaleResult<NiceNumber> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ScaleError::NonPositiveMagnitude { value });
    }

    let mut exponent = value.log10().floor() as i32;
    let mut normalized = scale_by_pow10(value, -exponent);
    // log10 can land one decade off right at powers of ten.
    if normalized >= 10.0 {
        exponent += 1;
        normalized = scale_by_pow10(value, -exponent);
    } else if normalized < 1.0 {
        exponent -= 1;
        normalized = scale_by_pow10(value, -exponent);
    }
    if !normalized.is_finite() {
        return Err(ScaleError::NonFinite {
            field: "normalized magnitude",
            value: normalized,
        });
    }

    let index = match mode {
        NiceMode::Ceil => NICE_MANTISSAS
            .iter()
            .position(|candidate| normalized <= f64::from(*candidate)),
        NiceMode::Round => ROUND_THRESHOLDS
            .iter()
            .position(|threshold| normalized < *threshold),
    }
    .unwrap_or(NICE_MANTISSAS.len() - 1);

    NiceNumber::new(NICE_MANTISSAS[index], exponent)
}

// 10^309 overflows, so subnormal magnitudes are scaled in chunks.
const MAX_POW10_CHUNK: i32 = 300;

fn scale_by_pow10(mut value: f64, mut exponent: i32) -> f64 {
    while exponent > MAX_POW10_CHUNK {
        value *= 10_f64.powi(MAX_POW10_CHUNK);
        exponent -= MAX_POW10_CHUNK;
    }
    while exponent < -MAX_POW10_CHUNK {
        value /= 10_f64.powi(MAX_POW10_CHUNK);
        exponent += MAX_POW10_CHUNK;
    }

    if exponent >= 0 {
        value * 10_f64.powi(exponent)
    } else {
        value / 10_f64.powi(-exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::{NiceMode, NiceNumber, nearest};
    use crate::error::ScaleError;

    fn nice(mantissa: u8, exponent: i32) -> NiceNumber {
        NiceNumber::new(mantissa, exponent).expect("valid nice number")
    }

    #[test]
    fn ceil_mode_picks_smallest_nice_number_at_or_above() {
        assert_eq!(nearest(24.0, NiceMode::Ceil), Ok(nice(5, 1)));
        assert_eq!(nearest(1.0, NiceMode::Ceil), Ok(nice(1, 0)));
        assert_eq!(nearest(2.0, NiceMode::Ceil), Ok(nice(2, 0)));
        assert_eq!(nearest(5.0001, NiceMode::Ceil), Ok(nice(1, 1)));
        assert_eq!(nearest(0.03, NiceMode::Ceil), Ok(nice(5, -2)));
    }

    #[test]
    fn round_mode_uses_strict_thresholds() {
        assert_eq!(nearest(12.5, NiceMode::Round), Ok(nice(1, 1)));
        assert_eq!(nearest(1.5, NiceMode::Round), Ok(nice(2, 0)));
        assert_eq!(nearest(2.9, NiceMode::Round), Ok(nice(2, 0)));
        assert_eq!(nearest(3.0, NiceMode::Round), Ok(nice(5, 0)));
        assert_eq!(nearest(7.0, NiceMode::Round), Ok(nice(1, 1)));
        assert_eq!(nearest(0.5, NiceMode::Round), Ok(nice(5, -1)));
    }

    #[test]
    fn exact_powers_of_ten_stay_in_their_decade() {
        assert_eq!(nearest(1000.0, NiceMode::Ceil), Ok(nice(1, 3)));
        assert_eq!(nearest(0.001, NiceMode::Ceil), Ok(nice(1, -3)));
        assert_eq!(nearest(1e-7, NiceMode::Round), Ok(nice(1, -7)));
    }

    #[test]
    fn non_positive_and_non_finite_inputs_are_rejected() {
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                nearest(value, NiceMode::Ceil),
                Err(ScaleError::NonPositiveMagnitude { .. })
            ));
        }
    }

    #[test]
    fn subnormal_values_normalize() {
        assert_eq!(nearest(4e-310, NiceMode::Ceil), Ok(nice(5, -310)));
        assert_eq!(nearest(4e-310, NiceMode::Round), Ok(nice(5, -310)));
        assert!(nice(5, -310).value() > 0.0);
    }

    #[test]
    fn mantissa_ten_folds_into_next_decade() {
        assert_eq!(nice(10, 0), nice(1, 1));
        assert!(NiceNumber::new(3, 0).is_err());
    }

    #[test]
    fn multiples_avoid_accumulated_drift() {
        let step = nice(1, -1);
        assert_eq!(step.multiple(3), 0.3);
        assert_eq!(step.multiple(-7), -0.7);
        assert_eq!(nice(5, 2).multiple(4), 2000.0);
    }
}
