use serde::{Deserialize, Serialize};

use crate::core::nice::NiceNumber;
use crate::error::{ScaleError, ScaleResult};

/// Raw caller-supplied bounds, always stored with `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundsRepr")]
pub struct Bounds {
    lower: f64,
    upper: f64,
}

#[derive(Deserialize)]
struct BoundsRepr {
    lower: f64,
    upper: f64,
}

impl TryFrom<BoundsRepr> for Bounds {
    type Error = ScaleError;

    fn try_from(repr: BoundsRepr) -> ScaleResult<Self> {
        Self::new(repr.lower, repr.upper)
    }
}

impl Bounds {
    /// Builds bounds from two values in any order.
    pub fn new(low: f64, high: f64) -> ScaleResult<Self> {
        ensure_finite("lower bound", low)?;
        ensure_finite("upper bound", high)?;

        Ok(Self {
            lower: low.min(high),
            upper: low.max(high),
        })
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.lower == self.upper
    }

    #[must_use]
    pub fn encloses(self, other: Bounds) -> bool {
        self.lower <= other.lower && self.upper >= other.upper
    }

    /// Widens the bounds so they are symmetric about `center` while still
    /// enclosing the current interval.
    pub fn centered_at(self, center: f64) -> ScaleResult<Self> {
        ensure_finite("center", center)?;

        let half_span = (center - self.lower).abs().max((center - self.upper).abs());
        // Rounding must never shrink the interval.
        let lower = (center - half_span).min(self.lower);
        let upper = (center + half_span).max(self.upper);
        ensure_finite("centered lower bound", lower)?;
        ensure_finite("centered upper bound", upper)?;
        Ok(Self { lower, upper })
    }
}

/// Where [`ComputedScale::pct`] measures from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PctOrigin {
    #[default]
    Min,
    Max,
}

/// Rounded scale derived from [`Bounds`] and a tick count.
///
/// Bounds are kept as integer multiples of `step`, so `range` is an exact
/// multiple of the step size and the tick list never drifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputedScale {
    step: NiceNumber,
    min_index: i64,
    max_index: i64,
}

impl ComputedScale {
    pub(crate) fn new(step: NiceNumber, min_index: i64, max_index: i64) -> ScaleResult<Self> {
        if min_index >= max_index {
            return Err(ScaleError::InvalidData(format!(
                "scale must span at least one step: min_index={min_index}, max_index={max_index}"
            )));
        }
        Ok(Self {
            step,
            min_index,
            max_index,
        })
    }

    #[must_use]
    pub fn step(self) -> NiceNumber {
        self.step
    }

    #[must_use]
    pub fn step_size(self) -> f64 {
        self.step.value()
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.step.multiple(self.min_index)
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.step.multiple(self.max_index)
    }

    #[must_use]
    pub fn range(self) -> f64 {
        self.step.multiple(self.max_index - self.min_index)
    }

    /// Number of ticks from `min` to `max` inclusive.
    #[must_use]
    pub fn tick_count(self) -> usize {
        usize::try_from(self.max_index - self.min_index)
            .map_or(usize::MAX, |steps| steps.saturating_add(1))
    }

    #[must_use]
    pub fn ticks(self) -> Vec<f64> {
        (self.min_index..=self.max_index)
            .map(|index| self.step.multiple(index))
            .collect()
    }

    #[must_use]
    pub fn ticks_reverse(self) -> Vec<f64> {
        (self.min_index..=self.max_index)
            .rev()
            .map(|index| self.step.multiple(index))
            .collect()
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        self.max() <= 0.0
    }

    #[must_use]
    pub fn crosses_zero(self) -> bool {
        self.min() < 0.0 && self.max() > 0.0
    }

    /// Position of `value` in percent of `range`. Not clamped to `[0, 100]`.
    #[must_use]
    pub fn pct(self, value: f64, origin: PctOrigin) -> f64 {
        let offset = match origin {
            PctOrigin::Min => value - self.min(),
            PctOrigin::Max => self.max() - value,
        };
        offset / self.range() * 100.0
    }

    /// Inverse of [`ComputedScale::pct`].
    #[must_use]
    pub fn value_at_pct(self, pct: f64, origin: PctOrigin) -> f64 {
        let offset = pct / 100.0 * self.range();
        match origin {
            PctOrigin::Min => self.min() + offset,
            PctOrigin::Max => self.max() - offset,
        }
    }
}

fn ensure_finite(field: &'static str, value: f64) -> ScaleResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScaleError::NonFinite { field, value })
    }
}
