use rust_decimal::Decimal;
use tracing::{debug, trace, warn};

use crate::core::nice::{NiceMode, nearest};
use crate::core::primitives::{clamp_tick_count, decimal_to_f64, parse_number, parse_tick_count};
use crate::core::types::{Bounds, ComputedScale, PctOrigin};
use crate::error::{ScaleError, ScaleResult};

// Largest index for which `index as f64` is still exact.
const MAX_STEP_INDEX: f64 = 9_007_199_254_740_992.0;

/// Nice linear axis scale calculator.
///
/// Holds raw bounds and a maximum tick count, and caches the rounded scale
/// produced by [`ScaleCalculator::calculate`]. Every setter drops the cached
/// scale; read accessors return `None` until the next successful calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaleCalculator {
    bounds: Option<Bounds>,
    max_tick_count: Option<usize>,
    computed: Option<ComputedScale>,
}

impl ScaleCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with bounds and tick count already applied.
    pub fn with_bounds(
        low: impl Into<f64>,
        high: impl Into<f64>,
        ticks: usize,
    ) -> ScaleResult<Self> {
        let mut calculator = Self::new();
        calculator.set_bounds(low, high)?;
        calculator.set_max_tick_count(ticks);
        Ok(calculator)
    }

    /// Stores the bounds in ascending order. Equal bounds are accepted here
    /// and rejected by [`ScaleCalculator::calculate`].
    pub fn set_bounds(&mut self, low: impl Into<f64>, high: impl Into<f64>) -> ScaleResult<()> {
        let bounds = Bounds::new(low.into(), high.into())?;
        trace!(
            lower = bounds.lower(),
            upper = bounds.upper(),
            "set scale bounds"
        );
        self.bounds = Some(bounds);
        self.computed = None;
        Ok(())
    }

    pub fn set_bounds_from_str(&mut self, low: &str, high: &str) -> ScaleResult<()> {
        let low = parse_number(low, "lower bound")?;
        let high = parse_number(high, "upper bound")?;
        self.set_bounds(low, high)
    }

    pub fn set_bounds_decimal(&mut self, low: Decimal, high: Decimal) -> ScaleResult<()> {
        let low = decimal_to_f64(low, "lower bound")?;
        let high = decimal_to_f64(high, "upper bound")?;
        self.set_bounds(low, high)
    }

    /// Sets the desired tick count, clamped to at least one.
    pub fn set_max_tick_count(&mut self, ticks: usize) {
        let ticks = ticks.max(1);
        trace!(max_tick_count = ticks, "set max tick count");
        self.max_tick_count = Some(ticks);
        self.computed = None;
    }

    pub fn set_max_tick_count_from_str(&mut self, ticks: &str) -> ScaleResult<()> {
        let ticks = parse_tick_count(ticks)?;
        self.set_max_tick_count(clamp_tick_count(ticks));
        Ok(())
    }

    /// Makes the bounds symmetric about `value`, widening them as needed.
    ///
    /// Returns `Ok(false)` without changes when no bounds are set.
    pub fn center_at(&mut self, value: f64) -> ScaleResult<bool> {
        let Some(bounds) = self.bounds else {
            return Ok(false);
        };

        let centered = bounds.centered_at(value)?;
        debug!(
            center = value,
            lower = centered.lower(),
            upper = centered.upper(),
            "centered scale bounds"
        );
        self.bounds = Some(centered);
        self.computed = None;
        Ok(true)
    }

    pub fn center_at_origin(&mut self) -> ScaleResult<bool> {
        self.center_at(0.0)
    }

    /// Derives the rounded scale from the current bounds and tick count.
    ///
    /// Returns `Ok(false)` when bounds or tick count are unset. On `Ok(false)`
    /// and on error the previously cached state is left as is.
    pub fn calculate(&mut self) -> ScaleResult<bool> {
        let (Some(bounds), Some(max_tick_count)) = (self.bounds, self.max_tick_count) else {
            trace!(
                has_bounds = self.bounds.is_some(),
                has_max_tick_count = self.max_tick_count.is_some(),
                "scale not configured, skipping calculation"
            );
            return Ok(false);
        };

        match derive_scale(bounds, max_tick_count) {
            Ok(scale) => {
                debug!(
                    lower = bounds.lower(),
                    upper = bounds.upper(),
                    max_tick_count,
                    min = scale.min(),
                    max = scale.max(),
                    step = scale.step_size(),
                    tick_count = scale.tick_count(),
                    "calculated scale"
                );
                self.computed = Some(scale);
                Ok(true)
            }
            Err(err) => {
                warn!(
                    lower = bounds.lower(),
                    upper = bounds.upper(),
                    max_tick_count,
                    error = %err,
                    "scale calculation failed"
                );
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    #[must_use]
    pub fn max_tick_count(&self) -> Option<usize> {
        self.max_tick_count
    }

    #[must_use]
    pub fn is_computed(&self) -> bool {
        self.computed.is_some()
    }

    #[must_use]
    pub fn computed(&self) -> Option<ComputedScale> {
        self.computed
    }

    #[must_use]
    pub fn step_size(&self) -> Option<f64> {
        self.computed.map(ComputedScale::step_size)
    }

    #[must_use]
    pub fn range(&self) -> Option<f64> {
        self.computed.map(ComputedScale::range)
    }

    #[must_use]
    pub fn maximum(&self) -> Option<f64> {
        self.computed.map(ComputedScale::max)
    }

    #[must_use]
    pub fn minimum(&self) -> Option<f64> {
        self.computed.map(ComputedScale::min)
    }

    #[must_use]
    pub fn tick_count(&self) -> Option<usize> {
        self.computed.map(ComputedScale::tick_count)
    }

    #[must_use]
    pub fn ticks(&self) -> Option<Vec<f64>> {
        self.computed.map(ComputedScale::ticks)
    }

    #[must_use]
    pub fn ticks_reverse(&self) -> Option<Vec<f64>> {
        self.computed.map(ComputedScale::ticks_reverse)
    }

    #[must_use]
    pub fn is_negative(&self) -> Option<bool> {
        self.computed.map(ComputedScale::is_negative)
    }

    #[must_use]
    pub fn crosses_zero(&self) -> Option<bool> {
        self.computed.map(ComputedScale::crosses_zero)
    }

    /// Position of `value` measured from the scale minimum, in percent.
    #[must_use]
    pub fn pct(&self, value: f64) -> Option<f64> {
        self.pct_from(value, PctOrigin::Min)
    }

    #[must_use]
    pub fn pct_from(&self, value: f64, origin: PctOrigin) -> Option<f64> {
        self.computed.map(|scale| scale.pct(value, origin))
    }
}

fn derive_scale(bounds: Bounds, max_tick_count: usize) -> ScaleResult<ComputedScale> {
    if bounds.is_degenerate() {
        return Err(ScaleError::DegenerateRange {
            lower: bounds.lower(),
            upper: bounds.upper(),
        });
    }
    if max_tick_count < 2 {
        return Err(ScaleError::InsufficientTicks { max_tick_count });
    }

    let raw_range = bounds.span();
    if !raw_range.is_finite() {
        return Err(ScaleError::NonFinite {
            field: "raw range",
            value: raw_range,
        });
    }

    let nice_range = nearest(raw_range, NiceMode::Ceil)?.value();
    if !nice_range.is_finite() {
        return Err(ScaleError::NonFinite {
            field: "nice range",
            value: nice_range,
        });
    }
    let raw_step = nice_range / (max_tick_count - 1) as f64;
    let step = nearest(raw_step, NiceMode::Round)?;
    let step_size = step.value();

    // Division noise can put the snapped index one step off either way; the
    // tightest multiple enclosing the bound wins.
    let mut min_index = (bounds.lower() / step_size).floor();
    if step.multiple(step_index(min_index)?) > bounds.lower() {
        min_index -= 1.0;
    } else if step.multiple(step_index(min_index + 1.0)?) <= bounds.lower() {
        min_index += 1.0;
    }
    let mut max_index = (bounds.upper() / step_size).ceil();
    if step.multiple(step_index(max_index)?) < bounds.upper() {
        max_index += 1.0;
    } else if step.multiple(step_index(max_index - 1.0)?) >= bounds.upper() {
        max_index -= 1.0;
    }

    ComputedScale::new(step, step_index(min_index)?, step_index(max_index)?)
}

fn step_index(index: f64) -> ScaleResult<i64> {
    if !index.is_finite() {
        return Err(ScaleError::NonFinite {
            field: "step index",
            value: index,
        });
    }
    if index.abs() > MAX_STEP_INDEX {
        return Err(ScaleError::InvalidData(format!(
            "bounds are too far from zero for the step size (step index {index})"
        )));
    }
    Ok(index as i64)
}
