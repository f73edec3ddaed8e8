use serde::{Deserialize, Serialize};

use crate::core::{Bounds, NiceNumber, ScaleCalculator};

/// Serializable view of a calculated scale together with the inputs it was
/// derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSnapshot {
    pub bounds: Bounds,
    pub max_tick_count: usize,
    pub minimum: f64,
    pub maximum: f64,
    pub step: NiceNumber,
    pub step_size: f64,
    pub range: f64,
    pub ticks: Vec<f64>,
}

impl ScaleCalculator {
    /// Returns `None` until a scale has been calculated.
    #[must_use]
    pub fn snapshot(&self) -> Option<ScaleSnapshot> {
        let scale = self.computed()?;
        Some(ScaleSnapshot {
            bounds: self.bounds()?,
            max_tick_count: self.max_tick_count()?,
            minimum: scale.min(),
            maximum: scale.max(),
            step: scale.step(),
            step_size: scale.step_size(),
            range: scale.range(),
            ticks: scale.ticks(),
        })
    }
}
