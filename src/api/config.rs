use serde::{Deserialize, Serialize};

use crate::core::ScaleCalculator;
use crate::error::{ScaleError, ScaleResult};

/// Serializable calculator bootstrap configuration.
///
/// Bounds are applied only when both are present; a missing tick count leaves
/// the calculator unconfigured until one is set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScaleConfig {
    #[serde(default)]
    pub lower_bound: Option<f64>,
    #[serde(default)]
    pub upper_bound: Option<f64>,
    #[serde(default)]
    pub max_tick_count: Option<usize>,
}

impl ScaleConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bounds(mut self, low: f64, high: f64) -> Self {
        self.lower_bound = Some(low);
        self.upper_bound = Some(high);
        self
    }

    #[must_use]
    pub fn with_max_tick_count(mut self, ticks: usize) -> Self {
        self.max_tick_count = Some(ticks);
        self
    }

    pub fn to_json_pretty(self) -> ScaleResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ScaleError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ScaleResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ScaleError::InvalidData(format!("failed to parse config: {e}")))
    }
}

impl ScaleCalculator {
    pub fn from_config(config: &ScaleConfig) -> ScaleResult<Self> {
        let mut calculator = Self::new();
        if let (Some(low), Some(high)) = (config.lower_bound, config.upper_bound) {
            calculator.set_bounds(low, high)?;
        }
        if let Some(ticks) = config.max_tick_count {
            calculator.set_max_tick_count(ticks);
        }
        Ok(calculator)
    }

    /// Exports the current inputs. The computed scale is not part of the config.
    #[must_use]
    pub fn config(&self) -> ScaleConfig {
        let bounds = self.bounds();
        ScaleConfig {
            lower_bound: bounds.map(|b| b.lower()),
            upper_bound: bounds.map(|b| b.upper()),
            max_tick_count: self.max_tick_count(),
        }
    }
}
