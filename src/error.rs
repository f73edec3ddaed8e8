use thiserror::Error;

pub type ScaleResult<T> = Result<T, ScaleError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} is not a number: {input:?}")]
    InvalidNumber { field: &'static str, input: String },

    #[error("nice number requires a finite value > 0, got {value}")]
    NonPositiveMagnitude { value: f64 },

    #[error("scale bounds are degenerate: lower={lower}, upper={upper}")]
    DegenerateRange { lower: f64, upper: f64 },

    #[error("at least 2 ticks are required to derive a step, got {max_tick_count}")]
    InsufficientTicks { max_tick_count: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
