//! linscale: nice linear axis scales.
//!
//! Given raw bounds and a maximum tick count, [`ScaleCalculator`] derives a
//! rounded minimum, maximum and step size so that ticks land on round values
//! (`1`, `2`, `5` times a power of ten).

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ScaleConfig, ScaleSnapshot};
pub use crate::core::{Bounds, ComputedScale, NiceMode, NiceNumber, PctOrigin, ScaleCalculator};
pub use error::{ScaleError, ScaleResult};
