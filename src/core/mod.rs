pub mod nice;
pub mod primitives;
pub mod scale;
pub mod types;

pub use nice::{NiceMode, NiceNumber, nearest};
pub use scale::ScaleCalculator;
pub use types::{Bounds, ComputedScale, PctOrigin};
