#![doc = include_str!("../README.md")]

mod density;
pub use density::estimate_density;

mod intensity;
pub use intensity::{IntensityMatrix, InvalidDimensions};

mod redundancy;
pub use redundancy::{FilterError, filter_redundant};
