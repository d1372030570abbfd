pub mod array;
pub mod error;
pub mod numeric;

pub use numeric::{
    linear::{LinearNumericScale, LinearNumericScaleConfig},
    pow::{PowNumericScale, PowNumericScaleConfig},
    ContinuousNumericScale,
};
