//! Measure Core - Fundamental types
//!
//! This crate provides the core types used throughout measure:
//! - `Number`: Arbitrary precision decimal numbers
//! - `Prefix`: Scale factors written as base^power, and `CustomPrefix`
//! - `Unit` / `Quantity`: units with an SI conversion factor, and values in them
//! - `MeasureError`: Structured errors with machine-readable codes

mod number;
mod prefix;
mod dimension;
mod unit;
mod quantity;
mod error;

pub use number::{Number, NumberError, WORK_PRECISION};
pub use prefix::{Prefix, CustomPrefix, PrefixError};
pub use dimension::Dimension;
pub use unit::{Unit, ConversionError};
pub use quantity::Quantity;
pub use error::{MeasureError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Number, Prefix, CustomPrefix, Dimension, Unit, Quantity, MeasureError};
    pub use crate::error::codes;
}
