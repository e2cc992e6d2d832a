//! Built-in formats

mod unit;
mod quantity;

pub use unit::{SimpleUnitFormat, AsciiUnitFormat, NameUnitFormat, to_ascii};
pub use quantity::TextQuantityFormat;
