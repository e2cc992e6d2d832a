//! Unit representation with conversion factors

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::{Dimension, Number, NumberError, Prefix};

/// A physical unit with its dimension and conversion to the SI base unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// The unit symbol (e.g., "m", "kg", "s")
    pub symbol: String,
    /// The unit name (e.g., "meter", "kilogram", "second")
    pub name: String,
    /// The dimensional signature
    pub dimension: Dimension,
    /// Factor to convert to SI base unit (value_si = value * to_si_factor + to_si_offset)
    pub to_si_factor: Number,
    /// Offset for non-proportional units like temperature (Celsius)
    pub to_si_offset: Number,
    /// Category for organization (e.g., "length", "mass", "time")
    pub category: String,
}

impl Unit {
    /// Create a new unit with proportional conversion (no offset)
    pub fn new(
        symbol: &str,
        name: &str,
        dimension: Dimension,
        to_si_factor: Number,
        category: &str,
    ) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            dimension,
            to_si_factor,
            to_si_offset: Number::zero(),
            category: category.to_string(),
        }
    }

    /// Create a unit with offset (for temperature conversions)
    pub fn with_offset(
        symbol: &str,
        name: &str,
        dimension: Dimension,
        to_si_factor: Number,
        to_si_offset: Number,
        category: &str,
    ) -> Self {
        Unit {
            to_si_offset,
            ..Unit::new(symbol, name, dimension, to_si_factor, category)
        }
    }

    /// A unitless "1"
    pub fn one() -> Self {
        Unit::new("", "one", Dimension::DIMENSIONLESS, Number::one(), "dimensionless")
    }

    /// The effective multiplier to the SI base unit
    pub fn multiplier(&self) -> &Number {
        &self.to_si_factor
    }

    /// Check if this is a base SI unit
    pub fn is_si_base(&self) -> bool {
        self.to_si_factor.is_one() && self.to_si_offset.is_zero()
    }

    /// Check if this unit has an offset (non-proportional conversion)
    pub fn has_offset(&self) -> bool {
        !self.to_si_offset.is_zero()
    }

    /// Check if two units are dimensionally compatible (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Derive a unit that is `factor` times this one.
    ///
    /// The offset stays in SI terms: `v * factor` in this unit, then
    /// `(v * factor) * to_si_factor + to_si_offset`.
    pub fn scale(&self, factor: &Number, symbol: String, name: String) -> Unit {
        Unit {
            symbol,
            name,
            dimension: self.dimension,
            to_si_factor: self.to_si_factor.mul(factor),
            to_si_offset: self.to_si_offset.clone(),
            category: self.category.clone(),
        }
    }

    /// Apply a prefix: `m.prefix(&KILO)` is the kilometer.
    ///
    /// Symbol and name are the prefix's glued in front of this unit's.
    pub fn prefix<P: Prefix + ?Sized>(&self, prefix: &P) -> Unit {
        self.scale(
            &prefix.factor(),
            format!("{}{}", prefix.symbol(), self.symbol),
            format!("{}{}", prefix.name(), self.name),
        )
    }

    /// Convert a value from this unit to SI base unit
    pub fn to_si(&self, value: &Number) -> Number {
        value.mul(&self.to_si_factor).add(&self.to_si_offset)
    }

    /// Convert a value from SI base unit to this unit
    pub fn from_si(&self, value_si: &Number) -> Result<Number, NumberError> {
        let shifted = value_si.sub(&self.to_si_offset);
        shifted.checked_div(&self.to_si_factor)
    }

    /// Convert a value from this unit to another compatible unit
    pub fn convert_to(&self, value: &Number, target: &Unit) -> Result<Number, ConversionError> {
        if !self.is_compatible(target) {
            return Err(ConversionError::IncompatibleDimensions {
                from: self.symbol.clone(),
                to: target.symbol.clone(),
                from_dim: self.dimension,
                to_dim: target.dimension,
            });
        }

        let si_value = self.to_si(value);
        Ok(target.from_si(&si_value)?)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Errors that can occur while resolving or converting units
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("cannot convert {from} ({from_dim}) to {to} ({to_dim}): incompatible dimensions")]
    IncompatibleDimensions {
        from: String,
        to: String,
        from_dim: Dimension,
        to_dim: Dimension,
    },

    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("numeric error: {0}")]
    Number(#[from] NumberError),
}
