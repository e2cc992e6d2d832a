//! Quantity type - a value with an associated unit

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::{Dimension, Number, Unit};
use crate::unit::ConversionError;

/// A physical quantity: a numeric value with an associated unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quantity {
    /// The numeric value
    pub value: Number,
    /// The unit of measurement
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: Number, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// Create a dimensionless quantity (pure number)
    pub fn dimensionless(value: Number) -> Self {
        Quantity { value, unit: Unit::one() }
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension
    }

    pub fn is_dimensionless(&self) -> bool {
        self.unit.dimension.is_dimensionless()
    }

    /// Check if two quantities have compatible dimensions
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// Convert to SI base units
    pub fn to_si(&self) -> Quantity {
        Quantity::new(self.si_value(), self.si_unit())
    }

    /// Convert to another compatible unit
    pub fn convert_to(&self, target: &Unit) -> Result<Quantity, ConversionError> {
        let new_value = self.unit.convert_to(&self.value, target)?;
        Ok(Quantity::new(new_value, target.clone()))
    }

    /// Get the value in SI base units
    pub fn si_value(&self) -> Number {
        self.unit.to_si(&self.value)
    }

    /// The SI base unit for this quantity's dimension
    fn si_unit(&self) -> Unit {
        let dim = self.unit.dimension;
        if dim.is_dimensionless() {
            return Unit::one();
        }
        let symbol = format!("{}", dim);
        let name = dim.name().map(|s| s.to_string()).unwrap_or_else(|| symbol.clone());

        Unit::new(&symbol, &name, dim, Number::one(), "si_base")
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.symbol.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit.symbol)
        }
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        // Compare SI values for equality
        if !self.is_compatible(other) {
            return false;
        }
        self.si_value() == other.si_value()
    }
}
