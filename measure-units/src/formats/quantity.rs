//! Quantity formats: "<value> <unit>" over any unit format

use std::sync::Arc;
use measure_spi::prelude::*;
use measure_core::ConversionError;

/// Writes the value, one space, then the unit through `unit_format`.
/// Dimensionless quantities with an empty symbol render as the bare value.
///
/// The format is registered under its unit format's name, so "Simple"
/// names both the unit and the quantity format of the same style.
pub struct TextQuantityFormat {
    unit_format: Arc<dyn UnitFormat>,
    description: &'static str,
    examples: &'static [&'static str],
}

impl TextQuantityFormat {
    pub fn new(
        unit_format: Arc<dyn UnitFormat>,
        description: &'static str,
        examples: &'static [&'static str],
    ) -> Self {
        Self { unit_format, description, examples }
    }

    pub fn unit_format(&self) -> &dyn UnitFormat {
        self.unit_format.as_ref()
    }
}

impl QuantityFormat for TextQuantityFormat {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            name: self.unit_format.name(),
            description: self.description,
            examples: self.examples,
        }
    }

    fn format(&self, quantity: &Quantity) -> String {
        let unit = self.unit_format.format(&quantity.unit);
        if unit.is_empty() || quantity.unit.symbol.is_empty() {
            quantity.value.to_string()
        } else {
            format!("{} {}", quantity.value, unit)
        }
    }

    fn parse(&self, text: &str) -> Result<Quantity, ConversionError> {
        let text = text.trim();
        let (value_text, unit_text) = match text.split_once(char::is_whitespace) {
            Some((value, unit)) => (value, unit.trim()),
            None => (text, ""),
        };

        let value = Number::from_str(value_text)
            .map_err(|_| ConversionError::InvalidNumber(value_text.to_string()))?;
        let unit = self.unit_format.parse(unit_text)?;
        Ok(Quantity::new(value, unit))
    }
}
