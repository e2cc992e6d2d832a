//! Formatter traits

use measure_core::{ConversionError, Quantity, Unit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of formatter a service hands out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormatType {
    UnitFormat,
    QuantityFormat,
}

impl FormatType {
    pub const ALL: [FormatType; 2] = [FormatType::UnitFormat, FormatType::QuantityFormat];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatType::UnitFormat => "UNIT_FORMAT",
            FormatType::QuantityFormat => "QUANTITY_FORMAT",
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a formatter
#[derive(Debug, Clone, Serialize)]
pub struct FormatMeta {
    /// Registry key, matched exactly (e.g. "Simple")
    pub name: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

/// Renders units as text and reads them back
pub trait UnitFormat: Send + Sync {
    fn meta(&self) -> FormatMeta;
    fn format(&self, unit: &Unit) -> String;
    fn parse(&self, text: &str) -> Result<Unit, ConversionError>;

    fn name(&self) -> &'static str {
        self.meta().name
    }
}

/// Renders quantities as text and reads them back
pub trait QuantityFormat: Send + Sync {
    fn meta(&self) -> FormatMeta;
    fn format(&self, quantity: &Quantity) -> String;
    fn parse(&self, text: &str) -> Result<Quantity, ConversionError>;

    fn name(&self) -> &'static str {
        self.meta().name
    }
}
