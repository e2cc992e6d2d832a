//! Default-format configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable naming the default unit format
pub const UNIT_FORMAT_ENV: &str = "MEASURE_UNIT_FORMAT";
/// Environment variable naming the default quantity format
pub const QUANTITY_FORMAT_ENV: &str = "MEASURE_QUANTITY_FORMAT";

/// Preferred default formatter names.
///
/// `None` leaves the choice to the registry ("Simple" when registered,
/// otherwise the first name in sort order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_format: Option<String>,
}

impl FormatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `MEASURE_UNIT_FORMAT` / `MEASURE_QUANTITY_FORMAT`; blank values are ignored
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            unit_format: read(UNIT_FORMAT_ENV),
            quantity_format: read(QUANTITY_FORMAT_ENV),
        }
    }

    pub fn with_unit_format(mut self, name: impl Into<String>) -> Self {
        self.unit_format = Some(name.into());
        self
    }

    pub fn with_quantity_format(mut self, name: impl Into<String>) -> Self {
        self.quantity_format = Some(name.into());
        self
    }
}
