//! The built-in format service

use std::sync::{Arc, LazyLock};
use measure_spi::{FormatConfig, FormatRegistry, FormatRegistryBuilder, RegistryError};
use tracing::{debug, error};
use crate::formats::{AsciiUnitFormat, NameUnitFormat, SimpleUnitFormat, TextQuantityFormat};

static SIMPLE_QUANTITY_EXAMPLES: [&str; 3] = ["5 km", "1.5 µs", "42"];
static ASCII_QUANTITY_EXAMPLES: [&str; 2] = ["1.5 us", "20 degC"];
static NAME_QUANTITY_EXAMPLES: [&str; 2] = ["5 kilometer", "20 degree Celsius"];

/// Built once from `MEASURE_UNIT_FORMAT` / `MEASURE_QUANTITY_FORMAT`
static FORMAT_SERVICE: LazyLock<Result<FormatRegistry, RegistryError>> = LazyLock::new(|| {
    let config = FormatConfig::from_env();
    debug!(?config, "initializing format service");
    let result = default_registry(config);
    if let Err(err) = &result {
        error!(%err, "format service configuration rejected");
    }
    result
});

/// Register the built-in unit and quantity formats
pub fn load_formats(builder: FormatRegistryBuilder) -> FormatRegistryBuilder {
    let simple = Arc::new(SimpleUnitFormat);
    let ascii = Arc::new(AsciiUnitFormat);
    let name = Arc::new(NameUnitFormat);

    builder
        .with_shared_unit_format(simple.clone())
        .with_shared_unit_format(ascii.clone())
        .with_shared_unit_format(name.clone())
        .with_quantity_format(TextQuantityFormat::new(
            simple,
            "Value and unit symbol",
            &SIMPLE_QUANTITY_EXAMPLES,
        ))
        .with_quantity_format(TextQuantityFormat::new(
            ascii,
            "Value and ASCII-only unit symbol",
            &ASCII_QUANTITY_EXAMPLES,
        ))
        .with_quantity_format(TextQuantityFormat::new(
            name,
            "Value and spelled-out unit name",
            &NAME_QUANTITY_EXAMPLES,
        ))
}

/// A registry of the built-in formats with the given defaults
pub fn default_registry(config: FormatConfig) -> Result<FormatRegistry, RegistryError> {
    load_formats(FormatRegistry::builder())
        .with_config(config)
        .build()
}

/// The process-wide service. Initialized on first call; every later call,
/// from any thread, sees the same registry.
pub fn format_service() -> Result<&'static FormatRegistry, RegistryError> {
    FORMAT_SERVICE.as_ref().map_err(Clone::clone)
}
