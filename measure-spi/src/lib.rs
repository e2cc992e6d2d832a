//! Measure format service
//!
//! Decouples "give me a formatter" from "which formatters exist":
//! - `UnitFormat` / `QuantityFormat`: pluggable text renderers
//! - `UnitFormatService` / `FormatService`: lookup by name plus a default
//! - `FormatRegistry`: the immutable, thread-safe implementation

mod traits;
mod registry;
mod config;

pub use traits::{FormatType, FormatMeta, UnitFormat, QuantityFormat};
pub use registry::{
    UnitFormatService, FormatService,
    FormatRegistry, FormatRegistryBuilder, RegistryError,
    DEFAULT_FORMAT_NAME,
};
pub use config::{FormatConfig, UNIT_FORMAT_ENV, QUANTITY_FORMAT_ENV};

/// Re-export core types for format authors
pub mod prelude {
    pub use crate::{
        FormatType, FormatMeta, UnitFormat, QuantityFormat,
        UnitFormatService, FormatService, FormatRegistry,
    };
    pub use measure_core::prelude::*;
}
