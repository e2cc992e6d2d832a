//! Format Registry

use crate::{FormatConfig, FormatMeta, FormatType, QuantityFormat, UnitFormat};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Name preferred as default when the configuration names none
pub const DEFAULT_FORMAT_NAME: &str = "Simple";

/// Locates unit formatters by name
pub trait UnitFormatService: Send + Sync {
    /// The default unit format. Always available.
    fn unit_format(&self) -> &dyn UnitFormat;

    /// The unit format registered under `name`, or `None`
    fn get_unit_format(&self, name: &str) -> Option<&dyn UnitFormat>;
}

/// Locates unit and quantity formatters by name
pub trait FormatService: UnitFormatService {
    /// The default quantity format. Always available.
    fn quantity_format(&self) -> &dyn QuantityFormat;

    /// The quantity format registered under `name`, or `None`
    fn get_quantity_format(&self, name: &str) -> Option<&dyn QuantityFormat>;

    /// Every name `get_*_format` resolves for `kind`, as an owned snapshot
    fn available_format_names(&self, kind: FormatType) -> BTreeSet<String>;
}

/// Registry misconfiguration, reported by `FormatRegistryBuilder::build`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no {0} registered")]
    Empty(FormatType),

    #[error("default {kind} '{name}' is not registered")]
    UnknownDefault { kind: FormatType, name: String },
}

impl From<RegistryError> for measure_core::MeasureError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownDefault { ref name, .. } => {
                measure_core::MeasureError::unknown_format(name)
            }
            RegistryError::Empty(_) => {
                measure_core::MeasureError::new(measure_core::codes::REGISTRY, err.to_string())
            }
        }
    }
}

/// Collects formatters, then validates them into a `FormatRegistry`
#[derive(Default)]
pub struct FormatRegistryBuilder {
    unit_formats: HashMap<String, Arc<dyn UnitFormat>>,
    quantity_formats: HashMap<String, Arc<dyn QuantityFormat>>,
    config: FormatConfig,
}

impl FormatRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit_format<F: UnitFormat + 'static>(self, f: F) -> Self {
        self.with_shared_unit_format(Arc::new(f))
    }

    /// Register a unit format that is also used elsewhere (e.g. inside a quantity format)
    pub fn with_shared_unit_format(mut self, f: Arc<dyn UnitFormat>) -> Self {
        let name = f.name().to_string();
        if self.unit_formats.insert(name.clone(), f).is_some() {
            warn!(kind = %FormatType::UnitFormat, %name, "format registered twice, keeping the later one");
        }
        self
    }

    pub fn with_quantity_format<F: QuantityFormat + 'static>(self, f: F) -> Self {
        self.with_shared_quantity_format(Arc::new(f))
    }

    pub fn with_shared_quantity_format(mut self, f: Arc<dyn QuantityFormat>) -> Self {
        let name = f.name().to_string();
        if self.quantity_formats.insert(name.clone(), f).is_some() {
            warn!(kind = %FormatType::QuantityFormat, %name, "format registered twice, keeping the later one");
        }
        self
    }

    pub fn with_config(mut self, config: FormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<FormatRegistry, RegistryError> {
        let unit_default = choose_default(
            FormatType::UnitFormat,
            &self.unit_formats,
            self.config.unit_format.as_deref(),
        )?;
        let quantity_default = choose_default(
            FormatType::QuantityFormat,
            &self.quantity_formats,
            self.config.quantity_format.as_deref(),
        )?;

        debug!(
            unit_formats = self.unit_formats.len(),
            quantity_formats = self.quantity_formats.len(),
            default_unit = unit_default.name(),
            default_quantity = quantity_default.name(),
            "format registry built"
        );

        Ok(FormatRegistry {
            unit_formats: self.unit_formats,
            quantity_formats: self.quantity_formats,
            unit_default,
            quantity_default,
        })
    }
}

/// Pick the configured name, else "Simple", else the smallest registered name
fn choose_default<T: ?Sized>(
    kind: FormatType,
    formats: &HashMap<String, Arc<T>>,
    preferred: Option<&str>,
) -> Result<Arc<T>, RegistryError> {
    if let Some(name) = preferred {
        return formats.get(name).cloned().ok_or_else(|| RegistryError::UnknownDefault {
            kind,
            name: name.to_string(),
        });
    }

    if let Some(f) = formats.get(DEFAULT_FORMAT_NAME) {
        return Ok(f.clone());
    }

    formats.keys()
        .min()
        .and_then(|name| formats.get(name))
        .cloned()
        .ok_or(RegistryError::Empty(kind))
}

/// Immutable name → formatter registry.
///
/// Built once, then only read; all lookups take `&self` and the formatters
/// are `Send + Sync`, so a registry can be shared across threads as is.
pub struct FormatRegistry {
    unit_formats: HashMap<String, Arc<dyn UnitFormat>>,
    quantity_formats: HashMap<String, Arc<dyn QuantityFormat>>,
    unit_default: Arc<dyn UnitFormat>,
    quantity_default: Arc<dyn QuantityFormat>,
}

impl FormatRegistry {
    pub fn builder() -> FormatRegistryBuilder {
        FormatRegistryBuilder::new()
    }

    /// Name of the default formatter of the given kind
    pub fn default_format_name(&self, kind: FormatType) -> &'static str {
        match kind {
            FormatType::UnitFormat => self.unit_default.name(),
            FormatType::QuantityFormat => self.quantity_default.name(),
        }
    }

    /// Metadata for every formatter of the given kind, sorted by name
    pub fn list_formats(&self, kind: FormatType) -> Vec<FormatMeta> {
        let mut metas: Vec<FormatMeta> = match kind {
            FormatType::UnitFormat => self.unit_formats.values().map(|f| f.meta()).collect(),
            FormatType::QuantityFormat => self.quantity_formats.values().map(|f| f.meta()).collect(),
        };
        metas.sort_by(|a, b| a.name.cmp(b.name));
        metas
    }
}

impl UnitFormatService for FormatRegistry {
    fn unit_format(&self) -> &dyn UnitFormat {
        self.unit_default.as_ref()
    }

    fn get_unit_format(&self, name: &str) -> Option<&dyn UnitFormat> {
        let found = self.unit_formats.get(name).map(|f| f.as_ref());
        if found.is_none() {
            trace!(kind = %FormatType::UnitFormat, %name, "format lookup miss");
        }
        found
    }
}

impl FormatService for FormatRegistry {
    fn quantity_format(&self) -> &dyn QuantityFormat {
        self.quantity_default.as_ref()
    }

    fn get_quantity_format(&self, name: &str) -> Option<&dyn QuantityFormat> {
        let found = self.quantity_formats.get(name).map(|f| f.as_ref());
        if found.is_none() {
            trace!(kind = %FormatType::QuantityFormat, %name, "format lookup miss");
        }
        found
    }

    fn available_format_names(&self, kind: FormatType) -> BTreeSet<String> {
        match kind {
            FormatType::UnitFormat => self.unit_formats.keys().cloned().collect(),
            FormatType::QuantityFormat => self.quantity_formats.keys().cloned().collect(),
        }
    }
}
