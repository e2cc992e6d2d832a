//! Measure Units - Prefix catalogs, units and built-in formats
//!
//! - `MetricPrefix` (24 SI prefixes, quecto to quetta) and `BinaryPrefix`
//!   (kibi to yobi), both implementing `measure_core::Prefix`
//! - `UNITS`: unprefixed SI, imperial and data units
//! - Formats: "Simple" (symbols), "ASCII" (ASCII-only symbols) and
//!   "Name" (spelled-out names), each as unit and quantity format
//! - `format_service()`: the process-wide `FormatService`

mod prefixes;
mod units;
mod parse;
mod formats;
mod service;

pub use prefixes::{MetricPrefix, BinaryPrefix, all_prefixes};
pub use units::{UnitRegistry, UNITS};
pub use parse::{parse_symbol, parse_name};
pub use formats::{SimpleUnitFormat, AsciiUnitFormat, NameUnitFormat, TextQuantityFormat, to_ascii};
pub use service::{load_formats, default_registry, format_service};
