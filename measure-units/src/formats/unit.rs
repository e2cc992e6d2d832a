//! Unit formats: symbols, ASCII-safe symbols, spelled-out names

use measure_spi::prelude::*;
use measure_core::ConversionError;
use crate::parse::{parse_name, parse_symbol};

/// Symbol spellings the ASCII format substitutes, non-ASCII first
const ASCII_REPLACEMENTS: [(&str, &str); 3] = [
    ("µ", "u"),
    ("°", "deg"),
    ("Ω", "Ohm"),
];

pub fn to_ascii(symbol: &str) -> String {
    ASCII_REPLACEMENTS.iter()
        .fold(symbol.to_string(), |acc, (from, to)| acc.replace(from, to))
}

fn from_ascii(text: &str) -> String {
    ASCII_REPLACEMENTS.iter()
        .skip(1)
        .fold(text.to_string(), |acc, (to, from)| acc.replace(from, to))
}

// ============ Simple ============

pub struct SimpleUnitFormat;

static SIMPLE_EXAMPLES: [&str; 3] = ["km", "µs", "KiB"];

impl UnitFormat for SimpleUnitFormat {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            name: "Simple",
            description: "Unit symbols as written in SI, prefix included",
            examples: &SIMPLE_EXAMPLES,
        }
    }

    fn format(&self, unit: &Unit) -> String {
        unit.symbol.clone()
    }

    fn parse(&self, text: &str) -> Result<Unit, ConversionError> {
        parse_symbol(text)
    }
}

// ============ ASCII ============

pub struct AsciiUnitFormat;

static ASCII_EXAMPLES: [&str; 3] = ["km", "us", "degC"];

impl UnitFormat for AsciiUnitFormat {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            name: "ASCII",
            description: "Unit symbols restricted to ASCII (u for micro, deg, Ohm)",
            examples: &ASCII_EXAMPLES,
        }
    }

    fn format(&self, unit: &Unit) -> String {
        to_ascii(&unit.symbol)
    }

    fn parse(&self, text: &str) -> Result<Unit, ConversionError> {
        parse_symbol(&from_ascii(text))
    }
}

// ============ Name ============

pub struct NameUnitFormat;

static NAME_EXAMPLES: [&str; 3] = ["kilometer", "microsecond", "kibibyte"];

impl UnitFormat for NameUnitFormat {
    fn meta(&self) -> FormatMeta {
        FormatMeta {
            name: "Name",
            description: "Spelled-out unit names",
            examples: &NAME_EXAMPLES,
        }
    }

    fn format(&self, unit: &Unit) -> String {
        unit.name.clone()
    }

    fn parse(&self, text: &str) -> Result<Unit, ConversionError> {
        parse_name(text)
    }
}
