//! Resolve unit text to catalog units, splitting off a leading prefix
//!
//! "km" resolves to kilo + m, "KiB" to kibi + B. A catalog entry always
//! wins over a prefixed reading, so "min" stays minute and "cd" stays
//! candela.

use measure_core::{ConversionError, Prefix, Unit};
use crate::prefixes::{BinaryPrefix, MetricPrefix};
use crate::units::UNITS;

/// Extra spellings accepted for MICRO
const MICRO_ALIASES: [&str; 2] = ["u", "μ"];

/// Resolve a symbol ("km", "µs", "KiB") or catalog alias ("meter")
pub fn parse_symbol(text: &str) -> Result<Unit, ConversionError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Unit::one());
    }
    if let Some(unit) = UNITS.get(text) {
        return Ok(unit.clone());
    }

    // Binary first: "Mi" must not read as mega + "i..."
    for prefix in BinaryPrefix::ALL {
        if let Some(unit) = split_symbol(text, prefix.symbol(), prefix) {
            return Ok(unit);
        }
    }
    for (symbol, prefix) in metric_symbols() {
        if let Some(unit) = split_symbol(text, symbol, &prefix) {
            return Ok(unit);
        }
    }

    Err(ConversionError::UnknownUnit(text.to_string()))
}

/// Resolve a spelled-out name ("kilometer", "kibibytes", "degree Celsius")
pub fn parse_name(text: &str) -> Result<Unit, ConversionError> {
    let text = text.trim();
    if text.is_empty() || text == "one" {
        return Ok(Unit::one());
    }
    if let Some(unit) = UNITS.get_name(text) {
        return Ok(unit.clone());
    }

    let prefixes = MetricPrefix::ALL.iter()
        .map(|p| p as &dyn Prefix)
        .chain(BinaryPrefix::ALL.iter().map(|p| p as &dyn Prefix));
    for prefix in prefixes {
        let Some(rest) = strip_prefix_name(text, prefix.name()) else {
            continue;
        };
        if let Some(unit) = UNITS.get_name(rest) {
            return Ok(unit.prefix(prefix));
        }
    }

    Err(ConversionError::UnknownUnit(text.to_string()))
}

/// Prefix names match ignoring ASCII case, like `MetricPrefix::from_name`
fn strip_prefix_name<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let head = text.get(..name.len())?;
    head.eq_ignore_ascii_case(name).then(|| &text[name.len()..])
}

fn split_symbol<P: Prefix + ?Sized>(text: &str, symbol: &str, prefix: &P) -> Option<Unit> {
    let rest = text.strip_prefix(symbol)?;
    UNITS.get_symbol(rest).map(|unit| unit.prefix(prefix))
}

/// Metric symbols with micro spellings, longest first so "da" beats "d"
fn metric_symbols() -> Vec<(&'static str, MetricPrefix)> {
    let mut symbols: Vec<(&'static str, MetricPrefix)> = MetricPrefix::ALL.iter()
        .map(|p| (p.symbol(), *p))
        .chain(MICRO_ALIASES.iter().map(|s| (*s, MetricPrefix::MICRO)))
        .collect();
    symbols.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    symbols
}

#[cfg(test)]
mod tests {
    use super::*;
    use measure_core::{Dimension, Number};

    #[test]
    fn test_plain_symbols() {
        assert_eq!(parse_symbol("m").unwrap().symbol, "m");
        assert_eq!(parse_symbol("min").unwrap().name, "minute");
        assert_eq!(parse_symbol("cd").unwrap().name, "candela");
        assert_eq!(parse_symbol("meter").unwrap().symbol, "m");
    }

    #[test]
    fn test_prefixed_symbols() {
        let km = parse_symbol("km").unwrap();
        assert_eq!(km.symbol, "km");
        assert_eq!(km.multiplier(), &Number::from_i64(1000));

        let kg = parse_symbol("kg").unwrap();
        assert_eq!(kg.dimension, Dimension::MASS);
        assert!(kg.multiplier().is_one());

        let dam = parse_symbol("dam").unwrap();
        assert_eq!(dam.multiplier(), &Number::from_i64(10));

        let ms = parse_symbol("ms").unwrap();
        assert_eq!(ms.dimension, Dimension::TIME);
    }

    #[test]
    fn test_micro_spellings() {
        for text in ["µs", "μs", "us"] {
            let unit = parse_symbol(text).unwrap();
            assert_eq!(unit.symbol, "µs", "{}", text);
            assert_eq!(unit.multiplier(), &Number::from_str("0.000001").unwrap());
        }
    }

    #[test]
    fn test_binary_symbols() {
        let kib = parse_symbol("KiB").unwrap();
        assert_eq!(kib.symbol, "KiB");
        assert_eq!(kib.multiplier(), &Number::from_i64(8 * 1024));

        let mib = parse_symbol("Mibit").unwrap();
        assert_eq!(mib.multiplier(), &Number::from_i64(1024 * 1024));
    }

    #[test]
    fn test_unknown_symbols() {
        assert_eq!(parse_symbol("xyz"), Err(ConversionError::UnknownUnit("xyz".to_string())));
        // Prefix alone or doubled
        assert!(parse_symbol("k").is_err());
        assert!(parse_symbol("kkm").is_err());
        // kilo + alias is not a symbol
        assert!(parse_symbol("kmeter").is_err());
    }

    #[test]
    fn test_empty_is_one() {
        assert_eq!(parse_symbol("").unwrap(), Unit::one());
        assert_eq!(parse_name("  ").unwrap(), Unit::one());
    }

    #[test]
    fn test_names() {
        assert_eq!(parse_name("meter").unwrap().symbol, "m");
        assert_eq!(parse_name("kilometer").unwrap().symbol, "km");
        assert_eq!(parse_name("kilometres").unwrap().symbol, "km");
        assert_eq!(parse_name("kibibyte").unwrap().symbol, "KiB");
        assert_eq!(parse_name("degree Celsius").unwrap().symbol, "°C");
        assert_eq!(parse_name("mile").unwrap().symbol, "mi");
        assert!(parse_name("km").is_err());
        assert!(parse_name("microsecond").is_ok());
        assert!(parse_name("kilofoo").is_err());
    }

    #[test]
    fn test_prefix_names_ignore_case() {
        assert_eq!(parse_name("Kilometer").unwrap().symbol, "km");
        assert_eq!(parse_name("MEGAwatt").unwrap().symbol, "MW");
        assert_eq!(parse_name("Kibibyte").unwrap().symbol, "KiB");
        assert_eq!(MetricPrefix::from_name("Kilo"), Some(MetricPrefix::KILO));
        // Unit names themselves stay exact
        assert!(parse_name("kiloMeter").is_err());
    }
}
