//! Prefix catalogs: SI metric prefixes and IEC binary prefixes
//!
//! Both are closed sets of constants built on the `Prefix` trait; callers
//! who need something else use `CustomPrefix`.

use measure_core::{Prefix, Unit};
use serde::Serialize;

/// A decimal SI prefix, 10^power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MetricPrefix {
    symbol: &'static str,
    name: &'static str,
    power: i32,
}

impl MetricPrefix {
    const fn new(symbol: &'static str, name: &'static str, power: i32) -> Self {
        Self { symbol, name, power }
    }

    pub const QUETTA: MetricPrefix = MetricPrefix::new("Q", "quetta", 30);
    pub const RONNA: MetricPrefix = MetricPrefix::new("R", "ronna", 27);
    pub const YOTTA: MetricPrefix = MetricPrefix::new("Y", "yotta", 24);
    pub const ZETTA: MetricPrefix = MetricPrefix::new("Z", "zetta", 21);
    pub const EXA: MetricPrefix = MetricPrefix::new("E", "exa", 18);
    pub const PETA: MetricPrefix = MetricPrefix::new("P", "peta", 15);
    pub const TERA: MetricPrefix = MetricPrefix::new("T", "tera", 12);
    pub const GIGA: MetricPrefix = MetricPrefix::new("G", "giga", 9);
    pub const MEGA: MetricPrefix = MetricPrefix::new("M", "mega", 6);
    pub const KILO: MetricPrefix = MetricPrefix::new("k", "kilo", 3);
    pub const HECTO: MetricPrefix = MetricPrefix::new("h", "hecto", 2);
    pub const DECA: MetricPrefix = MetricPrefix::new("da", "deca", 1);
    pub const DECI: MetricPrefix = MetricPrefix::new("d", "deci", -1);
    pub const CENTI: MetricPrefix = MetricPrefix::new("c", "centi", -2);
    pub const MILLI: MetricPrefix = MetricPrefix::new("m", "milli", -3);
    /// Written with MICRO SIGN (U+00B5)
    pub const MICRO: MetricPrefix = MetricPrefix::new("µ", "micro", -6);
    pub const NANO: MetricPrefix = MetricPrefix::new("n", "nano", -9);
    pub const PICO: MetricPrefix = MetricPrefix::new("p", "pico", -12);
    pub const FEMTO: MetricPrefix = MetricPrefix::new("f", "femto", -15);
    pub const ATTO: MetricPrefix = MetricPrefix::new("a", "atto", -18);
    pub const ZEPTO: MetricPrefix = MetricPrefix::new("z", "zepto", -21);
    pub const YOCTO: MetricPrefix = MetricPrefix::new("y", "yocto", -24);
    pub const RONTO: MetricPrefix = MetricPrefix::new("r", "ronto", -27);
    pub const QUECTO: MetricPrefix = MetricPrefix::new("q", "quecto", -30);

    /// Every metric prefix, largest first
    pub const ALL: &'static [MetricPrefix] = &[
        Self::QUETTA, Self::RONNA, Self::YOTTA, Self::ZETTA, Self::EXA, Self::PETA,
        Self::TERA, Self::GIGA, Self::MEGA, Self::KILO, Self::HECTO, Self::DECA,
        Self::DECI, Self::CENTI, Self::MILLI, Self::MICRO, Self::NANO, Self::PICO,
        Self::FEMTO, Self::ATTO, Self::ZEPTO, Self::YOCTO, Self::RONTO, Self::QUECTO,
    ];

    pub fn prefixes() -> &'static [MetricPrefix] {
        Self::ALL
    }

    /// Look up by symbol. Accepts "u" and GREEK SMALL LETTER MU for micro.
    pub fn from_symbol(symbol: &str) -> Option<MetricPrefix> {
        match symbol {
            "u" | "μ" => Some(Self::MICRO),
            _ => Self::ALL.iter().copied().find(|p| p.symbol == symbol),
        }
    }

    pub fn from_name(name: &str) -> Option<MetricPrefix> {
        Self::ALL.iter().copied().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// `KILO.of(&meter)` is the kilometer
    pub fn of(&self, unit: &Unit) -> Unit {
        unit.prefix(self)
    }
}

impl Prefix for MetricPrefix {
    fn symbol(&self) -> &str {
        self.symbol
    }

    fn base(&self) -> i32 {
        10
    }

    fn power(&self) -> i32 {
        self.power
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// An IEC binary prefix, 2^power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BinaryPrefix {
    symbol: &'static str,
    name: &'static str,
    power: i32,
}

impl BinaryPrefix {
    const fn new(symbol: &'static str, name: &'static str, power: i32) -> Self {
        Self { symbol, name, power }
    }

    pub const KIBI: BinaryPrefix = BinaryPrefix::new("Ki", "kibi", 10);
    pub const MEBI: BinaryPrefix = BinaryPrefix::new("Mi", "mebi", 20);
    pub const GIBI: BinaryPrefix = BinaryPrefix::new("Gi", "gibi", 30);
    pub const TEBI: BinaryPrefix = BinaryPrefix::new("Ti", "tebi", 40);
    pub const PEBI: BinaryPrefix = BinaryPrefix::new("Pi", "pebi", 50);
    pub const EXBI: BinaryPrefix = BinaryPrefix::new("Ei", "exbi", 60);
    pub const ZEBI: BinaryPrefix = BinaryPrefix::new("Zi", "zebi", 70);
    pub const YOBI: BinaryPrefix = BinaryPrefix::new("Yi", "yobi", 80);

    pub const ALL: &'static [BinaryPrefix] = &[
        Self::KIBI, Self::MEBI, Self::GIBI, Self::TEBI,
        Self::PEBI, Self::EXBI, Self::ZEBI, Self::YOBI,
    ];

    pub fn prefixes() -> &'static [BinaryPrefix] {
        Self::ALL
    }

    pub fn from_symbol(symbol: &str) -> Option<BinaryPrefix> {
        Self::ALL.iter().copied().find(|p| p.symbol == symbol)
    }

    pub fn from_name(name: &str) -> Option<BinaryPrefix> {
        Self::ALL.iter().copied().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn of(&self, unit: &Unit) -> Unit {
        unit.prefix(self)
    }
}

impl Prefix for BinaryPrefix {
    fn symbol(&self) -> &str {
        self.symbol
    }

    fn base(&self) -> i32 {
        2
    }

    fn power(&self) -> i32 {
        self.power
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Both catalogs as trait objects, metric first
pub fn all_prefixes() -> Vec<&'static dyn Prefix> {
    MetricPrefix::ALL.iter()
        .map(|p| p as &'static dyn Prefix)
        .chain(BinaryPrefix::ALL.iter().map(|p| p as &'static dyn Prefix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use measure_core::{CustomPrefix, Dimension, Number};
    use std::collections::HashSet;

    #[test]
    fn test_kilo() {
        assert_eq!(MetricPrefix::KILO.symbol(), "k");
        assert_eq!(MetricPrefix::KILO.base(), 10);
        assert_eq!(MetricPrefix::KILO.power(), 3);
        assert_eq!(MetricPrefix::KILO.factor(), Number::from_i64(1000));
    }

    #[test]
    fn test_mega_and_kibi() {
        assert_eq!(MetricPrefix::MEGA.factor(), Number::from_i64(1_000_000));
        assert_eq!(BinaryPrefix::KIBI.factor(), Number::from_i64(1024));
        assert_eq!(BinaryPrefix::YOBI.factor(), Number::from_str("1208925819614629174706176").unwrap());
    }

    #[test]
    fn test_every_factor_is_exact_power() {
        for p in MetricPrefix::ALL {
            let expected = Number::from_str(&format!("1e{}", p.power())).unwrap();
            assert_eq!(p.factor(), expected, "{}", p.name());
            assert!(p.factor().is_positive());
        }
        for p in BinaryPrefix::ALL {
            assert_eq!(p.factor(), Number::from_i64(2).pow(p.power()));
        }
    }

    #[test]
    fn test_catalog_is_complete_and_unique() {
        assert_eq!(MetricPrefix::prefixes().len(), 24);
        assert_eq!(BinaryPrefix::prefixes().len(), 8);

        let symbols: HashSet<&str> = all_prefixes().into_iter().map(|p| p.symbol()).collect();
        assert_eq!(symbols.len(), 32);
        let powers: HashSet<i32> = MetricPrefix::ALL.iter().map(|p| p.power()).collect();
        assert_eq!(powers.len(), 24);
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(MetricPrefix::from_symbol("da"), Some(MetricPrefix::DECA));
        assert_eq!(MetricPrefix::from_symbol("µ"), Some(MetricPrefix::MICRO));
        assert_eq!(MetricPrefix::from_symbol("μ"), Some(MetricPrefix::MICRO));
        assert_eq!(MetricPrefix::from_symbol("u"), Some(MetricPrefix::MICRO));
        assert_eq!(MetricPrefix::from_symbol("K"), None);
        assert_eq!(BinaryPrefix::from_symbol("Gi"), Some(BinaryPrefix::GIBI));
        assert_eq!(BinaryPrefix::from_name("Mebi"), Some(BinaryPrefix::MEBI));
        assert_eq!(MetricPrefix::from_name("kilo"), Some(MetricPrefix::KILO));
    }

    #[test]
    fn test_catalog_matches_custom_prefix() {
        let custom = CustomPrefix::new("k", 10, 3).unwrap();
        assert_eq!(custom.factor(), MetricPrefix::KILO.factor());
        assert_eq!(custom.symbol(), MetricPrefix::KILO.symbol());
    }

    #[test]
    fn test_of_applies_prefix() {
        let meter = Unit::new("m", "meter", Dimension::LENGTH, Number::one(), "length");
        let km = MetricPrefix::KILO.of(&meter);
        assert_eq!(km.multiplier(), &Number::from_i64(1000));
        assert_eq!(km, meter.prefix(&MetricPrefix::KILO));
        assert_eq!(km.name, "kilometer");
    }
}
