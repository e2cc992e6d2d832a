//! Unit catalog - unprefixed units organized by category
//!
//! Prefixed forms ("km", "KiB") are not stored; `parse` builds them from
//! a catalog unit and a prefix.

use std::collections::HashMap;
use std::sync::LazyLock;
use measure_core::{Dimension, Number, Unit};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by symbol or alias
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        if let Some(unit) = self.units.get(symbol) {
            return Some(unit);
        }
        self.aliases.get(symbol).and_then(|canonical| self.units.get(canonical))
    }

    /// Get a unit by its canonical symbol only
    pub fn get_symbol(&self, symbol: &str) -> Option<&Unit> {
        self.units.get(symbol)
    }

    /// Get a unit by name or spelled-out alias ("meter", "metres")
    pub fn get_name(&self, name: &str) -> Option<&Unit> {
        self.aliases.get(name).and_then(|canonical| self.units.get(canonical))
    }

    /// The unit's name is registered as an alias too
    fn register(&mut self, unit: Unit) {
        self.aliases.insert(unit.name.clone(), unit.symbol.clone());
        self.units.insert(unit.symbol.clone(), unit);
    }

    fn alias(&mut self, alias: &str, symbol: &str) {
        self.aliases.insert(alias.to_string(), symbol.to_string());
    }

    fn register_all_units(&mut self) {
        self.register_base_units();
        self.register_length_units();
        self.register_mass_units();
        self.register_time_units();
        self.register_temperature_units();
        self.register_volume_units();
        self.register_derived_units();
        self.register_data_units();
    }

    fn register_base_units(&mut self) {
        self.register(Unit::new("m", "meter", Dimension::LENGTH, Number::one(), "length"));
        self.register(Unit::new("g", "gram", Dimension::MASS, Number::from_ratio(1, 1000), "mass"));
        self.register(Unit::new("s", "second", Dimension::TIME, Number::one(), "time"));
        self.register(Unit::new("A", "ampere", Dimension::CURRENT, Number::one(), "current"));
        self.register(Unit::new("K", "kelvin", Dimension::TEMPERATURE, Number::one(), "temperature"));
        self.register(Unit::new("mol", "mole", Dimension::AMOUNT, Number::one(), "amount"));
        self.register(Unit::new("cd", "candela", Dimension::LUMINOSITY, Number::one(), "luminosity"));

        self.alias("meters", "m");
        self.alias("metre", "m");
        self.alias("metres", "m");
        self.alias("grams", "g");
        self.alias("gramme", "g");
        self.alias("seconds", "s");
        self.alias("sec", "s");
        self.alias("amperes", "A");
        self.alias("amp", "A");
        self.alias("moles", "mol");
    }

    fn register_length_units(&mut self) {
        self.register(Unit::new("in", "inch", Dimension::LENGTH, Number::from_ratio(254, 10_000), "length"));
        self.register(Unit::new("ft", "foot", Dimension::LENGTH, Number::from_ratio(3048, 10_000), "length"));
        self.register(Unit::new("yd", "yard", Dimension::LENGTH, Number::from_ratio(9144, 10_000), "length"));
        self.register(Unit::new("mi", "mile", Dimension::LENGTH, Number::from_ratio(1_609_344, 1000), "length"));
        self.register(Unit::new("au", "astronomical unit", Dimension::LENGTH, Number::from_i64(149_597_870_700), "length"));

        self.alias("inches", "in");
        self.alias("feet", "ft");
        self.alias("yards", "yd");
        self.alias("miles", "mi");
    }

    fn register_mass_units(&mut self) {
        self.register(Unit::new("t", "tonne", Dimension::MASS, Number::from_i64(1000), "mass"));
        self.register(Unit::new("lb", "pound", Dimension::MASS, Number::from_ratio(45_359_237, 100_000_000), "mass"));
        self.register(Unit::new("oz", "ounce", Dimension::MASS, Number::from_ratio(28_349_523_125, 1_000_000_000_000), "mass"));

        self.alias("tonnes", "t");
        self.alias("pounds", "lb");
        self.alias("lbs", "lb");
        self.alias("ounces", "oz");
    }

    fn register_time_units(&mut self) {
        self.register(Unit::new("min", "minute", Dimension::TIME, Number::from_i64(60), "time"));
        self.register(Unit::new("h", "hour", Dimension::TIME, Number::from_i64(3600), "time"));
        self.register(Unit::new("d", "day", Dimension::TIME, Number::from_i64(86_400), "time"));

        self.alias("minutes", "min");
        self.alias("hours", "h");
        self.alias("hr", "h");
        self.alias("days", "d");
    }

    fn register_temperature_units(&mut self) {
        // K = °C + 273.15
        self.register(Unit::with_offset(
            "°C", "degree Celsius", Dimension::TEMPERATURE,
            Number::one(),
            Number::from_ratio(27_315, 100),
            "temperature"
        ));

        self.alias("degC", "°C");
        self.alias("celsius", "°C");
    }

    fn register_volume_units(&mut self) {
        self.register(Unit::new("L", "liter", Dimension::VOLUME, Number::from_ratio(1, 1000), "volume"));

        self.alias("l", "L");
        self.alias("liters", "L");
        self.alias("litre", "L");
        self.alias("litres", "L");
    }

    fn register_derived_units(&mut self) {
        self.register(Unit::new("N", "newton", Dimension::FORCE, Number::one(), "force"));
        self.register(Unit::new("J", "joule", Dimension::ENERGY, Number::one(), "energy"));
        self.register(Unit::new("Wh", "watt hour", Dimension::ENERGY, Number::from_i64(3600), "energy"));
        self.register(Unit::new("W", "watt", Dimension::POWER, Number::one(), "power"));
        self.register(Unit::new("Pa", "pascal", Dimension::PRESSURE, Number::one(), "pressure"));
        self.register(Unit::new("bar", "bar", Dimension::PRESSURE, Number::from_i64(100_000), "pressure"));
        self.register(Unit::new("Hz", "hertz", Dimension::FREQUENCY, Number::one(), "frequency"));
        self.register(Unit::new("C", "coulomb", Dimension::CHARGE, Number::one(), "electrical"));
        self.register(Unit::new("V", "volt", Dimension::VOLTAGE, Number::one(), "electrical"));
        self.register(Unit::new("Ω", "ohm", Dimension::RESISTANCE, Number::one(), "electrical"));

        self.alias("newtons", "N");
        self.alias("joules", "J");
        self.alias("watts", "W");
        self.alias("volts", "V");
        self.alias("ohms", "Ω");
        self.alias("Ohm", "Ω");
    }

    fn register_data_units(&mut self) {
        self.register(Unit::new("bit", "bit", Dimension::DIMENSIONLESS, Number::one(), "data"));
        self.register(Unit::new("B", "byte", Dimension::DIMENSIONLESS, Number::from_i64(8), "data"));

        self.alias("bits", "bit");
        self.alias("bytes", "B");
    }
}
