//! Prefix abstraction
//!
//! A prefix is a scale factor written as `base^power` together with a
//! symbol. Catalogs of named prefixes (metric, binary) live outside this
//! crate and implement the same trait; `CustomPrefix` covers everything else.

use crate::Number;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A multiplicative scale factor `base^power` applied to a unit.
pub trait Prefix: Send + Sync {
    /// Symbol of this prefix, e.g. "k"
    fn symbol(&self) -> &str;

    /// Base part of the factor in base^power representation
    fn base(&self) -> i32;

    /// Power part of the factor in base^power representation
    fn power(&self) -> i32;

    /// Long name, e.g. "kilo". Defaults to the symbol.
    fn name(&self) -> &str {
        self.symbol()
    }

    /// The factor `base^power`.
    ///
    /// Computed exactly for every factor that needs at most
    /// [`WORK_PRECISION`](crate::WORK_PRECISION) significant digits,
    /// rounded to nearest beyond that.
    fn factor(&self) -> Number {
        Number::from_i64(i64::from(self.base())).pow(self.power())
    }
}

impl<P: Prefix + ?Sized> Prefix for &P {
    fn symbol(&self) -> &str {
        (**self).symbol()
    }

    fn base(&self) -> i32 {
        (**self).base()
    }

    fn power(&self) -> i32 {
        (**self).power()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn factor(&self) -> Number {
        (**self).factor()
    }
}

/// Rejected prefix definitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefixError {
    #[error("prefix symbol must not be empty")]
    EmptySymbol,

    #[error("prefix base must be positive, got {0}")]
    NonPositiveBase(i32),
}

/// A caller-defined prefix outside the built-in catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CustomPrefix {
    symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    base: i32,
    power: i32,
}

impl CustomPrefix {
    /// Validate and create a prefix.
    ///
    /// The base must be positive: a zero base has no reciprocal and a
    /// negative one would make the factor flip sign with the power.
    pub fn new(symbol: impl Into<String>, base: i32, power: i32) -> Result<Self, PrefixError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(PrefixError::EmptySymbol);
        }
        if base <= 0 {
            return Err(PrefixError::NonPositiveBase(base));
        }
        Ok(Self { symbol, name: None, base, power })
    }

    /// Builder: attach a long name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Prefix for CustomPrefix {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn base(&self) -> i32 {
        self.base
    }

    fn power(&self) -> i32 {
        self.power
    }

    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.symbol)
    }
}

impl fmt::Display for CustomPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}^{})", self.symbol, self.base, self.power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilo_factor() {
        let kilo = CustomPrefix::new("k", 10, 3).unwrap();
        assert_eq!(kilo.symbol(), "k");
        assert_eq!(kilo.base(), 10);
        assert_eq!(kilo.power(), 3);
        assert_eq!(kilo.factor(), Number::from_i64(1000));
        assert_eq!(kilo.factor().to_f64(), Some(1000.0));
    }

    #[test]
    fn test_factor_always_positive_for_positive_base() {
        for base in [1, 2, 3, 10, 16, 1000] {
            for power in -24..=24 {
                let p = CustomPrefix::new("x", base, power).unwrap();
                assert!(p.factor().is_positive(), "{}^{} should be positive", base, power);
            }
        }
    }

    #[test]
    fn test_negative_power() {
        let milli = CustomPrefix::new("m", 10, -3).unwrap();
        assert_eq!(milli.factor(), Number::from_str("0.001").unwrap());
    }

    #[test]
    fn test_rejects_invalid_definitions() {
        assert_eq!(CustomPrefix::new("", 10, 3), Err(PrefixError::EmptySymbol));
        assert_eq!(CustomPrefix::new("  ", 10, 3), Err(PrefixError::EmptySymbol));
        assert_eq!(CustomPrefix::new("z", 0, -1), Err(PrefixError::NonPositiveBase(0)));
        assert_eq!(CustomPrefix::new("z", 0, 2), Err(PrefixError::NonPositiveBase(0)));
        assert_eq!(CustomPrefix::new("n", -10, 3), Err(PrefixError::NonPositiveBase(-10)));
    }

    #[test]
    fn test_identical_definitions_are_indistinguishable() {
        let a = CustomPrefix::new("k", 10, 3).unwrap();
        let b = CustomPrefix::new("k", 10, 3).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.factor(), b.factor());
        assert_eq!(a.symbol(), b.symbol());
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn test_name_defaults_to_symbol() {
        let p = CustomPrefix::new("my", 10, 4).unwrap();
        assert_eq!(p.name(), "my");
        let p = p.with_name("myria");
        assert_eq!(p.name(), "myria");
    }

    #[test]
    fn test_usable_as_trait_object() {
        let p = CustomPrefix::new("k", 10, 3).unwrap();
        let dynamic: &dyn Prefix = &p;
        assert_eq!(dynamic.factor(), Number::from_i64(1000));
    }

    #[test]
    fn test_negative_power_of_odd_base_rounds_at_working_precision() {
        let p = CustomPrefix::new("t", 3, -5).unwrap();
        let factor = p.factor();
        assert!(factor.is_positive());
        assert_eq!(factor, Number::from_ratio(1, 243));
        let approx = factor.to_f64().unwrap();
        assert!((approx - 1.0 / 243.0).abs() < 1e-15);
        // 1/243 does not terminate; the rounded value prints in short form
        let text = factor.to_string();
        assert!(text.starts_with("0.00411522633744855"), "{}", text);
        assert!(text.len() < 24, "{}", text);
    }
}
