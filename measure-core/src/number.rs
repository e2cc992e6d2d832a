//! Arbitrary precision numbers using dashu
//!
//! Conversion factors are kept as dashu-float `DBig` values so that
//! prefix factors like 10^-24 or 2^80 stay exact instead of picking up
//! binary floating point error.

use dashu_float::DBig;
use dashu_int::IBig;
use dashu_int::ops::BitTest;
use serde::{Deserialize, Serialize, Serializer, Deserializer};
use std::fmt;
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Working precision in significant decimal digits.
///
/// Every factor of the metric and binary prefix catalogs fits well inside
/// this; anything longer is rounded to nearest at this many digits.
pub const WORK_PRECISION: usize = 50;

/// Arbitrary precision decimal number
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    // ========== Construction ==========

    fn with_work_precision(val: DBig) -> DBig {
        val.with_precision(WORK_PRECISION).value()
    }

    /// Create from string representation
    /// Supports: "123", "3.14", "1/3", "1.5e10", "-42"
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();

        if s.contains('/') && !s.contains('.') && !s.contains('e') && !s.contains('E') {
            let parts: Vec<&str> = s.split('/').collect();
            if parts.len() == 2 {
                let num: DBig = parts[0].trim().parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;
                let den: DBig = parts[1].trim().parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;

                if den == DBig::ZERO {
                    return Err(NumberError::DivisionByZero);
                }

                let result = Self::with_work_precision(num) / Self::with_work_precision(den);
                return Ok(Self { inner: result });
            }
        }

        // Integer mantissa with exponent, e.g. "299792458e-9", built exactly
        if (s.contains('e') || s.contains('E')) && !s.contains('.') {
            let s_lower = s.to_lowercase();
            let parts: Vec<&str> = s_lower.split('e').collect();
            if parts.len() == 2 {
                let mantissa: IBig = parts[0].parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;
                let exp: isize = parts[1].parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;

                let result = DBig::from_parts(mantissa, exp);
                return Ok(Self { inner: Self::with_work_precision(result) });
            }
        }

        let inner: DBig = s.parse()
            .map_err(|_| NumberError::ParseError(s.to_string()))?;

        Ok(Self { inner: Self::with_work_precision(inner) })
    }

    /// Create from i64 with working precision
    pub fn from_i64(n: i64) -> Self {
        Self { inner: Self::with_work_precision(DBig::from(n)) }
    }

    /// Create from ratio (exact division); a zero denominator yields zero
    pub fn from_ratio(num: i64, den: i64) -> Self {
        if den == 0 {
            return Self { inner: DBig::ZERO };
        }
        let n = Self::with_work_precision(DBig::from(num));
        let d = Self::with_work_precision(DBig::from(den));
        Self { inner: n / d }
    }

    pub fn one() -> Self {
        Self::from_i64(1)
    }

    pub fn zero() -> Self {
        Self::from_i64(0)
    }

    // ========== Predicates ==========

    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.inner < DBig::ZERO
    }

    pub fn is_positive(&self) -> bool {
        self.inner > DBig::ZERO
    }

    pub fn is_one(&self) -> bool {
        self.inner == DBig::ONE
    }

    /// Check if value is an integer
    pub fn is_integer(&self) -> bool {
        let floor_val = self.inner.clone().floor();
        self.inner == floor_val
    }

    // ========== Basic Arithmetic ==========

    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    /// Integer power by repeated squaring.
    ///
    /// A negative exponent gives the reciprocal of the positive power.
    /// `0^-n` has no value and comes back as zero; callers that care
    /// (prefix construction) reject a zero base up front.
    pub fn pow(&self, exp: i32) -> Self {
        if exp == 0 {
            return Self::one();
        }

        let mut base = self.clone();
        let mut remaining = exp.unsigned_abs();
        let mut result = Self::one();

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.mul(&base);
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.mul(&base);
            }
        }

        if exp < 0 {
            Self::one().checked_div(&result).unwrap_or_else(|_| Self::zero())
        } else {
            result
        }
    }

    // ========== Conversion ==========

    /// Try to convert to i64 (only for integral values in range)
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }

        // DBig stores as significand * 10^exponent
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let sig_i64: i64 = significand.try_into().ok()?;

        if exponent == 0 {
            Some(sig_i64)
        } else if exponent > 0 && exponent <= 18 {
            sig_i64.checked_mul(10_i64.checked_pow(exponent as u32)?)
        } else if exponent < 0 && exponent >= -18 {
            let divisor = 10_i64.checked_pow((-exponent) as u32)?;
            if sig_i64 % divisor == 0 {
                Some(sig_i64 / divisor)
            } else {
                None
            }
        } else {
            None
        }
    }

    /// Convert to f64 (may lose precision, None when out of range)
    pub fn to_f64(&self) -> Option<f64> {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();

        let sig_f64: f64 = if significand.bit_len() <= 53 {
            let i: i64 = significand.try_into().ok()?;
            i as f64
        } else {
            // Keep the top 53 bits and scale back up
            let extra_bits = significand.bit_len() - 53;
            let shifted = &significand >> extra_bits;
            let shifted_i64: i64 = shifted.try_into().ok()?;
            shifted_i64 as f64 * 2_f64.powi(extra_bits as i32)
        };

        let result = if exponent == 0 {
            sig_f64
        } else if exponent > 0 && exponent <= 308 {
            sig_f64 * 10_f64.powi(exponent as i32)
        } else if exponent < 0 && exponent >= -308 {
            sig_f64 / 10_f64.powi((-exponent) as i32)
        } else {
            return None;
        };

        if result.is_finite() {
            Some(result)
        } else {
            None
        }
    }
}

// ========== Trait Implementations ==========

/// Exact decimal text, unless the value was rounded to the full working
/// precision (1/3, 3^-5); those print in shortest `f64` form.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let text = significand.to_string();
        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.as_str()),
        };

        if digits.trim_end_matches('0').len() >= WORK_PRECISION {
            if let Some(v) = self.to_f64() {
                return write!(f, "{}", v);
            }
        }

        if exponent >= 0 {
            let zeros = if digits == "0" { 0 } else { exponent.unsigned_abs() };
            return write!(f, "{}{}{}", sign, digits, "0".repeat(zeros));
        }

        let point = digits.len() as isize + exponent;
        let (int_part, frac_part) = if point > 0 {
            let (i, fr) = digits.split_at(point.unsigned_abs());
            (i.to_string(), fr.to_string())
        } else {
            ("0".to_string(), format!("{}{}", "0".repeat(point.unsigned_abs()), digits))
        };

        let frac_part = frac_part.trim_end_matches('0');
        if frac_part.is_empty() {
            let sign = if int_part == "0" { "" } else { sign };
            write!(f, "{}{}", sign, int_part)
        } else {
            write!(f, "{}{}.{}", sign, int_part, frac_part)
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner.to_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.partial_cmp(&other.inner).unwrap_or(std::cmp::Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_forms() {
        assert_eq!(Number::from_str("123").unwrap().to_i64(), Some(123));
        assert_eq!(Number::from_str("1.5e2").unwrap().to_i64(), Some(150));
        assert_eq!(Number::from_str("3e8").unwrap().to_i64(), Some(300_000_000));
        assert!(!Number::from_str("1/3").unwrap().is_integer());
        assert!(Number::from_str("abc").is_err());
        assert_eq!(Number::from_str("1/0"), Err(NumberError::DivisionByZero));
    }

    #[test]
    fn test_pow_positive() {
        assert_eq!(Number::from_i64(2).pow(10).to_i64(), Some(1024));
        assert_eq!(Number::from_i64(10).pow(3), Number::from_i64(1000));
        assert_eq!(Number::from_i64(7).pow(0), Number::one());
    }

    #[test]
    fn test_pow_negative_is_exact_for_decimal_and_binary() {
        assert_eq!(Number::from_i64(10).pow(-3), Number::from_str("0.001").unwrap());
        assert_eq!(Number::from_i64(2).pow(-10), Number::from_str("0.0009765625").unwrap());
    }

    #[test]
    fn test_pow_large_exponents_do_not_overflow() {
        let yotta = Number::from_i64(10).pow(24);
        assert_eq!(yotta, Number::from_str("1e24").unwrap());
        assert_eq!(yotta.to_i64(), None);
        let approx = yotta.to_f64().unwrap();
        assert!((approx - 1e24).abs() / 1e24 < 1e-12);

        let yobi = Number::from_i64(2).pow(80);
        assert_eq!(yobi, Number::from_str("1208925819614629174706176").unwrap());

        let yocto = Number::from_i64(10).pow(-24);
        assert_eq!(yocto, Number::from_str("1e-24").unwrap());
        assert!(yocto.is_positive());
    }

    #[test]
    fn test_pow_of_zero() {
        assert!(Number::zero().pow(3).is_zero());
        assert!(Number::zero().pow(-3).is_zero());
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(Number::from_i64(84).checked_div(&Number::from_i64(2)).unwrap().to_i64(), Some(42));
        assert!(Number::from_i64(1).checked_div(&Number::zero()).is_err());
    }

    #[test]
    fn test_predicates() {
        assert!(Number::from_i64(-5).is_negative());
        assert!(Number::from_i64(5).is_positive());
        assert!(!Number::zero().is_positive());
        assert!(Number::one().is_one());
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::from_i64(1000).to_string(), "1000");
        assert_eq!(Number::from_str("1.5").unwrap().to_string(), "1.5");
        assert_eq!(Number::from_ratio(1, 4).to_string(), "0.25");
        assert_eq!(Number::from_i64(10).pow(-3).to_string(), "0.001");
        assert_eq!(Number::from_str("-2.50").unwrap().to_string(), "-2.5");
        assert_eq!(Number::zero().to_string(), "0");
    }

    #[test]
    fn test_display_large_integers_exactly() {
        assert_eq!(Number::from_i64(2).pow(80).to_string(), "1208925819614629174706176");
        assert_eq!(Number::from_i64(2).pow(70).to_string(), "1180591620717411303424");
        assert_eq!(Number::from_i64(10).pow(24).to_string(), "1000000000000000000000000");
        assert_eq!(Number::from_i64(10).pow(-24).to_string(), "0.000000000000000000000001");
    }

    #[test]
    fn test_display_reads_back_exactly() {
        for text in ["1208925819614629174706176", "0.0254", "-1609.344", "1e-30", "123456789012345678901234.5"] {
            let n = Number::from_str(text).unwrap();
            assert_eq!(Number::from_str(&n.to_string()).unwrap(), n, "{}", text);
        }
    }

    #[test]
    fn test_display_rounded_values_use_short_form() {
        let text = Number::from_ratio(1, 3).to_string();
        assert!(text.starts_with("0.333333333333333"), "{}", text);
        assert!(text.len() < 24, "{}", text);
    }

    #[test]
    fn test_serde_roundtrip_preserves_exact_value() {
        let n = Number::from_i64(2).pow(80);
        let json = serde_json::to_string(&n).unwrap();
        let back: Number = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }
}
