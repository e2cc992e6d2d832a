//! Structured errors
//!
//! Leaf errors (`NumberError`, `PrefixError`, `ConversionError`) stay small
//! `thiserror` enums close to where they occur. `MeasureError` is the
//! flattened form handed to callers that only want a code and a message.

use crate::{ConversionError, NumberError, PrefixError};
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const INVALID_PREFIX: &str = "INVALID_PREFIX";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const UNKNOWN_FORMAT: &str = "UNKNOWN_FORMAT";
    pub const REGISTRY: &str = "REGISTRY";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl MeasureError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
    }

    pub fn unknown_unit(symbol: &str) -> Self {
        Self::new(codes::UNKNOWN_UNIT, format!("Unknown unit: {}", symbol))
            .with_suggestion("Check the symbol or use a prefix from the metric or binary catalog")
    }

    pub fn unknown_format(name: &str) -> Self {
        Self::new(codes::UNKNOWN_FORMAT, format!("Unknown format name: {}", name))
            .with_suggestion("List registered names with `measure formats`")
    }
}

impl std::fmt::Display for MeasureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for MeasureError {}

impl From<NumberError> for MeasureError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) => Self::parse_error(s),
            NumberError::DivisionByZero => Self::new(codes::DIV_ZERO, "Division by zero"),
        }
    }
}

impl From<PrefixError> for MeasureError {
    fn from(err: PrefixError) -> Self {
        Self::new(codes::INVALID_PREFIX, err.to_string())
    }
}

impl From<ConversionError> for MeasureError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::IncompatibleDimensions { .. } => {
                Self::new(codes::INCOMPATIBLE_UNITS, err.to_string())
            }
            ConversionError::UnknownUnit(symbol) => Self::unknown_unit(&symbol),
            ConversionError::InvalidNumber(text) => Self::parse_error(format!("invalid number '{}'", text)),
            ConversionError::Number(e) => e.into(),
        }
    }
}
