//! Dimensional signature of a unit
//!
//! Each physical quantity has dimensions represented as a 7-element vector:
//! [length, mass, time, current, temperature, amount, luminosity]

use std::fmt;
use serde::{Serialize, Deserialize};

/// Exponents of the 7 SI base dimensions.
///
/// Only equality matters here: prefixes never change a dimension and
/// conversion is allowed between units with equal dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// [length, mass, time, current, temperature, amount, luminosity]
    pub exponents: [i32; 7],
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 0] };

    /// Length dimension [L]
    pub const LENGTH: Dimension = Dimension { exponents: [1, 0, 0, 0, 0, 0, 0] };

    /// Mass dimension [M]
    pub const MASS: Dimension = Dimension { exponents: [0, 1, 0, 0, 0, 0, 0] };

    /// Time dimension [T]
    pub const TIME: Dimension = Dimension { exponents: [0, 0, 1, 0, 0, 0, 0] };

    /// Electric current dimension [I]
    pub const CURRENT: Dimension = Dimension { exponents: [0, 0, 0, 1, 0, 0, 0] };

    /// Temperature dimension [Θ]
    pub const TEMPERATURE: Dimension = Dimension { exponents: [0, 0, 0, 0, 1, 0, 0] };

    /// Amount of substance dimension [N]
    pub const AMOUNT: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 1, 0] };

    /// Luminous intensity dimension [J]
    pub const LUMINOSITY: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 1] };

    /// Volume [L^3]
    pub const VOLUME: Dimension = Dimension { exponents: [3, 0, 0, 0, 0, 0, 0] };

    /// Force [M L T^-2]
    pub const FORCE: Dimension = Dimension { exponents: [1, 1, -2, 0, 0, 0, 0] };

    /// Energy [M L^2 T^-2]
    pub const ENERGY: Dimension = Dimension { exponents: [2, 1, -2, 0, 0, 0, 0] };

    /// Power [M L^2 T^-3]
    pub const POWER: Dimension = Dimension { exponents: [2, 1, -3, 0, 0, 0, 0] };

    /// Pressure [M L^-1 T^-2]
    pub const PRESSURE: Dimension = Dimension { exponents: [-1, 1, -2, 0, 0, 0, 0] };

    /// Frequency [T^-1]
    pub const FREQUENCY: Dimension = Dimension { exponents: [0, 0, -1, 0, 0, 0, 0] };

    /// Electric charge [I T]
    pub const CHARGE: Dimension = Dimension { exponents: [0, 0, 1, 1, 0, 0, 0] };

    /// Voltage [M L^2 T^-3 I^-1]
    pub const VOLTAGE: Dimension = Dimension { exponents: [2, 1, -3, -1, 0, 0, 0] };

    /// Resistance [M L^2 T^-3 I^-2]
    pub const RESISTANCE: Dimension = Dimension { exponents: [2, 1, -3, -2, 0, 0, 0] };

    pub fn new(exponents: [i32; 7]) -> Self {
        Dimension { exponents }
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Get the dimension name if it matches a common dimension
    pub fn name(&self) -> Option<&'static str> {
        match self.exponents {
            [0, 0, 0, 0, 0, 0, 0] => Some("dimensionless"),
            [1, 0, 0, 0, 0, 0, 0] => Some("length"),
            [0, 1, 0, 0, 0, 0, 0] => Some("mass"),
            [0, 0, 1, 0, 0, 0, 0] => Some("time"),
            [0, 0, 0, 1, 0, 0, 0] => Some("current"),
            [0, 0, 0, 0, 1, 0, 0] => Some("temperature"),
            [0, 0, 0, 0, 0, 1, 0] => Some("amount"),
            [0, 0, 0, 0, 0, 0, 1] => Some("luminosity"),
            [3, 0, 0, 0, 0, 0, 0] => Some("volume"),
            [1, 1, -2, 0, 0, 0, 0] => Some("force"),
            [2, 1, -2, 0, 0, 0, 0] => Some("energy"),
            [2, 1, -3, 0, 0, 0, 0] => Some("power"),
            [-1, 1, -2, 0, 0, 0, 0] => Some("pressure"),
            [0, 0, -1, 0, 0, 0, 0] => Some("frequency"),
            [0, 0, 1, 1, 0, 0, 0] => Some("charge"),
            [2, 1, -3, -1, 0, 0, 0] => Some("voltage"),
            [2, 1, -3, -2, 0, 0, 0] => Some("resistance"),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = ["L", "M", "T", "I", "Θ", "N", "J"];
        let parts: Vec<String> = self.exponents.iter()
            .zip(names)
            .filter(|(exp, _)| **exp != 0)
            .map(|(&exp, name)| if exp == 1 { name.to_string() } else { format!("{}^{}", name, exp) })
            .collect();

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}
