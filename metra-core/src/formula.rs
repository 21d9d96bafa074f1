//! Formula text for a performed conversion
//!
//! Converters build a `Formula` describing the arithmetic they did; the
//! `Display` impl renders the template that belongs to the algorithm family.

use std::fmt;
use serde::{Serialize, Serializer};
use crate::format::{format_plain, format_sigfigs, FORMULA_SIGFIGS};

fn sig(value: f64) -> String {
    format_sigfigs(value, FORMULA_SIGFIGS)
}

/// What the parenthetical of a linear formula shows
#[derive(Debug, Clone, PartialEq)]
pub enum Basis {
    /// The two base-unit coefficients that were applied
    Coefficients { from: f64, to: f64 },
    /// A fixed pivot description, e.g. "radians"
    Through(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Formula {
    /// Source and target unit are the same.
    /// `exact` echoes the result verbatim instead of rounding it.
    Identity { value: f64, unit: String, exact: bool },

    /// value × coeff[from] ÷ coeff[to]
    Linear {
        value: f64,
        from_unit: String,
        to_unit: String,
        result: f64,
        basis: Basis,
    },

    /// Unit-pair specific expression, e.g. `(20 × 9/5) + 32`
    Affine {
        value: f64,
        from_symbol: &'static str,
        to_symbol: &'static str,
        expression: String,
        result: f64,
    },

    /// Conversion through an inverse ratio
    Reciprocal {
        value: f64,
        from_unit: String,
        to_unit: String,
        result: f64,
    },

    /// value / rate[from] × rate[to]
    RateTable {
        value: f64,
        from_unit: String,
        to_unit: String,
        result: f64,
        from_rate: f64,
        to_rate: f64,
        reference: &'static str,
    },
}

impl Formula {
    pub fn is_identity(&self) -> bool {
        matches!(self, Formula::Identity { .. })
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Identity { value, unit, exact } => {
                let shown = if *exact { format_plain(*value) } else { sig(*value) };
                write!(f, "{} {} = {} {}", format_plain(*value), unit, shown, unit)
            }
            Formula::Linear { value, from_unit, to_unit, result, basis } => {
                write!(f, "{} {} = {} {}", format_plain(*value), from_unit, sig(*result), to_unit)?;
                match basis {
                    Basis::Coefficients { from, to } => write!(
                        f,
                        " (Conversion: {} × {} ÷ {})",
                        format_plain(*value),
                        sig(*from),
                        sig(*to)
                    ),
                    Basis::Through(pivot) => write!(f, " (Conversion through {})", pivot),
                }
            }
            Formula::Affine { value, from_symbol, to_symbol, expression, result } => write!(
                f,
                "{}{} = {} = {}{}",
                format_plain(*value),
                from_symbol,
                expression,
                sig(*result),
                to_symbol
            ),
            Formula::Reciprocal { value, from_unit, to_unit, result } => {
                write!(f, "{} {} = {} {}", format_plain(*value), from_unit, sig(*result), to_unit)
            }
            Formula::RateTable { value, from_unit, to_unit, result, from_rate, to_rate, reference } => write!(
                f,
                "{} {} = {} {} (Via {}: {}/{} × {})",
                format_plain(*value),
                from_unit,
                sig(*result),
                to_unit,
                reference,
                format_plain(*value),
                format_plain(*from_rate),
                format_plain(*to_rate)
            ),
        }
    }
}

// Serialized as the rendered text
impl Serialize for Formula {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_with_coefficients() {
        let formula = Formula::Linear {
            value: 1.0,
            from_unit: "Kilometer".into(),
            to_unit: "Meter".into(),
            result: 1000.0,
            basis: Basis::Coefficients { from: 1000.0, to: 1.0 },
        };
        assert_eq!(formula.to_string(), "1.0 Kilometer = 1000 Meter (Conversion: 1.0 × 1000 ÷ 1)");
    }

    #[test]
    fn test_linear_through_pivot() {
        let formula = Formula::Linear {
            value: 180.0,
            from_unit: "Degree".into(),
            to_unit: "Radian".into(),
            result: std::f64::consts::PI,
            basis: Basis::Through("radians"),
        };
        assert_eq!(formula.to_string(), "180.0 Degree = 3.14159 Radian (Conversion through radians)");
    }

    #[test]
    fn test_identity_rounding() {
        let rounded = Formula::Identity { value: 2.1234567, unit: "Meter".into(), exact: false };
        assert_eq!(rounded.to_string(), "2.1234567 Meter = 2.12346 Meter");

        let exact = Formula::Identity { value: 2.1234567, unit: "Kelvin".into(), exact: true };
        assert_eq!(exact.to_string(), "2.1234567 Kelvin = 2.1234567 Kelvin");
        assert!(exact.is_identity());
    }

    #[test]
    fn test_affine() {
        let formula = Formula::Affine {
            value: 100.0,
            from_symbol: "°C",
            to_symbol: "°F",
            expression: "(100.0 × 9/5) + 32".into(),
            result: 212.0,
        };
        assert_eq!(formula.to_string(), "100.0°C = (100.0 × 9/5) + 32 = 212°F");
    }

    #[test]
    fn test_rate_table() {
        let formula = Formula::RateTable {
            value: 10.0,
            from_unit: "USD".into(),
            to_unit: "EUR".into(),
            result: 9.2,
            from_rate: 1.0,
            to_rate: 0.92,
            reference: "USD",
        };
        assert_eq!(formula.to_string(), "10.0 USD = 9.2 EUR (Via USD: 10.0/1.0 × 0.92)");
    }

    #[test]
    fn test_reciprocal_infinite() {
        let formula = Formula::Reciprocal {
            value: 0.0,
            from_unit: "Liters per 100 Kilometers".into(),
            to_unit: "Kilometers per Liter".into(),
            result: f64::INFINITY,
        };
        assert_eq!(formula.to_string(), "0.0 Liters per 100 Kilometers = inf Kilometers per Liter");
    }
}
