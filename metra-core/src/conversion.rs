//! Conversion requests and results

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::Formula;

/// Algorithm family a category converts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Multiply into a base unit, divide out of it
    Linear,
    /// Pair-specific scale and offset (temperature)
    Affine,
    /// Pivot unit with one inverse representation (fuel economy)
    Reciprocal,
    /// Rates against a reference currency
    RateTable,
}

impl Family {
    pub fn name(&self) -> &'static str {
        match self {
            Family::Linear => "linear",
            Family::Affine => "affine",
            Family::Reciprocal => "reciprocal",
            Family::RateTable => "rate_table",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single conversion asked for by a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: String,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(
        category: impl Into<String>,
        value: f64,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Self {
        ConversionRequest {
            category: category.into(),
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }

    /// The same request with source and target units exchanged
    pub fn swapped(&self) -> Self {
        ConversionRequest {
            category: self.category.clone(),
            value: self.value,
            from_unit: self.to_unit.clone(),
            to_unit: self.from_unit.clone(),
        }
    }
}

/// Converted value and the explanation of how it was obtained
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    /// Full-precision result; never rounded
    #[serde(rename = "result")]
    pub value: f64,
    pub formula: Formula,
}

impl Conversion {
    pub fn new(value: f64, formula: Formula) -> Self {
        Conversion { value, formula }
    }

    /// Identity conversion: the value comes back unchanged
    pub fn identity(value: f64, unit: &str, exact: bool) -> Self {
        Conversion {
            value,
            formula: Formula::Identity { value, unit: unit.to_string(), exact },
        }
    }

    /// Rendered formula text
    pub fn formula_text(&self) -> String {
        self.formula.to_string()
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formula)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swapped() {
        let request = ConversionRequest::new("Length", 3.0, "Meter", "Foot");
        let swapped = request.swapped();
        assert_eq!(swapped.from_unit, "Foot");
        assert_eq!(swapped.to_unit, "Meter");
        assert_eq!(swapped.value, 3.0);
        assert_eq!(swapped.swapped(), request);
    }

    #[test]
    fn test_identity_keeps_value() {
        let conversion = Conversion::identity(42.5, "Meter", false);
        assert_eq!(conversion.value, 42.5);
        assert_eq!(conversion.formula_text(), "42.5 Meter = 42.5 Meter");
    }

    #[test]
    fn test_family_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Family::RateTable).unwrap(), "\"rate_table\"");
        assert_eq!(Family::Affine.to_string(), "affine");
    }

    #[test]
    fn test_conversion_serializes_rendered_formula() {
        let conversion = Conversion::identity(1.0, "Byte", false);
        let json = serde_json::to_value(&conversion).unwrap();
        assert_eq!(json["result"], 1.0);
        assert_eq!(json["formula"], "1.0 Byte = 1 Byte");
    }
}
