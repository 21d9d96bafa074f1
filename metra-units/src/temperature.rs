//! Temperature conversions
//!
//! Celsius, Fahrenheit and Kelvin do not share a zero point, so there is no
//! single scale factor. Each directed pair has its own closed-form formula.

use metra_core::format::format_plain;
use metra_core::{Conversion, ConversionError, Family, Formula};
use metra_plugin::{CategoryMeta, Converter};

pub const CATEGORY: &str = "Temperature";

static UNITS: [&str; 3] = ["Celsius", "Fahrenheit", "Kelvin"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    pub fn parse(unit: &str) -> Option<Scale> {
        match unit {
            "Celsius" => Some(Scale::Celsius),
            "Fahrenheit" => Some(Scale::Fahrenheit),
            "Kelvin" => Some(Scale::Kelvin),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
            Scale::Kelvin => "K",
        }
    }
}

/// Result and the middle expression of the formula for one directed edge.
/// Returns `None` for the identity edges.
fn edge(from: Scale, to: Scale, v: f64) -> Option<(f64, String)> {
    let s = format_plain(v);
    let step = match (from, to) {
        (Scale::Celsius, Scale::Fahrenheit) => ((v * 9.0 / 5.0) + 32.0, format!("({} × 9/5) + 32", s)),
        (Scale::Celsius, Scale::Kelvin) => (v + 273.15, format!("{} + 273.15", s)),
        (Scale::Fahrenheit, Scale::Celsius) => ((v - 32.0) * 5.0 / 9.0, format!("({} - 32) × 5/9", s)),
        (Scale::Fahrenheit, Scale::Kelvin) => {
            ((v - 32.0) * 5.0 / 9.0 + 273.15, format!("({} - 32) × 5/9 + 273.15", s))
        }
        (Scale::Kelvin, Scale::Celsius) => (v - 273.15, format!("{} - 273.15", s)),
        (Scale::Kelvin, Scale::Fahrenheit) => {
            ((v - 273.15) * 9.0 / 5.0 + 32.0, format!("({} - 273.15) × 9/5 + 32", s))
        }
        _ => return None,
    };
    Some(step)
}

/// Affine temperature converter
pub struct Temperature;

impl Temperature {
    fn scale(&self, unit: &str) -> Result<Scale, ConversionError> {
        Scale::parse(unit).ok_or_else(|| ConversionError::unknown_unit(CATEGORY, unit))
    }
}

impl Converter for Temperature {
    fn meta(&self) -> CategoryMeta {
        CategoryMeta {
            name: CATEGORY,
            family: Family::Affine,
            base_unit: None,
        }
    }

    fn units(&self) -> &[&'static str] {
        &UNITS
    }

    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> Result<Conversion, ConversionError> {
        let from = self.scale(from_unit)?;
        let to = self.scale(to_unit)?;

        match edge(from, to, value) {
            Some((result, expression)) => Ok(Conversion::new(result, Formula::Affine {
                value,
                from_symbol: from.symbol(),
                to_symbol: to.symbol(),
                expression,
                result,
            })),
            None => Ok(Conversion::identity(value, from_unit, true)),
        }
    }
}
