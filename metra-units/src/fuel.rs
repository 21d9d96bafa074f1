//! Fuel economy conversions
//!
//! Distance-per-volume units scale linearly against kilometers per liter;
//! liters per 100 km is the reciprocal representation. A zero on either side
//! of the reciprocal yields infinity rather than an error.

use metra_core::{Conversion, ConversionError, Family, Formula};
use metra_plugin::{CategoryMeta, Converter};
use crate::tables::{KPL_PER_MPG_UK, KPL_PER_MPG_US, L_PER_100KM_DISTANCE};

pub const CATEGORY: &str = "Fuel Economy";

const PIVOT: &str = "Kilometers per Liter";

static UNITS: [&str; 4] = [
    "Miles per Gallon (US)",
    "Miles per Gallon (UK)",
    "Kilometers per Liter",
    "Liters per 100 Kilometers",
];

/// How a unit relates to kilometers per liter
#[derive(Debug, Clone, Copy, PartialEq)]
enum Rate {
    /// km/L = value × factor
    Direct(f64),
    /// km/L = 100 / value
    Inverse,
}

impl Rate {
    fn to_pivot(self, value: f64) -> f64 {
        match self {
            Rate::Direct(factor) => value * factor,
            Rate::Inverse => reciprocal(value),
        }
    }

    fn from_pivot(self, km_per_liter: f64) -> f64 {
        match self {
            Rate::Direct(factor) => km_per_liter / factor,
            Rate::Inverse => reciprocal(km_per_liter),
        }
    }
}

fn reciprocal(x: f64) -> f64 {
    if x == 0.0 {
        f64::INFINITY
    } else {
        L_PER_100KM_DISTANCE / x
    }
}

/// Fuel economy converter
pub struct FuelEconomy;

impl FuelEconomy {
    fn rate(&self, unit: &str) -> Result<Rate, ConversionError> {
        match unit {
            "Miles per Gallon (US)" => Ok(Rate::Direct(KPL_PER_MPG_US)),
            "Miles per Gallon (UK)" => Ok(Rate::Direct(KPL_PER_MPG_UK)),
            "Kilometers per Liter" => Ok(Rate::Direct(1.0)),
            "Liters per 100 Kilometers" => Ok(Rate::Inverse),
            _ => Err(ConversionError::unknown_unit(CATEGORY, unit)),
        }
    }
}

impl Converter for FuelEconomy {
    fn meta(&self) -> CategoryMeta {
        CategoryMeta {
            name: CATEGORY,
            family: Family::Reciprocal,
            base_unit: Some(PIVOT),
        }
    }

    fn units(&self) -> &[&'static str] {
        &UNITS
    }

    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> Result<Conversion, ConversionError> {
        let from = self.rate(from_unit)?;
        let to = self.rate(to_unit)?;

        if from_unit == to_unit {
            return Ok(Conversion::identity(value, from_unit, false));
        }

        let result = to.from_pivot(from.to_pivot(value));

        Ok(Conversion::new(result, Formula::Reciprocal {
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            result,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(value: f64, from: &str, to: &str) -> f64 {
        FuelEconomy.convert(value, from, to).unwrap().value
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_zero_consumption_is_infinite_economy() {
        let conversion = FuelEconomy
            .convert(0.0, "Liters per 100 Kilometers", "Kilometers per Liter")
            .unwrap();
        assert_eq!(conversion.value, f64::INFINITY);
        assert_eq!(
            conversion.formula_text(),
            "0.0 Liters per 100 Kilometers = inf Kilometers per Liter"
        );
    }

    #[test]
    fn test_zero_economy_is_infinite_consumption() {
        assert_eq!(convert(0.0, "Miles per Gallon (US)", "Liters per 100 Kilometers"), f64::INFINITY);
    }

    #[test]
    fn test_reciprocal_both_ways() {
        assert!(close(convert(5.0, "Liters per 100 Kilometers", "Kilometers per Liter"), 20.0));
        assert!(close(convert(20.0, "Kilometers per Liter", "Liters per 100 Kilometers"), 5.0));
    }

    #[test]
    fn test_mpg_scaling() {
        assert!(close(convert(10.0, "Miles per Gallon (US)", "Kilometers per Liter"), 4.25144));
        assert!(close(convert(0.354006, "Kilometers per Liter", "Miles per Gallon (UK)"), 1.0));
        let us_to_l100 = convert(30.0, "Miles per Gallon (US)", "Liters per 100 Kilometers");
        assert!(close(us_to_l100, 100.0 / (30.0 * KPL_PER_MPG_US)));
    }

    #[test]
    fn test_identity() {
        let conversion = FuelEconomy.convert(7.5, "Miles per Gallon (UK)", "Miles per Gallon (UK)").unwrap();
        assert_eq!(conversion.value, 7.5);
        assert!(conversion.formula.is_identity());
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            FuelEconomy.convert(1.0, "Miles per Liter", "Kilometers per Liter").unwrap_err(),
            ConversionError::unknown_unit("Fuel Economy", "Miles per Liter")
        );
    }
}
